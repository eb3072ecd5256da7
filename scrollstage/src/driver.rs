use crate::error::{Error, Result};
use crate::{ItemKey, PinCallback, PinRegion, RenderCallback, ScrollState, Timeline};

/// An active pin: where it starts on the page and how much scroll it consumes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attachment {
    pub pin: PinRegion,
    /// Scroll distance in pixels that maps onto progress `0..=1`.
    pub budget: f32,
}

/// Converts page scroll inside a pinned region into timeline progress and renders frames.
///
/// The driver owns its [`Timeline`] and [`ScrollState`]. There is no smoothing at this layer:
/// progress is a clamped linear function of the consumed scroll distance.
pub struct ScrollDriver<K = ItemKey> {
    timeline: Timeline<K>,
    renderer: Option<RenderCallback<K>>,
    on_pin_change: Option<PinCallback>,
    attachment: Option<Attachment>,
    state: ScrollState,
}

impl<K> ScrollDriver<K> {
    pub fn new(timeline: Timeline<K>) -> Self {
        Self {
            timeline,
            renderer: None,
            on_pin_change: None,
            attachment: None,
            state: ScrollState::default(),
        }
    }

    pub fn with_renderer(mut self, renderer: Option<RenderCallback<K>>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn with_on_pin_change(mut self, on_pin_change: Option<PinCallback>) -> Self {
        self.on_pin_change = on_pin_change;
        self
    }

    pub fn timeline(&self) -> &Timeline<K> {
        &self.timeline
    }

    pub fn into_timeline(self) -> Timeline<K> {
        self.timeline
    }

    pub fn attachment(&self) -> Option<Attachment> {
        self.attachment
    }

    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.state
    }

    pub fn progress(&self) -> f32 {
        self.state.progress
    }

    /// Pins the region and renders the progress-0 frame.
    ///
    /// Attaching while already attached detaches the previous attachment first.
    pub fn attach(&mut self, pin: PinRegion, budget: f32) -> Result<()> {
        if !budget.is_finite() || budget <= 0.0 {
            swarn!(budget, "ScrollDriver::attach: misconfigured budget");
            return Err(Error::MisconfiguredBudget(budget));
        }
        if self.attachment.is_some() {
            sdebug!("ScrollDriver::attach: already attached, detaching first");
            self.detach();
        }
        sdebug!(pin_start = pin.start, budget, "ScrollDriver::attach");
        self.attachment = Some(Attachment { pin, budget });
        self.state = ScrollState::default();
        self.render();
        Ok(())
    }

    /// Replaces the budget of the current attachment, keeping progress. Does nothing when not
    /// attached.
    pub fn set_budget(&mut self, budget: f32) -> Result<()> {
        if !budget.is_finite() || budget <= 0.0 {
            swarn!(budget, "ScrollDriver::set_budget: misconfigured budget");
            return Err(Error::MisconfiguredBudget(budget));
        }
        let Some(attachment) = self.attachment.as_mut() else {
            return Ok(());
        };
        attachment.budget = budget;
        self.state.raw_offset = self.state.progress * budget;
        Ok(())
    }

    /// Releases the pin. Does nothing when not attached.
    pub fn detach(&mut self) {
        if self.attachment.take().is_none() {
            return;
        }
        sdebug!(progress = self.state.progress, "ScrollDriver::detach");
        self.set_pinned(false);
        self.state = ScrollState::default();
    }

    /// Applies a page scroll offset and returns the resulting progress.
    ///
    /// Returns `None` when detached.
    pub fn on_scroll(&mut self, page_offset: f32) -> Option<f32> {
        let Attachment { pin, budget } = self.attachment?;
        let consumed = if page_offset.is_nan() {
            0.0
        } else {
            page_offset - pin.start
        };
        self.set_pinned((0.0..=budget).contains(&consumed));
        self.apply_raw_offset(consumed.clamp(0.0, budget), budget);
        Some(self.state.progress)
    }

    /// Drives progress directly (used while snapping) and returns the page offset that
    /// corresponds to it.
    ///
    /// Returns `None` when detached.
    pub fn set_progress(&mut self, progress: f32) -> Option<f32> {
        let Attachment { pin, budget } = self.attachment?;
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        self.apply_raw_offset(progress * budget, budget);
        Some(pin.start + self.state.raw_offset)
    }

    /// The page offset at which the driver reports `progress`.
    pub fn page_offset_for(&self, progress: f32) -> Option<f32> {
        let Attachment { pin, budget } = self.attachment?;
        Some(pin.start + progress.clamp(0.0, 1.0) * budget)
    }

    fn apply_raw_offset(&mut self, raw_offset: f32, budget: f32) {
        self.state.raw_offset = raw_offset;
        let progress = (raw_offset / budget).clamp(0.0, 1.0);
        if progress == self.state.progress {
            return;
        }
        strace!(raw_offset, progress, "ScrollDriver: progress");
        self.state.progress = progress;
        self.render();
    }

    fn set_pinned(&mut self, pinned: bool) {
        if self.state.pinned == pinned {
            return;
        }
        self.state.pinned = pinned;
        if let Some(cb) = &self.on_pin_change {
            cb(pinned);
        }
    }

    /// Renders every target at the current progress.
    pub fn render(&self) {
        let Some(renderer) = &self.renderer else {
            return;
        };
        self.timeline
            .for_each_state(self.state.progress, |target, state| renderer(target, &state));
    }
}

impl<K> core::fmt::Debug for ScrollDriver<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollDriver")
            .field("variant", &self.timeline.variant())
            .field("segments", &self.timeline.len())
            .field("attachment", &self.attachment)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
