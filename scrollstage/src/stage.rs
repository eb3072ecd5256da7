use crate::breakpoint::{BreakpointSelector, SubscriptionId, classify};
use crate::error::{Error, Result};
use crate::{
    ItemKey, PinRegion, Scheduler, ScrollDriver, ScrollState, SnapController, SnapPhase,
    StageOptions, StageTargets, Timeline, TweenScheduler, Variant, Viewport,
};

/// A scroll event closer than this (in pixels) to the offset the stage asked the embedder to
/// scroll to is treated as the echo of that request, not as user input.
const ECHO_TOLERANCE_PX: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lifecycle {
    Idle,
    Running,
    TornDown,
}

struct ActiveStage<K, S> {
    driver: ScrollDriver<K>,
    snap: Option<SnapController<S>>,
}

/// The staged-transition engine.
///
/// The embedder feeds it viewport sizes and page scroll offsets, calls [`tick`](Self::tick)
/// once per animation frame, and receives styles through the renderer callback in
/// [`StageOptions`]. All state changes happen inside `&mut self` calls, so a breakpoint
/// transition can never interleave with scroll delivery.
///
/// Events received before [`initialize`](Self::initialize) or after
/// [`teardown`](Self::teardown) are dropped.
pub struct ScrollStage<K = ItemKey, S = TweenScheduler> {
    options: StageOptions<K>,
    selector: BreakpointSelector,
    lifecycle: Lifecycle,
    targets: Option<StageTargets<K>>,
    viewport: Viewport,
    pending_viewport: Option<Viewport>,
    active: Option<ActiveStage<K, S>>,
    last_driven_offset: Option<f32>,
}

impl<K: Clone, S: Scheduler + Default> ScrollStage<K, S> {
    pub fn new(options: StageOptions<K>) -> Self {
        let selector = BreakpointSelector::new(options.breakpoint);
        Self {
            options,
            selector,
            lifecycle: Lifecycle::Idle,
            targets: None,
            viewport: Viewport::default(),
            pending_viewport: None,
            active: None,
            last_driven_offset: None,
        }
    }

    /// Builds the timeline for the variant matching `viewport`, pins the region and renders
    /// the first frame.
    ///
    /// Calling it again replaces the previous targets; calling it after
    /// [`teardown`](Self::teardown) starts a fresh run.
    pub fn initialize(&mut self, targets: StageTargets<K>, viewport: Viewport) -> Result<()> {
        if targets.is_empty() {
            swarn!("ScrollStage::initialize: empty target list");
            return Err(Error::EmptyTargetList);
        }
        self.deactivate();
        self.selector.reset();
        self.pending_viewport = None;
        self.viewport = viewport;
        self.targets = Some(targets);

        let variant = self
            .selector
            .observe_now(viewport.width)
            .unwrap_or_else(|| classify(viewport.width, self.selector.threshold()));
        sdebug!(
            ?variant,
            width = viewport.width,
            height = viewport.height,
            "ScrollStage::initialize"
        );

        if let Err(err) = self.activate(variant) {
            self.targets = None;
            self.selector.reset();
            self.lifecycle = Lifecycle::Idle;
            return Err(err);
        }
        self.lifecycle = Lifecycle::Running;
        Ok(())
    }

    /// Records a viewport change. It is evaluated on the next [`tick`](Self::tick), so a flood
    /// of resize events costs at most one evaluation per frame.
    pub fn on_resize(&mut self, viewport: Viewport) {
        if self.lifecycle != Lifecycle::Running {
            strace!(width = viewport.width, "ScrollStage::on_resize: dropped");
            return;
        }
        self.selector.observe_width(viewport.width);
        self.pending_viewport = Some(viewport);
    }

    /// Applies a page scroll offset reported by the embedder.
    pub fn on_scroll(&mut self, page_offset: f32, now_ms: u64) {
        if self.lifecycle != Lifecycle::Running {
            strace!(page_offset, "ScrollStage::on_scroll: dropped");
            return;
        }
        let Some(active) = self.active.as_mut() else {
            return;
        };

        if let Some(snap) = active.snap.as_mut() {
            let echo = snap.is_snapping()
                && self.last_driven_offset.is_some_and(|driven| {
                    let d = driven - page_offset;
                    -ECHO_TOLERANCE_PX <= d && d <= ECHO_TOLERANCE_PX
                });
            if echo {
                return;
            }
            snap.on_input(now_ms);
        }
        self.last_driven_offset = None;
        active.driver.on_scroll(page_offset);
    }

    /// Runs one animation frame: evaluates pending resizes (possibly switching variants) and
    /// advances snapping.
    ///
    /// Returns the page offset the embedder should scroll to while a snap is animating.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        if self.lifecycle != Lifecycle::Running {
            return None;
        }
        self.flush_resize();

        let active = self.active.as_mut()?;
        let snap = active.snap.as_mut()?;
        let progress = snap.tick(now_ms, active.driver.progress())?;
        let offset = active.driver.set_progress(progress)?;
        self.last_driven_offset = Some(offset);
        Some(offset)
    }

    /// Detaches the driver, cancels snapping, drops the timeline and all variant subscribers.
    /// Nothing fires after this returns.
    pub fn teardown(&mut self) {
        if self.lifecycle == Lifecycle::TornDown {
            return;
        }
        sdebug!("ScrollStage::teardown");
        self.deactivate();
        self.selector.clear_subscribers();
        self.selector.reset();
        self.targets = None;
        self.pending_viewport = None;
        self.lifecycle = Lifecycle::TornDown;
    }

    fn flush_resize(&mut self) {
        let Some(viewport) = self.pending_viewport.take() else {
            return;
        };
        let height_changed = viewport.height != self.viewport.height;
        self.viewport = viewport;

        if let Some(variant) = self.selector.evaluate() {
            self.transition(variant);
        } else if height_changed {
            self.rebudget();
        }
    }

    fn transition(&mut self, variant: Variant) {
        sdebug!(?variant, "ScrollStage: breakpoint transition");
        // Stop the old driver (releasing its pin) and drop its timeline before anything new
        // is built, so two drivers never render the same targets.
        self.deactivate();
        if let Err(_err) = self.activate(variant) {
            swarn!(?variant, err = %_err, "ScrollStage: could not activate variant");
            // Forget the variant so the next observed width is an edge and retries activation.
            self.selector.reset();
        }
    }

    fn activate(&mut self, variant: Variant) -> Result<()> {
        let Some(targets) = self.targets.as_ref() else {
            return Err(Error::EmptyTargetList);
        };
        let profile = *self.options.profile(variant);
        let timeline = Timeline::build(variant, &profile.choreography, targets)?;
        let budget = profile.budget.resolve(
            timeline.total_duration(),
            timeline.card_count(),
            self.viewport.height,
        );

        let mut driver = ScrollDriver::new(timeline)
            .with_renderer(self.options.renderer.clone())
            .with_on_pin_change(self.options.on_pin_change.clone());
        driver.attach(PinRegion::new(self.options.pin_start), budget)?;

        let snap = profile
            .snap
            .map(|snap| SnapController::new(snap, driver.timeline().card_count()));
        self.active = Some(ActiveStage { driver, snap });
        Ok(())
    }

    fn deactivate(&mut self) {
        self.last_driven_offset = None;
        let Some(mut active) = self.active.take() else {
            return;
        };
        if let Some(snap) = active.snap.as_mut() {
            snap.cancel();
        }
        active.driver.detach();
    }

    /// Re-derives the scroll budget after a height-only resize, keeping the current progress.
    fn rebudget(&mut self) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        let Some(attachment) = active.driver.attachment() else {
            return;
        };
        let timeline = active.driver.timeline();
        let profile = self.options.profile(timeline.variant());
        let budget = profile.budget.resolve(
            timeline.total_duration(),
            timeline.card_count(),
            self.viewport.height,
        );
        if budget == attachment.budget {
            return;
        }
        if let Err(_err) = active.driver.set_budget(budget) {
            swarn!(err = %_err, "ScrollStage: keeping previous budget");
        }
    }
}

impl<K, S> ScrollStage<K, S> {
    pub fn options(&self) -> &StageOptions<K> {
        &self.options
    }

    pub fn is_initialized(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    pub fn is_torn_down(&self) -> bool {
        self.lifecycle == Lifecycle::TornDown
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn variant(&self) -> Option<Variant> {
        self.active
            .as_ref()
            .map(|active| active.driver.timeline().variant())
    }

    pub fn timeline(&self) -> Option<&Timeline<K>> {
        self.active.as_ref().map(|active| active.driver.timeline())
    }

    pub fn driver(&self) -> Option<&ScrollDriver<K>> {
        self.active.as_ref().map(|active| &active.driver)
    }

    pub fn scroll_state(&self) -> Option<ScrollState> {
        self.driver().map(ScrollDriver::scroll_state)
    }

    pub fn progress(&self) -> Option<f32> {
        self.driver().map(ScrollDriver::progress)
    }

    /// The snap phase, or `None` when the active variant does not snap.
    pub fn snap_phase(&self) -> Option<SnapPhase> {
        self.active
            .as_ref()
            .and_then(|active| active.snap.as_ref())
            .map(SnapController::phase)
    }

    /// Subscribes to variant edges. Subscriptions are dropped by [`teardown`](Self::teardown).
    pub fn subscribe_variant(
        &mut self,
        on_change: impl Fn(Variant) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.selector.subscribe(on_change)
    }

    pub fn unsubscribe_variant(&mut self, id: SubscriptionId) -> bool {
        self.selector.unsubscribe(id)
    }
}

impl<K, S> core::fmt::Debug for ScrollStage<K, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollStage")
            .field("lifecycle", &self.lifecycle)
            .field("viewport", &self.viewport)
            .field("selector", &self.selector)
            .field("driver", &self.driver())
            .finish_non_exhaustive()
    }
}
