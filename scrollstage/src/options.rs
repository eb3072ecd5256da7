use alloc::sync::Arc;

use crate::{Choreography, Easing, ItemKey, Length, Target, Variant, VisualState};

/// A callback that applies a computed style to a target. This is the engine's only output.
pub type RenderCallback<K> = Arc<dyn Fn(&Target<K>, &VisualState) + Send + Sync>;

/// A callback fired when the pin region toggles between pinned and released.
pub type PinCallback = Arc<dyn Fn(bool) + Send + Sync>;

/// How much page scroll a variant's pinned region consumes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBudget {
    /// `total_duration * per_unit`.
    PerDurationUnit(Length),
    /// `(cards + extra_targets) * per_target`.
    PerTarget { per_target: Length, extra_targets: f32 },
}

impl ScrollBudget {
    /// Resolves the budget in pixels. Percentages resolve against the viewport height.
    pub fn resolve(&self, total_duration: f32, card_count: usize, viewport_height: f32) -> f32 {
        match *self {
            Self::PerDurationUnit(per_unit) => {
                total_duration * per_unit.resolve(viewport_height, viewport_height)
            }
            Self::PerTarget {
                per_target,
                extra_targets,
            } => {
                (card_count as f32 + extra_targets)
                    * per_target.resolve(viewport_height, viewport_height)
            }
        }
    }
}

/// Snapping configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapOptions {
    /// Idle time after the last scroll input before the controller starts settling.
    pub settle_ms: u64,
    /// Extra idle time spent settling before the snap animation starts.
    pub delay_ms: u64,
    pub min_duration_ms: u64,
    /// Duration of a snap across one full snap interval (and the upper clamp).
    pub max_duration_ms: u64,
    pub easing: Easing,
}

impl Default for SnapOptions {
    fn default() -> Self {
        Self {
            settle_ms: 150,
            delay_ms: 0,
            min_duration_ms: 200,
            max_duration_ms: 400,
            easing: Easing::CubicInOut,
        }
    }
}

impl SnapOptions {
    pub fn with_settle_ms(mut self, settle_ms: u64) -> Self {
        self.settle_ms = settle_ms;
        self
    }

    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_duration_ms(mut self, min_duration_ms: u64, max_duration_ms: u64) -> Self {
        self.min_duration_ms = min_duration_ms.min(max_duration_ms);
        self.max_duration_ms = max_duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Everything the engine needs to stage one variant.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantProfile {
    pub choreography: Choreography,
    pub budget: ScrollBudget,
    /// `None` disables snapping for the variant.
    pub snap: Option<SnapOptions>,
}

impl VariantProfile {
    pub fn wide() -> Self {
        Self {
            choreography: Choreography::wide(),
            budget: ScrollBudget::PerDurationUnit(Length::vh(60.0)),
            snap: None,
        }
    }

    pub fn narrow() -> Self {
        Self {
            choreography: Choreography::narrow(),
            budget: ScrollBudget::PerDurationUnit(Length::vh(50.0)),
            snap: Some(SnapOptions::default()),
        }
    }

    pub fn with_choreography(mut self, choreography: Choreography) -> Self {
        self.choreography = choreography;
        self
    }

    pub fn with_budget(mut self, budget: ScrollBudget) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_snap(mut self, snap: Option<SnapOptions>) -> Self {
        self.snap = snap;
        self
    }
}

/// Configuration for [`crate::ScrollStage`].
///
/// Cheap to clone: the callbacks live in `Arc`s.
pub struct StageOptions<K = ItemKey> {
    /// Widths at or below this value select [`Variant::Narrow`].
    pub breakpoint: f32,
    pub wide: VariantProfile,
    pub narrow: VariantProfile,
    /// Where the pinned region begins on the page.
    pub pin_start: f32,
    pub renderer: Option<RenderCallback<K>>,
    pub on_pin_change: Option<PinCallback>,
}

impl<K> StageOptions<K> {
    pub fn new() -> Self {
        Self {
            breakpoint: crate::DEFAULT_BREAKPOINT,
            wide: VariantProfile::wide(),
            narrow: VariantProfile::narrow(),
            pin_start: 0.0,
            renderer: None,
            on_pin_change: None,
        }
    }

    pub fn profile(&self, variant: Variant) -> &VariantProfile {
        match variant {
            Variant::Wide => &self.wide,
            Variant::Narrow => &self.narrow,
        }
    }

    pub fn with_breakpoint(mut self, breakpoint: f32) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    pub fn with_wide(mut self, wide: VariantProfile) -> Self {
        self.wide = wide;
        self
    }

    pub fn with_narrow(mut self, narrow: VariantProfile) -> Self {
        self.narrow = narrow;
        self
    }

    pub fn with_pin_start(mut self, pin_start: f32) -> Self {
        self.pin_start = pin_start;
        self
    }

    pub fn with_renderer(
        mut self,
        renderer: Option<impl Fn(&Target<K>, &VisualState) + Send + Sync + 'static>,
    ) -> Self {
        self.renderer = renderer.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_pin_change(
        mut self,
        on_pin_change: Option<impl Fn(bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_pin_change = on_pin_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl<K> Default for StageOptions<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Clone for StageOptions<K> {
    fn clone(&self) -> Self {
        Self {
            breakpoint: self.breakpoint,
            wide: self.wide,
            narrow: self.narrow,
            pin_start: self.pin_start,
            renderer: self.renderer.clone(),
            on_pin_change: self.on_pin_change.clone(),
        }
    }
}

impl<K> core::fmt::Debug for StageOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StageOptions")
            .field("breakpoint", &self.breakpoint)
            .field("wide", &self.wide)
            .field("narrow", &self.narrow)
            .field("pin_start", &self.pin_start)
            .field("renderer", &self.renderer.is_some())
            .field("on_pin_change", &self.on_pin_change.is_some())
            .finish()
    }
}
