use crate::{Easing, Target, VisualState};

/// How a segment's start is placed relative to the segment inserted just before it.
///
/// Offsets are in timeline units. Absolute starts never go below zero.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Placement {
    /// Start at the previous segment's end plus `offset` (negative overlaps it).
    AfterPrevious(f32),
    /// Start at the previous segment's start plus `offset`.
    WithPrevious(f32),
}

impl Placement {
    pub const SEQUENTIAL: Self = Self::AfterPrevious(0.0);

    /// Resolves the absolute start given the previous segment's `(start, end)`.
    pub fn resolve(self, previous: Option<(f32, f32)>) -> f32 {
        let (prev_start, prev_end) = previous.unwrap_or((0.0, 0.0));
        let start = match self {
            Self::AfterPrevious(offset) => prev_end + offset,
            Self::WithPrevious(offset) => prev_start + offset,
        };
        start.max(0.0)
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::SEQUENTIAL
    }
}

/// One target's transition from `from` to `to` over a sub-range of the timeline.
///
/// Segments are immutable members of their [`crate::Timeline`].
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeSegment<K> {
    pub target: Target<K>,
    pub from: VisualState,
    pub to: VisualState,
    /// Active length in timeline units (always `> 0`).
    pub duration: f32,
    pub placement: Placement,
    pub easing: Easing,
    /// Absolute start in timeline units, resolved from `placement` at build time.
    pub start: f32,
}

impl<K> KeyframeSegment<K> {
    pub fn end(&self) -> f32 {
        self.start + self.duration
    }

    /// Whether `time` falls inside `[start, end]`.
    pub fn contains(&self, time: f32) -> bool {
        time >= self.start && time <= self.end()
    }

    /// Eased local progress at `time`, clamped to `[0, 1]`.
    pub fn local_progress(&self, time: f32) -> f32 {
        let t = ((time - self.start) / self.duration).clamp(0.0, 1.0);
        self.easing.sample(t)
    }

    /// The state this segment authors at `time`: `from` before it starts, `to` once it ends,
    /// the eased interpolation in between.
    pub fn state_at(&self, time: f32) -> VisualState {
        if time <= self.start {
            return self.from;
        }
        if time >= self.end() {
            return self.to;
        }
        self.from.lerp(&self.to, self.local_progress(time))
    }
}
