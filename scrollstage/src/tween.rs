use crate::Easing;

/// A value-ramp scheduler: schedule a ramp over a duration with an easing, then query it.
///
/// The snap controller talks to this trait only, so adapters can substitute a scheduler backed
/// by their own animation runtime. [`Tween`] is the built-in implementation.
pub trait Scheduler {
    /// Starts (or replaces) a ramp from `from` to `to`.
    fn schedule(&mut self, from: f32, to: f32, start_ms: u64, duration_ms: u64, easing: Easing);

    /// Samples the current ramp value. Returns the ramp's end value once it is done.
    ///
    /// Returns `None` when nothing is scheduled.
    fn sample(&self, now_ms: u64) -> Option<f32>;

    fn is_done(&self, now_ms: u64) -> bool;

    fn cancel(&mut self);

    fn is_active(&self) -> bool;
}

/// A small tween over an `f32` value, driven by timestamps supplied by the adapter.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        let eased = self.easing.sample(t);
        self.from + (self.to - self.from) * eased
    }
}

/// Default [`Scheduler`]: holds at most one [`Tween`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TweenScheduler {
    tween: Option<Tween>,
}

impl TweenScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tween(&self) -> Option<&Tween> {
        self.tween.as_ref()
    }
}

impl Scheduler for TweenScheduler {
    fn schedule(&mut self, from: f32, to: f32, start_ms: u64, duration_ms: u64, easing: Easing) {
        self.tween = Some(Tween::new(from, to, start_ms, duration_ms, easing));
    }

    fn sample(&self, now_ms: u64) -> Option<f32> {
        let tween = self.tween.as_ref()?;
        if tween.is_done(now_ms) {
            return Some(tween.to);
        }
        Some(tween.sample(now_ms))
    }

    fn is_done(&self, now_ms: u64) -> bool {
        self.tween.is_none_or(|t| t.is_done(now_ms))
    }

    fn cancel(&mut self) {
        self.tween = None;
    }

    fn is_active(&self) -> bool {
        self.tween.is_some()
    }
}
