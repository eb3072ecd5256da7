use crate::{Scheduler, SnapOptions, TweenScheduler};

/// Progress distance below which a settled position counts as already snapped.
const SNAP_EPSILON: f32 = 1e-4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SnapPhase {
    /// Scroll input is live (or nothing has happened yet).
    #[default]
    Free,
    /// Input has been idle for the settle window; a snap is pending.
    Settling,
    /// Progress is being animated onto a snap point.
    Snapping,
}

/// The evenly spaced snap points `{0, 1/(n-1), ..., 1}`. Empty when `count < 2`.
pub fn snap_points(count: usize) -> impl Iterator<Item = f32> {
    let steps = count.saturating_sub(1);
    let len = if count < 2 { 0 } else { count };
    (0..len).map(move |i| i as f32 / steps as f32)
}

/// The snap point nearest to `progress` among `count` evenly spaced points.
///
/// Returns `None` when `count < 2` (there is nothing to snap between).
pub fn nearest_snap_point(progress: f32, count: usize) -> Option<f32> {
    if count < 2 {
        return None;
    }
    let steps = (count - 1) as f32;
    let progress = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    // Non-negative, so truncation rounds half up.
    let index = ((progress * steps + 0.5) as usize).min(count - 1);
    Some(index as f32 / steps)
}

/// Moves settled progress onto the nearest snap point once scroll input goes idle.
///
/// The controller is tick-driven: the engine reports input with [`on_input`](Self::on_input)
/// and calls [`tick`](Self::tick) every frame. It never acts while input is live; any input
/// cancels a pending or running snap.
#[derive(Clone, Debug)]
pub struct SnapController<S = TweenScheduler> {
    options: SnapOptions,
    points: usize,
    phase: SnapPhase,
    last_input_ms: Option<u64>,
    target: Option<f32>,
    scheduler: S,
}

impl<S: Scheduler + Default> SnapController<S> {
    pub fn new(options: SnapOptions, points: usize) -> Self {
        Self::with_scheduler(options, points, S::default())
    }
}

impl<S> SnapController<S> {
    pub fn with_scheduler(options: SnapOptions, points: usize, scheduler: S) -> Self {
        Self {
            options,
            points,
            phase: SnapPhase::Free,
            last_input_ms: None,
            target: None,
            scheduler,
        }
    }

    pub fn options(&self) -> &SnapOptions {
        &self.options
    }

    pub fn point_count(&self) -> usize {
        self.points
    }

    pub fn phase(&self) -> SnapPhase {
        self.phase
    }

    pub fn is_snapping(&self) -> bool {
        self.phase == SnapPhase::Snapping
    }

    /// The snap point being animated to, if any.
    pub fn target(&self) -> Option<f32> {
        self.target
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

impl<S: Scheduler> SnapController<S> {
    /// Records live scroll input, cancelling any pending or running snap.
    pub fn on_input(&mut self, now_ms: u64) {
        if self.phase != SnapPhase::Free {
            sdebug!(phase = ?self.phase, now_ms, "SnapController: input cancels snap");
        }
        self.cancel();
        self.last_input_ms = Some(now_ms);
    }

    /// Drops any pending or running snap and forgets the last input.
    pub fn cancel(&mut self) {
        self.scheduler.cancel();
        self.phase = SnapPhase::Free;
        self.target = None;
        self.last_input_ms = None;
    }

    /// Advances the state machine.
    ///
    /// Returns the progress to apply while a snap is running (the exact snap point on its
    /// last frame), or `None` when the controller has nothing to drive.
    pub fn tick(&mut self, now_ms: u64, progress: f32) -> Option<f32> {
        if self.phase == SnapPhase::Free {
            let last = self.last_input_ms?;
            if now_ms.saturating_sub(last) < self.options.settle_ms {
                return None;
            }
            strace!(now_ms, "SnapController: settling");
            self.phase = SnapPhase::Settling;
        }

        if self.phase == SnapPhase::Settling {
            let Some(last) = self.last_input_ms else {
                self.phase = SnapPhase::Free;
                return None;
            };
            let wait = self.options.settle_ms.saturating_add(self.options.delay_ms);
            if now_ms.saturating_sub(last) < wait {
                return None;
            }
            return self.start_snap(now_ms, progress);
        }

        let Some(value) = self.scheduler.sample(now_ms) else {
            self.phase = SnapPhase::Free;
            self.target = None;
            return None;
        };
        if !self.scheduler.is_done(now_ms) {
            return Some(value);
        }
        let target = self.target.take().unwrap_or(value);
        sdebug!(target, "SnapController: snapped");
        self.scheduler.cancel();
        self.phase = SnapPhase::Free;
        Some(target)
    }

    fn start_snap(&mut self, now_ms: u64, progress: f32) -> Option<f32> {
        // Idle input is consumed by this snap; the next one needs fresh input.
        self.last_input_ms = None;
        self.phase = SnapPhase::Free;

        let point = nearest_snap_point(progress, self.points)?;
        let delta = point - progress;
        let distance = if delta < 0.0 { -delta } else { delta };
        if distance <= SNAP_EPSILON {
            return None;
        }

        let interval = 1.0 / (self.points - 1) as f32;
        let scaled = self.options.max_duration_ms as f32 * (distance / interval);
        let duration_ms = (scaled as u64).clamp(
            self.options.min_duration_ms.min(self.options.max_duration_ms),
            self.options.max_duration_ms,
        );
        sdebug!(
            from = progress,
            to = point,
            duration_ms,
            "SnapController: snapping"
        );
        self.scheduler
            .schedule(progress, point, now_ms, duration_ms, self.options.easing);
        self.target = Some(point);
        self.phase = SnapPhase::Snapping;
        self.scheduler.sample(now_ms)
    }
}
