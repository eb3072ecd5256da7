use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::Variant;

/// The default narrow/wide boundary in pixels.
pub const DEFAULT_BREAKPOINT: f32 = 768.0;

/// A callback fired on every variant edge.
pub type VariantCallback = Arc<dyn Fn(Variant) + Send + Sync>;

/// Handle returned by [`BreakpointSelector::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Classifies a width: at or below `threshold` is narrow, anything wider is wide.
pub fn classify(width: f32, threshold: f32) -> Variant {
    if width <= threshold {
        Variant::Narrow
    } else {
        Variant::Wide
    }
}

/// Owns the viewport-width signal and the active [`Variant`].
///
/// Widths are fed explicitly through [`observe_width`](Self::observe_width) and coalesced:
/// only the latest one is classified when [`evaluate`](Self::evaluate) runs, which the engine
/// does once per animation frame. Subscribers are notified only when the classification
/// changes.
pub struct BreakpointSelector {
    threshold: f32,
    current: Option<Variant>,
    pending_width: Option<f32>,
    subscribers: Vec<(SubscriptionId, VariantCallback)>,
    next_id: u64,
}

impl BreakpointSelector {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            current: None,
            pending_width: None,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// The active variant, or `None` before the first evaluation.
    pub fn current_variant(&self) -> Option<Variant> {
        self.current
    }

    /// Records a width. Repeated calls before the next evaluation overwrite each other.
    pub fn observe_width(&mut self, width: f32) {
        self.pending_width = Some(width);
    }

    pub fn has_pending(&self) -> bool {
        self.pending_width.is_some()
    }

    /// Classifies the latest observed width.
    ///
    /// Returns the new variant on an edge (including the very first classification) and
    /// notifies subscribers; returns `None` when nothing is pending or nothing changed.
    pub fn evaluate(&mut self) -> Option<Variant> {
        let width = self.pending_width.take()?;
        let next = classify(width, self.threshold);
        if self.current == Some(next) {
            return None;
        }
        sdebug!(width, prev = ?self.current, ?next, "BreakpointSelector: variant edge");
        self.current = Some(next);
        for (_, cb) in &self.subscribers {
            cb(next);
        }
        Some(next)
    }

    /// Observes and evaluates `width` immediately.
    pub fn observe_now(&mut self, width: f32) -> Option<Variant> {
        self.observe_width(width);
        self.evaluate()
    }

    pub fn subscribe(
        &mut self,
        on_change: impl Fn(Variant) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.subscribers.push((id, Arc::new(on_change)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn clear_subscribers(&mut self) {
        self.subscribers.clear();
    }

    /// Forgets the active variant and any pending width. Subscribers are kept.
    pub fn reset(&mut self) {
        self.current = None;
        self.pending_width = None;
    }
}

impl core::fmt::Debug for BreakpointSelector {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BreakpointSelector")
            .field("threshold", &self.threshold)
            .field("current", &self.current)
            .field("pending_width", &self.pending_width)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}
