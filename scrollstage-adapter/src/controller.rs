use alloc::vec::Vec;

use scrollstage::{
    ItemKey, Result, Scheduler, ScrollStage, StageOptions, StageTargets, SubscriptionId,
    TweenScheduler, Variant, Viewport,
};

/// A UI event queued for the next animation frame.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    Resize(Viewport),
    Scroll { offset: f32, now_ms: u64 },
}

/// A framework-neutral controller that wraps a `scrollstage::ScrollStage` and feeds it at most
/// one resize and one scroll per animation frame.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `push_resize` / `push_scroll` when UI events occur (any number of times per frame)
/// - `frame(now_ms)` once per animation frame
///
/// For UI scroll containers (e.g. DOM), use the offset returned from `frame()` to set the real
/// scroll position while a snap is animating.
pub struct Controller<K = ItemKey, S = TweenScheduler> {
    stage: ScrollStage<K, S>,
    queue: Vec<Event>,
}

impl<K: Clone, S: Scheduler + Default> Controller<K, S> {
    pub fn new(options: StageOptions<K>) -> Self {
        Self::from_stage(ScrollStage::new(options))
    }

    pub fn from_stage(stage: ScrollStage<K, S>) -> Self {
        Self {
            stage,
            queue: Vec::new(),
        }
    }

    pub fn stage(&self) -> &ScrollStage<K, S> {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut ScrollStage<K, S> {
        &mut self.stage
    }

    pub fn into_stage(self) -> ScrollStage<K, S> {
        self.stage
    }

    /// Initializes the wrapped stage. Events queued before this call are discarded.
    pub fn initialize(&mut self, targets: StageTargets<K>, viewport: Viewport) -> Result<()> {
        self.queue.clear();
        self.stage.initialize(targets, viewport)
    }

    /// Tears the stage down and discards queued events.
    pub fn teardown(&mut self) {
        self.queue.clear();
        self.stage.teardown();
    }

    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn push_resize(&mut self, viewport: Viewport) {
        self.push(Event::Resize(viewport));
    }

    /// Call this when the UI reports a scroll offset change (user wheel/drag or the echo of an
    /// offset applied from `frame()`).
    pub fn push_scroll(&mut self, offset: f32, now_ms: u64) {
        self.push(Event::Scroll { offset, now_ms });
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Runs one animation frame.
    ///
    /// Drains the queue (the latest resize wins, the latest scroll wins with its own timestamp),
    /// then advances the stage. If the resize crosses the breakpoint, the new variant starts at
    /// progress 0 and the drained scroll only reached the old variant.
    ///
    /// Returns the offset to apply to the real scroll container, if any.
    pub fn frame(&mut self, now_ms: u64) -> Option<f32> {
        let mut resize = None;
        let mut scroll = None;
        for event in self.queue.drain(..) {
            match event {
                Event::Resize(viewport) => resize = Some(viewport),
                Event::Scroll { offset, now_ms: at } => scroll = Some((offset, at)),
            }
        }

        if let Some(viewport) = resize {
            self.stage.on_resize(viewport);
        }
        if let Some((offset, at_ms)) = scroll {
            self.stage.on_scroll(offset, at_ms);
        }
        self.stage.tick(now_ms)
    }

    pub fn variant(&self) -> Option<Variant> {
        self.stage.variant()
    }

    pub fn progress(&self) -> Option<f32> {
        self.stage.progress()
    }

    pub fn subscribe_variant(
        &mut self,
        on_change: impl Fn(Variant) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.stage.subscribe_variant(on_change)
    }
}

impl<K, S> core::fmt::Debug for Controller<K, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller")
            .field("stage", &self.stage)
            .field("pending", &self.queue.len())
            .finish()
    }
}
