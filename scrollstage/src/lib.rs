//! A headless, scroll-driven staged transition engine.
//!
//! For adapter-level utilities (frame-aligned event queue, CSS formatting), see the
//! `scrollstage-adapter` crate.
//!
//! The engine maps the scroll position inside a pinned page region to a deterministic set of
//! overlapping per-target transforms (scale, opacity, translation): a header retreats, cards
//! enter one after another and hand off to the next card while receding. Two variants (wide and
//! narrow) are selected by viewport width, and the narrow one snaps settled progress onto
//! evenly spaced points.
//!
//! It is UI-agnostic. The embedding layer is expected to provide:
//! - viewport size changes
//! - page scroll offsets and a frame tick
//! - a renderer callback that applies each computed [`VisualState`] to its target
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod breakpoint;
mod choreography;
mod driver;
mod easing;
mod error;
mod options;
mod segment;
mod snap;
mod stage;
mod timeline;
mod tween;
mod types;


pub use breakpoint::{
    BreakpointSelector, DEFAULT_BREAKPOINT, SubscriptionId, VariantCallback, classify,
};
pub use choreography::{Choreography, Move};
pub use driver::{Attachment, ScrollDriver};
pub use easing::{Easing, ease};
pub use error::{Error, Result};
pub use options::{
    PinCallback, RenderCallback, ScrollBudget, SnapOptions, StageOptions, VariantProfile,
};
pub use segment::{KeyframeSegment, Placement};
pub use snap::{SnapController, SnapPhase, nearest_snap_point, snap_points};
pub use stage::ScrollStage;
pub use timeline::Timeline;
pub use tween::{Scheduler, Tween, TweenScheduler};
pub use types::{
    ItemKey, Length, PinRegion, ScrollState, StageTargets, Target, TargetRole, Variant,
    Viewport, VisualState,
};
