//! Adapter utilities for the `scrollstage` crate.
//!
//! The `scrollstage` crate is UI-agnostic and focuses on the timeline math and engine state. This
//! crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A frame-aligned event queue that coalesces resize/scroll input into one engine update per
//!   animation frame
//! - CSS formatting of computed visual states (for DOM-like renderers)
//!
//! This crate is intentionally framework-agnostic (no DOM/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod css;


pub use controller::{Controller, Event};
pub use css::{CssStyle, length_css, transform_css};
