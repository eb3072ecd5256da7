//! Variant choreographies as plain data.
//!
//! Both variants share one stacking shape (header retreat, first entrance, then an exit and
//! an entrance per hand-off). They only differ in the numbers held here, which
//! [`crate::Timeline::build`] turns into segments.

use crate::{Easing, Length, Placement, VisualState};

/// One choreography step: a state change over `duration` timeline units.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub from: VisualState,
    pub to: VisualState,
    pub duration: f32,
    pub easing: Easing,
    pub placement: Placement,
}

impl Move {
    /// A move that ends at the resting state (entrances).
    pub const fn enter(
        from: VisualState,
        duration: f32,
        easing: Easing,
        placement: Placement,
    ) -> Self {
        Self {
            from,
            to: VisualState::RESTING,
            duration,
            easing,
            placement,
        }
    }

    /// A move that starts from the resting state (exits, header retreat).
    pub const fn leave(
        to: VisualState,
        duration: f32,
        easing: Easing,
        placement: Placement,
    ) -> Self {
        Self {
            from: VisualState::RESTING,
            to,
            duration,
            easing,
            placement,
        }
    }
}

/// The data-only timeline description of one variant.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Choreography {
    /// Applied to the header, if the stage has one. Always the first segment.
    pub header_retreat: Move,
    /// Entrance of card 0, placed relative to the header retreat.
    pub first_entrance: Move,
    /// Exit of card `i`, placed relative to the previous segment.
    pub exit: Move,
    /// Entrance of card `i + 1`, placed relative to the exit of card `i`.
    pub next_entrance: Move,
    /// Idle time appended after the last segment.
    pub tail_hold: f32,
}

impl Choreography {
    /// Wide viewports: long overlapping hand-offs where the next card rises from below the
    /// viewport while the current one recedes.
    pub const fn wide() -> Self {
        Self {
            header_retreat: Move::leave(
                VisualState::RESTING
                    .with_scale(0.85)
                    .with_opacity(0.0)
                    .with_translate_y(Length::px(-350.0)),
                2.0,
                Easing::CubicInOut,
                Placement::SEQUENTIAL,
            ),
            first_entrance: Move::enter(
                VisualState::RESTING
                    .with_scale(0.7)
                    .with_opacity(0.0)
                    .with_translate_y(Length::px(400.0)),
                2.0,
                Easing::CubicOut,
                Placement::AfterPrevious(-1.5),
            ),
            exit: Move::leave(
                VisualState::RESTING
                    .with_scale(0.9)
                    .with_opacity(0.1)
                    .with_translate_y(Length::px(-40.0)),
                1.5,
                Easing::CubicInOut,
                Placement::AfterPrevious(0.2),
            ),
            next_entrance: Move::enter(
                VisualState::RESTING
                    .with_opacity(0.0)
                    .with_translate_y(Length::vh(100.0)),
                1.5,
                Easing::CubicOut,
                Placement::AfterPrevious(-1.2),
            ),
            tail_hold: 0.5,
        }
    }

    /// Narrow viewports: one card per stage, the next card slides up while the current one
    /// fades in place.
    pub const fn narrow() -> Self {
        Self {
            header_retreat: Move::leave(
                VisualState::RESTING
                    .with_opacity(0.0)
                    .with_translate_y(Length::px(-100.0)),
                0.5,
                Easing::QuadOut,
                Placement::SEQUENTIAL,
            ),
            first_entrance: Move::enter(
                VisualState::RESTING
                    .with_scale(0.9)
                    .with_opacity(0.0)
                    .with_translate_y(Length::px(100.0)),
                0.5,
                Easing::CubicOut,
                Placement::AfterPrevious(-0.2),
            ),
            exit: Move::leave(
                VisualState::RESTING.with_scale(0.95).with_opacity(0.0),
                1.0,
                Easing::CubicInOut,
                Placement::SEQUENTIAL,
            ),
            next_entrance: Move::enter(
                VisualState::RESTING
                    .with_scale(0.9)
                    .with_opacity(0.0)
                    .with_translate_y(Length::percent(110.0)),
                1.0,
                Easing::CubicInOut,
                Placement::WithPrevious(0.0),
            ),
            tail_hold: 0.0,
        }
    }
}
