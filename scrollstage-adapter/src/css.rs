use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use scrollstage::{Length, VisualState};

// Avoids printing `-0`.
fn num(v: f32) -> f32 {
    if v == 0.0 || v.is_nan() { 0.0 } else { v }
}

/// Formats a length as a CSS value: `40px`, `100vh`, `110%`, or a `calc()` when units mix.
pub fn length_css(len: &Length) -> String {
    let parts: Vec<(f32, &str)> = [(len.px, "px"), (len.vh, "vh"), (len.percent, "%")]
        .into_iter()
        .map(|(v, unit)| (num(v), unit))
        .filter(|(v, _)| *v != 0.0)
        .collect();

    match parts.as_slice() {
        [] => String::from("0px"),
        [(v, unit)] => format!("{v}{unit}"),
        [(first, first_unit), rest @ ..] => {
            let mut out = format!("calc({first}{first_unit}");
            for (v, unit) in rest {
                if *v < 0.0 {
                    out.push_str(&format!(" - {}{unit}", -v));
                } else {
                    out.push_str(&format!(" + {v}{unit}"));
                }
            }
            out.push(')');
            out
        }
    }
}

/// Formats the transform part of a state: `translate3d(x, y, 0) scale(s)`.
///
/// Percentages refer to the element's own size, as in CSS transforms.
pub fn transform_css(state: &VisualState) -> String {
    format!(
        "translate3d({}, {}, 0) scale({})",
        length_css(&state.translate_x),
        length_css(&state.translate_y),
        num(state.scale)
    )
}

/// A computed state ready to be assigned to an element's inline style.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CssStyle {
    pub transform: String,
    pub opacity: f32,
}

impl CssStyle {
    pub fn from_state(state: &VisualState) -> Self {
        Self {
            transform: transform_css(state),
            opacity: num(state.opacity),
        }
    }
}

impl From<&VisualState> for CssStyle {
    fn from(state: &VisualState) -> Self {
        Self::from_state(state)
    }
}

impl core::fmt::Display for CssStyle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "transform: {}; opacity: {}", self.transform, self.opacity)
    }
}
