/// Easing curves mapping normalized progress in `[0, 1]` to eased progress in `[0, 1]`.
///
/// Every curve here is monotonic and bounded: the output never leaves `[0, 1]`, so an eased
/// interpolation between two states always stays between them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    #[default]
    Linear,
    SmoothStep,
    /// Quadratic deceleration (`power1.out`).
    QuadOut,
    /// Cubic deceleration (`power2.out`).
    CubicOut,
    /// Symmetric cubic acceleration then deceleration (`power2.inOut`).
    CubicInOut,
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        // NaN falls through `clamp` unchanged; treat it as the start of the ramp.
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let eased = match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::QuadOut => {
                let u = 1.0 - t;
                1.0 - u * u
            }
            Self::CubicOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        };
        eased.clamp(0.0, 1.0)
    }

    pub fn is_linear(self) -> bool {
        matches!(self, Self::Linear)
    }
}

/// Free-function form of [`Easing::sample`].
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    easing.sample(t)
}
