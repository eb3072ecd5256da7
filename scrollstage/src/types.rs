use alloc::vec::Vec;

/// A distance in the style of CSS `calc()`: `px + vh% of the viewport + percent% of the element`.
///
/// Keeping the units apart lets two lengths interpolate component-wise without knowing the
/// viewport; the renderer resolves the final pixel value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Length {
    pub px: f32,
    /// Percent of the viewport height (`100.0` = `100vh`).
    pub vh: f32,
    /// Percent of the animated element's own size (`100.0` = `100%`).
    pub percent: f32,
}

impl Length {
    pub const ZERO: Self = Self {
        px: 0.0,
        vh: 0.0,
        percent: 0.0,
    };

    pub const fn px(px: f32) -> Self {
        Self {
            px,
            vh: 0.0,
            percent: 0.0,
        }
    }

    pub const fn vh(vh: f32) -> Self {
        Self {
            px: 0.0,
            vh,
            percent: 0.0,
        }
    }

    pub const fn percent(percent: f32) -> Self {
        Self {
            px: 0.0,
            vh: 0.0,
            percent,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.px == 0.0 && self.vh == 0.0 && self.percent == 0.0
    }

    pub fn lerp(&self, to: &Self, t: f32) -> Self {
        Self {
            px: lerp(self.px, to.px, t),
            vh: lerp(self.vh, to.vh, t),
            percent: lerp(self.percent, to.percent, t),
        }
    }

    /// Resolves to pixels against the viewport height and the element's own size.
    pub fn resolve(&self, viewport_height: f32, element_size: f32) -> f32 {
        self.px + self.vh * viewport_height / 100.0 + self.percent * element_size / 100.0
    }
}

#[inline]
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// The visual state of one target: uniform scale, opacity and a 2D translation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisualState {
    pub scale: f32,
    pub opacity: f32,
    pub translate_x: Length,
    pub translate_y: Length,
}

impl VisualState {
    /// The canonical resting state: full size, fully opaque, untranslated.
    pub const RESTING: Self = Self {
        scale: 1.0,
        opacity: 1.0,
        translate_x: Length::ZERO,
        translate_y: Length::ZERO,
    };

    pub const fn new(scale: f32, opacity: f32, translate_x: Length, translate_y: Length) -> Self {
        Self {
            scale,
            opacity,
            translate_x,
            translate_y,
        }
    }

    pub const fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub const fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub const fn with_translate_x(mut self, translate_x: Length) -> Self {
        self.translate_x = translate_x;
        self
    }

    pub const fn with_translate_y(mut self, translate_y: Length) -> Self {
        self.translate_y = translate_y;
        self
    }

    /// Component-wise interpolation. `t` is expected in `[0, 1]`.
    pub fn lerp(&self, to: &Self, t: f32) -> Self {
        Self {
            scale: lerp(self.scale, to.scale, t).max(0.0),
            opacity: lerp(self.opacity, to.opacity, t).clamp(0.0, 1.0),
            translate_x: self.translate_x.lerp(&to.translate_x, t),
            translate_y: self.translate_y.lerp(&to.translate_y, t),
        }
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::RESTING
    }
}

/// One of the mutually exclusive presentation variants, selected by viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    Wide,
    Narrow,
}

/// What a target plays in the choreography.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetRole {
    /// The intro element that retreats before the first card arrives.
    Header,
    /// A stacked card, with its ordinal position in the card sequence.
    Card(usize),
}

/// A caller-owned element the engine animates. The engine never creates or destroys targets.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target<K> {
    pub key: K,
    pub role: TargetRole,
}

impl<K> Target<K> {
    pub fn header(key: K) -> Self {
        Self {
            key,
            role: TargetRole::Header,
        }
    }

    pub fn card(key: K, index: usize) -> Self {
        Self {
            key,
            role: TargetRole::Card(index),
        }
    }

    /// The card ordinal, or `None` for the header.
    pub fn index(&self) -> Option<usize> {
        match self.role {
            TargetRole::Header => None,
            TargetRole::Card(i) => Some(i),
        }
    }
}

/// The caller's ordered target list plus the optional header.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StageTargets<K> {
    pub header: Option<K>,
    pub cards: Vec<K>,
}

impl<K> StageTargets<K> {
    pub fn new(cards: impl IntoIterator<Item = K>) -> Self {
        Self {
            header: None,
            cards: cards.into_iter().collect(),
        }
    }

    pub fn with_header(mut self, header: K) -> Self {
        self.header = Some(header);
        self
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Viewport geometry reported by the embedding environment, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The page region that stays fixed on screen while scroll drives progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PinRegion {
    /// Page scroll offset at which pinning begins.
    pub start: f32,
}

impl PinRegion {
    pub const fn new(start: f32) -> Self {
        Self { start }
    }
}

/// A lightweight snapshot of the driver's scroll state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub pinned: bool,
    /// Scroll distance consumed since pinning began, clamped to `[0, budget]`.
    pub raw_offset: f32,
    pub progress: f32,
}

/// The default target key type.
pub type ItemKey = u64;
