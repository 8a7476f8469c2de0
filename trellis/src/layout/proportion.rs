//! Track sizing policy.
//!
//! A `Proportion` tells the grid solver how to size one column or row.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// How a track derives its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProportionKind {
    /// Size of the largest non-spanning child in the track.
    #[default]
    Auto,
    /// Weighted share of the space left after fixed and auto tracks.
    Part,
    /// Absorbs whatever is left. Only the first fill track gets it.
    Fill,
    /// Fixed pixel size; content never grows it.
    Pixels,
}

impl ProportionKind {
    fn name(self) -> &'static str {
        match self {
            ProportionKind::Auto => "Auto",
            ProportionKind::Part => "Part",
            ProportionKind::Fill => "Fill",
            ProportionKind::Pixels => "Pixels",
        }
    }
}

/// Sizing policy for one track: a kind plus its value.
///
/// The value is the weight for `Part` and the size for `Pixels`. `Auto` and
/// `Fill` carry 1.0, which still counts towards the total part weight when
/// the solver splits leftover space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Proportion {
    pub kind: ProportionKind,
    #[serde(default = "default_value")]
    pub value: f32,
}

fn default_value() -> f32 {
    1.0
}

impl Proportion {
    pub const AUTO: Self = Self {
        kind: ProportionKind::Auto,
        value: 1.0,
    };

    pub const FILL: Self = Self {
        kind: ProportionKind::Fill,
        value: 1.0,
    };

    /// Default for grid tracks with no explicit proportion.
    pub const GRID_DEFAULT: Self = Self {
        kind: ProportionKind::Part,
        value: 1.0,
    };

    /// Default for stack panel tracks with no explicit proportion.
    pub const STACK_PANEL_DEFAULT: Self = Self::AUTO;

    #[inline]
    pub const fn new(kind: ProportionKind, value: f32) -> Self {
        Self { kind, value }
    }

    /// Fixed track of `size` pixels. `size` must be non-negative.
    #[inline]
    pub const fn pixels(size: f32) -> Self {
        Self::new(ProportionKind::Pixels, size)
    }

    /// Weighted track. `weight` must be positive.
    #[inline]
    pub const fn part(weight: f32) -> Self {
        Self::new(ProportionKind::Part, weight)
    }

    /// Like [`Proportion::pixels`], rejecting negative or non-finite sizes.
    pub fn pixels_checked(size: f32) -> Result<Self, LayoutError> {
        if !size.is_finite() || size < 0.0 {
            return Err(LayoutError::InvalidPixels(size));
        }
        Ok(Self::pixels(size))
    }

    /// Like [`Proportion::part`], rejecting zero, negative or non-finite weights.
    pub fn part_checked(weight: f32) -> Result<Self, LayoutError> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(LayoutError::InvalidWeight(weight));
        }
        Ok(Self::part(weight))
    }

    #[inline]
    pub fn is_pixels(&self) -> bool {
        self.kind == ProportionKind::Pixels
    }

    #[inline]
    pub fn is_part(&self) -> bool {
        self.kind == ProportionKind::Part
    }

    #[inline]
    pub fn is_fill(&self) -> bool {
        self.kind == ProportionKind::Fill
    }

    /// Whether the track size is known before leftover space is split.
    #[inline]
    pub fn is_fixed(&self) -> bool {
        matches!(self.kind, ProportionKind::Auto | ProportionKind::Pixels)
    }

    /// Pixel size of a `Pixels` track, truncated to whole pixels.
    #[inline]
    pub(crate) fn pixel_size(&self) -> i32 {
        (self.value as i32).max(0)
    }
}

impl Default for Proportion {
    fn default() -> Self {
        Self::AUTO
    }
}

impl fmt::Display for Proportion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ProportionKind::Auto | ProportionKind::Fill => f.write_str(self.kind.name()),
            ProportionKind::Part => write!(f, "Part: {:.2}", self.value),
            ProportionKind::Pixels => write!(f, "Pixels: {}", self.value as i32),
        }
    }
}

impl FromStr for Proportion {
    type Err = LayoutError;

    /// Parses the display form: `Auto`, `Fill`, `Part`, `Part: 2.5`,
    /// `Pixels: 40`. Kind names are case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = match s.split_once(':') {
            Some((name, value)) => (name.trim(), Some(value.trim())),
            None => (s.trim(), None),
        };

        let kind = [
            ProportionKind::Auto,
            ProportionKind::Part,
            ProportionKind::Fill,
            ProportionKind::Pixels,
        ]
        .into_iter()
        .find(|kind| kind.name().eq_ignore_ascii_case(name))
        .ok_or_else(|| LayoutError::UnknownKind(name.to_string()))?;

        let value = match value {
            Some(raw) => Some(raw.parse::<f32>().map_err(|e| LayoutError::InvalidValue {
                value: raw.to_string(),
                reason: e.to_string(),
            })?),
            None => None,
        };

        match (kind, value) {
            (ProportionKind::Auto, _) => Ok(Self::AUTO),
            (ProportionKind::Fill, _) => Ok(Self::FILL),
            (ProportionKind::Part, weight) => Self::part_checked(weight.unwrap_or(1.0)),
            (ProportionKind::Pixels, Some(size)) => Self::pixels_checked(size),
            (ProportionKind::Pixels, None) => Err(LayoutError::MissingValue("Pixels")),
        }
    }
}
