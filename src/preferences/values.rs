// SPDX-License-Identifier: MPL-2.0
//! Typed preference values.
//!
//! Each type knows its storage key, default, how to parse its stored string
//! form, and (for pickers) the fixed list of values the user may choose from.
//! Parsing returns `Option` so callers decide on the fallback explicitly.

use crate::config::{
    DEFAULT_MAGNIFIER_SIZE, DEFAULT_ZOOM_FACTOR, MAGNIFIER_SIZE_OPTIONS, ZOOM_FACTOR_OPTIONS,
};
use std::fmt;

/// Storage key of the display zoom factor.
pub const ZOOM_KEY: &str = "zoom-local-storage";
/// Storage key of the lens size.
pub const MAGNIFIER_SIZE_KEY: &str = "mg-zoom-local-storage";
/// Storage key of the lens shape.
pub const MAGNIFIER_SHAPE_KEY: &str = "mg-shape-local-storage";

/// A persisted scalar setting.
pub trait Preference: Copy + PartialEq + fmt::Display {
    /// Key under which the value is stored.
    const KEY: &'static str;

    /// Value used when nothing valid is stored.
    fn default_value() -> Self;

    /// Parses the stored string form. `None` means nothing usable is stored.
    fn try_parse(raw: &str) -> Option<Self>;
}

/// A preference chosen from a fixed, ascending list of options.
pub trait Enumerated: Preference {
    /// Allowed values in ascending order.
    fn options() -> Vec<Self>;

    /// Whether `self` is one of the allowed values.
    fn is_allowed(&self) -> bool {
        Self::options().contains(self)
    }

    /// Smallest allowed value; rendered values never go below it.
    fn floor() -> Self {
        Self::options()
            .first()
            .copied()
            .unwrap_or_else(Self::default_value)
    }
}

// =============================================================================
// ZoomFactor
// =============================================================================

/// Display magnification factor applied by the lens.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ZoomFactor(f32);

impl ZoomFactor {
    /// Wraps a factor as-is. Out-of-list values are legal (legacy stores).
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// The factor actually used for rendering, never below the picker floor.
    #[must_use]
    pub fn effective(self) -> Self {
        let floor = Self::floor();
        if self.0 < floor.0 {
            floor
        } else {
            self
        }
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_FACTOR)
    }
}

impl fmt::Display for ZoomFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Preference for ZoomFactor {
    const KEY: &'static str = ZOOM_KEY;

    fn default_value() -> Self {
        Self::default()
    }

    fn try_parse(raw: &str) -> Option<Self> {
        raw.trim()
            .parse::<f32>()
            .ok()
            .filter(|v| v.is_finite() && *v != 0.0)
            .map(Self)
    }
}

impl Enumerated for ZoomFactor {
    fn options() -> Vec<Self> {
        ZOOM_FACTOR_OPTIONS.iter().copied().map(Self).collect()
    }
}

// =============================================================================
// MagnifierSize
// =============================================================================

/// Lens edge length in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MagnifierSize(u32);

impl MagnifierSize {
    #[must_use]
    pub fn new(pixels: u32) -> Self {
        Self(pixels)
    }

    #[must_use]
    pub fn pixels(self) -> u32 {
        self.0
    }

    /// The size actually used for rendering, never below the picker floor.
    #[must_use]
    pub fn effective(self) -> Self {
        self.max(Self::floor())
    }
}

impl Default for MagnifierSize {
    fn default() -> Self {
        Self(DEFAULT_MAGNIFIER_SIZE)
    }
}

impl fmt::Display for MagnifierSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Preference for MagnifierSize {
    const KEY: &'static str = MAGNIFIER_SIZE_KEY;

    fn default_value() -> Self {
        Self::default()
    }

    fn try_parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(pixels) = raw.parse::<u32>() {
            return (pixels > 0).then_some(Self(pixels));
        }
        // Older writers stored the size through a float conversion.
        let value = raw
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v != 0.0)?;
        if value < 1.0 {
            // Below one pixel, including negatives.
            Some(Self::floor())
        } else {
            Some(Self(value.trunc() as u32))
        }
    }
}

impl Enumerated for MagnifierSize {
    fn options() -> Vec<Self> {
        MAGNIFIER_SIZE_OPTIONS.iter().copied().map(Self).collect()
    }
}

// =============================================================================
// LensShape
// =============================================================================

/// Outline of the magnifying lens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LensShape {
    #[default]
    Circle,
    Square,
}

impl LensShape {
    /// Returns the other shape.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            LensShape::Circle => LensShape::Square,
            LensShape::Square => LensShape::Circle,
        }
    }

    /// Stored literal of this shape.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LensShape::Circle => "circle",
            LensShape::Square => "square",
        }
    }
}

impl fmt::Display for LensShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Preference for LensShape {
    const KEY: &'static str = MAGNIFIER_SHAPE_KEY;

    fn default_value() -> Self {
        Self::default()
    }

    /// Only the exact `circle` literal is a circle; any other stored text is a square.
    fn try_parse(raw: &str) -> Option<Self> {
        match raw {
            "" => None,
            "circle" => Some(LensShape::Circle),
            _ => Some(LensShape::Square),
        }
    }
}
