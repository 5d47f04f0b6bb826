//! Hex color → CSS filter parameters.
//!
//! The product illustration is white-based, so a color is expressed as a
//! `hue-rotate saturate brightness contrast` chain taken straight from the
//! color's HSL coordinates, with a fixed contrast boost.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::ColorError;
use crate::math::Hsl;

/// Contrast applied to every tinted image.
pub const TINT_CONTRAST: f64 = 1.2;

/// Parameters for a CSS-style filter chain, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    pub hue_rotate_deg: u16,
    pub saturate_pct: u8,
    pub brightness_pct: u8,
    pub contrast: f64,
}

impl FilterSpec {
    /// Leaves the image exactly as it is.
    pub const NEUTRAL: FilterSpec = FilterSpec {
        hue_rotate_deg: 0,
        saturate_pct: 100,
        brightness_pct: 100,
        contrast: 1.0,
    };

    /// Filter for a color given in HSL: hue, saturation and lightness map
    /// straight onto hue-rotate, saturate and brightness.
    pub fn from_hsl(hsl: Hsl) -> Self {
        Self {
            hue_rotate_deg: hsl.h(),
            saturate_pct: hsl.s(),
            brightness_pct: hsl.l(),
            contrast: TINT_CONTRAST,
        }
    }

    /// Filter for an RGB color, via [`Rgb::to_hsl`].
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self::from_hsl(rgb.to_hsl())
    }

    /// Whether applying this filter leaves the image unchanged.
    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }

    /// Value for a CSS `filter` property.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hue-rotate({}deg) saturate({}%) brightness({}%) contrast({})",
            self.hue_rotate_deg, self.saturate_pct, self.brightness_pct, self.contrast
        )
    }
}

/// Like [`color_to_filter_spec`], but reports an unparsable color.
pub fn try_color_to_filter_spec(hex: &str) -> Result<FilterSpec, ColorError> {
    let rgb: Rgb = hex.parse()?;
    Ok(FilterSpec::from_rgb(rgb))
}

/// Filter parameters for `hex`, or [`FilterSpec::NEUTRAL`] if it isn't a
/// 6-digit hex color. An invalid color leaves the image unfiltered.
pub fn color_to_filter_spec(hex: &str) -> FilterSpec {
    match try_color_to_filter_spec(hex) {
        Ok(spec) => spec,
        Err(e) => {
            tracing::debug!(error = %e, "falling back to neutral filter");
            FilterSpec::NEUTRAL
        }
    }
}
