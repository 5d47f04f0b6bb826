//! Color math: RGB → HSL without external dependencies.

use serde::Serialize;

/// Hue in whole degrees (0–359), saturation and lightness in whole percent (0–100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Hsl {
    h: u16,
    s: u8,
    l: u8,
}

impl Hsl {
    /// Create from hue degrees and saturation/lightness percent.
    ///
    /// Hue is reduced modulo 360; saturation and lightness are capped at 100.
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self {
            h: h % 360,
            s: if s > 100 { 100 } else { s },
            l: if l > 100 { 100 } else { l },
        }
    }

    /// Hue in degrees (0–359).
    pub fn h(&self) -> u16 {
        self.h
    }
    /// Saturation in percent (0–100).
    pub fn s(&self) -> u8 {
        self.s
    }
    /// Lightness in percent (0–100).
    pub fn l(&self) -> u8 {
        self.l
    }
}

/// RGB (0.0–1.0) → HSL. Returns (hue degrees 0.0–360.0, s 0.0–1.0, l 0.0–1.0).
///
/// Gray inputs (`max == min`) yield hue 0 and saturation 0 exactly.
pub(crate) fn rgb_to_hsl_unit(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l);
    }

    let delta = max - min;
    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let h = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    (h * 60.0, s, l)
}

/// RGB (0–255) → HSL rounded to whole degrees and percent.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let (h, s, l) = rgb_to_hsl_unit(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);
    Hsl {
        // 359.5 and up rounds onto 360, which is the same angle as 0.
        h: (h.round() as u16) % 360,
        s: (s * 100.0).round().clamp(0.0, 100.0) as u8,
        l: (l * 100.0).round().clamp(0.0, 100.0) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn achromatic_inputs_have_zero_hue_and_saturation() {
        assert_eq!(rgb_to_hsl(0, 0, 0), Hsl::new(0, 0, 0));
        assert_eq!(rgb_to_hsl(255, 255, 255), Hsl::new(0, 0, 100));
        assert_eq!(rgb_to_hsl(128, 128, 128), Hsl::new(0, 0, 50));
    }

    #[test]
    fn primaries() {
        assert_eq!(rgb_to_hsl(255, 0, 0), Hsl::new(0, 100, 50));
        assert_eq!(rgb_to_hsl(0, 255, 0), Hsl::new(120, 100, 50));
        assert_eq!(rgb_to_hsl(0, 0, 255), Hsl::new(240, 100, 50));
    }

    #[test]
    fn secondaries_and_mixed() {
        assert_eq!(rgb_to_hsl(255, 255, 0), Hsl::new(60, 100, 50));
        assert_eq!(rgb_to_hsl(0, 255, 255), Hsl::new(180, 100, 50));
        assert_eq!(rgb_to_hsl(255, 0, 255), Hsl::new(300, 100, 50));
        // #3B82F6
        assert_eq!(rgb_to_hsl(59, 130, 246), Hsl::new(217, 91, 60));
        // light side uses the (2 - max - min) denominator
        assert_eq!(rgb_to_hsl(255, 128, 128), Hsl::new(0, 100, 75));
    }

    #[test]
    fn hue_near_full_turn_wraps_to_zero() {
        // raw hue ≈ 359.76°
        let hsl = rgb_to_hsl(255, 0, 1);
        assert_eq!(hsl.h(), 0);
        assert_eq!(hsl.s(), 100);
    }

    #[test]
    fn constructor_keeps_components_in_range() {
        let hsl = Hsl::new(400, 150, 101);
        assert_eq!((hsl.h(), hsl.s(), hsl.l()), (40, 100, 100));
    }

    #[test]
    fn unit_conversion_negative_hue_is_wrapped() {
        let (h, _, _) = rgb_to_hsl_unit(1.0, 0.0, 0.5);
        assert!((h - 330.0).abs() < 1e-9, "h = {h}");
    }
}
