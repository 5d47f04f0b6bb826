//! Applies a [`FilterSpec`] to RGBA8 pixels.
//!
//! Implements the Filter Effects shorthand functions `hue-rotate`, `saturate`,
//! `brightness` and `contrast` in sRGB space, in that order, clamping to
//! 0.0–1.0 after each step the way a browser filter chain does.

use crate::color::Rgb;
use crate::error::ColorError;
use crate::filter::FilterSpec;

type Matrix3 = [[f64; 3]; 3];

// Luminance weights used by the hue-rotate and saturate matrices.
const LR: f64 = 0.213;
const LG: f64 = 0.715;
const LB: f64 = 0.072;

fn hue_rotate_matrix(deg: f64) -> Matrix3 {
    let (sin, cos) = deg.to_radians().sin_cos();
    [
        [
            LR + cos * (1.0 - LR) - sin * LR,
            LG - cos * LG - sin * LG,
            LB - cos * LB + sin * (1.0 - LB),
        ],
        [
            LR - cos * LR + sin * 0.143,
            LG + cos * (1.0 - LG) + sin * 0.140,
            LB - cos * LB - sin * 0.283,
        ],
        [
            LR - cos * LR - sin * (1.0 - LR),
            LG - cos * LG + sin * LG,
            LB + cos * (1.0 - LB) + sin * LB,
        ],
    ]
}

fn saturate_matrix(s: f64) -> Matrix3 {
    [
        [LR + (1.0 - LR) * s, LG - LG * s, LB - LB * s],
        [LR - LR * s, LG + (1.0 - LG) * s, LB - LB * s],
        [LR - LR * s, LG - LG * s, LB + (1.0 - LB) * s],
    ]
}

fn mul_clamped(m: &Matrix3, c: [f64; 3]) -> [f64; 3] {
    let row = |i: usize| (m[i][0] * c[0] + m[i][1] * c[1] + m[i][2] * c[2]).clamp(0.0, 1.0);
    [row(0), row(1), row(2)]
}

/// The per-pixel steps of a spec, with identity steps dropped.
struct Chain {
    hue: Option<Matrix3>,
    saturate: Option<Matrix3>,
    brightness: Option<f64>,
    contrast: Option<f64>,
}

impl Chain {
    fn new(spec: &FilterSpec) -> Self {
        let deg = spec.hue_rotate_deg % 360;
        Self {
            hue: (deg != 0).then(|| hue_rotate_matrix(deg as f64)),
            saturate: (spec.saturate_pct != 100)
                .then(|| saturate_matrix(spec.saturate_pct as f64 / 100.0)),
            brightness: (spec.brightness_pct != 100).then(|| spec.brightness_pct as f64 / 100.0),
            contrast: (spec.contrast != 1.0).then_some(spec.contrast),
        }
    }

    fn apply(&self, rgb: [u8; 3]) -> [u8; 3] {
        let mut c = rgb.map(|v| v as f64 / 255.0);
        if let Some(m) = &self.hue {
            c = mul_clamped(m, c);
        }
        if let Some(m) = &self.saturate {
            c = mul_clamped(m, c);
        }
        if let Some(b) = self.brightness {
            c = c.map(|v| (v * b).clamp(0.0, 1.0));
        }
        if let Some(k) = self.contrast {
            let intercept = 0.5 - 0.5 * k;
            c = c.map(|v| (v * k + intercept).clamp(0.0, 1.0));
        }
        c.map(|v| (v * 255.0).round() as u8)
    }
}

/// Filter an RGBA8 buffer in place. Alpha is kept; fully transparent
/// pixels are left untouched. A trailing partial pixel is ignored.
pub fn apply_filter(pixels: &mut [u8], spec: &FilterSpec) {
    if spec.is_neutral() {
        return;
    }
    let chain = Chain::new(spec);
    for px in pixels.chunks_exact_mut(4) {
        if px[3] == 0 {
            continue;
        }
        let [r, g, b] = chain.apply([px[0], px[1], px[2]]);
        px[0] = r;
        px[1] = g;
        px[2] = b;
    }
}

/// Filter a single opaque color.
pub fn filter_rgb(rgb: Rgb, spec: &FilterSpec) -> Rgb {
    if spec.is_neutral() {
        return rgb;
    }
    let [r, g, b] = Chain::new(spec).apply([rgb.r(), rgb.g(), rgb.b()]);
    Rgb::new(r, g, b)
}

/// Byte length of a `width` x `height` RGBA8 buffer.
fn buffer_len(width: u32, height: u32) -> Result<usize, ColorError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or(ColorError::ImageTooLarge { width, height })
}

/// Straight-alpha RGBA8 image, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RgbaImage {
    /// Wrap an existing buffer, checking its length against the dimensions.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, ColorError> {
        let expected = buffer_len(width, height)?;
        if pixels.len() != expected {
            return Err(ColorError::ImageSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// An image filled with one RGBA value.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, ColorError> {
        let len = buffer_len(width, height)?;
        let pixels = rgba.iter().copied().cycle().take(len).collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// A filtered copy of this image.
    pub fn filtered(&self, spec: &FilterSpec) -> RgbaImage {
        let mut pixels = self.pixels.clone();
        apply_filter(&mut pixels, spec);
        RgbaImage {
            width: self.width,
            height: self.height,
            pixels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::color_to_filter_spec;

    fn spec(hue: u16, sat: u8, bright: u8, contrast: f64) -> FilterSpec {
        FilterSpec {
            hue_rotate_deg: hue,
            saturate_pct: sat,
            brightness_pct: bright,
            contrast,
        }
    }

    #[test]
    fn neutral_spec_is_identity() {
        let mut px = vec![12, 34, 56, 255, 200, 100, 0, 128];
        let before = px.clone();
        apply_filter(&mut px, &FilterSpec::NEUTRAL);
        assert_eq!(px, before);
    }

    #[test]
    fn zero_brightness_is_black_and_keeps_alpha() {
        let mut px = vec![255, 255, 255, 200];
        apply_filter(&mut px, &spec(0, 100, 0, 1.0));
        assert_eq!(px, vec![0, 0, 0, 200]);
    }

    #[test]
    fn transparent_pixels_are_skipped() {
        let mut px = vec![255, 255, 255, 0];
        apply_filter(&mut px, &spec(0, 100, 0, 1.0));
        assert_eq!(px, vec![255, 255, 255, 0]);
    }

    #[test]
    fn full_desaturation_uses_luminance_weights() {
        let out = filter_rgb(Rgb::new(255, 0, 0), &spec(0, 0, 100, 1.0));
        // 0.213 * 255 = 54.3
        assert_eq!(out, Rgb::new(54, 54, 54));
    }

    #[test]
    fn half_brightness() {
        let out = filter_rgb(Rgb::new(200, 100, 50), &spec(0, 100, 50, 1.0));
        assert_eq!(out, Rgb::new(100, 50, 25));
    }

    #[test]
    fn contrast_pivots_on_mid_gray() {
        let out = filter_rgb(Rgb::new(128, 0, 255), &spec(0, 100, 100, 1.2));
        assert_eq!(out, Rgb::new(128, 0, 255));
        let out = filter_rgb(Rgb::new(64, 64, 64), &spec(0, 100, 100, 1.5));
        // 1.5 * 64 - 0.25 * 255 = 32.25
        assert_eq!(out, Rgb::new(32, 32, 32));
    }

    #[test]
    fn full_turn_hue_rotation_is_skipped() {
        let out = filter_rgb(Rgb::new(10, 20, 30), &spec(360, 100, 100, 1.0));
        assert_eq!(out, Rgb::new(10, 20, 30));
    }

    #[test]
    fn hue_rotation_moves_red_towards_green() {
        let out = filter_rgb(Rgb::new(255, 0, 0), &spec(120, 100, 100, 1.0));
        assert!(out.g() > out.r(), "{out:?}");
        assert!(out.g() > out.b(), "{out:?}");
    }

    #[test]
    fn white_source_under_white_spec() {
        // saturate(0%) and brightness(100%) leave white alone, contrast 1.2 clamps at 1.
        let img = RgbaImage::solid(2, 2, [255, 255, 255, 255]).unwrap();
        let out = img.filtered(&color_to_filter_spec("#FFFFFF"));
        assert_eq!(out, img);
    }

    #[test]
    fn image_size_is_checked() {
        assert_eq!(
            RgbaImage::new(2, 2, vec![0; 15]),
            Err(ColorError::ImageSize {
                expected: 16,
                actual: 15
            })
        );
        let img = RgbaImage::new(1, 2, vec![0; 8]).unwrap();
        assert_eq!(img.pixels().len(), 8);
        assert_eq!((img.width(), img.height()), (1, 2));
        assert_eq!(img.into_pixels().len(), 8);
    }

    #[test]
    fn oversized_dimensions_are_an_error() {
        let too_large = ColorError::ImageTooLarge {
            width: u32::MAX,
            height: u32::MAX,
        };
        assert_eq!(
            RgbaImage::new(u32::MAX, u32::MAX, Vec::new()),
            Err(too_large.clone())
        );
        assert_eq!(
            RgbaImage::solid(u32::MAX, u32::MAX, [0, 0, 0, 255]),
            Err(too_large)
        );
    }

    #[test]
    fn solid_repeats_the_pixel() {
        let img = RgbaImage::solid(2, 1, [1, 2, 3, 4]).unwrap();
        assert_eq!(img.pixels(), &[1, 2, 3, 4, 1, 2, 3, 4]);
    }
}
