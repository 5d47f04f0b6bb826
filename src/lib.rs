//! # hoodie-tint
//!
//! Turns a picked hex color into the CSS filter chain that recolors a
//! white-based product illustration, so one image asset covers every color.
//!
//! The core ([`parse_hex_color`], [`rgb_to_hsl`], [`color_to_filter_spec`])
//! is pure and has no rendering dependency. With the `preview` feature
//! (default), [`tint_panel`] provides a Floem view that previews the result.
//!
//! ## Usage
//!
//! ```rust
//! use hoodie_tint::{color_to_filter_spec, FilterSpec};
//!
//! let spec = color_to_filter_spec("#FF0000");
//! assert_eq!(spec.to_css(), "hue-rotate(0deg) saturate(100%) brightness(50%) contrast(1.2)");
//!
//! // Anything that isn't a 6-digit hex color leaves the image unfiltered.
//! assert_eq!(color_to_filter_spec("red"), FilterSpec::NEUTRAL);
//! ```

mod color;
mod error;
mod filter;
mod math;
mod raster;

#[cfg(feature = "preview")]
mod constants;
#[cfg(feature = "preview")]
mod editor;
#[cfg(feature = "preview")]
mod inputs;
#[cfg(feature = "preview")]
mod preview;

pub use color::{parse_hex_color, Rgb};
pub use error::ColorError;
pub use filter::{color_to_filter_spec, try_color_to_filter_spec, FilterSpec, TINT_CONTRAST};
pub use math::{rgb_to_hsl, Hsl};
pub use raster::{apply_filter, filter_rgb, RgbaImage};

#[cfg(feature = "preview")]
pub use preview::{tint_preview, TintPreview};

#[cfg(feature = "preview")]
use floem::prelude::*;
#[cfg(feature = "preview")]
use floem::reactive::RwSignal;
#[cfg(feature = "preview")]
use floem::text::FONT_SYSTEM;

#[cfg(feature = "preview")]
static LOAD_LUCIDE_FONT: std::sync::Once = std::sync::Once::new();

/// Creates the top-level tint panel.
///
/// `hex` is the picked color. External changes to the signal update the
/// preview; edits in the hex field write back to it.
#[cfg(feature = "preview")]
pub fn tint_panel(hex: RwSignal<String>, source: RgbaImage) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    editor::tint_editor(hex, source)
}
