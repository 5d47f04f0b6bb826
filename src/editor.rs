//! Tint editor: preview, hex entry with swatch, HSL readout, and the CSS
//! filter value with a copy button.

use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};

use crate::color::{parse_hex_color, Rgb};
use crate::constants;
use crate::filter::{color_to_filter_spec, FilterSpec};
use crate::inputs::{copy_button, hex_input};
use crate::preview::tint_preview;
use crate::raster::{filter_rgb, RgbaImage};

/// Creates the editor for `hex`, previewing `source` with the derived filter.
pub(crate) fn tint_editor(hex: RwSignal<String>, source: RgbaImage) -> impl IntoView {
    let spec = RwSignal::new(color_to_filter_spec(&hex.get_untracked()));

    // hex -> spec. Each change recomputes independently; the last one wins.
    create_effect(move |_| {
        let next = color_to_filter_spec(&hex.get());
        if spec.get_untracked() != next {
            spec.set(next);
        }
    });

    let hsl_text = move || match parse_hex_color(&hex.get()) {
        Some(rgb) => {
            let hsl = rgb.to_hsl();
            format!("H {}°  S {}%  L {}%", hsl.h(), hsl.s(), hsl.l())
        }
        None => "H –  S –  L –".to_string(),
    };

    v_stack((
        tint_preview(source, spec),
        // Hex + swatches row
        h_stack((
            hex_input(hex),
            empty().style(|s| s.flex_grow(1.0)),
            swatch(move || {
                parse_hex_color(&hex.get())
                    .map(|c| Color::rgb8(c.r(), c.g(), c.b()))
            }),
            // What a white pixel turns into under the current filter
            swatch(move || {
                let out = filter_rgb(Rgb::new(255, 255, 255), &spec.get());
                Some(Color::rgb8(out.r(), out.g(), out.b()))
            }),
        ))
        .style(|st| st.items_center().gap(constants::GAP / 2.0)),
        label(hsl_text).style(|s| {
            s.font_size(constants::LABEL_FONT)
                .font_family("monospace".to_string())
                .color(Color::rgb8(120, 120, 120))
        }),
        // CSS filter + copy row
        h_stack((
            label(move || css_value(&spec.get())).style(|s| {
                s.font_size(constants::LABEL_FONT)
                    .font_family("monospace".to_string())
                    .flex_grow(1.0)
            }),
            copy_button(move || copyable_css(&spec.get())),
        ))
        .style(|st| st.gap(constants::GAP / 2.0).items_center()),
    ))
    .style(|st| {
        st.gap(constants::GAP)
            .padding(constants::PADDING)
            .size_full()
            .background(Color::rgb8(242, 242, 242))
    })
}

fn css_value(spec: &FilterSpec) -> String {
    format!("filter: {spec};")
}

/// The CSS declaration to put on the clipboard, or `None` while the color is
/// invalid and the image stays unfiltered.
fn copyable_css(spec: &FilterSpec) -> Option<String> {
    (!spec.is_neutral()).then(|| css_value(spec))
}

/// A square color box; `None` draws an empty outlined box.
fn swatch(color: impl Fn() -> Option<Color> + 'static) -> impl IntoView {
    empty().style(move |st| {
        let st = st
            .width(constants::SWATCH_SIZE)
            .height(constants::SWATCH_SIZE)
            .border_radius(constants::RADIUS)
            .border(1.0)
            .border_color(Color::rgb8(180, 180, 180));
        match color() {
            Some(c) => st.background(c),
            None => st,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_filter_has_nothing_to_copy() {
        assert_eq!(copyable_css(&FilterSpec::NEUTRAL), None);
        assert_eq!(copyable_css(&color_to_filter_spec("not-a-color")), None);
    }

    #[test]
    fn tinted_filter_copies_the_declaration() {
        assert_eq!(
            copyable_css(&color_to_filter_spec("#FF0000")).as_deref(),
            Some("filter: hue-rotate(0deg) saturate(100%) brightness(50%) contrast(1.2);")
        );
    }
}
