//! Hex color input and copy button.

use std::rc::Rc;

use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};

use crate::color::{parse_hex_color, Rgb};
use crate::constants;

/// A hex input field that syncs with an `RwSignal<String>`.
///
/// Every keystroke that forms a valid color is pushed to `hex_signal` as-is.
/// On commit (Enter or focus lost) the text is normalized to `#RRGGBB`, or
/// reset to the last valid value if it doesn't parse.
pub(crate) fn hex_input(hex_signal: RwSignal<String>) -> impl IntoView {
    let text = RwSignal::new(hex_signal.get_untracked());
    let last_valid = RwSignal::new(
        parse_hex_color(&hex_signal.get_untracked()).unwrap_or(Rgb::new(255, 255, 255)),
    );

    // External hex_signal -> text (only when the colors differ)
    create_effect(move |_| {
        let val = hex_signal.get();
        let Some(rgb) = parse_hex_color(&val) else {
            return;
        };
        last_valid.set(rgb);
        if parse_hex_color(&text.get_untracked()) != Some(rgb) {
            text.set(rgb.to_hex());
        }
    });

    // text -> hex_signal on every valid keystroke
    create_effect(move |_| {
        let raw = text.get();
        if parse_hex_color(&raw).is_some() && hex_signal.get_untracked() != raw {
            hex_signal.set(raw);
        }
    });

    let on_commit = move || {
        let raw = text.get_untracked();
        let normalized = match parse_hex_color(&raw) {
            Some(rgb) => rgb.to_hex(),
            None => {
                tracing::debug!(input = %raw, "resetting invalid hex input");
                last_valid.get_untracked().to_hex()
            }
        };
        if raw != normalized {
            text.set(normalized.clone());
        }
        if hex_signal.get_untracked() != normalized {
            hex_signal.set(normalized);
        }
    };

    text_input(text)
        .style(|s| {
            s.width(constants::HEX_INPUT_WIDTH)
                .padding(2.0)
                .font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .background(Color::WHITE)
                .border(1.0)
                .border_color(Color::rgb8(200, 200, 200))
                .border_radius(3.0)
        })
        .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
            on_commit();
        })
        .on_event_stop(floem::event::EventListener::KeyDown, move |e| {
            if let floem::event::Event::KeyDown(ke) = e {
                if ke.key.logical_key
                    == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
                {
                    on_commit();
                }
            }
        })
}

/// A copy button for the value produced by `get_text`.
///
/// `None` means there is nothing worth copying and the button is shown
/// disabled. After a successful copy the icon turns into a check mark until
/// the pointer leaves the button.
pub(crate) fn copy_button(get_text: impl Fn() -> Option<String> + 'static) -> impl IntoView {
    let get_text = Rc::new(get_text);
    let copied = RwSignal::new(false);
    let enabled = {
        let get_text = get_text.clone();
        move || get_text().is_some()
    };
    let enabled_for_icon = enabled.clone();

    container(
        label(move || {
            let icon = if copied.get() {
                lucide_icons::Icon::Check
            } else {
                lucide_icons::Icon::Copy
            };
            icon.unicode().to_string()
        })
        .style(move |s| {
            let c = if !enabled_for_icon() {
                Color::rgb8(200, 200, 200)
            } else if copied.get() {
                Color::rgb8(40, 140, 60)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(move |s| {
        let s = s
            .size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0);
        if enabled() {
            s.cursor(floem::style::CursorStyle::Pointer)
                .hover(|s| s.background(Color::rgb8(230, 230, 230)))
        } else {
            s
        }
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        if let Some(text) = get_text() {
            copied.set(copy_to_clipboard(&text));
        }
    })
    .on_event_stop(floem::event::EventListener::PointerLeave, move |_| {
        copied.set(false);
    })
}

/// Returns whether the clipboard now holds `text`.
fn copy_to_clipboard(text: &str) -> bool {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(text) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(error = %e, "clipboard write failed");
                false
            }
        },
        Err(e) => {
            tracing::debug!(error = %e, "clipboard unavailable");
            false
        }
    }
}
