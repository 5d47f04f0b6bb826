//! Standalone demo: opens a window with the tint panel over a drawn hoodie.
//!
//! `RUST_LOG=hoodie_tint=debug` shows color fallbacks.

use floem::prelude::*;
use floem::window::WindowConfig;
use hoodie_tint::{tint_panel, RgbaImage};
use tracing_subscriber::EnvFilter;

const W: u32 = 180;
const H: u32 = 200;

/// A flat white hoodie silhouette with a light gray outline on transparency.
fn hoodie() -> RgbaImage {
    let inside = |x: f64, y: f64| {
        let hood = ((x - 90.0) / 34.0).powi(2) + ((y - 40.0) / 32.0).powi(2) <= 1.0;
        let body = (45.0..=135.0).contains(&x) && (50.0..=190.0).contains(&y);
        // sleeves slant outward from the shoulders
        let left = y >= 55.0 && y <= 170.0 && x >= 45.0 - (y - 55.0) * 0.3 && x <= 45.0;
        let right = y >= 55.0 && y <= 170.0 && x <= 135.0 + (y - 55.0) * 0.3 && x >= 135.0;
        hood || body || left || right
    };
    let mut pixels = Vec::with_capacity((W * H * 4) as usize);
    for y in 0..H {
        for x in 0..W {
            let (fx, fy) = (x as f64, y as f64);
            let px = if !inside(fx, fy) {
                [0, 0, 0, 0]
            } else if !(inside(fx - 2.0, fy)
                && inside(fx + 2.0, fy)
                && inside(fx, fy - 2.0)
                && inside(fx, fy + 2.0))
            {
                [200, 200, 200, 255]
            } else {
                [255, 255, 255, 255]
            };
            pixels.extend_from_slice(&px);
        }
    }
    RgbaImage::new(W, H, pixels).expect("buffer sized from W and H")
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let hex = RwSignal::new("#3B82F6".to_string());
    let source = hoodie();

    floem::Application::new()
        .window(
            move |_| {
                tint_panel(hex, source.clone()).on_event_stop(
                    floem::event::EventListener::WindowClosed,
                    |_| floem::quit_app(),
                )
            },
            Some(
                WindowConfig::default()
                    .size((232.0, 400.0))
                    .title("hoodie-tint"),
            ),
        )
        .run();
}
