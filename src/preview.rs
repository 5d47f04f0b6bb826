//! Tinted product preview.
//!
//! Floem has no CSS filter primitive, so the source illustration is filtered
//! on the CPU and drawn as an image. The filtered image is cached until the
//! spec changes.

use std::sync::Arc;

use floem::kurbo::Rect;
use floem::peniko::{self, Blob, Color};
use floem::reactive::{create_effect, RwSignal, SignalGet};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, PaintCx, UpdateCx},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::constants;
use crate::filter::FilterSpec;
use crate::raster::RgbaImage;

pub struct TintPreview {
    id: ViewId,
    source: RgbaImage,
    spec: FilterSpec,
    size: floem::taffy::prelude::Size<f32>,
    /// Cached filtered image.
    img: Option<peniko::Image>,
    img_hash: Vec<u8>,
    cached_spec: Option<FilterSpec>,
}

/// Creates a view showing `source` with `spec` applied.
pub fn tint_preview(source: RgbaImage, spec: RwSignal<FilterSpec>) -> TintPreview {
    let id = ViewId::new();

    create_effect(move |_| {
        let s = spec.get();
        id.update_state(s);
    });

    TintPreview {
        id,
        source,
        spec: spec.get_untracked(),
        size: Default::default(),
        img: None,
        img_hash: Vec::new(),
        cached_spec: None,
    }
    .style(|s| {
        s.width(constants::PREVIEW_WIDTH)
            .height(constants::PREVIEW_HEIGHT)
            .border_radius(constants::RADIUS)
    })
}

impl TintPreview {
    fn ensure_image(&mut self) {
        if self.cached_spec == Some(self.spec) && self.img.is_some() {
            return;
        }
        let (w, h) = (self.source.width(), self.source.height());
        if w == 0 || h == 0 {
            return;
        }
        tracing::trace!(spec = %self.spec, w, h, "rasterizing tinted preview");

        let pixels = self.source.filtered(&self.spec).into_pixels();
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, w, h);

        self.img_hash = blob.id().to_le_bytes().to_vec();
        self.img = Some(img);
        self.cached_spec = Some(self.spec);
    }

    /// Largest rect with the source's aspect ratio, centered in the view.
    fn fit_rect(&self) -> Rect {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        let sw = self.source.width() as f64;
        let sh = self.source.height() as f64;
        let scale = (w / sw).min(h / sh);
        let (dw, dh) = (sw * scale, sh * scale);
        let x0 = (w - dw) / 2.0;
        let y0 = (h - dh) / 2.0;
        Rect::new(x0, y0, x0 + dw, y0 + dh)
    }
}

impl View for TintPreview {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(spec) = state.downcast::<FilterSpec>() {
            self.spec = *spec;
            self.id.request_layout();
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(constants::RADIUS as f64);

        cx.fill(&rrect, Color::rgb8(250, 250, 250), 0.0);

        self.ensure_image();
        if let Some(ref img) = self.img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.img_hash,
                },
                self.fit_rect(),
            );
        }

        cx.stroke(
            &rrect,
            Color::rgba8(0, 0, 0, 40),
            &floem::kurbo::Stroke::new(1.0),
        );
    }
}
