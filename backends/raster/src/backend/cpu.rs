//! CPU renderer built on top of `tiny-skia`.

use enhanced_tooltip_core::{Pen, Point, Rect, ResolvedColor, Transform};
use tiny_skia::{Paint, PathBuilder, Pixmap, Stroke, StrokeDash};

use crate::{
    backend::{FrameResult, RenderBackend, RenderError},
    scene::{DrawCommand, Scene},
};

/// CPU surface that renders into a `tiny-skia` pixmap.
pub struct TinySkiaBackend {
    pixmap: Pixmap,
    clear_color: tiny_skia::Color,
    scale_factor: f32,
}

impl core::fmt::Debug for TinySkiaBackend {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TinySkiaBackend")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("scale_factor", &self.scale_factor)
            .finish()
    }
}

impl TinySkiaBackend {
    /// Creates a backend rendering into a transparent pixmap of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::PixmapAllocation`] for zero or oversized dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        Ok(Self {
            pixmap: allocate(width, height)?,
            clear_color: tiny_skia::Color::TRANSPARENT,
            scale_factor: 1.0,
        })
    }

    /// Replaces the pixmap, keeping the clear colour and scale factor.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::PixmapAllocation`] for zero or oversized dimensions;
    /// the previous pixmap is kept in that case.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), RenderError> {
        self.pixmap = allocate(width, height)?;
        Ok(())
    }

    /// Pixmap width in physical pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Pixmap height in physical pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// The backing pixmap, for presenting or encoding.
    #[must_use]
    pub const fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Logical-to-physical pixel ratio.
    #[must_use]
    pub const fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// Updates the scale factor (callers are responsible for resizing the pixmap accordingly).
    pub const fn set_scale_factor(&mut self, factor: f32) {
        self.scale_factor = factor;
    }

    /// Sets the colour the pixmap is cleared to on every present.
    ///
    /// Colours with non-finite components are ignored.
    pub fn set_clear_color(&mut self, color: ResolvedColor) {
        if let Some(color) = skia_color(color) {
            self.clear_color = color;
        }
    }

    fn surface_transform(&self, local: Transform) -> tiny_skia::Transform {
        let t = local.then(Transform::scale(self.scale_factor, self.scale_factor));
        tiny_skia::Transform::from_row(t.sx, t.ky, t.kx, t.sy, t.tx, t.ty)
    }

    fn stroke_line(
        &mut self,
        pen: &Pen,
        start: Point,
        end: Point,
        transform: Transform,
    ) -> Result<(), RenderError> {
        let Some(color) = pen.brush().and_then(skia_color) else {
            return Ok(());
        };
        // Nothing visible; tiny-skia would reject the path anyway.
        if start == end || pen.thickness() <= 0.0 {
            return Ok(());
        }

        let mut builder = PathBuilder::new();
        builder.move_to(start.x, start.y);
        builder.line_to(end.x, end.y);
        let Some(path) = builder.finish() else {
            return Ok(());
        };

        let mut stroke = Stroke {
            width: pen.thickness(),
            ..Stroke::default()
        };
        if let Some(dash_style) = pen.dash_style() {
            let intervals = dash_style
                .dashes()
                .iter()
                .map(|length| length * pen.thickness())
                .collect();
            let dash = StrokeDash::new(intervals, dash_style.offset() * pen.thickness())
                .ok_or_else(|| RenderError::InvalidDash {
                    dashes: dash_style.dashes().to_vec(),
                })?;
            stroke.dash = Some(dash);
        }

        let mut paint = Paint::default();
        paint.set_color(color);
        paint.anti_alias = true;
        let transform = self.surface_transform(transform);
        self.pixmap.stroke_path(&path, &paint, &stroke, transform, None);
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: ResolvedColor, transform: Transform) {
        let Some(ts_rect) =
            tiny_skia::Rect::from_xywh(rect.min_x(), rect.min_y(), rect.width(), rect.height())
        else {
            return;
        };
        let Some(color) = skia_color(color) else {
            return;
        };
        let mut paint = Paint::default();
        paint.set_color(color);
        let transform = self.surface_transform(transform);
        self.pixmap.fill_rect(ts_rect, &paint, transform, None);
    }
}

impl RenderBackend for TinySkiaBackend {
    fn present(&mut self, scene: &Scene) -> Result<FrameResult, RenderError> {
        self.pixmap.fill(self.clear_color);
        if scene.is_empty() {
            return Ok(FrameResult::Idle);
        }

        for command in scene.commands() {
            match command {
                DrawCommand::Line {
                    pen,
                    start,
                    end,
                    transform,
                } => self.stroke_line(pen, *start, *end, *transform)?,
                DrawCommand::SolidRect {
                    rect,
                    color,
                    transform,
                } => self.fill_rect(*rect, *color, *transform),
            }
        }
        tracing::trace!(commands = scene.commands().len(), "frame rasterised");
        Ok(FrameResult::Presented)
    }
}

fn allocate(width: u32, height: u32) -> Result<Pixmap, RenderError> {
    Pixmap::new(width, height).ok_or(RenderError::PixmapAllocation { width, height })
}

// tiny-skia blends in gamma-encoded space.
fn skia_color(color: ResolvedColor) -> Option<tiny_skia::Color> {
    let srgb = color.to_srgb();
    tiny_skia::Color::from_rgba(
        srgb.red.clamp(0.0, 1.0),
        srgb.green.clamp(0.0, 1.0),
        srgb.blue.clamp(0.0, 1.0),
        color.opacity.clamp(0.0, 1.0),
    )
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use enhanced_tooltip_core::{DashStyle, DrawingContext, Size};

    use super::*;
    use crate::context::RenderCtx;

    fn dashed_pen(thickness: f32, dashes: &[f32]) -> Rc<Pen> {
        let mut pen = Pen::new(Some(ResolvedColor::BLACK), thickness);
        pen.set_dash_style(DashStyle::new(dashes, 0.0)).unwrap();
        pen.freeze();
        Rc::new(pen)
    }

    fn alpha(backend: &TinySkiaBackend, x: u32, y: u32) -> u8 {
        backend.pixmap().pixel(x, y).unwrap().alpha()
    }

    #[test]
    fn dashes_leave_gaps_in_the_stroke() {
        let mut backend = TinySkiaBackend::new(40, 4).unwrap();
        let mut ctx = RenderCtx::new();
        ctx.draw_line(
            &dashed_pen(2.0, &[3.0, 3.0]),
            Point::new(0.0, 1.0),
            Point::new(40.0, 1.0),
        );

        let result = backend.present(&ctx.finish()).unwrap();

        assert_eq!(result, FrameResult::Presented);
        assert!(alpha(&backend, 2, 0) > 200);
        assert!(alpha(&backend, 2, 1) > 200);
        assert_eq!(alpha(&backend, 8, 0), 0);
        assert!(alpha(&backend, 14, 1) > 200);
        assert_eq!(alpha(&backend, 20, 1), 0);
        assert_eq!(alpha(&backend, 2, 3), 0);
    }

    #[test]
    fn brushless_pen_paints_nothing() {
        let mut backend = TinySkiaBackend::new(10, 4).unwrap();
        let mut ctx = RenderCtx::new();
        ctx.draw_line(
            &Rc::new(Pen::new(None, 2.0)),
            Point::new(0.0, 1.0),
            Point::new(10.0, 1.0),
        );

        backend.present(&ctx.finish()).unwrap();

        assert!(backend.pixmap().pixels().iter().all(|p| p.alpha() == 0));
    }

    #[test]
    fn zero_length_line_is_not_an_error() {
        let mut backend = TinySkiaBackend::new(4, 4).unwrap();
        let mut ctx = RenderCtx::new();
        ctx.draw_line(
            &dashed_pen(1.0, &[3.0, 3.0]),
            Point::new(0.0, 0.5),
            Point::new(0.0, 0.5),
        );

        assert_eq!(
            backend.present(&ctx.finish()),
            Ok(FrameResult::Presented)
        );
    }

    #[test]
    fn odd_dash_pattern_is_rejected() {
        let mut backend = TinySkiaBackend::new(10, 4).unwrap();
        let mut ctx = RenderCtx::new();
        ctx.draw_line(
            &dashed_pen(1.0, &[3.0]),
            Point::new(0.0, 0.5),
            Point::new(10.0, 0.5),
        );

        assert_eq!(
            backend.present(&ctx.finish()),
            Err(RenderError::InvalidDash { dashes: vec![3.0] })
        );
    }

    #[test]
    fn empty_scene_clears_the_previous_frame() {
        let mut backend = TinySkiaBackend::new(10, 4).unwrap();
        let mut ctx = RenderCtx::new();
        ctx.draw_line(
            &dashed_pen(2.0, &[3.0, 3.0]),
            Point::new(0.0, 1.0),
            Point::new(10.0, 1.0),
        );
        backend.present(&ctx.finish()).unwrap();
        assert!(alpha(&backend, 2, 1) > 200);

        assert_eq!(
            backend.present(&Scene::default()),
            Ok(FrameResult::Idle)
        );
        assert!(backend.pixmap().pixels().iter().all(|p| p.alpha() == 0));
    }

    #[test]
    fn clear_colour_fills_the_surface() {
        let mut backend = TinySkiaBackend::new(6, 6).unwrap();
        backend.set_clear_color(ResolvedColor::BLACK);
        let mut ctx = RenderCtx::new();
        ctx.draw_line(
            &dashed_pen(1.0, &[3.0, 3.0]),
            Point::new(0.0, 0.5),
            Point::new(3.0, 0.5),
        );

        backend.present(&ctx.finish()).unwrap();
        assert_eq!(alpha(&backend, 5, 5), 255);

        backend.set_clear_color(ResolvedColor::TRANSPARENT);
        assert_eq!(backend.present(&Scene::default()), Ok(FrameResult::Idle));
        assert_eq!(alpha(&backend, 5, 5), 0);
    }

    #[test]
    fn zero_sized_surface_is_rejected() {
        assert_eq!(
            TinySkiaBackend::new(0, 10).unwrap_err(),
            RenderError::PixmapAllocation {
                width: 0,
                height: 10
            }
        );

        let mut backend = TinySkiaBackend::new(2, 2).unwrap();
        assert!(backend.resize(5, 0).is_err());
        assert_eq!((backend.width(), backend.height()), (2, 2));
    }

    #[test]
    fn rects_honour_transform_and_scale() {
        let mut backend = TinySkiaBackend::new(8, 8).unwrap();
        backend.set_scale_factor(2.0);
        let mut ctx = RenderCtx::new();
        ctx.push_transform(Transform::translate(1.0, 1.0));
        ctx.draw_rect(
            ResolvedColor::BLACK,
            Rect::from_size(Size::new(1.0, 1.0)),
        );
        ctx.pop();

        backend.present(&ctx.finish()).unwrap();

        assert_eq!(alpha(&backend, 1, 1), 0);
        assert!(alpha(&backend, 2, 2) > 250);
        assert!(alpha(&backend, 3, 3) > 250);
        assert_eq!(alpha(&backend, 4, 4), 0);
    }
}
