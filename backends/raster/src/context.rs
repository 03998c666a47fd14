//! The recording [`DrawingContext`] handed to elements during paint.

use std::rc::Rc;

use enhanced_tooltip_core::{DrawingContext, Pen, Point, Rect, ResolvedColor, Transform};

use crate::scene::{DrawCommand, Scene, SceneBuilder};

/// Records paint operations into a [`Scene`], tracking a transform stack.
#[derive(Debug, Default)]
pub struct RenderCtx {
    builder: SceneBuilder,
    transforms: Vec<Transform>,
}

impl RenderCtx {
    /// Creates a context with an identity transform.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            builder: SceneBuilder::new(),
            transforms: Vec::new(),
        }
    }

    /// Transform applied to commands recorded right now.
    #[must_use]
    pub fn current_transform(&self) -> Transform {
        self.transforms
            .last()
            .copied()
            .unwrap_or(Transform::IDENTITY)
    }

    /// Number of transforms awaiting a [`pop`](DrawingContext::pop).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.transforms.len()
    }

    /// Finalises the recorded scene.
    #[must_use]
    pub fn finish(self) -> Scene {
        if !self.transforms.is_empty() {
            tracing::warn!(
                depth = self.transforms.len(),
                "paint pass finished with unbalanced push_transform"
            );
        }
        self.builder.finish()
    }
}

impl DrawingContext for RenderCtx {
    fn draw_line(&mut self, pen: &Rc<Pen>, start: Point, end: Point) {
        self.builder.push(DrawCommand::Line {
            pen: Rc::clone(pen),
            start,
            end,
            transform: self.current_transform(),
        });
    }

    fn draw_rect(&mut self, color: ResolvedColor, rect: Rect) {
        self.builder.push(DrawCommand::SolidRect {
            rect,
            color,
            transform: self.current_transform(),
        });
    }

    fn push_transform(&mut self, transform: Transform) {
        let combined = transform.then(self.current_transform());
        self.transforms.push(combined);
    }

    fn pop(&mut self) {
        if self.transforms.pop().is_none() {
            tracing::warn!("pop called without a matching push_transform");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_transforms_accumulate_and_unwind() {
        let pen = Rc::new(Pen::new(Some(ResolvedColor::BLACK), 1.0));
        let mut ctx = RenderCtx::new();

        ctx.push_transform(Transform::translate(10.0, 0.0));
        ctx.push_transform(Transform::translate(0.0, 5.0));
        ctx.draw_line(&pen, Point::zero(), Point::new(1.0, 0.0));
        ctx.pop();
        ctx.draw_rect(ResolvedColor::BLACK, Rect::default());
        ctx.pop();
        ctx.draw_line(&pen, Point::zero(), Point::new(1.0, 0.0));

        assert_eq!(ctx.depth(), 0);
        let scene = ctx.finish();
        let transforms: Vec<_> = scene.lines().map(|(_, _, _, t)| t).collect();
        assert_eq!(
            transforms,
            vec![Transform::translate(10.0, 5.0), Transform::IDENTITY]
        );
        assert!(matches!(
            scene.commands()[1],
            DrawCommand::SolidRect { transform, .. } if transform == Transform::translate(10.0, 0.0)
        ));
    }

    #[test]
    fn recorded_lines_share_the_pen() {
        let pen = Rc::new(Pen::new(None, 2.0));
        let mut ctx = RenderCtx::new();
        ctx.draw_line(&pen, Point::zero(), Point::new(3.0, 0.0));

        let scene = ctx.finish();
        let (recorded, ..) = scene.lines().next().unwrap();
        assert!(Rc::ptr_eq(recorded, &pen));
    }

    #[test]
    fn unbalanced_pop_is_ignored() {
        let mut ctx = RenderCtx::new();
        ctx.pop();

        assert_eq!(ctx.current_transform(), Transform::IDENTITY);
        assert!(ctx.finish().is_empty());
    }
}
