//! The vertical container tooltips are built from.

use enhanced_tooltip_core::{
    DrawingContext, Element, Point, ProposalSize, Rect, ResolvedColor, Size, Transform,
};

/// Stacks child elements top to bottom inside an optional maximum width.
///
/// Every child is arranged with the full content width, whatever it asked
/// for during measurement. Children that claim no intrinsic width (such as
/// separators) therefore span the panel without ever widening it.
#[derive(Debug, Default)]
pub struct TooltipPanel {
    children: Vec<Box<dyn Element>>,
    max_width: Option<f32>,
    padding: f32,
    spacing: f32,
    background: Option<ResolvedColor>,
    desired: Vec<Size>,
    placements: Vec<Rect>,
    size: Size,
}

impl TooltipPanel {
    /// Creates an empty panel without width limit, padding or background.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a child.
    #[must_use]
    pub fn child(mut self, element: impl Element + 'static) -> Self {
        self.push(Box::new(element));
        self
    }

    /// Appends an already boxed child.
    pub fn push(&mut self, element: Box<dyn Element>) {
        self.children.push(element);
    }

    /// Caps the panel's width.
    #[must_use]
    pub const fn max_width(mut self, max_width: f32) -> Self {
        self.max_width = Some(max_width);
        self
    }

    /// Inset applied on every edge.
    #[must_use]
    pub const fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Vertical gap between consecutive children.
    #[must_use]
    pub const fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Fills the panel with `color` before painting children.
    #[must_use]
    pub const fn background(mut self, color: ResolvedColor) -> Self {
        self.background = Some(color);
        self
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the panel has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Child rectangles from the last arrangement, in panel coordinates.
    #[must_use]
    pub fn placements(&self) -> &[Rect] {
        &self.placements
    }

    fn cap(&self, width: f32) -> f32 {
        self.max_width.map_or(width, |max| width.min(max))
    }

    fn total_spacing(&self) -> f32 {
        self.spacing * self.children.len().saturating_sub(1) as f32
    }
}

impl Element for TooltipPanel {
    fn measure(&mut self, proposal: ProposalSize) -> Size {
        let available = match proposal.width {
            Some(width) => Some(self.cap(width)),
            None => self.max_width,
        };
        let content_proposal = ProposalSize {
            width: available.map(|w| 2.0f32.mul_add(-self.padding, w).max(0.0)),
            height: None,
        };

        self.desired = self
            .children
            .iter_mut()
            .map(|child| child.measure(content_proposal))
            .collect();

        let content_width = self
            .desired
            .iter()
            .map(|size| size.width)
            .fold(0.0_f32, f32::max);
        let content_height =
            self.desired.iter().map(|size| size.height).sum::<f32>() + self.total_spacing();

        let desired = Size::new(
            self.cap(2.0f32.mul_add(self.padding, content_width)),
            2.0f32.mul_add(self.padding, content_height),
        );
        tracing::trace!(?proposal, ?desired, "panel measured");
        desired
    }

    fn arrange(&mut self, final_size: Size) -> Size {
        if self.desired.len() != self.children.len() {
            self.measure(final_size.into());
        }

        let width = self.cap(final_size.width);
        let content = Rect::from_size(Size::new(width, final_size.height)).inset(
            self.padding,
            self.padding,
            self.padding,
            self.padding,
        );

        let mut y = content.min_y();
        self.placements = self
            .children
            .iter_mut()
            .zip(&self.desired)
            .map(|(child, desired)| {
                let slot = Size::new(content.width(), desired.height);
                let arranged = child.arrange(slot);
                let placement = Rect::new(Point::new(content.min_x(), y), arranged);
                y += arranged.height + self.spacing;
                placement
            })
            .collect();

        self.size = Size::new(width, final_size.height);
        tracing::trace!(size = ?self.size, children = self.children.len(), "panel arranged");
        self.size
    }

    fn render(&mut self, ctx: &mut dyn DrawingContext) {
        if let Some(color) = self.background {
            ctx.draw_rect(color, Rect::from_size(self.size));
        }
        for (child, placement) in self.children.iter_mut().zip(&self.placements) {
            let origin = placement.origin();
            ctx.push_transform(Transform::translate(origin.x, origin.y));
            child.render(ctx);
            ctx.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;
    use crate::{context::RenderCtx, scene::DrawCommand};

    /// Wants a fixed size and remembers what it was granted.
    #[derive(Debug)]
    struct Block {
        want: Size,
        granted: Rc<Cell<Size>>,
    }

    impl Block {
        fn new(width: f32, height: f32) -> (Self, Rc<Cell<Size>>) {
            let granted = Rc::new(Cell::new(Size::zero()));
            let block = Self {
                want: Size::new(width, height),
                granted: Rc::clone(&granted),
            };
            (block, granted)
        }
    }

    impl Element for Block {
        fn measure(&mut self, _proposal: ProposalSize) -> Size {
            self.want
        }

        fn arrange(&mut self, final_size: Size) -> Size {
            self.granted.set(final_size);
            final_size
        }

        fn render(&mut self, ctx: &mut dyn DrawingContext) {
            ctx.draw_rect(
                ResolvedColor::BLACK,
                Rect::from_size(self.granted.get()),
            );
        }
    }

    #[test]
    fn zero_width_child_does_not_widen_the_panel() {
        let (text, _) = Block::new(120.0, 10.0);
        let (rule, rule_granted) = Block::new(0.0, 1.0);
        let mut panel = TooltipPanel::new().padding(4.0).child(text).child(rule);

        let desired = panel.measure(ProposalSize::UNSPECIFIED);
        assert_eq!(desired, Size::new(128.0, 19.0));

        panel.arrange(desired);
        assert_eq!(rule_granted.get(), Size::new(120.0, 1.0));
    }

    #[test]
    fn max_width_caps_every_child() {
        let (text, text_granted) = Block::new(500.0, 10.0);
        let (rule, rule_granted) = Block::new(0.0, 1.0);
        let mut panel = TooltipPanel::new()
            .max_width(200.0)
            .padding(5.0)
            .spacing(2.0)
            .child(text)
            .child(rule);

        let desired = panel.measure(ProposalSize::INFINITY);
        assert_eq!(desired.width, 200.0);
        assert_eq!(desired.height, 23.0);

        let arranged = panel.arrange(Size::new(640.0, desired.height));
        assert_eq!(arranged.width, 200.0);
        assert_eq!(text_granted.get().width, 190.0);
        assert_eq!(rule_granted.get(), Size::new(190.0, 1.0));
        assert_eq!(
            panel.placements()[1],
            Rect::new(Point::new(5.0, 17.0), Size::new(190.0, 1.0))
        );
    }

    #[test]
    fn arrange_without_measure_measures_first() {
        let (rule, rule_granted) = Block::new(0.0, 2.0);
        let mut panel = TooltipPanel::new().child(rule);

        panel.arrange(Size::new(50.0, 2.0));

        assert_eq!(rule_granted.get(), Size::new(50.0, 2.0));
    }

    #[test]
    fn children_paint_at_their_placement() {
        let (first, _) = Block::new(10.0, 3.0);
        let (second, _) = Block::new(10.0, 3.0);
        let mut panel = TooltipPanel::new()
            .background(ResolvedColor::TRANSPARENT)
            .child(first)
            .child(second);
        let size = panel.measure(ProposalSize::UNSPECIFIED);
        panel.arrange(size);

        let mut ctx = RenderCtx::new();
        panel.render(&mut ctx);
        let scene = ctx.finish();

        let transforms: Vec<_> = scene
            .commands()
            .iter()
            .map(|command| match command {
                DrawCommand::SolidRect { transform, .. } | DrawCommand::Line { transform, .. } => {
                    *transform
                }
            })
            .collect();
        assert_eq!(
            transforms,
            vec![
                Transform::IDENTITY,
                Transform::translate(0.0, 0.0),
                Transform::translate(0.0, 3.0),
            ]
        );
        assert_eq!(panel.len(), 2);
        assert!(!panel.is_empty());
    }
}
