//! Drawing resources and the paint-pass surface.

use std::rc::Rc;

use enhanced_tooltip_color::ResolvedColor;

use crate::layout::{Point, Rect, Size};

/// Alternating drawn/gap lengths applied along a stroke.
///
/// Lengths are multiples of the stroking pen's thickness, so a pattern keeps
/// its proportions when the stroke gets thicker.
#[derive(Clone, Debug, PartialEq)]
pub struct DashStyle {
    dashes: Vec<f32>,
    offset: f32,
}

impl DashStyle {
    /// Creates a pattern starting `offset` units into the first dash.
    #[must_use]
    pub fn new(dashes: impl Into<Vec<f32>>, offset: f32) -> Self {
        Self {
            dashes: dashes.into(),
            offset,
        }
    }

    /// Drawn/gap lengths, starting with a drawn segment.
    #[must_use]
    pub fn dashes(&self) -> &[f32] {
        &self.dashes
    }

    /// Distance into the pattern at which stroking starts.
    #[must_use]
    pub const fn offset(&self) -> f32 {
        self.offset
    }
}

/// Returned when mutating a [`Pen`] after [`Pen::freeze`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("pen is frozen and can no longer be modified")]
pub struct PenFrozen;

/// A stroking tool: brush, thickness and optional dash pattern.
///
/// Once frozen, a pen is immutable and may be shared across draw calls and
/// cached by backends.
#[derive(Clone, Debug, PartialEq)]
pub struct Pen {
    brush: Option<ResolvedColor>,
    thickness: f32,
    dash_style: Option<DashStyle>,
    frozen: bool,
}

impl Pen {
    /// Creates a solid, unfrozen pen. A `None` brush strokes nothing.
    #[must_use]
    pub const fn new(brush: Option<ResolvedColor>, thickness: f32) -> Self {
        Self {
            brush,
            thickness,
            dash_style: None,
            frozen: false,
        }
    }

    /// Creates a dashed, unfrozen pen.
    #[must_use]
    pub const fn dashed(
        brush: Option<ResolvedColor>,
        thickness: f32,
        dash_style: DashStyle,
    ) -> Self {
        Self {
            brush,
            thickness,
            dash_style: Some(dash_style),
            frozen: false,
        }
    }

    /// Colour applied along the stroke.
    #[must_use]
    pub const fn brush(&self) -> Option<ResolvedColor> {
        self.brush
    }

    /// Width of the stroke.
    #[must_use]
    pub const fn thickness(&self) -> f32 {
        self.thickness
    }

    /// Dash pattern, or `None` for a solid stroke.
    #[must_use]
    pub const fn dash_style(&self) -> Option<&DashStyle> {
        self.dash_style.as_ref()
    }

    /// Replaces the dash pattern.
    ///
    /// # Errors
    ///
    /// Returns [`PenFrozen`] if the pen has been frozen.
    pub fn set_dash_style(&mut self, dash_style: DashStyle) -> Result<(), PenFrozen> {
        if self.frozen {
            return Err(PenFrozen);
        }
        self.dash_style = Some(dash_style);
        Ok(())
    }

    /// Replaces the thickness.
    ///
    /// # Errors
    ///
    /// Returns [`PenFrozen`] if the pen has been frozen.
    pub const fn set_thickness(&mut self, thickness: f32) -> Result<(), PenFrozen> {
        if self.frozen {
            return Err(PenFrozen);
        }
        self.thickness = thickness;
        Ok(())
    }

    /// Marks the pen immutable. Idempotent.
    pub const fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Whether [`freeze`](Self::freeze) has been called.
    #[must_use]
    pub const fn is_frozen(&self) -> bool {
        self.frozen
    }
}

/// 2D affine transform, laid out as
/// `x' = sx * x + kx * y + tx`, `y' = ky * x + sy * y + ty`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Horizontal scale.
    pub sx: f32,
    /// Vertical shear.
    pub ky: f32,
    /// Horizontal shear.
    pub kx: f32,
    /// Vertical scale.
    pub sy: f32,
    /// Horizontal translation.
    pub tx: f32,
    /// Vertical translation.
    pub ty: f32,
}

impl Transform {
    /// The transform that leaves every point in place.
    pub const IDENTITY: Self = Self {
        sx: 1.0,
        ky: 0.0,
        kx: 0.0,
        sy: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    /// A pure translation.
    #[must_use]
    pub const fn translate(tx: f32, ty: f32) -> Self {
        Self {
            tx,
            ty,
            ..Self::IDENTITY
        }
    }

    /// A pure scale.
    #[must_use]
    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self {
            sx,
            sy,
            ..Self::IDENTITY
        }
    }

    /// Composes `self` followed by `next`.
    #[must_use]
    pub fn then(self, next: Self) -> Self {
        Self {
            sx: next.sx.mul_add(self.sx, next.kx * self.ky),
            ky: next.ky.mul_add(self.sx, next.sy * self.ky),
            kx: next.sx.mul_add(self.kx, next.kx * self.sy),
            sy: next.ky.mul_add(self.kx, next.sy * self.sy),
            tx: next.sx.mul_add(self.tx, next.kx.mul_add(self.ty, next.tx)),
            ty: next.ky.mul_add(self.tx, next.sy.mul_add(self.ty, next.ty)),
        }
    }

    /// Maps `point` through the transform.
    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        Point::new(
            self.sx.mul_add(point.x, self.kx.mul_add(point.y, self.tx)),
            self.ky.mul_add(point.x, self.sy.mul_add(point.y, self.ty)),
        )
    }

    /// Whether this is [`Transform::IDENTITY`].
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Outline reported to the host's hit-testing, bounds and clipping subsystems.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Geometry {
    /// Nothing to report yet.
    #[default]
    Empty,
    /// A straight segment.
    Line {
        /// First endpoint.
        start: Point,
        /// Second endpoint.
        end: Point,
    },
}

impl Geometry {
    /// Axis-aligned bounds of the outline, ignoring stroke width.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        match *self {
            Self::Empty => None,
            Self::Line { start, end } => {
                let origin = Point::new(start.x.min(end.x), start.y.min(end.y));
                let size = Size::new((end.x - start.x).abs(), (end.y - start.y).abs());
                Some(Rect::new(origin, size))
            }
        }
    }

    /// Whether `point` lies within `tolerance` of the outline.
    #[must_use]
    pub fn hit_test(&self, point: Point, tolerance: f32) -> bool {
        match *self {
            Self::Empty => false,
            Self::Line { start, end } => {
                let (dx, dy) = (end.x - start.x, end.y - start.y);
                let length_sq = dx.mul_add(dx, dy * dy);
                let t = if length_sq == 0.0 {
                    0.0
                } else {
                    ((point.x - start.x).mul_add(dx, (point.y - start.y) * dy) / length_sq)
                        .clamp(0.0, 1.0)
                };
                let nearest = Point::new(t.mul_add(dx, start.x), t.mul_add(dy, start.y));
                let (ex, ey) = (point.x - nearest.x, point.y - nearest.y);
                ex.mul_add(ex, ey * ey) <= tolerance * tolerance
            }
        }
    }
}

/// Surface an element paints into during the paint pass.
///
/// Coordinates are in the element's local space; the host positions elements
/// by pushing transforms around their `render` call.
pub trait DrawingContext {
    /// Strokes the segment from `start` to `end` with `pen`.
    fn draw_line(&mut self, pen: &Rc<Pen>, start: Point, end: Point);

    /// Fills `rect` with a solid colour.
    fn draw_rect(&mut self, color: ResolvedColor, rect: Rect);

    /// Applies `transform` to subsequent operations until the matching [`pop`](Self::pop).
    fn push_transform(&mut self, transform: Transform);

    /// Undoes the most recent [`push_transform`](Self::push_transform).
    fn pop(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frozen_pen_rejects_mutation() {
        let mut pen = Pen::new(Some(ResolvedColor::BLACK), 1.0);
        pen.set_dash_style(DashStyle::new([1.0, 2.0], 0.0)).unwrap();
        pen.freeze();

        assert!(pen.is_frozen());
        assert_eq!(pen.set_thickness(4.0), Err(PenFrozen));
        assert_eq!(
            pen.set_dash_style(DashStyle::new([5.0, 5.0], 0.0)),
            Err(PenFrozen)
        );
        assert_eq!(pen.thickness(), 1.0);
        assert_eq!(pen.dash_style().unwrap().dashes(), &[1.0, 2.0]);
    }

    #[test]
    fn translation_composes() {
        let t = Transform::translate(3.0, 4.0).then(Transform::translate(1.0, -1.0));

        assert_eq!(t, Transform::translate(4.0, 3.0));
        assert_eq!(t.apply(Point::new(1.0, 1.0)), Point::new(5.0, 4.0));
        assert!(Transform::default().is_identity());
        assert!(!t.is_identity());
    }

    #[test]
    fn scale_then_translate_orders_operations() {
        let t = Transform::scale(2.0, 2.0).then(Transform::translate(10.0, 0.0));

        assert_eq!(t.apply(Point::new(1.0, 1.0)), Point::new(12.0, 2.0));
    }

    #[test]
    fn line_bounds_and_hit_testing() {
        let line = Geometry::Line {
            start: Point::new(0.0, 0.5),
            end: Point::new(200.0, 0.5),
        };

        assert_eq!(
            line.bounds(),
            Some(Rect::new(Point::new(0.0, 0.5), Size::new(200.0, 0.0)))
        );
        assert!(line.hit_test(Point::new(100.0, 0.9), 0.5));
        assert!(!line.hit_test(Point::new(100.0, 2.0), 0.5));
        assert!(!line.hit_test(Point::new(201.0, 0.5), 0.5));
        assert!(Geometry::Empty.bounds().is_none());
        assert!(!Geometry::Empty.hit_test(Point::zero(), 10.0));
    }

    #[test]
    fn degenerate_line_hit_tests_as_a_point() {
        let dot = Geometry::Line {
            start: Point::new(0.0, 1.0),
            end: Point::new(0.0, 1.0),
        };

        assert!(dot.hit_test(Point::new(0.0, 1.5), 0.5));
        assert!(!dot.hit_test(Point::new(2.0, 1.0), 0.5));
    }
}
