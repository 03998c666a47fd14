//! A dashed rule that spans whatever width its parent grants.
//!
//! Generic line primitives either want absolute coordinates, which forces a
//! re-measure whenever the parent resizes, or stretch their geometry when the
//! parent has a maximum width, which scales the dashes instead of clipping the
//! line. [`HorizontalDashedLine`] sidesteps both: it claims no width while
//! measuring and takes its length straight from the arrangement pass.

use std::rc::Rc;

use enhanced_tooltip_core::{
    DashStyle, DrawingContext, Element, Geometry, Pen, Point, PropertyChange, PropertyValue,
    ProposalSize, ResolvedColor, Shape, ShapeMetadata, ShapeProperties, ShapeProperty, Size, Stretch,
    Transform,
};

/// A horizontal dashed separator for tooltip panels.
///
/// The line is drawn at half the stroke thickness from the top, from `x = 0`
/// to the arranged width, with a `{3, 3}` dash pattern. The pen is built on the
/// first draw after construction or after a stroke attribute changed, then
/// reused.
///
/// Geometry and pen are invalidated independently: changing the thickness
/// rebuilds the pen on the next draw, but the segment keeps its previous
/// height until the next arrangement.
///
/// # Examples
///
/// ```
/// use enhanced_tooltip::{Element, HorizontalDashedLine, Size, Srgb};
///
/// let mut line = HorizontalDashedLine::with_stroke(Srgb::GREY, 1.0);
/// line.arrange(Size::new(200.0, 1.0));
///
/// let (start, end) = line.segment().unwrap();
/// assert_eq!((start.x, start.y, end.x, end.y), (0.0, 0.5, 200.0, 0.5));
/// ```
#[derive(Debug)]
pub struct HorizontalDashedLine {
    properties: ShapeProperties,
    measured_width: f32,
    segment: Option<(Point, Point)>,
    pen: Option<Rc<Pen>>,
}

impl HorizontalDashedLine {
    /// Drawn/gap lengths, in multiples of the stroke thickness.
    pub const DASHES: [f32; 2] = [3.0, 3.0];

    /// Where the dash pattern starts.
    pub const DASH_OFFSET: f32 = 0.0;

    /// Attribute registration of every instance: fill stretch, and change
    /// callbacks for the two attributes the pen is built from.
    pub fn metadata() -> ShapeMetadata {
        ShapeMetadata::new()
            .stretch(Stretch::Fill)
            .notify(ShapeProperty::Stroke)
            .notify(ShapeProperty::StrokeThickness)
    }

    /// Creates an unarranged separator with host defaults (no stroke colour,
    /// thickness `1.0`).
    #[must_use]
    pub fn new() -> Self {
        Self {
            properties: ShapeProperties::new(Self::metadata()),
            measured_width: 0.0,
            segment: None,
            pen: None,
        }
    }

    /// Creates a separator with the given stroke attributes.
    #[must_use]
    pub fn with_stroke(stroke: impl Into<ResolvedColor>, thickness: f32) -> Self {
        let mut line = Self::new();
        line.set_stroke(Some(stroke.into()));
        line.set_stroke_thickness(thickness);
        line
    }

    /// Width resolved by the last arrangement, never negative.
    #[must_use]
    pub const fn measured_width(&self) -> f32 {
        self.measured_width
    }

    /// Segment stored by the last arrangement, or `None` before the first one.
    #[must_use]
    pub const fn segment(&self) -> Option<(Point, Point)> {
        self.segment
    }

    /// The pen the next draw will reuse, if one is cached.
    #[must_use]
    pub const fn cached_pen(&self) -> Option<&Rc<Pen>> {
        self.pen.as_ref()
    }

    /// Current stretch mode.
    #[must_use]
    pub const fn stretch(&self) -> Stretch {
        self.properties.stretch()
    }

    fn pen(&mut self) -> Rc<Pen> {
        let properties = &self.properties;
        Rc::clone(self.pen.get_or_insert_with(|| Rc::new(create_pen(properties))))
    }
}

impl Default for HorizontalDashedLine {
    fn default() -> Self {
        Self::new()
    }
}

fn create_pen(properties: &ShapeProperties) -> Pen {
    let mut pen = Pen::dashed(
        properties.stroke(),
        properties.stroke_thickness(),
        DashStyle::new(
            HorizontalDashedLine::DASHES,
            HorizontalDashedLine::DASH_OFFSET,
        ),
    );
    pen.freeze();
    tracing::debug!(
        thickness = pen.thickness(),
        has_brush = pen.brush().is_some(),
        "built separator pen"
    );
    pen
}

impl Element for HorizontalDashedLine {
    fn measure(&mut self, _proposal: ProposalSize) -> Size {
        Size::new(0.0, self.properties.stroke_thickness())
    }

    fn arrange(&mut self, final_size: Size) -> Size {
        self.measured_width = final_size.width.max(0.0);

        let half_thickness = self.properties.stroke_thickness() / 2.0;
        self.segment = Some((
            Point::new(0.0, half_thickness),
            Point::new(self.measured_width, half_thickness),
        ));
        tracing::trace!(width = self.measured_width, y = half_thickness, "separator arranged");

        final_size
    }

    fn render(&mut self, ctx: &mut dyn DrawingContext) {
        let Some((start, end)) = self.segment else {
            tracing::trace!("separator drawn before arrangement; skipping");
            return;
        };
        let pen = self.pen();
        ctx.draw_line(&pen, start, end);
    }

    fn property_changed(&mut self, change: &PropertyChange) {
        if matches!(
            change.property,
            ShapeProperty::Stroke | ShapeProperty::StrokeThickness
        ) && self.pen.take().is_some()
        {
            tracing::debug!(property = ?change.property, "separator pen invalidated");
        }
    }
}

impl Shape for HorizontalDashedLine {
    fn properties(&self) -> &ShapeProperties {
        &self.properties
    }

    fn set_property(&mut self, value: PropertyValue) {
        let Some(change) = self.properties.set(value) else {
            return;
        };
        if self.properties.metadata().notifies(change.property) {
            self.property_changed(&change);
        }
    }

    fn rendered_geometry(&self) -> Geometry {
        self.segment
            .map_or(Geometry::Empty, |(start, end)| Geometry::Line { start, end })
    }

    fn geometry_transform(&self) -> Transform {
        Transform::IDENTITY
    }
}
