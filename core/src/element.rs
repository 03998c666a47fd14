//! The callback contracts every hosted element implements.

use core::fmt::Debug;

use enhanced_tooltip_color::ResolvedColor;

use crate::{
    draw::{DrawingContext, Geometry, Transform},
    layout::{ProposalSize, Size},
    property::{PropertyChange, PropertyValue, ShapeProperties, Stretch},
};

/// A node taking part in the host's measure, arrange and paint passes.
///
/// All callbacks run synchronously on the UI thread and never re-enter each
/// other for the same instance.
pub trait Element: Debug {
    /// Reports the size this element would like given `proposal`.
    fn measure(&mut self, proposal: ProposalSize) -> Size;

    /// Accepts the final size granted by the parent and returns the size the
    /// element actually occupies.
    fn arrange(&mut self, final_size: Size) -> Size;

    /// Records drawing operations in local coordinates.
    fn render(&mut self, ctx: &mut dyn DrawingContext);

    /// Invoked after a registered attribute was written with a new value.
    fn property_changed(&mut self, change: &PropertyChange) {
        let _ = change;
    }
}

/// An element whose appearance is an outline stroked with host-owned
/// attributes.
///
/// [`set_property`](Self::set_property) is the only write path: the value is
/// stored first, then, if it differs and the instance's metadata registers
/// the property, [`Element::property_changed`] runs before the setter returns.
pub trait Shape: Element {
    /// Attribute store of this instance.
    fn properties(&self) -> &ShapeProperties;

    /// Outline used for hit-testing and bounds.
    fn rendered_geometry(&self) -> Geometry;

    /// Transform applied to [`rendered_geometry`](Self::rendered_geometry).
    fn geometry_transform(&self) -> Transform {
        Transform::IDENTITY
    }

    /// Writes any attribute through the attribute system.
    ///
    /// Implementations store the value with [`ShapeProperties::set`] and
    /// forward the resulting change to [`Element::property_changed`] when
    /// [`ShapeMetadata::notifies`](crate::property::ShapeMetadata::notifies)
    /// holds for it.
    fn set_property(&mut self, value: PropertyValue);

    /// Sets the stroke colour.
    fn set_stroke(&mut self, stroke: Option<ResolvedColor>) {
        self.set_property(PropertyValue::Stroke(stroke));
    }

    /// Sets the stroke thickness.
    fn set_stroke_thickness(&mut self, thickness: f32) {
        self.set_property(PropertyValue::StrokeThickness(thickness));
    }

    /// Sets the stretch mode.
    fn set_stretch(&mut self, stretch: Stretch) {
        self.set_property(PropertyValue::Stretch(stretch));
    }
}
