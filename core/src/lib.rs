//! Host contracts for self-sizing, self-drawing tooltip elements.
//!
//! An element participates in three host-driven passes, all on the UI thread:
//!
//! 1. **Measurement**: the parent proposes a [`ProposalSize`] and the element
//!    answers with its desired [`Size`].
//! 2. **Arrangement**: the parent grants a final [`Size`]; the element stores
//!    whatever geometry it derives from it.
//! 3. **Paint**: the element records drawing operations into a
//!    [`DrawingContext`].
//!
//! Style-able attributes of shapes live in [`ShapeProperties`]; writes are
//! reported back to the element through [`Element::property_changed`] when its
//! [`ShapeMetadata`] registers interest in the property.

#![deny(missing_debug_implementations)]

pub mod draw;
pub mod element;
pub mod layout;
pub mod property;

pub use draw::{DashStyle, DrawingContext, Geometry, Pen, PenFrozen, Transform};
pub use element::{Element, Shape};
pub use enhanced_tooltip_color::{ResolvedColor, Srgb};
pub use layout::{Point, ProposalSize, Rect, Size};
pub use property::{
    PropertyChange, PropertyValue, ShapeMetadata, ShapeProperties, ShapeProperty, Stretch,
};
