//! The attribute system backing style-able shape properties.
//!
//! Shapes keep their host-owned attributes in [`ShapeProperties`]. Writes go
//! through [`ShapeProperties::set`], which reports a [`PropertyChange`] only
//! when the stored value actually differs. Which changes are forwarded to the
//! owning element is decided per instance by its [`ShapeMetadata`].

use enhanced_tooltip_color::ResolvedColor;

/// How a shape's geometry is scaled into the space granted by its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Stretch {
    /// Geometry keeps its natural size.
    #[default]
    None,
    /// Geometry fills the granted space on both axes.
    Fill,
    /// Geometry is scaled uniformly to fit.
    Uniform,
    /// Geometry is scaled uniformly to cover, clipping the overflow.
    UniformToFill,
}

/// Style-able attributes of the shape base capability set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeProperty {
    /// Colour used to stroke the outline.
    Stroke,
    /// Width of the stroke.
    StrokeThickness,
    /// Scaling behaviour.
    Stretch,
}

/// A typed attribute value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PropertyValue {
    /// Value of [`ShapeProperty::Stroke`]; `None` paints nothing.
    Stroke(Option<ResolvedColor>),
    /// Value of [`ShapeProperty::StrokeThickness`].
    StrokeThickness(f32),
    /// Value of [`ShapeProperty::Stretch`].
    Stretch(Stretch),
}

impl PropertyValue {
    /// The attribute this value belongs to.
    #[must_use]
    pub const fn property(&self) -> ShapeProperty {
        match self {
            Self::Stroke(_) => ShapeProperty::Stroke,
            Self::StrokeThickness(_) => ShapeProperty::StrokeThickness,
            Self::Stretch(_) => ShapeProperty::Stretch,
        }
    }
}

/// Argument of the change callback: which attribute moved, and from what to what.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropertyChange {
    /// The attribute that was written.
    pub property: ShapeProperty,
    /// Value before the write.
    pub old: PropertyValue,
    /// Value after the write.
    pub new: PropertyValue,
}

/// Per-instance registration of attribute defaults and change callbacks.
///
/// ```
/// use enhanced_tooltip_core::{ShapeMetadata, ShapeProperty, Stretch};
///
/// let metadata = ShapeMetadata::new()
///     .stretch(Stretch::Fill)
///     .notify(ShapeProperty::Stroke);
///
/// assert!(metadata.notifies(ShapeProperty::Stroke));
/// assert!(!metadata.notifies(ShapeProperty::StrokeThickness));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct ShapeMetadata {
    stretch: Stretch,
    notify: Vec<ShapeProperty>,
}

impl ShapeMetadata {
    /// Metadata of the shape base: no stretch, no callbacks.
    pub const fn new() -> Self {
        Self {
            stretch: Stretch::None,
            notify: Vec::new(),
        }
    }

    /// Overrides the default [`Stretch`].
    pub const fn stretch(mut self, stretch: Stretch) -> Self {
        self.stretch = stretch;
        self
    }

    /// Registers interest in writes to `property`.
    pub fn notify(mut self, property: ShapeProperty) -> Self {
        if !self.notify.contains(&property) {
            self.notify.push(property);
        }
        self
    }

    /// Default stretch applied at construction.
    #[must_use]
    pub const fn default_stretch(&self) -> Stretch {
        self.stretch
    }

    /// Whether writes to `property` reach the element's change callback.
    #[must_use]
    pub fn notifies(&self, property: ShapeProperty) -> bool {
        self.notify.contains(&property)
    }
}

/// Attribute store of a shape instance.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeProperties {
    stroke: Option<ResolvedColor>,
    stroke_thickness: f32,
    stretch: Stretch,
    metadata: ShapeMetadata,
}

impl ShapeProperties {
    /// Stroke thickness a shape starts with when no style supplies one.
    pub const DEFAULT_STROKE_THICKNESS: f32 = 1.0;

    /// Creates the store with host defaults, applying `metadata`'s overrides.
    #[must_use]
    pub const fn new(metadata: ShapeMetadata) -> Self {
        Self {
            stroke: None,
            stroke_thickness: Self::DEFAULT_STROKE_THICKNESS,
            stretch: metadata.default_stretch(),
            metadata,
        }
    }

    /// Current stroke colour.
    #[must_use]
    pub const fn stroke(&self) -> Option<ResolvedColor> {
        self.stroke
    }

    /// Current stroke thickness. Not range-checked.
    #[must_use]
    pub const fn stroke_thickness(&self) -> f32 {
        self.stroke_thickness
    }

    /// Current stretch mode.
    #[must_use]
    pub const fn stretch(&self) -> Stretch {
        self.stretch
    }

    /// Registration this store was created with.
    #[must_use]
    pub const fn metadata(&self) -> &ShapeMetadata {
        &self.metadata
    }

    /// Reads an attribute as a [`PropertyValue`].
    #[must_use]
    pub const fn get(&self, property: ShapeProperty) -> PropertyValue {
        match property {
            ShapeProperty::Stroke => PropertyValue::Stroke(self.stroke),
            ShapeProperty::StrokeThickness => PropertyValue::StrokeThickness(self.stroke_thickness),
            ShapeProperty::Stretch => PropertyValue::Stretch(self.stretch),
        }
    }

    /// Writes an attribute, returning the change if the value differs.
    #[must_use = "a dropped change never reaches the element's callback"]
    pub fn set(&mut self, value: PropertyValue) -> Option<PropertyChange> {
        let property = value.property();
        let old = self.get(property);
        if old == value {
            return None;
        }

        match value {
            PropertyValue::Stroke(stroke) => self.stroke = stroke,
            PropertyValue::StrokeThickness(thickness) => self.stroke_thickness = thickness,
            PropertyValue::Stretch(stretch) => self.stretch = stretch,
        }

        Some(PropertyChange {
            property,
            old,
            new: value,
        })
    }
}

impl Default for ShapeProperties {
    fn default() -> Self {
        Self::new(ShapeMetadata::new())
    }
}
