//! Geometry exchanged between parents and children during layout.
//!
//! All values are logical pixels. Backends scale to physical pixels.

/// Axis-aligned rectangle relative to its parent.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    origin: Point,
    size: Size,
}

impl Rect {
    /// Creates a new [`Rect`] with the provided `origin` and `size`.
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Creates a rectangle anchored at (0, 0).
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self::new(Point::zero(), size)
    }

    /// Top-left corner.
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Extent of the rectangle.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Width of the rectangle.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.size.width
    }

    /// Height of the rectangle.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.size.height
    }

    /// Left edge.
    #[must_use]
    pub const fn min_x(&self) -> f32 {
        self.origin.x
    }

    /// Top edge.
    #[must_use]
    pub const fn min_y(&self) -> f32 {
        self.origin.y
    }

    /// Right edge.
    #[must_use]
    pub const fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Bottom edge.
    #[must_use]
    pub const fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Shrinks the rectangle by the given edge amounts, never below zero size.
    #[must_use]
    pub fn inset(&self, top: f32, bottom: f32, leading: f32, trailing: f32) -> Self {
        Self::new(
            Point::new(self.origin.x + leading, self.origin.y + top),
            Size::new(
                (self.size.width - leading - trailing).max(0.0),
                (self.size.height - top - bottom).max(0.0),
            ),
        )
    }
}

/// Two-dimensional size in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Size {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Size {
    /// Constructs a [`Size`].
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The empty size.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// A coordinate relative to the owning element's origin.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Constructs a [`Point`].
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The origin.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Size suggested by a parent while measuring a child.
///
/// `None` asks for the child's ideal extent on that axis,
/// `Some(f32::INFINITY)` means the axis is unbounded and any finite value is a
/// constraint the child may still ignore.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ProposalSize {
    /// Proposed width, if any.
    pub width: Option<f32>,
    /// Proposed height, if any.
    pub height: Option<f32>,
}

impl ProposalSize {
    /// Asks for the ideal size on both axes.
    pub const UNSPECIFIED: Self = Self {
        width: None,
        height: None,
    };

    /// Asks for the minimum size.
    pub const ZERO: Self = Self {
        width: Some(0.0),
        height: Some(0.0),
    };

    /// Leaves both axes unbounded.
    pub const INFINITY: Self = Self {
        width: Some(f32::INFINITY),
        height: Some(f32::INFINITY),
    };

    /// Creates a proposal from optional dimensions.
    #[must_use]
    pub fn new(width: impl Into<Option<f32>>, height: impl Into<Option<f32>>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }
}

impl From<Size> for ProposalSize {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}
