//! Backend-agnostic drawing commands recorded during the paint pass.

use std::rc::Rc;

use enhanced_tooltip_core::{Pen, Point, Rect, ResolvedColor, Transform};

/// A recorded frame.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    /// Recorded commands in paint order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Returns `true` if nothing was painted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterates over the stroked lines only.
    pub fn lines(&self) -> impl Iterator<Item = (&Rc<Pen>, Point, Point, Transform)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line {
                pen,
                start,
                end,
                transform,
            } => Some((pen, *start, *end, *transform)),
            DrawCommand::SolidRect { .. } => None,
        })
    }
}

/// Accumulates commands for a [`Scene`].
#[derive(Debug, Default)]
pub struct SceneBuilder {
    commands: Vec<DrawCommand>,
}

impl SceneBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Appends a command.
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Seals the builder into an immutable scene.
    #[must_use]
    pub fn finish(self) -> Scene {
        Scene {
            commands: self.commands,
        }
    }
}

/// Primitive drawing operations understood by backends.
///
/// Geometry is stored in the issuing element's local space together with the
/// transform that was current when it was recorded.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    /// Stroke a straight segment.
    Line {
        /// Pen shared with the element that issued the command.
        pen: Rc<Pen>,
        /// First endpoint.
        start: Point,
        /// Second endpoint.
        end: Point,
        /// Local-to-surface transform.
        transform: Transform,
    },
    /// Fill a solid rectangle.
    SolidRect {
        /// Rectangle to fill.
        rect: Rect,
        /// Fill colour.
        color: ResolvedColor,
        /// Local-to-surface transform.
        transform: Transform,
    },
}
