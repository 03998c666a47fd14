//! Surfaces that turn a recorded [`Scene`] into pixels.

use std::fmt::Debug;

use crate::scene::Scene;

#[cfg(feature = "cpu")]
pub mod cpu;

#[cfg(feature = "cpu")]
pub use cpu::TinySkiaBackend;

/// Outcome of presenting a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameResult {
    /// The scene was drawn.
    Presented,
    /// The scene was empty; the surface was only cleared.
    Idle,
}

/// Failures a backend can report while presenting.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderError {
    /// The surface could not be allocated with the requested dimensions.
    #[error("cannot allocate a {width}x{height} surface")]
    PixmapAllocation {
        /// Requested width in physical pixels.
        width: u32,
        /// Requested height in physical pixels.
        height: u32,
    },
    /// The rasteriser rejected a pen's dash pattern.
    #[error("dash pattern {dashes:?} is not drawable")]
    InvalidDash {
        /// The offending pattern, in pen-thickness units.
        dashes: Vec<f32>,
    },
}

/// Implemented by every drawing surface.
pub trait RenderBackend: Debug {
    /// Draws `scene` onto the surface.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] when a command cannot be rasterised.
    fn present(&mut self, scene: &Scene) -> Result<FrameResult, RenderError>;
}
