//! Self-drawn host for tooltip elements.
//!
//! The crate plays the part of the UI toolkit around an [`Element`]: a
//! [`TooltipPanel`] runs the measure and arrange passes for its children, a
//! [`RenderCtx`] records the paint pass into a [`Scene`], and a
//! [`RenderBackend`] (tiny-skia on the CPU by default) turns the scene into
//! pixels.
//!
//! [`Element`]: enhanced_tooltip_core::Element

#![deny(missing_debug_implementations)]

pub mod backend;
pub mod context;
pub mod panel;
pub mod renderer;
pub mod scene;

pub use backend::{FrameResult, RenderBackend, RenderError};
pub use context::RenderCtx;
pub use panel::TooltipPanel;
pub use renderer::Renderer;
pub use scene::{DrawCommand, Scene};

#[cfg(feature = "cpu")]
pub use backend::TinySkiaBackend;
