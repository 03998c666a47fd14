//! Dashed separators for tooltip panels.
//!
//! [`HorizontalDashedLine`] is a self-sizing, self-drawing shape: it asks for
//! no width while measuring, spans exactly the width it is arranged with, and
//! strokes a `{3, 3}` dashed line at half-stroke height with a pen it builds
//! lazily and caches until a stroke attribute changes.
//!
//! The host contracts it is written against live in
//! [`enhanced_tooltip_core`] (re-exported here), and
//! [`render`] provides a self-drawn host to lay out, record and rasterise
//! tooltips:
//!
//! ```
//! use enhanced_tooltip::{
//!     HorizontalDashedLine, Size, Srgb,
//!     render::{Renderer, TinySkiaBackend, TooltipPanel},
//! };
//!
//! let mut panel = TooltipPanel::new()
//!     .max_width(120.0)
//!     .child(HorizontalDashedLine::with_stroke(Srgb::BLACK, 1.0));
//! let mut renderer = Renderer::new(TinySkiaBackend::new(120, 8).unwrap());
//!
//! renderer.render(&mut panel, Size::new(120.0, 8.0)).unwrap();
//! ```

pub mod logging;
pub mod theme;
pub mod widget;

pub use enhanced_tooltip_color as color;
pub use enhanced_tooltip_core::*;
pub use enhanced_tooltip_render as render;
pub use theme::{SeparatorStyle, ThemeError, TooltipTheme};
pub use widget::HorizontalDashedLine;
