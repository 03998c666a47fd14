//! Styling loaded from theme files.
//!
//! Themes are JSON documents; every key is optional:
//!
//! ```json
//! {
//!   "max_width": 480.0,
//!   "padding": 6.0,
//!   "spacing": 4.0,
//!   "separator": { "stroke": "#9E9E9E", "stroke_thickness": 1.0 }
//! }
//! ```

use enhanced_tooltip_core::{ResolvedColor, Shape, ShapeProperties, Srgb};
use enhanced_tooltip_render::TooltipPanel;
use serde::Deserialize;

/// Errors produced while loading a theme.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The document is not valid JSON or does not match the schema.
    #[error("malformed theme: {0}")]
    Parse(#[from] serde_json::Error),
    /// A stroke thickness was negative or not finite.
    #[error("stroke thickness must be a finite, non-negative number (got {0})")]
    InvalidThickness(f32),
    /// A length was negative or not finite.
    #[error("`{field}` must be a finite, non-negative number (got {value})")]
    InvalidLength {
        /// Offending key.
        field: &'static str,
        /// Offending value.
        value: f32,
    },
}

/// Stroke attributes of tooltip separators.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SeparatorStyle {
    /// Stroke colour; `null` hides the separator.
    pub stroke: Option<Srgb>,
    /// Stroke thickness in logical pixels.
    pub stroke_thickness: f32,
}

impl Default for SeparatorStyle {
    fn default() -> Self {
        Self {
            stroke: Some(Srgb::GREY),
            stroke_thickness: ShapeProperties::DEFAULT_STROKE_THICKNESS,
        }
    }
}

impl SeparatorStyle {
    /// Writes the style into `shape` through its attribute system.
    pub fn apply(&self, shape: &mut dyn Shape) {
        shape.set_stroke(self.stroke.map(ResolvedColor::from));
        shape.set_stroke_thickness(self.stroke_thickness);
    }
}

/// Layout and stroke configuration of a tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct TooltipTheme {
    /// Maximum tooltip width; unbounded when absent.
    pub max_width: Option<f32>,
    /// Inset on every edge of the panel.
    pub padding: f32,
    /// Vertical gap between sections.
    pub spacing: f32,
    /// Panel background.
    pub background: Option<Srgb>,
    /// Separator stroke.
    pub separator: SeparatorStyle,
}

impl TooltipTheme {
    /// Parses and validates a JSON theme document.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError`] if the document is malformed or a length is
    /// negative or not finite.
    pub fn from_json(source: &str) -> Result<Self, ThemeError> {
        let theme: Self = serde_json::from_str(source)?;
        theme.validate()?;
        tracing::debug!(?theme, "theme loaded");
        Ok(theme)
    }

    fn validate(&self) -> Result<(), ThemeError> {
        let thickness = self.separator.stroke_thickness;
        if !is_length(thickness) {
            return Err(ThemeError::InvalidThickness(thickness));
        }
        for (field, value) in [
            ("padding", Some(self.padding)),
            ("spacing", Some(self.spacing)),
            ("max_width", self.max_width),
        ] {
            if let Some(value) = value.filter(|value| !is_length(*value)) {
                return Err(ThemeError::InvalidLength { field, value });
            }
        }
        Ok(())
    }

    /// An empty panel configured from this theme.
    #[must_use]
    pub fn panel(&self) -> TooltipPanel {
        let mut panel = TooltipPanel::new()
            .padding(self.padding)
            .spacing(self.spacing);
        if let Some(max_width) = self.max_width {
            panel = panel.max_width(max_width);
        }
        if let Some(background) = self.background {
            panel = panel.background(background.into());
        }
        panel
    }
}

fn is_length(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}
