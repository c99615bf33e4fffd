//! Stroke style configuration.
//!
//! Callers may override any of the standard 2d-context stroke
//! properties; everything else keeps the pad defaults
//! (`lineWidth: 6`, `strokeStyle: black`, round caps and joins).
//! Overrides replace defaults key-by-key and are applied exactly once
//! at initialization — the configuration is immutable afterwards.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use serde::Deserialize;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{
    DEFAULT_LINE_SHAPE, DEFAULT_LINE_WIDTH, DEFAULT_STROKE_STYLE, DESKTOP_SHADOW_BLUR,
};
use crate::error::PadError;

/// Optional overrides for the stroke appearance.
///
/// Deserialized from the JSON string the host passes at construction.
/// Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleConfig {
    pub line_width: Option<f64>,
    pub stroke_style: Option<String>,
    pub line_cap: Option<String>,
    pub line_join: Option<String>,
    pub shadow_blur: Option<f64>,
    pub shadow_color: Option<String>,
}

impl StyleConfig {
    /// Parse a configuration from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::Js`] when the string is not valid JSON for
    /// this shape.
    pub fn from_json(json: &str) -> Result<Self, PadError> {
        serde_json::from_str(json).map_err(|e| PadError::Js(format!("invalid style config: {e}")))
    }

    #[must_use]
    pub fn effective_line_width(&self) -> f64 {
        self.line_width.unwrap_or(DEFAULT_LINE_WIDTH)
    }

    #[must_use]
    pub fn effective_stroke_style(&self) -> &str {
        self.stroke_style.as_deref().unwrap_or(DEFAULT_STROKE_STYLE)
    }

    #[must_use]
    pub fn effective_line_cap(&self) -> &str {
        self.line_cap.as_deref().unwrap_or(DEFAULT_LINE_SHAPE)
    }

    #[must_use]
    pub fn effective_line_join(&self) -> &str {
        self.line_join.as_deref().unwrap_or(DEFAULT_LINE_SHAPE)
    }

    #[must_use]
    pub fn effective_shadow_blur(&self) -> f64 {
        self.shadow_blur.unwrap_or(DESKTOP_SHADOW_BLUR)
    }

    #[must_use]
    pub fn effective_shadow_color(&self) -> &str {
        self.shadow_color.as_deref().unwrap_or(DEFAULT_STROKE_STYLE)
    }

    /// Write the effective style onto a 2d context.
    ///
    /// The soft stroke shadow is an aesthetic smoothing enabled only
    /// off mobile, where the renderer can afford it.
    pub fn apply(&self, ctx: &CanvasRenderingContext2d, mobile: bool) {
        ctx.set_line_width(self.effective_line_width());
        ctx.set_stroke_style_str(self.effective_stroke_style());
        ctx.set_line_cap(self.effective_line_cap());
        ctx.set_line_join(self.effective_line_join());
        if !mobile {
            ctx.set_shadow_blur(self.effective_shadow_blur());
            ctx.set_shadow_color(self.effective_shadow_color());
        }
    }
}
