//! Tunable constants of the interaction engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest zoom factor the canvas allows.
pub const MIN_SCALE: f32 = 0.2;
/// Largest zoom factor the canvas allows.
pub const MAX_SCALE: f32 = 3.0;

/// Configuration for the canvas editor.
///
/// Every field has a default; a JSON document may override any subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Screen-space distance (px) a pointer must travel before a press
    /// becomes a drag. Default: **5**.
    pub drag_threshold: f32,

    pub min_scale: f32,
    pub max_scale: f32,

    /// Relative zoom per wheel notch. Default: **0.1** (10%).
    pub wheel_zoom_intensity: f32,

    /// Additive step of the zoom-in / zoom-out buttons. Default: **0.1**.
    pub zoom_step: f32,

    /// Screen pixels scrolled per arrow key press. Default: **50**.
    pub keyboard_scroll_step: f32,

    /// Maximum undo depth. Default: **50**.
    pub history_depth: usize,

    /// Width of nodes created through "add node". Default: **260**.
    pub default_node_width: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            drag_threshold: 5.0,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            wheel_zoom_intensity: 0.1,
            zoom_step: 0.1,
            keyboard_scroll_step: 50.0,
            history_depth: 50,
            default_node_width: 260.0,
        }
    }
}

/// Errors from loading an [`EditorConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config value for `{field}`: {value}")]
    Invalid { field: &'static str, value: f32 },

    #[error("min_scale {min} is larger than max_scale {max}")]
    ScaleRange { min: f32, max: f32 },
}

impl EditorConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the interaction engine cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
            ("default_node_width", self.default_node_width),
        ];
        let non_negative = [
            ("drag_threshold", self.drag_threshold),
            ("wheel_zoom_intensity", self.wheel_zoom_intensity),
            ("zoom_step", self.zoom_step),
            ("keyboard_scroll_step", self.keyboard_scroll_step),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid { field, value });
            }
        }
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid { field, value });
            }
        }
        if self.min_scale > self.max_scale {
            return Err(ConfigError::ScaleRange {
                min: self.min_scale,
                max: self.max_scale,
            });
        }
        Ok(())
    }

    /// Clamp a scale factor into `[min_scale, max_scale]`.
    ///
    /// Never panics, even on a config that fails [`validate`](Self::validate);
    /// `max_scale` wins when the range is inverted.
    pub fn clamp_scale(&self, scale: f32) -> f32 {
        if scale.is_nan() {
            return self.min_scale;
        }
        scale.max(self.min_scale).min(self.max_scale)
    }
}
