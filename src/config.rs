//! Palette configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::SolidColor;
use crate::constants;
use crate::layout::PaletteMetrics;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Malformed palette config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Host display width; alpha and width rows are right-aligned to it.
    pub screen_width: f64,
    pub screen_height: f64,
    pub diameter_divisor: f64,
    pub padding_divisor: f64,
    pub background: SolidColor,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            screen_width: constants::SCREEN_WIDTH,
            screen_height: constants::SCREEN_HEIGHT,
            diameter_divisor: constants::DIAMETER_DIVISOR,
            padding_divisor: constants::PADDING_DIVISOR,
            background: SolidColor::from_rgba(0.22, 0.22, 0.21, 1.0),
        }
    }
}

impl PaletteConfig {
    /// Config for a display of the given size, other fields defaulted.
    pub fn for_screen(width: f64, height: f64) -> Self {
        Self {
            screen_width: width,
            screen_height: height,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("diameter_divisor", self.diameter_divisor),
            ("padding_divisor", self.padding_divisor),
        ];
        for (field, value) in fields {
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        Ok(())
    }

    /// Shorter side of the display.
    pub fn short_side(&self) -> f64 {
        self.screen_width.min(self.screen_height)
    }

    pub fn metrics(&self) -> PaletteMetrics {
        let side = self.short_side();
        PaletteMetrics {
            diameter: side / self.diameter_divisor,
            padding: side / self.padding_divisor,
            screen_width: self.screen_width,
        }
    }
}
