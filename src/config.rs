//! Renderer configuration

use serde::{Deserialize, Serialize};

use crate::style::Rgb;

/// Renderer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Cursor blink half-period in milliseconds
    pub blink_interval_ms: u64,
    /// Fixed render buffer depth: scrollback plus visible rows
    pub buffer_rows: usize,
    /// Default background color (also the erase color)
    pub background: Rgb,
    /// Default foreground color
    pub foreground: Rgb,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            blink_interval_ms: 1000,
            buffer_rows: 100,
            background: Rgb::BLACK,
            foreground: Rgb::WHITE,
        }
    }
}

impl Config {
    /// Parse a configuration from its JSON form.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a configuration file, falling back to defaults if it does not
    /// exist.
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
