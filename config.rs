//! Application configuration loaded from JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::{EmptyGridError, GridDimensions};
use crate::painter::Palette;

pub const CONFIG_ENV_VAR: &str = "BRESENHAM_GRID_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
    #[error("Invalid config: {0}")]
    EmptyGrid(#[from] EmptyGridError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub columns: u32,
    pub rows: u32,
    /// Offset of the grid inside the window, in pixels.
    pub origin_x: u32,
    pub origin_y: u32,
    pub window_width: u32,
    pub window_height: u32,
    pub colors: Palette,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Bresenham Grid".to_string(),
            columns: 20,
            rows: 20,
            origin_x: 0,
            origin_y: 0,
            window_width: 600,
            window_height: 600,
            colors: Palette::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Uses the first command-line argument, then `BRESENHAM_GRID_CONFIG`,
    /// and falls back to defaults when neither names a file.
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = std::env::args()
            .nth(1)
            .or_else(|| std::env::var(CONFIG_ENV_VAR).ok());

        match path {
            Some(path) => {
                log::info!("Loading config from {}", path);
                Self::load(path)
            }
            None => {
                log::warn!("No config file given; using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.dimensions()?;
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be positive, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        if self.origin_x >= self.window_width || self.origin_y >= self.window_height {
            return Err(ConfigError::Invalid(format!(
                "grid origin ({}, {}) lies outside the {}x{} window",
                self.origin_x, self.origin_y, self.window_width, self.window_height
            )));
        }
        Ok(())
    }

    pub fn dimensions(&self) -> Result<GridDimensions, EmptyGridError> {
        GridDimensions::new(self.columns, self.rows)
    }
}
