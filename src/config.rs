use crate::document::{Language, Theme};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Rectangle in canvas coordinates where freshly added nodes are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for SpawnArea {
    fn default() -> Self {
        Self {
            x: 160.0,
            y: 140.0,
            width: 360.0,
            height: 120.0,
        }
    }
}

/// Constants used by the auto-layout action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSpacing {
    /// Left edge of the first node in horizontal mode.
    pub origin_x: f64,
    /// Shared row in horizontal mode, and top of the first node in vertical mode.
    pub origin_y: f64,
    pub horizontal_step: f64,
    pub vertical_step: f64,
    /// Shared column in vertical mode.
    pub vertical_x: f64,
}

impl Default for LayoutSpacing {
    fn default() -> Self {
        Self {
            origin_x: 20.0,
            origin_y: 40.0,
            horizontal_step: 220.0,
            vertical_step: 120.0,
            vertical_x: 40.0,
        }
    }
}

/// Session-scoped settings for the editor shell.
///
/// Every field has a default, so a config file only needs to name the values it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub step_delay_ms: u64,
    pub preview_ttl_secs: u64,
    pub preview_dir: PathBuf,
    pub spawn_area: SpawnArea,
    pub layout: LayoutSpacing,
    pub theme: Theme,
    pub language: Language,
    pub dark_mode: bool,
    pub seed: Option<u64>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: 700,
            preview_ttl_secs: 10,
            preview_dir: std::env::temp_dir(),
            spawn_area: SpawnArea::default(),
            layout: LayoutSpacing::default(),
            theme: Theme::default(),
            language: Language::default(),
            dark_mode: false,
            seed: None,
        }
    }
}

impl ShellConfig {
    /// Loads a config from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    pub fn preview_ttl(&self) -> Duration {
        Duration::from_secs(self.preview_ttl_secs)
    }
}
