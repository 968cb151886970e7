//! Demo configuration
//!
//! Every field defaults to the values the demo ships with, so an absent or
//! partial RON file behaves exactly like the built-in setup. A file is only
//! read when `LOOKAROUND_CONFIG` points at one.

use std::path::{Path, PathBuf};

use macroquad::prelude::*;
use serde::Deserialize;
use thiserror::Error;

use crate::camera::CameraProjection;
use crate::hud::is_valid_pattern;

/// Environment variable naming an optional RON config file
pub const CONFIG_ENV: &str = "LOOKAROUND_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid hud dash pattern: dash {dash_length}, gap {gap_length}")]
    InvalidDashPattern { dash_length: f32, gap_length: f32 },
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub scene: SceneConfig,
    pub hud: HudConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    pub title: String,
    /// 30, 60, or 0 for unlocked
    pub target_fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 450,
            title: "raylib [core] example - 3d camera first person".to_string(),
            target_fps: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub up: [f32; 3],
    /// Vertical field of view in degrees (view height in world units when orthographic)
    pub fovy: f32,
    pub projection: CameraProjection,
    /// Degrees of rotation per pixel of pointer movement
    pub look_sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [1.0, 2.0, 4.0],
            target: [0.0, 2.0, 0.0],
            up: [0.0, 1.0, 0.0],
            fovy: 60.0,
            projection: CameraProjection::Perspective,
            look_sensitivity: 0.05,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub column_count: usize,
    /// Fixed RNG seed; `None` seeds from the clock
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self { column_count: 20, seed: None }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    pub dash_length: f32,
    pub gap_length: f32,
    pub crosshair_size: i32,
}

impl HudConfig {
    /// The dash pattern must be finite, have a positive dash, a non-negative
    /// gap and a period of at least one pixel
    pub fn validate(&self) -> Result<(), ConfigError> {
        if is_valid_pattern(self.dash_length, self.gap_length) {
            Ok(())
        } else {
            Err(ConfigError::InvalidDashPattern {
                dash_length: self.dash_length,
                gap_length: self.gap_length,
            })
        }
    }
}

impl Default for HudConfig {
    fn default() -> Self {
        Self { dash_length: 10.0, gap_length: 8.0, crosshair_size: 10 }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Draw the generated columns in the 3D pass (off: only the wall is drawn)
    pub draw_columns: bool,
}

impl DemoConfig {
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(s)?)
    }

    /// Replace any section that fails validation with its defaults
    pub fn sanitized(mut self) -> Self {
        if let Err(e) = self.hud.validate() {
            log::warn!("{}; using default hud", e);
            self.hud = HudConfig::default();
        }
        self
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&text)
    }

    /// Load from `LOOKAROUND_CONFIG` if set, falling back to defaults on any error
    pub fn load() -> Self {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                let path = PathBuf::from(path);
                match Self::from_path(&path) {
                    Ok(config) => {
                        log::info!("Loaded config from {}", path.display());
                        config.sanitized()
                    }
                    Err(e) => {
                        log::warn!("{}; using defaults", e);
                        Self::default()
                    }
                }
            }
            None => Self::default(),
        }
    }

    pub fn window_conf(&self) -> Conf {
        Conf {
            window_title: self.window.title.clone(),
            window_width: self.window.width,
            window_height: self.window.height,
            window_resizable: false,
            ..Default::default()
        }
    }
}
