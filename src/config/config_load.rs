// src/config/config_load.rs
//
// loading of config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::config_types::*;
use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub style: StyleConfig,
    pub rotation: RotationConfig,
    pub model: ModelConfig,
    pub timing: TimingConfig,
    pub buttons: ButtonConfig,
}

impl Config {
    /// Loads config.toml from the executable's directory, then the working
    /// directory. Falls back to built-in defaults when neither has one.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::locate() {
            Some(path) => {
                tracing::info!("Loading config from {}", path.display());
                Self::load_from_path(&path)
            }
            None => {
                tracing::info!("No {} found, using built-in defaults", CONFIG_FILE);
                Ok(Self::default())
            }
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn locate() -> Option<PathBuf> {
        let exe_config = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|dir| dir.join(CONFIG_FILE)));

        exe_config
            .into_iter()
            .chain(std::iter::once(PathBuf::from(CONFIG_FILE)))
            .find(|path| path.exists())
    }

    /// Rejects values that would make the viewport, the lift, or the frame
    /// pacing meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid {
                field: "window",
                reason: format!(
                    "viewport must be non-empty, got {}x{}",
                    self.window.width, self.window.height
                ),
            });
        }
        if !(self.model.target_size.is_finite() && self.model.target_size > 0.0) {
            return Err(ConfigError::Invalid {
                field: "model.target_size",
                reason: format!("must be positive, got {}", self.model.target_size),
            });
        }
        if !self.rotation.step.is_finite() {
            return Err(ConfigError::Invalid {
                field: "rotation.step",
                reason: format!("must be finite, got {}", self.rotation.step),
            });
        }
        if !(self.timing.frame_rate.is_finite() && self.timing.frame_rate > 0.0) {
            return Err(ConfigError::Invalid {
                field: "timing.frame_rate",
                reason: format!("must be positive, got {}", self.timing.frame_rate),
            });
        }
        if self.buttons.width <= 0 || self.buttons.height <= 0 {
            return Err(ConfigError::Invalid {
                field: "buttons",
                reason: format!(
                    "button size must be positive, got {}x{}",
                    self.buttons.width, self.buttons.height
                ),
            });
        }
        if !(self.style.stroke_weight.is_finite() && self.style.stroke_weight > 0.0) {
            return Err(ConfigError::Invalid {
                field: "style.stroke_weight",
                reason: format!("must be positive, got {}", self.style.stroke_weight),
            });
        }
        Ok(())
    }
}
