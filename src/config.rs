//! Scrub configuration persistence
//!
//! Stores user preferences in `~/.config/scrubber/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::keymap::{parse_modifiers, Modifiers};
use crate::scrub::DEFAULT_PIXELS_PER_STEP;

/// User-tunable scrub settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrubConfig {
    /// Horizontal pointer travel, in pixels, per scrub step
    #[serde(default = "default_pixels_per_step")]
    pub pixels_per_step: f64,

    /// Modifier chord that turns a pointer-down into a scrub drag (e.g. "ctrl+alt")
    #[serde(default = "default_drag_modifiers")]
    pub drag_modifiers: String,
}

fn default_pixels_per_step() -> f64 {
    DEFAULT_PIXELS_PER_STEP
}

fn default_drag_modifiers() -> String {
    if cfg!(target_os = "macos") {
        "cmd+alt".to_string()
    } else {
        "ctrl+alt".to_string()
    }
}

impl Default for ScrubConfig {
    fn default() -> Self {
        Self {
            pixels_per_step: default_pixels_per_step(),
            drag_modifiers: default_drag_modifiers(),
        }
    }
}

impl ScrubConfig {
    /// Load config from the user config dir, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<ScrubConfig>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config.sanitized()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the user config dir
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// The parsed drag modifier chord; falls back to the platform default when invalid
    pub fn drag_modifiers(&self) -> Modifiers {
        parse_modifiers(&self.drag_modifiers).unwrap_or_else(|e| {
            tracing::warn!("Invalid drag_modifiers {:?}: {}", self.drag_modifiers, e);
            parse_modifiers(&default_drag_modifiers()).unwrap_or(Modifiers::NONE)
        })
    }

    fn sanitized(mut self) -> Self {
        if !(self.pixels_per_step.is_finite() && self.pixels_per_step > 0.0) {
            tracing::warn!(
                "pixels_per_step must be positive, got {}; using {}",
                self.pixels_per_step,
                DEFAULT_PIXELS_PER_STEP
            );
            self.pixels_per_step = DEFAULT_PIXELS_PER_STEP;
        }
        self
    }
}
