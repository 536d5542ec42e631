//! Game settings with persistence
//!
//! Settings are saved to `~/.config/aerie/settings.toml`

use std::fs;
use std::path::PathBuf;

use aerie_core::TimeConfig;
use aerie_game::{CameraConfig, LocomotionConfig};
use aerie_physics::BodyConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// All game settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub locomotion: LocomotionConfig,
    pub body: BodyConfig,
    pub camera: CameraConfig,
    pub time: TimeConfig,
    pub demo: DemoSettings,
}

impl GameSettings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("aerie"))
    }

    /// Get the settings file path
    fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            warn!("Could not determine config directory");
            return Self::default();
        };

        if !path.exists() {
            info!("No settings file found, writing defaults");
            let settings = Self::default();
            if let Err(e) = settings.save() {
                warn!("Failed to save default settings: {}", e);
            }
            return settings;
        }

        match fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content).unwrap_or_else(|e| {
                warn!("Failed to parse settings: {}, using defaults", e);
                Self::default()
            }),
            Err(e) => {
                warn!("Failed to read settings file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Parse settings from TOML text; missing sections fall back to defaults
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Save settings to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let Some(dir) = Self::config_dir() else {
            anyhow::bail!("Could not determine config directory");
        };

        let path = dir.join("settings.toml");

        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }
}

/// Headless demo run parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoSettings {
    /// Simulated seconds to run
    pub duration: f32,
    /// Simulated frames per second (frame ticks)
    pub frame_rate: f32,
    /// Half extent of the square spawn platform
    pub platform_half_extent: f32,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            duration: 25.0,
            frame_rate: 60.0,
            platform_half_extent: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_use_defaults() {
        let settings = GameSettings::parse(
            r#"
            [locomotion]
            forward_speed = 8.0
            float_gravity = 0.25
            normal_gravity = 9.81
            out_of_bounds_y = -500.0
            glide_visual_offset = [0.0, 1.0, 0.0]
            glide_visual_scale = [1.0, 1.0, 1.0]
            "#,
        )
        .unwrap();

        assert_eq!(settings.locomotion.forward_speed, 8.0);
        assert_eq!(settings.locomotion.out_of_bounds_y, -500.0);
        assert_eq!(settings.demo.frame_rate, 60.0);
    }

    #[test]
    fn test_settings_round_trip_through_toml() {
        let settings = GameSettings::default();
        let text = toml::to_string_pretty(&settings).unwrap();
        let parsed = GameSettings::parse(&text).unwrap();
        assert_eq!(parsed.camera.distance, settings.camera.distance);
    }

    #[test]
    fn test_malformed_settings_rejected() {
        assert!(GameSettings::parse("locomotion = 3").is_err());
    }
}
