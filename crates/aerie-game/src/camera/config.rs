//! Camera configuration

use serde::{Deserialize, Serialize};

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Distance behind the character
    pub distance: f32,
    /// Height of the look-at point above the character's feet
    pub target_height: f32,
    /// Radians of yaw per unit of orbit input
    pub orbit_sensitivity: f32,
    /// Follow interpolation smoothing (0-1, lower = smoother)
    pub follow_smoothing: f32,
    /// Default pitch angle in degrees (positive looks down on the character)
    pub pitch: f32,
    /// Minimum pitch angle in degrees
    pub pitch_min: f32,
    /// Maximum pitch angle in degrees
    pub pitch_max: f32,
    /// Keep the camera alive across scene transitions
    pub persistent: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 6.0,
            target_height: 1.5,
            orbit_sensitivity: 0.05,
            follow_smoothing: 0.2,
            pitch: 20.0,
            pitch_min: -30.0,
            pitch_max: 70.0,
            persistent: true,
        }
    }
}
