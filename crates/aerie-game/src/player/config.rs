//! Locomotion tuning

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Locomotion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocomotionConfig {
    /// Horizontal speed given on entering a glide (m/s)
    pub forward_speed: f32,
    /// Constant descent speed while gliding (m/s)
    pub float_gravity: f32,
    /// Downward speed re-asserted when a glide ends (m/s)
    pub normal_gravity: f32,
    /// Altitude below which the character is returned to a checkpoint
    pub out_of_bounds_y: f32,
    /// Glide visual offset from the character's feet, in heading space
    pub glide_visual_offset: Vec3,
    /// Glide visual scale
    pub glide_visual_scale: Vec3,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            forward_speed: 6.0,
            float_gravity: 0.5,
            normal_gravity: 9.81,
            out_of_bounds_y: -1000.0,
            glide_visual_offset: Vec3::new(0.0, 1.2, 0.0),
            glide_visual_scale: Vec3::new(1.5, 0.1, 1.0),
        }
    }
}
