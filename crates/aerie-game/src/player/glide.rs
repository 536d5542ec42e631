//! Transient visual shown while gliding

use aerie_core::Transform;
use glam::{Quat, Vec3};

use super::LocomotionConfig;

/// Glide visual owned by the controller. At most one exists per character,
/// and only while the character is gliding.
#[derive(Debug, Clone, PartialEq)]
pub struct GlideVisual {
    /// World transform of the visual
    pub transform: Transform,
    /// Offset from the character's feet, fixed at spawn
    offset: Vec3,
}

impl GlideVisual {
    /// Place a new visual over `character`, oriented along `yaw`
    pub fn spawn(character: &Transform, yaw: f32, config: &LocomotionConfig) -> Self {
        let rotation = Quat::from_rotation_y(yaw);
        let offset = rotation * config.glide_visual_offset;
        Self {
            transform: Transform {
                position: character.position + offset,
                rotation,
                scale: config.glide_visual_scale,
            },
            offset,
        }
    }

    /// Keep the visual attached to the character; rotation and scale stay as spawned
    pub fn follow(&mut self, character_position: Vec3) {
        self.transform.position = character_position + self.offset;
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn spawn_uses_heading_and_config() {
        let config = LocomotionConfig {
            glide_visual_offset: Vec3::new(0.0, 1.0, 0.5),
            ..Default::default()
        };
        let character = Transform::from_position(Vec3::new(2.0, 10.0, 0.0));
        let visual = GlideVisual::spawn(&character, FRAC_PI_2, &config);

        // +Z offset rotated a quarter turn lands on +X
        let expected = Vec3::new(2.5, 11.0, 0.0);
        assert!((visual.transform.position - expected).length() < 1e-5);
        assert_eq!(visual.transform.scale, config.glide_visual_scale);
    }

    #[test]
    fn follow_keeps_offset() {
        let config = LocomotionConfig::default();
        let mut visual = GlideVisual::spawn(&Transform::default(), 0.0, &config);
        let rotation = visual.transform.rotation;

        visual.follow(Vec3::new(0.0, 50.0, 3.0));
        assert_eq!(
            visual.transform.position,
            Vec3::new(0.0, 50.0, 3.0) + config.glide_visual_offset
        );
        assert_eq!(visual.transform.rotation, rotation);
    }
}
