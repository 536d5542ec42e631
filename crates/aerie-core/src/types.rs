//! Core types used throughout Aerie

use std::fmt;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a spawned character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    /// Create a new random character ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // First group of the UUID is enough to tell characters apart in logs
        let full = self.0.to_string();
        write!(f, "{}", &full[..8])
    }
}

/// Position, rotation and scale of an object in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create a new transform at the given position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform from position and a heading around the Y axis
    pub fn from_position_yaw(position: Vec3, yaw: f32) -> Self {
        Self {
            position,
            rotation: Quat::from_rotation_y(yaw),
            scale: Vec3::ONE,
        }
    }

    /// Forward direction (positive Z in local space)
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaw_transform_axes() {
        let t = Transform::from_position_yaw(Vec3::ZERO, std::f32::consts::FRAC_PI_2);
        // A quarter turn maps local forward (+Z) onto world +X
        assert!((t.forward() - Vec3::X).length() < 1e-5);
        assert_eq!(t.scale, Vec3::ONE);
    }

    #[test]
    fn test_from_position_faces_forward() {
        let t = Transform::from_position(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t.position, Vec3::new(1.0, 2.0, 3.0));
        assert!((t.forward() - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_character_ids_unique() {
        assert_ne!(CharacterId::new(), CharacterId::new());
        assert_eq!(CharacterId::new().to_string().len(), 8);
    }
}
