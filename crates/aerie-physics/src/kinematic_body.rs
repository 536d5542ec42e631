//! Kinematic character body using rapier3d's kinematic character controller

use aerie_core::Transform;
use glam::Vec3;
use rapier3d::control::{CharacterAutostep, CharacterLength, KinematicCharacterController};
use rapier3d::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::PhysicsWorld;

/// Kinematic body configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyConfig {
    /// Capsule height (default: 1.8m)
    pub height: f32,
    /// Capsule radius (default: 0.4m)
    pub radius: f32,
    /// Maximum slope angle in degrees (default: 45)
    pub max_slope_angle: f32,
    /// Step height for climbing stairs (default: 0.25m)
    pub step_height: f32,
    /// Skin width for collision detection (default: 0.02m)
    pub skin_width: f32,
    /// Maximum ground snap distance
    pub ground_snap_distance: f32,
    /// Horizontal speed for a full-magnitude movement direction (m/s)
    pub walk_speed: f32,
    /// Initial upward velocity of a jump
    pub jump_velocity: f32,
    /// Downward acceleration while airborne (m/s²)
    pub gravity: f32,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            height: 1.8,
            radius: 0.4,
            max_slope_angle: 45.0,
            step_height: 0.25,
            skin_width: 0.02,
            ground_snap_distance: 0.2,
            walk_speed: 5.0,
            jump_velocity: 6.5,
            gravity: 9.81,
        }
    }
}

/// Capsule body that owns its velocity and reports ground contact
pub struct KinematicBody {
    /// Configuration
    pub config: BodyConfig,
    position: Vec3,
    velocity: Vec3,
    yaw: f32,
    grounded: bool,
    enabled: bool,
    gravity_enabled: bool,
    jump_requested: bool,
    /// Where the last movement request is heading (one second ahead)
    destination: Option<Vec3>,
    collider_handle: Option<ColliderHandle>,
    controller: KinematicCharacterController,
}

impl KinematicBody {
    /// Create a new body with default config
    pub fn new() -> Self {
        Self::with_config(BodyConfig::default())
    }

    /// Create a new body with custom config
    pub fn with_config(config: BodyConfig) -> Self {
        let mut controller = KinematicCharacterController::default();
        controller.max_slope_climb_angle = config.max_slope_angle.to_radians();
        controller.min_slope_slide_angle = config.max_slope_angle.to_radians();
        controller.autostep = Some(CharacterAutostep {
            max_height: CharacterLength::Absolute(config.step_height),
            min_width: CharacterLength::Relative(0.5),
            include_dynamic_bodies: false,
        });
        controller.snap_to_ground = Some(CharacterLength::Absolute(config.ground_snap_distance));
        controller.offset = CharacterLength::Absolute(config.skin_width);

        Self {
            config,
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            yaw: 0.0,
            grounded: false,
            enabled: true,
            gravity_enabled: true,
            jump_requested: false,
            destination: None,
            collider_handle: None,
            controller,
        }
    }

    /// Insert the capsule collider into the world at `position` (feet)
    pub fn spawn(&mut self, physics: &mut PhysicsWorld, position: Vec3) -> ColliderHandle {
        self.position = position;

        let half_height = (self.config.height - 2.0 * self.config.radius) / 2.0;
        let collider = ColliderBuilder::capsule_y(half_height.max(0.01), self.config.radius)
            .translation(self.collider_translation())
            .friction(0.0)
            .restitution(0.0)
            .build();

        let handle = physics.add_static_collider(collider);
        self.collider_handle = Some(handle);
        physics.update_queries();
        debug!("Kinematic body spawned at {:?}", position);
        handle
    }

    /// Remove the capsule collider from the world
    pub fn despawn(&mut self, physics: &mut PhysicsWorld) {
        if let Some(handle) = self.collider_handle.take() {
            physics.remove_collider(handle);
        }
    }

    fn collider_translation(&self) -> Vector<Real> {
        vector![
            self.position.x,
            self.position.y + self.config.height / 2.0,
            self.position.z
        ]
    }

    /// Feet position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// World transform of the body, facing its last movement heading
    pub fn transform(&self) -> Transform {
        Transform::from_position_yaw(self.position, self.yaw)
    }

    /// Current velocity
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Overwrite the velocity
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    /// Whether the last move ended on walkable ground
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Whether movement requests are processed
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Suspend or resume the body's own gravity integration
    pub fn set_gravity_enabled(&mut self, enabled: bool) {
        self.gravity_enabled = enabled;
    }

    pub fn gravity_enabled(&self) -> bool {
        self.gravity_enabled
    }

    /// Horizontal distance to the point the current movement request heads for
    pub fn distance_to_destination(&self) -> f32 {
        match self.destination {
            Some(dest) => {
                let delta = dest - self.position;
                Vec3::new(delta.x, 0.0, delta.z).length()
            }
            None => 0.0,
        }
    }

    /// Steer horizontally along `direction` (magnitude 0..=1)
    pub fn apply_movement(&mut self, direction: Vec3) {
        let planar = Vec3::new(direction.x, 0.0, direction.z);
        let horizontal = planar * self.config.walk_speed;
        self.velocity.x = horizontal.x;
        self.velocity.z = horizontal.z;

        if planar.length_squared() > 0.0 {
            self.yaw = planar.x.atan2(planar.z);
            self.destination = Some(self.position + horizontal);
        } else {
            self.destination = None;
        }
    }

    /// Request a jump impulse; only honored while grounded
    pub fn request_jump(&mut self) -> bool {
        if self.grounded {
            self.jump_requested = true;
        }
        self.jump_requested
    }

    /// Integrate gravity and move the capsule with collision detection
    pub fn update_movement(&mut self, physics: &mut PhysicsWorld, dt: f32) {
        if self.jump_requested {
            self.velocity.y = self.config.jump_velocity;
            self.jump_requested = false;
            self.grounded = false;
        } else if self.gravity_enabled {
            if !self.grounded {
                self.velocity.y -= self.config.gravity * dt;
            } else if self.velocity.y < 0.0 {
                self.velocity.y = 0.0;
            }
        }

        let mut translation = self.velocity * dt;
        if self.grounded && self.velocity.y <= 0.0 {
            // Keep pressing into the floor so contact is re-detected every tick
            translation.y -= self.config.skin_width;
        }
        self.move_character(physics, translation, dt);
    }

    fn move_character(&mut self, physics: &mut PhysicsWorld, desired_translation: Vec3, dt: f32) {
        let Some(collider_handle) = self.collider_handle else {
            // Not in a world: free flight
            self.position += desired_translation;
            return;
        };

        let Some(collider) = physics.collider_set.get(collider_handle) else {
            return;
        };

        let shape = collider.shape();
        let current_pos = Isometry::translation(
            self.position.x,
            self.position.y + self.config.height / 2.0,
            self.position.z,
        );

        let movement = self.controller.move_shape(
            dt,
            &physics.rigid_body_set,
            &physics.collider_set,
            &physics.query_pipeline,
            shape,
            &current_pos,
            vector![desired_translation.x, desired_translation.y, desired_translation.z],
            QueryFilter::default().exclude_collider(collider_handle),
            |_| {},
        );

        self.grounded = movement.grounded;

        let effective = movement.translation;
        self.position += Vec3::new(effective.x, effective.y, effective.z);

        let translation = self.collider_translation();
        if let Some(collider) = physics.collider_set.get_mut(collider_handle) {
            collider.set_translation(translation);
        }
    }

    /// Place the body at `position`, dropping all momentum
    pub fn teleport(&mut self, physics: &mut PhysicsWorld, position: Vec3) {
        self.position = position;
        self.velocity = Vec3::ZERO;
        self.grounded = false;
        self.jump_requested = false;
        self.destination = None;

        let translation = self.collider_translation();
        if let Some(handle) = self.collider_handle {
            if let Some(collider) = physics.collider_set.get_mut(handle) {
                collider.set_translation(translation);
            }
        }
        debug!("Kinematic body teleported to {:?}", position);
    }
}

impl Default for KinematicBody {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_config_defaults() {
        let config = BodyConfig::default();
        assert_eq!(config.height, 1.8);
        assert_eq!(config.radius, 0.4);
        assert_eq!(config.gravity, 9.81);
    }

    #[test]
    fn test_apply_movement_sets_destination() {
        let mut body = KinematicBody::new();
        body.apply_movement(Vec3::Z);
        assert_eq!(body.velocity().z, body.config.walk_speed);
        assert!((body.distance_to_destination() - body.config.walk_speed).abs() < 1e-5);
        assert!((body.transform().forward() - Vec3::Z).length() < 1e-5);

        body.apply_movement(Vec3::ZERO);
        assert_eq!(body.distance_to_destination(), 0.0);
        assert_eq!(body.velocity().z, 0.0);
    }

    #[test]
    fn test_jump_requires_ground() {
        let mut body = KinematicBody::new();
        assert!(!body.request_jump());
    }

    #[test]
    fn test_suspended_gravity_holds_vertical_velocity() {
        let mut physics = PhysicsWorld::new();
        let mut body = KinematicBody::new();
        body.set_gravity_enabled(false);
        body.set_velocity(Vec3::new(0.0, -0.5, 0.0));

        body.update_movement(&mut physics, 0.02);
        assert_eq!(body.velocity().y, -0.5);
        assert!((body.position().y + 0.01).abs() < 1e-5);
    }

    #[test]
    fn test_body_lands_on_platform() {
        let mut physics = PhysicsWorld::new();
        physics.create_static_box(Vec3::new(20.0, 0.5, 20.0), Vec3::new(0.0, -0.5, 0.0));
        physics.update_queries();

        let mut body = KinematicBody::new();
        body.spawn(&mut physics, Vec3::new(0.0, 1.0, 0.0));

        for _ in 0..100 {
            body.apply_movement(Vec3::ZERO);
            body.update_movement(&mut physics, 0.02);
        }

        assert!(body.is_grounded());
        assert!(body.position().y > -0.1 && body.position().y < 0.3);
    }
}
