//! Movement primitive contract

use aerie_core::Transform;
use aerie_physics::{KinematicBody, PhysicsWorld};
use glam::Vec3;

/// Ground contact and movement application for one character.
///
/// The primitive owns the body's velocity. The controller reads ground
/// contact and distance-to-destination, and only overwrites velocity for
/// glide entry, glide hold and glide exit.
pub trait MovementPrimitive {
    /// Whatever the primitive needs to move against (a collision world, or `()`)
    type World;

    fn is_grounded(&self) -> bool;
    fn distance_to_destination(&self) -> f32;

    /// Steer along `direction`; called once per physics tick
    fn apply_movement(&mut self, direction: Vec3);
    /// Integrate and move; called once per physics tick, after `apply_movement`
    fn update_movement(&mut self, world: &mut Self::World, dt: f32);

    /// Gate for `apply_movement` / `update_movement`
    fn is_enabled(&self) -> bool;
    fn set_enabled(&mut self, enabled: bool);

    /// Ask for a jump impulse
    fn request_jump(&mut self);

    fn velocity(&self) -> Vec3;
    fn set_velocity(&mut self, velocity: Vec3);

    /// Suspend the primitive's own gravity (held off while gliding)
    fn set_gravity_enabled(&mut self, enabled: bool);

    fn transform(&self) -> Transform;

    fn position(&self) -> Vec3 {
        self.transform().position
    }

    fn teleport(&mut self, world: &mut Self::World, position: Vec3);
}

impl MovementPrimitive for KinematicBody {
    type World = PhysicsWorld;

    fn is_grounded(&self) -> bool {
        KinematicBody::is_grounded(self)
    }

    fn distance_to_destination(&self) -> f32 {
        KinematicBody::distance_to_destination(self)
    }

    fn apply_movement(&mut self, direction: Vec3) {
        KinematicBody::apply_movement(self, direction);
    }

    fn update_movement(&mut self, world: &mut PhysicsWorld, dt: f32) {
        KinematicBody::update_movement(self, world, dt);
    }

    fn is_enabled(&self) -> bool {
        KinematicBody::is_enabled(self)
    }

    fn set_enabled(&mut self, enabled: bool) {
        KinematicBody::set_enabled(self, enabled);
    }

    fn request_jump(&mut self) {
        KinematicBody::request_jump(self);
    }

    fn velocity(&self) -> Vec3 {
        KinematicBody::velocity(self)
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        KinematicBody::set_velocity(self, velocity);
    }

    fn set_gravity_enabled(&mut self, enabled: bool) {
        KinematicBody::set_gravity_enabled(self, enabled);
    }

    fn transform(&self) -> Transform {
        KinematicBody::transform(self)
    }

    fn teleport(&mut self, world: &mut PhysicsWorld, position: Vec3) {
        KinematicBody::teleport(self, world, position);
    }
}

/// Scriptable primitive for controller tests
#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    #[derive(Debug, Clone)]
    pub struct StubMotor {
        pub grounded: bool,
        pub position: Vec3,
        pub velocity: Vec3,
        pub enabled: bool,
        pub gravity_enabled: bool,
        pub gravity: f32,
        pub jump_requests: u32,
        pub apply_calls: u32,
        pub update_calls: u32,
        pub last_direction: Vec3,
        pub walk_speed: f32,
    }

    impl StubMotor {
        pub fn airborne_at(position: Vec3) -> Self {
            Self {
                grounded: false,
                position,
                ..Self::default()
            }
        }
    }

    impl Default for StubMotor {
        fn default() -> Self {
            Self {
                grounded: true,
                position: Vec3::ZERO,
                velocity: Vec3::ZERO,
                enabled: true,
                gravity_enabled: true,
                gravity: 9.81,
                jump_requests: 0,
                apply_calls: 0,
                update_calls: 0,
                last_direction: Vec3::ZERO,
                walk_speed: 5.0,
            }
        }
    }

    impl MovementPrimitive for StubMotor {
        type World = ();

        fn is_grounded(&self) -> bool {
            self.grounded
        }

        fn distance_to_destination(&self) -> f32 {
            self.last_direction.length() * self.walk_speed
        }

        fn apply_movement(&mut self, direction: Vec3) {
            self.apply_calls += 1;
            self.last_direction = direction;
            self.velocity.x = direction.x * self.walk_speed;
            self.velocity.z = direction.z * self.walk_speed;
        }

        fn update_movement(&mut self, _world: &mut (), dt: f32) {
            self.update_calls += 1;
            if self.gravity_enabled && !self.grounded {
                self.velocity.y -= self.gravity * dt;
            }
            self.position += self.velocity * dt;
        }

        fn is_enabled(&self) -> bool {
            self.enabled
        }

        fn set_enabled(&mut self, enabled: bool) {
            self.enabled = enabled;
        }

        fn request_jump(&mut self) {
            self.jump_requests += 1;
        }

        fn velocity(&self) -> Vec3 {
            self.velocity
        }

        fn set_velocity(&mut self, velocity: Vec3) {
            self.velocity = velocity;
        }

        fn set_gravity_enabled(&mut self, enabled: bool) {
            self.gravity_enabled = enabled;
        }

        fn transform(&self) -> Transform {
            Transform::from_position(self.position)
        }

        fn teleport(&mut self, _world: &mut (), position: Vec3) {
            self.position = position;
            self.velocity = Vec3::ZERO;
        }
    }
}
