//! Camera-relative direction mapping

use glam::{Quat, Vec2, Vec3};

/// Map a 2D input vector onto the ground plane relative to the camera heading.
///
/// Only the camera's yaw matters. `input.y` runs along the heading's forward
/// axis (+Z at yaw 0) and `input.x` along its right axis (+X at yaw 0). The
/// result is normalized; zero input stays zero.
pub fn compute_direction(input: Vec2, camera_yaw: f32) -> Vec3 {
    // Rescale first so tiny inputs do not underflow when squared
    let largest = input.abs().max_element();
    if largest == 0.0 || !largest.is_finite() {
        return Vec3::ZERO;
    }
    let input = input / largest;

    let heading = Quat::from_rotation_y(camera_yaw);
    let forward = heading * Vec3::Z;
    let right = heading * Vec3::X;

    (forward * input.y + right * input.x).normalize_or_zero()
}

/// Direction written once per frame tick and read by the physics ticks that follow
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LatestDirection {
    value: Vec3,
}

impl LatestDirection {
    /// Publish the direction computed during a frame tick
    pub fn publish(&mut self, direction: Vec3) {
        self.value = direction;
    }

    /// Most recently published direction
    pub fn get(&self) -> Vec3 {
        self.value
    }

    /// Zero the direction without waiting for the next frame tick
    pub fn clear(&mut self) {
        self.value = Vec3::ZERO;
    }
}
