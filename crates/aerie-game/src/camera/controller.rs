//! Follow camera orbiting the character

use glam::{Quat, Vec3};

use super::CameraConfig;

/// Third-person camera bound to one character
pub struct FollowCamera {
    /// Configuration
    pub config: CameraConfig,
    /// Yaw rotation in radians (heading around +Y, 0 looks along +Z)
    yaw: f32,
    /// Pitch rotation in radians
    pitch: f32,
    /// Smoothed look-at point
    target: Vec3,
    /// Camera world position (recomputed on follow/snap)
    position: Vec3,
}

impl FollowCamera {
    /// Create a camera with default config
    pub fn new() -> Self {
        Self::with_config(CameraConfig::default())
    }

    /// Create a camera with custom config
    pub fn with_config(config: CameraConfig) -> Self {
        let pitch = config
            .pitch
            .clamp(config.pitch_min, config.pitch_max)
            .to_radians();
        let mut camera = Self {
            config,
            yaw: 0.0,
            pitch,
            target: Vec3::ZERO,
            position: Vec3::ZERO,
        };
        camera.position = camera.ideal_position();
        camera
    }

    /// Heading in radians
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Get the camera's current world position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Get the point the camera is looking at
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Horizontal forward direction
    pub fn forward(&self) -> Vec3 {
        Quat::from_rotation_y(self.yaw) * Vec3::Z
    }

    /// Rotate around the character by an orbit input scalar
    pub fn orbit(&mut self, amount: f32) {
        self.yaw = (self.yaw + amount * self.config.orbit_sensitivity)
            .rem_euclid(std::f32::consts::TAU);
    }

    fn ideal_position(&self) -> Vec3 {
        // Behind the character along the heading, raised by pitch
        let back = -self.forward() * self.pitch.cos();
        let up = Vec3::Y * self.pitch.sin();
        self.target + (back + up) * self.config.distance
    }

    /// Ease towards the character (call each frame tick)
    pub fn follow(&mut self, character_position: Vec3, dt: f32) {
        let goal = character_position + Vec3::Y * self.config.target_height;
        let lerp = 1.0 - (1.0 - self.config.follow_smoothing).powf(dt * 60.0);
        self.target = self.target.lerp(goal, lerp);
        self.position = self.ideal_position();
    }

    /// Jump straight to the character with no easing
    pub fn snap_to(&mut self, character_position: Vec3) {
        self.target = character_position + Vec3::Y * self.config.target_height;
        self.position = self.ideal_position();
    }
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_creation() {
        let camera = FollowCamera::new();
        assert_eq!(camera.yaw(), 0.0);
        assert!((camera.forward() - Vec3::Z).length() < 1e-6);
        assert!(camera.config.persistent);
    }

    #[test]
    fn test_orbit_wraps() {
        let mut camera = FollowCamera::new();
        camera.orbit(-1.0);
        assert!(camera.yaw() > 0.0 && camera.yaw() < std::f32::consts::TAU);
    }

    #[test]
    fn test_snap_places_camera_behind() {
        let mut camera = FollowCamera::new();
        let spot = Vec3::new(10.0, 5.0, -3.0);
        camera.snap_to(spot);

        assert_eq!(camera.target(), spot + Vec3::Y * camera.config.target_height);
        let offset = camera.position() - camera.target();
        assert!((offset.length() - camera.config.distance).abs() < 1e-4);
        // Heading is +Z, so the camera sits on the -Z side
        assert!(offset.z < 0.0);
    }

    #[test]
    fn test_follow_eases() {
        let mut camera = FollowCamera::new();
        camera.follow(Vec3::new(10.0, 0.0, 0.0), 1.0 / 60.0);
        assert!(camera.target().x > 0.0 && camera.target().x < 10.0);
    }

    #[test]
    fn test_pitch_clamping() {
        let camera = FollowCamera::with_config(CameraConfig {
            pitch: 100.0,
            ..Default::default()
        });
        assert!(camera.pitch() <= camera.config.pitch_max.to_radians() + 0.01);
    }
}
