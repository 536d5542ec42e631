//! Ability collaborators the controller forwards to

use glam::Vec3;
use tracing::debug;

/// Dash ability triggered along the current movement direction
pub trait DashAbility {
    /// Attempt a dash; returns whether it started
    fn dash(&mut self, direction: Vec3) -> bool;

    /// Direction of the most recent dash, if any
    fn last_dash(&self) -> Option<Vec3>;

    /// Advance any cooldown by one frame tick
    fn tick(&mut self, _dt: f32) {}
}

/// Health component. The controller only checks whether one is attached.
pub trait Health {
    fn is_alive(&self) -> bool;
}

/// Dash with a cooldown between uses
#[derive(Debug, Clone)]
pub struct DashCooldown {
    /// Seconds between dashes
    pub cooldown: f32,
    remaining: f32,
    last_direction: Option<Vec3>,
}

impl DashCooldown {
    pub fn new(cooldown: f32) -> Self {
        Self {
            cooldown,
            remaining: 0.0,
            last_direction: None,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.remaining <= 0.0
    }
}

impl Default for DashCooldown {
    fn default() -> Self {
        Self::new(0.8)
    }
}

impl DashAbility for DashCooldown {
    fn dash(&mut self, direction: Vec3) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.remaining = self.cooldown;
        self.last_direction = Some(direction);
        debug!("Dash towards {:?}", direction);
        true
    }

    fn last_dash(&self) -> Option<Vec3> {
        self.last_direction
    }

    fn tick(&mut self, dt: f32) {
        self.remaining = (self.remaining - dt).max(0.0);
    }
}
