//! Checkpoints that fallen characters are returned to

use aerie_core::CharacterId;
use glam::Vec3;
use tracing::debug;

/// Respawn service used by out-of-bounds recovery
pub trait Checkpoints {
    /// Handle a teleport request for `character` and return where it should be placed
    fn teleport_to_checkpoint(&mut self, character: CharacterId) -> Vec3;
}

/// Ordered list of checkpoints; the most recently activated one is used
#[derive(Debug, Clone)]
pub struct CheckpointList {
    points: Vec<Vec3>,
    active: usize,
    requests: u32,
}

impl CheckpointList {
    /// Start with a single spawn checkpoint
    pub fn new(spawn: Vec3) -> Self {
        Self {
            points: vec![spawn],
            active: 0,
            requests: 0,
        }
    }

    /// Add a checkpoint and make it the active one
    pub fn activate(&mut self, position: Vec3) {
        if let Some(index) = self.points.iter().position(|p| *p == position) {
            self.active = index;
        } else {
            self.points.push(position);
            self.active = self.points.len() - 1;
        }
        debug!("Checkpoint {} activated at {:?}", self.active, position);
    }

    /// The checkpoint a teleport would currently land on
    pub fn current(&self) -> Vec3 {
        self.points[self.active]
    }

    /// How many teleport requests have been served
    pub fn requests(&self) -> u32 {
        self.requests
    }
}

impl Checkpoints for CheckpointList {
    fn teleport_to_checkpoint(&mut self, character: CharacterId) -> Vec3 {
        self.requests += 1;
        debug!("Teleporting {} to checkpoint {}", character, self.active);
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_checkpoint_wins() {
        let mut list = CheckpointList::new(Vec3::ZERO);
        list.activate(Vec3::new(10.0, 2.0, 0.0));
        assert_eq!(list.current(), Vec3::new(10.0, 2.0, 0.0));

        // Re-activating an old checkpoint does not duplicate it
        list.activate(Vec3::ZERO);
        assert_eq!(list.current(), Vec3::ZERO);
        list.activate(Vec3::new(10.0, 2.0, 0.0));
        assert_eq!(list.points.len(), 2);
    }

    #[test]
    fn test_requests_counted() {
        let mut list = CheckpointList::new(Vec3::Y);
        let id = CharacterId::new();
        assert_eq!(list.teleport_to_checkpoint(id), Vec3::Y);
        assert_eq!(list.teleport_to_checkpoint(id), Vec3::Y);
        assert_eq!(list.requests(), 2);
    }
}
