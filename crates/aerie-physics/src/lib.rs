//! Aerie Physics - Collision world and kinematic character bodies using rapier3d
//!
//! Provides the ground-contact and movement-application primitive that the
//! locomotion controller drives every physics tick.

mod kinematic_body;

pub use kinematic_body::{BodyConfig, KinematicBody};

use glam::Vec3;
use rapier3d::prelude::*;

/// Collision world shared by every character body in a scene.
///
/// Holds only static geometry and kinematic capsules; nothing here is
/// simulated, so the host refreshes the query pipeline instead of stepping.
pub struct PhysicsWorld {
    /// Rigid body storage (colliders here are all parentless)
    pub rigid_body_set: RigidBodySet,
    /// Collider storage
    pub collider_set: ColliderSet,

    island_manager: IslandManager,
    /// Query pipeline for shape casts
    pub(crate) query_pipeline: QueryPipeline,
}

impl PhysicsWorld {
    pub fn new() -> Self {
        Self {
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            island_manager: IslandManager::new(),
            query_pipeline: QueryPipeline::new(),
        }
    }

    /// Rebuild the query pipeline after colliders were added or moved
    pub fn update_queries(&mut self) {
        self.query_pipeline.update(&self.collider_set);
    }

    /// Add a static collider (ground, walls, etc.)
    pub fn add_static_collider(&mut self, collider: Collider) -> ColliderHandle {
        self.collider_set.insert(collider)
    }

    /// Remove a collider
    pub fn remove_collider(&mut self, handle: ColliderHandle) {
        self.collider_set
            .remove(handle, &mut self.island_manager, &mut self.rigid_body_set, true);
    }

    /// Create a static box collider, e.g. a floating platform
    pub fn create_static_box(&mut self, half_extents: Vec3, position: Vec3) -> ColliderHandle {
        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
            .translation(vector![position.x, position.y, position.z])
            .friction(0.7)
            .build();
        self.add_static_collider(collider)
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_creation() {
        let mut world = PhysicsWorld::new();
        let platform = world.create_static_box(Vec3::new(5.0, 0.5, 5.0), Vec3::ZERO);
        assert!(world.collider_set.get(platform).is_some());

        world.remove_collider(platform);
        assert!(world.collider_set.get(platform).is_none());
    }
}
