//! Aerie Game - Character locomotion and aerial-state control
//!
//! Provides the camera-relative player controller with its Grounded /
//! Airborne / Gliding state machine, the follow camera, input mapping and
//! the session-side collaborators (registry, pause overlay, checkpoints).

pub mod camera;
pub mod checkpoint;
pub mod error;
pub mod input;
pub mod player;
pub mod registry;
pub mod session;

pub use camera::{CameraConfig, FollowCamera};
pub use checkpoint::{CheckpointList, Checkpoints};
pub use error::{RegistryError, SpawnError};
pub use input::{InputAction, InputBindings, InputHandler, InputState};
pub use player::{
    compute_direction, AnimParam, Animator, AnimatorParams, Collaborators, DashAbility,
    DashCooldown, GlideVisual, Health, LatestDirection, LocomotionConfig, LocomotionState,
    MovementPrimitive, PlayerController, Released,
};
pub use registry::CharacterRegistry;
pub use session::{JoinSession, PauseMenu, PauseOverlay, SessionSlots};
