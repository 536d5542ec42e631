//! Player controller module
//!
//! Camera-relative locomotion with a Grounded / Airborne / Gliding state
//! machine layered over a movement primitive.
//!
//! Tick ordering: the host calls [`PlayerController::update`] once per frame
//! (input sampling and direction mapping), then
//! [`PlayerController::fixed_update`] zero or more times at the fixed physics
//! rate. Physics ticks only read the direction published by the latest frame
//! tick.

mod abilities;
mod animator;
mod config;
mod controller;
mod direction;
mod glide;
mod primitive;
mod state;

pub use abilities::{DashAbility, DashCooldown, Health};
pub use animator::{channels, AnimParam, Animator, AnimatorParams};
pub use config::LocomotionConfig;
pub use controller::{Collaborators, PlayerController, Released};
pub use direction::{compute_direction, LatestDirection};
pub use glide::GlideVisual;
pub use primitive::MovementPrimitive;
pub use state::LocomotionState;
