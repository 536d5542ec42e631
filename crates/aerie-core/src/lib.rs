//! Aerie Core - Core types and utilities shared by the Aerie crates
//!
//! This crate provides the foundational types used throughout the workspace:
//! - Mathematical primitives (re-exported from glam)
//! - Transform and character identifiers
//! - Game time with a fixed-timestep accumulator for physics ticks

pub mod time;
pub mod types;

pub use glam::{Quat, Vec2, Vec3};
pub use time::{GameTime, TimeConfig};
pub use types::{CharacterId, Transform};
