//! Camera system module
//!
//! Provides the persistent third-person follow camera that orbits the
//! character and supplies the heading used for camera-relative movement.

mod config;
mod controller;

pub use config::CameraConfig;
pub use controller::FollowCamera;
