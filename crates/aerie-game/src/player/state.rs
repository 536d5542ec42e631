use std::fmt;

use serde::{Deserialize, Serialize};

/// Locomotion state of a character. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LocomotionState {
    /// Standing or walking on a walkable surface
    #[default]
    Grounded,
    /// Free fall (or rising from a jump)
    Airborne,
    /// Slow constant descent with forward momentum
    Gliding,
}

impl LocomotionState {
    pub fn is_gliding(&self) -> bool {
        matches!(self, Self::Gliding)
    }
}

impl fmt::Display for LocomotionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Grounded => "grounded",
            Self::Airborne => "airborne",
            Self::Gliding => "gliding",
        };
        f.write_str(name)
    }
}
