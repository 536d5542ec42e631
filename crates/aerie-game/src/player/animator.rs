//! Animation parameter channel

use std::collections::HashMap;

/// Parameter names written by the controller
pub mod channels {
    pub const IS_FLOATING: &str = "isFloating";
    pub const IS_GROUNDED: &str = "isGrounded";
    pub const VERTICAL_SPEED: &str = "verticalSpeed";
    pub const DISTANCE_TO_DESTINATION: &str = "distanceToDestination";
}

/// Named-parameter animation target
pub trait Animator {
    fn set_bool(&mut self, name: &str, value: bool);
    fn set_float(&mut self, name: &str, value: f32);
    fn get_bool(&self, name: &str) -> Option<bool>;
    fn get_float(&self, name: &str) -> Option<f32>;
}

/// A single animator parameter value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimParam {
    Bool(bool),
    Float(f32),
}

/// In-memory parameter table, read by whatever drives the skeleton
#[derive(Debug, Clone, Default)]
pub struct AnimatorParams {
    params: HashMap<String, AnimParam>,
}

impl AnimatorParams {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Animator for AnimatorParams {
    fn set_bool(&mut self, name: &str, value: bool) {
        self.params.insert(name.to_string(), AnimParam::Bool(value));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.params.insert(name.to_string(), AnimParam::Float(value));
    }

    fn get_bool(&self, name: &str) -> Option<bool> {
        match self.params.get(name)? {
            AnimParam::Bool(value) => Some(*value),
            AnimParam::Float(_) => None,
        }
    }

    fn get_float(&self, name: &str) -> Option<f32> {
        match self.params.get(name)? {
            AnimParam::Float(value) => Some(*value),
            AnimParam::Bool(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_reads() {
        let mut params = AnimatorParams::new();
        params.set_bool(channels::IS_GROUNDED, true);
        params.set_float(channels::VERTICAL_SPEED, -2.0);

        assert_eq!(params.get_bool(channels::IS_GROUNDED), Some(true));
        assert_eq!(params.get_float(channels::VERTICAL_SPEED), Some(-2.0));
        // Wrong type reads as absent
        assert_eq!(params.get_float(channels::IS_GROUNDED), None);
        assert_eq!(params.get_bool(channels::IS_FLOATING), None);
    }
}
