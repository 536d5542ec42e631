//! Input system with action-based mapping
//!
//! Turns raw winit keyboard/mouse events into the controller's triggers:
//! a move axis, an orbit scalar and the jump / dash / pause buttons.

use std::collections::{HashMap, HashSet};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use winit::event::{ElementState, MouseButton};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Game actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAction {
    /// Move forward (W by default)
    MoveForward,
    /// Move backward (S by default)
    MoveBackward,
    /// Move left (A by default)
    MoveLeft,
    /// Move right (D by default)
    MoveRight,
    /// Jump, or toggle the glide while airborne (Space by default)
    Jump,
    /// Dash along the current movement direction (Left Shift by default)
    Dash,
    /// Orbit the camera to the left (Q by default)
    OrbitLeft,
    /// Orbit the camera to the right (E by default)
    OrbitRight,
    /// Pause/unpause (Escape by default)
    Pause,
}

/// Current state of all inputs for a frame
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Actions currently held down
    pub held: HashSet<InputAction>,
    /// Actions that were just pressed this frame
    pub just_pressed: HashSet<InputAction>,
    /// Mouse movement delta for this frame
    pub mouse_delta: Vec2,
    /// Whether the cursor is captured (invisible, locked)
    pub cursor_captured: bool,
}

impl InputState {
    /// Check if an action is currently held
    pub fn is_held(&self, action: InputAction) -> bool {
        self.held.contains(&action)
    }

    /// Check if an action was just pressed this frame
    pub fn is_just_pressed(&self, action: InputAction) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Composite 2D move axis: x = right, y = forward, each in [-1, 1]
    pub fn move_axis(&self) -> Vec2 {
        let axis = |pos: InputAction, neg: InputAction| -> f32 {
            (self.is_held(pos) as i32 - self.is_held(neg) as i32) as f32
        };
        Vec2::new(
            axis(InputAction::MoveRight, InputAction::MoveLeft),
            axis(InputAction::MoveForward, InputAction::MoveBackward),
        )
    }

    /// Orbit scalar from the orbit keys plus horizontal mouse motion
    pub fn orbit_axis(&self) -> f32 {
        let keys = self.is_held(InputAction::OrbitRight) as i32
            - self.is_held(InputAction::OrbitLeft) as i32;
        keys as f32 + self.mouse_delta.x
    }

    /// Clear frame-specific data (call at end of frame)
    pub fn clear_frame(&mut self) {
        self.just_pressed.clear();
        self.mouse_delta = Vec2::ZERO;
    }
}

/// Binding of a physical key to an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputBinding {
    /// Keyboard key
    Key(KeyCode),
    /// Mouse button
    Mouse(u32), // 0 = left, 1 = right, 2 = middle
}

/// Maps physical inputs to game actions
#[derive(Debug, Clone)]
pub struct InputBindings {
    bindings: HashMap<InputBinding, InputAction>,
}

impl Default for InputBindings {
    fn default() -> Self {
        let mut bindings = Self {
            bindings: HashMap::new(),
        };

        // Default WASD bindings
        bindings.bind(KeyCode::KeyW, InputAction::MoveForward);
        bindings.bind(KeyCode::KeyS, InputAction::MoveBackward);
        bindings.bind(KeyCode::KeyA, InputAction::MoveLeft);
        bindings.bind(KeyCode::KeyD, InputAction::MoveRight);

        // Arrow keys as alternative
        bindings.bind(KeyCode::ArrowUp, InputAction::MoveForward);
        bindings.bind(KeyCode::ArrowDown, InputAction::MoveBackward);
        bindings.bind(KeyCode::ArrowLeft, InputAction::MoveLeft);
        bindings.bind(KeyCode::ArrowRight, InputAction::MoveRight);

        // Actions
        bindings.bind(KeyCode::Space, InputAction::Jump);
        bindings.bind(KeyCode::ShiftLeft, InputAction::Dash);
        bindings.bind_mouse(1, InputAction::Dash); // Right mouse button
        bindings.bind(KeyCode::KeyQ, InputAction::OrbitLeft);
        bindings.bind(KeyCode::KeyE, InputAction::OrbitRight);
        bindings.bind(KeyCode::Escape, InputAction::Pause);

        bindings
    }
}

impl InputBindings {
    /// Bind a key to an action, replacing whatever the key did before
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        self.bindings.insert(InputBinding::Key(key), action);
    }

    /// Bind a mouse button to an action
    pub fn bind_mouse(&mut self, button: u32, action: InputAction) {
        self.bindings.insert(InputBinding::Mouse(button), action);
    }

    /// Get the action for a binding, if any
    pub fn get_action(&self, binding: &InputBinding) -> Option<InputAction> {
        self.bindings.get(binding).copied()
    }
}

/// Per-character input handler: raw events in, action state out
#[derive(Debug)]
pub struct InputHandler {
    /// Current input state
    pub state: InputState,
    /// Input bindings
    pub bindings: InputBindings,
    /// Mouse sensitivity multiplier
    pub mouse_sensitivity: f32,
}

impl InputHandler {
    pub fn with_bindings(bindings: InputBindings) -> Self {
        Self {
            state: InputState::default(),
            bindings,
            mouse_sensitivity: 1.0,
        }
    }

    fn press(&mut self, action: InputAction, element_state: ElementState) {
        match element_state {
            ElementState::Pressed => {
                if !self.state.held.contains(&action) {
                    self.state.just_pressed.insert(action);
                }
                self.state.held.insert(action);
            }
            ElementState::Released => {
                self.state.held.remove(&action);
            }
        }
    }

    /// Handle a keyboard event
    pub fn handle_keyboard(&mut self, physical_key: PhysicalKey, element_state: ElementState) {
        if let PhysicalKey::Code(key_code) = physical_key {
            if let Some(action) = self.bindings.get_action(&InputBinding::Key(key_code)) {
                self.press(action, element_state);
            }
        }
    }

    /// Handle a mouse button event
    pub fn handle_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        let button_id = match button {
            MouseButton::Left => 0,
            MouseButton::Right => 1,
            MouseButton::Middle => 2,
            MouseButton::Back => 3,
            MouseButton::Forward => 4,
            MouseButton::Other(id) => id as u32,
        };

        if let Some(action) = self.bindings.get_action(&InputBinding::Mouse(button_id)) {
            self.press(action, state);
        }
    }

    /// Handle mouse movement
    pub fn handle_mouse_motion(&mut self, delta: (f64, f64)) {
        if self.state.cursor_captured {
            self.state.mouse_delta += Vec2::new(
                delta.0 as f32 * self.mouse_sensitivity,
                delta.1 as f32 * self.mouse_sensitivity,
            );
        }
    }

    /// Clear frame-specific input data
    pub fn end_frame(&mut self) {
        self.state.clear_frame();
    }

    /// Set cursor capture state
    pub fn set_cursor_captured(&mut self, captured: bool) {
        self.state.cursor_captured = captured;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> InputHandler {
        InputHandler::with_bindings(InputBindings::default())
    }

    #[test]
    fn test_default_bindings() {
        let bindings = InputBindings::default();
        assert_eq!(
            bindings.get_action(&InputBinding::Key(KeyCode::KeyW)),
            Some(InputAction::MoveForward)
        );
        assert_eq!(
            bindings.get_action(&InputBinding::Key(KeyCode::Space)),
            Some(InputAction::Jump)
        );
        assert_eq!(
            bindings.get_action(&InputBinding::Mouse(1)),
            Some(InputAction::Dash)
        );
    }

    #[test]
    fn test_move_axis_from_keys() {
        let mut handler = handler();
        handler.handle_keyboard(PhysicalKey::Code(KeyCode::KeyW), ElementState::Pressed);
        handler.handle_keyboard(PhysicalKey::Code(KeyCode::KeyA), ElementState::Pressed);
        assert_eq!(handler.state.move_axis(), Vec2::new(-1.0, 1.0));

        // Opposing keys cancel out
        handler.handle_keyboard(PhysicalKey::Code(KeyCode::KeyS), ElementState::Pressed);
        assert_eq!(handler.state.move_axis(), Vec2::new(-1.0, 0.0));

        handler.handle_keyboard(PhysicalKey::Code(KeyCode::KeyA), ElementState::Released);
        assert_eq!(handler.state.move_axis(), Vec2::ZERO);
    }

    #[test]
    fn test_just_pressed_cleared_each_frame() {
        let mut handler = handler();
        handler.handle_keyboard(PhysicalKey::Code(KeyCode::Space), ElementState::Pressed);
        assert!(handler.state.is_just_pressed(InputAction::Jump));

        handler.end_frame();
        assert!(!handler.state.is_just_pressed(InputAction::Jump));
        assert!(handler.state.is_held(InputAction::Jump));

        // Key repeat does not re-trigger
        handler.handle_keyboard(PhysicalKey::Code(KeyCode::Space), ElementState::Pressed);
        assert!(!handler.state.is_just_pressed(InputAction::Jump));
    }

    #[test]
    fn test_right_mouse_dashes() {
        let mut handler = handler();
        handler.handle_mouse_button(MouseButton::Right, ElementState::Pressed);
        assert!(handler.state.is_just_pressed(InputAction::Dash));

        handler.handle_mouse_button(MouseButton::Left, ElementState::Pressed);
        assert_eq!(handler.state.just_pressed.len(), 1);
    }

    #[test]
    fn test_orbit_axis() {
        let mut handler = handler();
        handler.handle_mouse_motion((5.0, 0.0));
        assert_eq!(handler.state.orbit_axis(), 0.0); // cursor not captured

        handler.set_cursor_captured(true);
        handler.handle_mouse_motion((2.0, 0.0));
        handler.handle_keyboard(PhysicalKey::Code(KeyCode::KeyQ), ElementState::Pressed);
        assert_eq!(handler.state.orbit_axis(), 1.0);
    }

    #[test]
    fn test_rebinding_replaces_key() {
        let mut bindings = InputBindings::default();
        bindings.bind(KeyCode::Space, InputAction::Dash);
        assert_eq!(
            bindings.get_action(&InputBinding::Key(KeyCode::Space)),
            Some(InputAction::Dash)
        );
    }
}
