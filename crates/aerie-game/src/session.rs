//! Session-side collaborators: the pause overlay and player admission

use aerie_core::CharacterId;
use tracing::{debug, info};

/// Pause/menu overlay. While active, every gameplay trigger is ignored.
pub trait PauseOverlay {
    fn is_active(&self) -> bool;
    fn toggle(&mut self);
}

/// Admission of new characters into the running session
pub trait JoinSession {
    /// Decide whether `character` may join. Rejected characters are destroyed.
    fn admit(&mut self, character: CharacterId) -> bool;

    /// Release whatever the session holds for `character`
    fn leave(&mut self, _character: CharacterId) {}
}

/// Simple pause menu toggled by the pause trigger
#[derive(Debug, Clone, Default)]
pub struct PauseMenu {
    open: bool,
}

impl PauseMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.open = true;
    }
}

impl PauseOverlay for PauseMenu {
    fn is_active(&self) -> bool {
        self.open
    }

    fn toggle(&mut self) {
        self.open = !self.open;
        info!("Pause menu {}", if self.open { "opened" } else { "closed" });
    }
}

/// Fixed number of player slots
#[derive(Debug, Clone)]
pub struct SessionSlots {
    /// Maximum number of simultaneously admitted characters
    pub max_players: usize,
    admitted: Vec<CharacterId>,
}

impl SessionSlots {
    pub fn new(max_players: usize) -> Self {
        Self {
            max_players,
            admitted: Vec::new(),
        }
    }

    /// Number of occupied slots
    pub fn occupied(&self) -> usize {
        self.admitted.len()
    }
}

impl Default for SessionSlots {
    fn default() -> Self {
        Self::new(4)
    }
}

impl JoinSession for SessionSlots {
    fn admit(&mut self, character: CharacterId) -> bool {
        if self.admitted.contains(&character) {
            return true;
        }
        if self.admitted.len() >= self.max_players {
            debug!("Session full ({} slots), rejecting {}", self.max_players, character);
            return false;
        }
        self.admitted.push(character);
        true
    }

    fn leave(&mut self, character: CharacterId) {
        self.admitted.retain(|c| *c != character);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pause_toggle() {
        let mut pause = PauseMenu::new();
        assert!(!pause.is_active());
        pause.toggle();
        assert!(pause.is_active());
        pause.toggle();
        assert!(!pause.is_active());
    }

    #[test]
    fn test_session_slots_fill_up() {
        let mut slots = SessionSlots::new(1);
        let first = CharacterId::new();
        let second = CharacterId::new();

        assert!(slots.admit(first));
        assert!(!slots.admit(second));

        slots.leave(first);
        assert!(slots.admit(second));
        assert_eq!(slots.occupied(), 1);
    }
}
