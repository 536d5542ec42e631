//! Registry of active characters
//!
//! Owned by whatever spawns characters; other systems use it to look up or
//! broadcast to every live controller in spawn order.

use aerie_core::CharacterId;

use crate::error::RegistryError;

/// Ordered set of currently active characters
#[derive(Debug, Clone, Default)]
pub struct CharacterRegistry {
    characters: Vec<CharacterId>,
}

impl CharacterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a character. A character can only be registered once.
    pub fn register(&mut self, id: CharacterId) -> Result<(), RegistryError> {
        if self.contains(id) {
            return Err(RegistryError::AlreadyRegistered(id));
        }
        self.characters.push(id);
        Ok(())
    }

    /// Remove a character, keeping the order of the rest
    pub fn deregister(&mut self, id: CharacterId) -> Result<(), RegistryError> {
        let index = self
            .characters
            .iter()
            .position(|c| *c == id)
            .ok_or(RegistryError::NotRegistered(id))?;
        self.characters.remove(index);
        Ok(())
    }

    pub fn contains(&self, id: CharacterId) -> bool {
        self.characters.contains(&id)
    }

    /// Iterate characters in spawn order
    pub fn iter(&self) -> impl Iterator<Item = CharacterId> + '_ {
        self.characters.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_preserves_order() {
        let mut registry = CharacterRegistry::new();
        let a = CharacterId::new();
        let b = CharacterId::new();
        registry.register(a).unwrap();
        registry.register(b).unwrap();

        assert_eq!(registry.iter().collect::<Vec<_>>(), vec![a, b]);
        assert!(registry.contains(b));
    }

    #[test]
    fn duplicate_register_rejected() {
        let mut registry = CharacterRegistry::new();
        let a = CharacterId::new();
        registry.register(a).unwrap();
        assert_eq!(registry.register(a), Err(RegistryError::AlreadyRegistered(a)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn deregister_unknown_fails() {
        let mut registry = CharacterRegistry::new();
        let a = CharacterId::new();
        assert_eq!(registry.deregister(a), Err(RegistryError::NotRegistered(a)));

        registry.register(a).unwrap();
        registry.deregister(a).unwrap();
        assert!(registry.is_empty());
    }
}
