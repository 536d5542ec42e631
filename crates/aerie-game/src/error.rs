use aerie_core::CharacterId;
use thiserror::Error;

/// Errors from the registry of active characters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("character {0} is already registered")]
    AlreadyRegistered(CharacterId),

    #[error("character {0} is not registered")]
    NotRegistered(CharacterId),
}

/// Errors that can occur while spawning a character
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpawnError {
    #[error("character {0} was not admitted by the session")]
    NotAdmitted(CharacterId),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
