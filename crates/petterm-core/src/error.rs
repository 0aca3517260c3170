//! Error types for the command service.

use petterm_pet::PetError;
use petterm_store::StoreError;

use crate::config::ConfigError;

/// Errors returned by [`PetService`](crate::PetService).
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No pet has been adopted yet.
    #[error("No pet found! Create one with: pet init")]
    NoPet,

    /// A pet already exists and adopting another would overwrite it.
    #[error("You already have a pet named {name}!")]
    PetExists {
        /// Name of the existing pet.
        name: String,
    },

    /// The save file could not be read or written.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A pet operation failed.
    #[error(transparent)]
    Pet(#[from] PetError),

    /// Settings could not be loaded or saved.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
