//! In-memory store for tests and dry runs.

use chrono::Utc;

use petterm_types::PetRecord;

use crate::document::{PetStore, SaveDocument};
use crate::error::StoreError;

/// [`PetStore`] holding the document in memory. Never fails.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    document: SaveDocument,
    writes: u64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            document: SaveDocument::empty(Utc::now()),
            writes: 0,
        }
    }

    /// A store that already holds `pet`.
    pub fn with_pet(pet: PetRecord) -> Self {
        let mut store = Self::new();
        store.document.pet = Some(pet);
        store
    }

    /// The current document.
    pub const fn document(&self) -> &SaveDocument {
        &self.document
    }

    /// Number of writes performed so far.
    pub const fn writes(&self) -> u64 {
        self.writes
    }

    const fn wrote(&mut self) {
        self.writes = self.writes.saturating_add(1);
    }
}

impl PetStore for MemoryStore {
    fn get_pet(&self) -> Result<Option<PetRecord>, StoreError> {
        Ok(self.document.pet.clone())
    }

    fn save_pet(&mut self, pet: &PetRecord) -> Result<(), StoreError> {
        self.document.pet = Some(pet.clone());
        self.wrote();
        Ok(())
    }

    fn delete_pet(&mut self) -> Result<(), StoreError> {
        self.document.pet = None;
        self.wrote();
        Ok(())
    }

    fn is_first_run(&self) -> Result<bool, StoreError> {
        Ok(!self.document.settings.onboarded)
    }

    fn set_onboarded(&mut self, onboarded: bool) -> Result<(), StoreError> {
        self.document.settings.onboarded = onboarded;
        self.wrote();
        Ok(())
    }
}
