//! The save document and the storage trait.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use petterm_types::PetRecord;

use crate::error::StoreError;

/// Format version written into new documents.
pub const DOCUMENT_VERSION: &str = "1.0.0";

/// Everything persisted for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveDocument {
    /// The adopted pet, if any.
    pub pet: Option<PetRecord>,
    /// Bookkeeping about the save itself.
    pub settings: SaveSettings,
}

/// Save-level bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSettings {
    /// When the document was first written.
    pub created: DateTime<Utc>,
    /// Document format version.
    pub version: String,
    /// Whether the user finished onboarding. Absent in older files.
    #[serde(default)]
    pub onboarded: bool,
}

impl SaveDocument {
    /// An empty document created at `created`.
    pub fn empty(created: DateTime<Utc>) -> Self {
        Self {
            pet: None,
            settings: SaveSettings {
                created,
                version: DOCUMENT_VERSION.to_owned(),
                onboarded: false,
            },
        }
    }
}

/// Persistence for the single pet and the onboarding flag.
///
/// Reads never fail on bad data: a document that cannot be decoded reads as
/// empty.
pub trait PetStore {
    /// The stored pet, if one exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be read.
    fn get_pet(&self) -> Result<Option<PetRecord>, StoreError>;

    /// Replace the stored pet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the write fails; the previous pet is kept.
    fn save_pet(&mut self, pet: &PetRecord) -> Result<(), StoreError>;

    /// Remove the stored pet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the write fails.
    fn delete_pet(&mut self) -> Result<(), StoreError>;

    /// Whether onboarding has not been completed yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be read.
    fn is_first_run(&self) -> Result<bool, StoreError>;

    /// Set the onboarding flag.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the write fails.
    fn set_onboarded(&mut self, onboarded: bool) -> Result<(), StoreError>;

    /// Whether a pet is stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be read.
    fn has_pet(&self) -> Result<bool, StoreError> {
        Ok(self.get_pet()?.is_some())
    }

    /// Record that onboarding is complete.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the write fails.
    fn mark_onboarded(&mut self) -> Result<(), StoreError> {
        self.set_onboarded(true)
    }

    /// Make the next run count as a first run again.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the write fails.
    fn reset_onboarding(&mut self) -> Result<(), StoreError> {
        self.set_onboarded(false)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn settings_use_camel_case_and_default_onboarded() {
        let json = r#"{"pet":null,"settings":{"created":"2026-01-01T00:00:00Z","version":"1.0.0"}}"#;
        let doc: SaveDocument = serde_json::from_str(json).unwrap();
        assert!(doc.pet.is_none());
        assert!(!doc.settings.onboarded);
        assert_eq!(doc.settings.version, DOCUMENT_VERSION);

        let out = serde_json::to_string(&doc).unwrap();
        assert!(out.contains("\"onboarded\":false"));
    }
}
