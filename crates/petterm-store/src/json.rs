//! JSON file store.
//!
//! The whole document lives in `<dir>/pet.json`. Every write serializes the
//! full document to `pet.json.tmp` and renames it over the real file, so a
//! crash leaves either the old or the new document, never half of one.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, info, warn};

use petterm_types::PetRecord;

use crate::document::{PetStore, SaveDocument};
use crate::error::StoreError;

/// File name of the save document inside the data directory.
pub const SAVE_FILE_NAME: &str = "pet.json";

const TEMP_SUFFIX: &str = "tmp";

/// [`PetStore`] backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Open the store in `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory cannot be created.
    pub fn open(dir: &Path) -> Result<Self, StoreError> {
        fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;
        Ok(Self {
            path: dir.join(SAVE_FILE_NAME),
        })
    }

    /// Path of the save document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document. A missing, empty or undecodable file reads as a
    /// fresh empty document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] for read failures other than "not found".
    pub fn read_document(&self) -> Result<SaveDocument, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Ok(SaveDocument::empty(Utc::now()));
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };
        if text.trim().is_empty() {
            return Ok(SaveDocument::empty(Utc::now()));
        }
        match serde_json::from_str(&text) {
            Ok(doc) => Ok(doc),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "save file is corrupt, treating as empty");
                Ok(SaveDocument::empty(Utc::now()))
            }
        }
    }

    /// Replace the document on disk.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization, the temp write or the rename
    /// fails. The previous document is untouched in that case.
    pub fn write_document(&self, doc: &SaveDocument) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(doc)?;
        let temp = self.path.with_extension(format!("json.{TEMP_SUFFIX}"));
        fs::write(&temp, json).map_err(|e| StoreError::io(&temp, e))?;
        if let Err(e) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(StoreError::io(&self.path, e));
        }
        debug!(path = %self.path.display(), "save file written");
        Ok(())
    }

    fn update(&self, f: impl FnOnce(&mut SaveDocument)) -> Result<(), StoreError> {
        let mut doc = self.read_document()?;
        f(&mut doc);
        self.write_document(&doc)
    }
}

impl PetStore for JsonStore {
    fn get_pet(&self) -> Result<Option<PetRecord>, StoreError> {
        Ok(self.read_document()?.pet)
    }

    fn save_pet(&mut self, pet: &PetRecord) -> Result<(), StoreError> {
        self.update(|doc| doc.pet = Some(pet.clone()))?;
        info!(name = %pet.name, "pet saved");
        Ok(())
    }

    fn delete_pet(&mut self) -> Result<(), StoreError> {
        self.update(|doc| doc.pet = None)?;
        info!("pet deleted");
        Ok(())
    }

    fn is_first_run(&self) -> Result<bool, StoreError> {
        Ok(!self.read_document()?.settings.onboarded)
    }

    fn set_onboarded(&mut self, onboarded: bool) -> Result<(), StoreError> {
        self.update(|doc| doc.settings.onboarded = onboarded)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::DateTime;
    use petterm_types::{Mood, PetId, PetStats, Species};

    use super::*;

    struct TempDir(PathBuf);

    impl TempDir {
        fn new() -> Self {
            let dir = std::env::temp_dir().join(format!("petterm-store-{}", uuid::Uuid::new_v4()));
            Self(dir)
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    fn record() -> PetRecord {
        let now = DateTime::parse_from_rfc3339("2026-02-01T09:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        PetRecord {
            id: PetId::new(),
            name: String::from("Mochi"),
            species: Species::Rabbit,
            level: 3,
            experience: 900,
            stats: PetStats::FULL,
            mood: Mood::Happy,
            is_sleeping: false,
            birth_date: now,
            last_interaction: now,
            last_save_time: now,
            last_updated: now,
            total_interactions: 12,
            inventory: std::collections::BTreeMap::from([(String::from("fish"), 2)]),
            coins: 75,
            coin_history: Vec::new(),
            last_rewarded_commit_short_hash: Some(String::from("abc1234")),
            git_commit_count: 4,
            git_streak: 2,
            last_git_reward_date: None,
        }
    }

    #[test]
    fn empty_directory_has_no_pet() {
        let dir = TempDir::new();
        let store = JsonStore::open(&dir.0).unwrap();
        assert!(!store.has_pet().unwrap());
        assert!(store.is_first_run().unwrap());
        assert!(!store.path().exists());
    }

    #[test]
    fn save_reload_delete() {
        let dir = TempDir::new();
        let mut store = JsonStore::open(&dir.0).unwrap();
        let pet = record();
        store.save_pet(&pet).unwrap();

        let reopened = JsonStore::open(&dir.0).unwrap();
        assert_eq!(reopened.get_pet().unwrap(), Some(pet));
        assert!(!dir.0.join("pet.json.tmp").exists());

        store.delete_pet().unwrap();
        assert!(!reopened.has_pet().unwrap());
        assert_eq!(reopened.read_document().unwrap().settings.version, "1.0.0");
    }

    #[test]
    fn onboarding_flag_survives_pet_writes() {
        let dir = TempDir::new();
        let mut store = JsonStore::open(&dir.0).unwrap();
        store.mark_onboarded().unwrap();
        store.save_pet(&record()).unwrap();
        assert!(!store.is_first_run().unwrap());
        store.reset_onboarding().unwrap();
        assert!(store.is_first_run().unwrap());
        assert!(store.has_pet().unwrap());
    }

    #[test]
    fn corrupt_file_reads_as_no_pet() {
        let dir = TempDir::new();
        let store = JsonStore::open(&dir.0).unwrap();
        fs::write(store.path(), "{ not json").unwrap();
        assert_eq!(store.get_pet().unwrap(), None);
        fs::write(store.path(), "").unwrap();
        assert_eq!(store.get_pet().unwrap(), None);
    }

    #[test]
    fn document_uses_camel_case_keys() {
        let dir = TempDir::new();
        let mut store = JsonStore::open(&dir.0).unwrap();
        store.save_pet(&record()).unwrap();
        let text = fs::read_to_string(store.path()).unwrap();
        assert!(text.contains("\"lastSaveTime\""));
        assert!(text.contains("\"settings\""));
        assert!(text.contains("\"onboarded\""));
    }
}
