//! Save file storage for Pet Terminal.
//!
//! One user has at most one pet. It is stored together with a little
//! bookkeeping (creation time, format version, onboarding flag) in a single
//! JSON document.
//!
//! # Modules
//!
//! - [`document`] -- The [`SaveDocument`] shape and the [`PetStore`] trait
//! - [`json`] -- [`JsonStore`], the file-backed store used by the CLI
//! - [`memory`] -- [`MemoryStore`] for tests
//! - [`error`] -- Shared error types

pub mod document;
pub mod error;
pub mod json;
pub mod memory;

pub use document::{DOCUMENT_VERSION, PetStore, SaveDocument, SaveSettings};
pub use error::StoreError;
pub use json::{JsonStore, SAVE_FILE_NAME};
pub use memory::MemoryStore;
