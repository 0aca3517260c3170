//! Settings and command orchestration for Pet Terminal.
//!
//! The CLI owns the terminal; this crate owns what a command means. Each
//! command is one read-sync-mutate-write transaction against a
//! [`PetStore`](petterm_store::PetStore), configured by [`Settings`].
//!
//! # Modules
//!
//! - [`config`] -- `config.yaml` loading, validation and environment overrides
//! - [`error`] -- [`CoreError`]
//! - [`service`] -- [`PetService`] and its command results

pub mod config;
pub mod error;
pub mod service;

pub use config::{AutoCareSettings, ConfigError, GitSettings, Settings, resolve_data_dir};
pub use error::CoreError;
pub use service::{CareOutcome, Outcome, PetService};
