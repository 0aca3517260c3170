//! Pet state, progression, decay, items and care for Pet Terminal.
//!
//! This crate is the logic layer: everything that operates on a pet without
//! touching I/O. It sits between `petterm-types` (the data) and the
//! store/core/CLI crates (persistence and orchestration). Every operation
//! that depends on the time takes `now` as a parameter.
//!
//! # Modules
//!
//! - [`actions`] -- Built-in action effects and guards
//! - [`care`] -- Need assessment, one-click care, restocking ([`CarePlanner`])
//! - [`catalog`] -- The item catalog ([`ItemCatalog`])
//! - [`config`] -- Decay rates and care thresholds ([`DecayConfig`], [`CareThresholds`])
//! - [`decay`] -- Time-based stat decay ([`TimeDecay`])
//! - [`error`] -- Error types ([`PetError`])
//! - [`inventory`] -- Item stack operations
//! - [`level`] -- Experience curve and level titles
//! - [`pet`] -- The [`Pet`] aggregate
//! - [`shop`] -- Prices and purchases ([`Shop`])
//! - [`stats`] -- Clamping, mood and care checks

pub mod actions;
pub mod care;
pub mod catalog;
pub mod config;
pub mod decay;
pub mod error;
pub mod inventory;
pub mod level;
pub mod pet;
pub mod shop;
pub mod stats;

pub use care::{AUTO_PURCHASE_RULES, AutoPurchaseRule, CarePlanner};
pub use catalog::ItemCatalog;
pub use config::{CareThresholds, DecayConfig};
pub use decay::{TimeDecay, format_duration, hours_between, is_abandoned, severity, time_message};
pub use error::PetError;
pub use level::{MAX_LEVEL, calculate_new_level, level_title, xp_for_level};
pub use pet::{DEFAULT_NAME, MIN_SYNC_HOURS, Pet};
pub use shop::Shop;
pub use stats::{STAT_MAX, compute_mood, needs_care};
