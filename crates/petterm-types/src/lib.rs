//! Shared type definitions for the Pet Terminal virtual pet.
//!
//! This crate is the single source of truth for the data that crosses crate
//! boundaries: the persisted pet record, catalog entries, commits, and the
//! result objects returned to the presentation layer. Types flow downstream
//! to `TypeScript` via `ts-rs` for the IDE extension.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers
//! - [`enums`] -- Species, moods, stats, item categories, coin reasons, commit types
//! - [`structs`] -- Stats, the persisted [`PetRecord`], items and commits
//! - [`results`] -- Result objects for actions, syncs, commits, care and the shop

pub mod enums;
pub mod ids;
pub mod results;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{
    CareAction, CoinReason, CommitType, DecaySeverity, ItemType, LevelTitle, Mood, Rarity,
    Rejection, Species, Stat, UnknownVariant,
};
pub use ids::PetId;
pub use results::{
    ActionResult, AutoPurchaseResult, CareActionResult, CareNeed, CareResult, CommitReport,
    CommitReward, PurchaseResult, PurchasedItem, StatTransition, TimeSyncResult,
};
pub use structs::{
    ChangeStats, CoinEntry, CommitInfo, InventoryEntry, ItemDefinition, ItemEffect, PetRecord,
    PetStats, StatChange,
};
