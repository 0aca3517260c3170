//! Built-in care actions: their stat effects and the guards in front of them.
//!
//! # Submodules
//!
//! - [`effects`] -- Stat deltas and XP per action, including sleep and wake.
//! - [`validation`] -- Guards that refuse an action without touching the pet.

pub mod effects;
pub mod validation;
