//! Commit rewards for Pet Terminal.
//!
//! The pet is paid for the owner's commits. This crate reads the commit log
//! through the [`CommitLog`] seam, classifies each commit and credits the
//! pet in one atomic pass.
//!
//! # Modules
//!
//! - [`classify`] -- Commit classification, bonuses and streak rules
//! - [`error`] -- Error types ([`GitError`])
//! - [`log`] -- The [`CommitLog`] trait, the `git` CLI reader and a scripted log for tests
//! - [`reconcile`] -- The reward pass ([`CommitReconciler`])

pub mod classify;
pub mod error;
pub mod log;
pub mod reconcile;

pub use classify::{base_reward, classify, companionship, is_large, is_night_owl, next_streak, streak_bonus};
pub use error::GitError;
pub use log::{CommitLog, GitCli, ScriptedCommitLog};
pub use reconcile::{CommitReconciler, DEFAULT_BACKFILL_LIMIT};
