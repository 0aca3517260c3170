//! Result objects handed to the presentation layer.
//!
//! These are plain data with no behaviour so the CLI and the IDE extension
//! can format them however they like.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{CareAction, CommitType, Rejection, Stat};
use crate::structs::{PetStats, StatChange};

/// Outcome of a pet action (feed, play, clean, heal, sleep, use item).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ActionResult {
    /// Whether the action was applied.
    pub success: bool,
    /// Message suitable for display.
    pub message: String,
    /// Deltas that were applied. Empty when rejected.
    pub stat_changes: Vec<StatChange>,
    /// Experience granted. Zero when rejected.
    pub xp_gained: u64,
    /// Whether the pet gained at least one level.
    pub level_up: bool,
    /// Level after the action, when it succeeded.
    pub new_level: Option<u32>,
    /// Why the action was refused, when it was.
    pub rejection: Option<Rejection>,
}

impl ActionResult {
    /// A refused action: nothing changed.
    pub fn rejected(rejection: Rejection, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            stat_changes: Vec::new(),
            xp_gained: 0,
            level_up: false,
            new_level: None,
            rejection: Some(rejection),
        }
    }
}

/// Outcome of bringing a pet's stats up to date with elapsed time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct TimeSyncResult {
    /// Elapsed time in hours.
    #[ts(as = "String")]
    pub hours_passed: Decimal,
    /// Non-zero deltas produced by decay.
    pub stat_changes: Vec<StatChange>,
    /// Whether critical stats caused extra health loss.
    pub health_decay_triggered: bool,
    /// Advisory warnings about low stats.
    pub warnings: Vec<String>,
    /// Stats after decay.
    pub new_stats: PetStats,
}

/// Reward granted for one commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct CommitReward {
    /// Short hash of the commit.
    pub short_hash: String,
    /// Commit subject line.
    pub message: String,
    /// Classification.
    #[serde(rename = "type")]
    pub commit_type: CommitType,
    /// Coins granted, bonuses included.
    pub coins: u64,
    /// Experience granted, bonuses included.
    pub xp: u64,
    /// Bonus descriptions for display.
    pub bonuses: Vec<String>,
}

/// Outcome of one commit reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct CommitReport {
    /// False when the log could not be read. Nothing was changed in that case.
    pub success: bool,
    /// Number of commits rewarded by this pass.
    pub new_commits: u64,
    /// Coins granted, streak bonus included.
    pub total_coins: u64,
    /// Experience granted.
    pub total_xp: u64,
    /// Streak after this pass.
    pub streak: u32,
    /// Per-commit rewards, oldest first.
    pub rewards: Vec<CommitReward>,
    /// Failure description, when `success` is false.
    pub error: Option<String>,
}

impl CommitReport {
    /// A failed pass that changed nothing.
    pub fn failed(streak: u32, error: impl Into<String>) -> Self {
        Self {
            success: false,
            new_commits: 0,
            total_coins: 0,
            total_xp: 0,
            streak,
            rewards: Vec::new(),
            error: Some(error.into()),
        }
    }

    /// A successful pass that found nothing new.
    pub const fn nothing_new(streak: u32) -> Self {
        Self {
            success: true,
            new_commits: 0,
            total_coins: 0,
            total_xp: 0,
            streak,
            rewards: Vec::new(),
            error: None,
        }
    }
}

/// A detected stat deficiency and the item that would address it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct CareNeed {
    /// Deficient stat.
    pub stat: Stat,
    /// Threshold the stat fell below.
    pub threshold: u32,
    /// Remedial action.
    pub action: CareAction,
    /// Preferred item id.
    pub item_id: String,
    /// Preferred item display name.
    pub item_name: String,
    /// Higher runs first.
    pub priority: u32,
}

/// Before and after values of one stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct StatTransition {
    /// Stat observed.
    pub stat: Stat,
    /// Value before.
    pub from: u32,
    /// Value after.
    pub to: u32,
}

/// Outcome of one care step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct CareActionResult {
    /// Action attempted.
    pub action: CareAction,
    /// Item used, or the preferred item when none was available.
    pub item_id: String,
    /// Display name of `item_id`.
    pub item_name: String,
    /// Whether the item was used.
    pub success: bool,
    /// Change to the deficient stat. Empty when nothing was used.
    pub stat_changes: Vec<StatTransition>,
    /// Why the step failed, when it did.
    pub reason: Option<String>,
}

/// Outcome of one-click care.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct CareResult {
    /// True when at least one step succeeded.
    pub success: bool,
    /// Every attempted step, in priority order.
    pub actions_taken: Vec<CareActionResult>,
    /// Stats before care.
    pub stats_before: PetStats,
    /// Stats after care.
    pub stats_after: PetStats,
    /// Coins spent by care itself. Restocking is reported separately.
    pub coins_spent: u64,
    /// Items consumed.
    pub items_used: u32,
}

/// One purchased stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct PurchasedItem {
    /// Catalog id.
    pub item_id: String,
    /// Display name.
    pub item_name: String,
    /// Units bought.
    pub quantity: u32,
    /// Coins paid.
    pub cost: u64,
}

/// Outcome of a shop purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct PurchaseResult {
    /// Whether coins were spent and items added.
    pub success: bool,
    /// Message suitable for display.
    pub message: String,
    /// What was bought, on success.
    pub purchased: Option<PurchasedItem>,
    /// Balance after the attempt.
    pub balance: u64,
    /// Why the purchase was refused, when it was.
    pub rejection: Option<Rejection>,
}

/// Outcome of automatic restocking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct AutoPurchaseResult {
    /// Whether anything was bought.
    pub purchased: bool,
    /// Stacks bought, in rule order.
    pub items: Vec<PurchasedItem>,
    /// Coins spent in total.
    pub total_cost: u64,
}
