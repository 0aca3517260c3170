//! Core entity structs: stats, the persisted pet record, items and commits.
//!
//! Everything here is plain data. Behaviour lives in `petterm-pet` and
//! `petterm-git`; this crate only fixes the shapes that are persisted to the
//! save file and exported to `TypeScript`.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{CoinReason, ItemType, Mood, Rarity, Species, Stat};
use crate::ids::PetId;

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// The five bounded pet statistics. Every value lives in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PetStats {
    /// Fullness. 100 is completely full.
    pub hunger: u32,
    /// Happiness.
    pub happiness: u32,
    /// Health.
    pub health: u32,
    /// Cleanliness.
    pub cleanliness: u32,
    /// Energy.
    pub energy: u32,
}

impl PetStats {
    /// Every stat at 100, the state of a freshly adopted pet.
    pub const FULL: Self = Self {
        hunger: 100,
        happiness: 100,
        health: 100,
        cleanliness: 100,
        energy: 100,
    };

    /// Read one stat.
    pub const fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Hunger => self.hunger,
            Stat::Happiness => self.happiness,
            Stat::Health => self.health,
            Stat::Cleanliness => self.cleanliness,
            Stat::Energy => self.energy,
        }
    }

    /// Mutable access to one stat. Callers are responsible for clamping.
    pub const fn get_mut(&mut self, stat: Stat) -> &mut u32 {
        match stat {
            Stat::Hunger => &mut self.hunger,
            Stat::Happiness => &mut self.happiness,
            Stat::Health => &mut self.health,
            Stat::Cleanliness => &mut self.cleanliness,
            Stat::Energy => &mut self.energy,
        }
    }
}

impl Default for PetStats {
    fn default() -> Self {
        Self::FULL
    }
}

/// A signed change to one stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct StatChange {
    /// Which stat changed.
    pub stat: Stat,
    /// Requested delta. The applied change may be smaller after clamping.
    pub delta: i32,
}

impl StatChange {
    /// Shorthand constructor.
    pub const fn new(stat: Stat, delta: i32) -> Self {
        Self { stat, delta }
    }
}

// ---------------------------------------------------------------------------
// Inventory and coins
// ---------------------------------------------------------------------------

/// One owned item stack. Quantities are always positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct InventoryEntry {
    /// Catalog id of the item.
    pub item_id: String,
    /// How many are owned.
    pub quantity: u32,
}

/// One coin ledger entry. Negative amounts are spending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CoinEntry {
    /// Signed amount.
    pub amount: i64,
    /// Why the coins moved.
    pub reason: CoinReason,
    /// When the entry was recorded.
    pub timestamp: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Pet record
// ---------------------------------------------------------------------------

/// The complete persisted state of the single pet in a save file.
///
/// Field names serialize in `camelCase`. The git tracking fields also accept
/// the names used by older save files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct PetRecord {
    /// Identity.
    pub id: PetId,
    /// Name chosen at adoption.
    pub name: String,
    /// Species chosen at adoption.
    pub species: Species,
    /// Current level, at least 1.
    pub level: u32,
    /// Cumulative experience. Never reset by a level-up.
    pub experience: u64,
    /// Current stats.
    pub stats: PetStats,
    /// Mood as of the last successful action or sync.
    pub mood: Mood,
    /// Whether the pet is asleep.
    pub is_sleeping: bool,
    /// Adoption time.
    pub birth_date: DateTime<Utc>,
    /// Time of the last user interaction.
    pub last_interaction: DateTime<Utc>,
    /// Time the record was last written to storage.
    pub last_save_time: DateTime<Utc>,
    /// Time decay was last applied up to.
    pub last_updated: DateTime<Utc>,
    /// Number of interactions so far.
    pub total_interactions: u64,
    /// Owned items keyed by catalog id. Persisted as a list of entries.
    #[serde(default, with = "inventory_entries")]
    #[ts(as = "Vec<InventoryEntry>")]
    pub inventory: BTreeMap<String, u32>,
    /// Coin balance.
    #[serde(default)]
    pub coins: u64,
    /// Most recent coin ledger entries, oldest first.
    #[serde(default)]
    pub coin_history: Vec<CoinEntry>,
    /// Short hash of the newest commit that has been rewarded.
    #[serde(default, alias = "lastGitCommit")]
    pub last_rewarded_commit_short_hash: Option<String>,
    /// Number of commits rewarded so far.
    #[serde(default)]
    pub git_commit_count: u64,
    /// Consecutive commit days.
    #[serde(default)]
    pub git_streak: u32,
    /// Calendar date used for the last streak update.
    #[serde(default, alias = "lastGitDate")]
    pub last_git_reward_date: Option<NaiveDate>,
}

/// Serde adapter persisting the inventory map as `[{itemId, quantity}]`.
mod inventory_entries {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer, Serializer};

    use super::InventoryEntry;

    pub fn serialize<S: Serializer>(
        inventory: &BTreeMap<String, u32>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(inventory.iter().map(|(item_id, quantity)| InventoryEntry {
            item_id: item_id.clone(),
            quantity: *quantity,
        }))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<String, u32>, D::Error> {
        let entries = Vec::<InventoryEntry>::deserialize(deserializer)?;
        let mut inventory = BTreeMap::new();
        // Zero-quantity stacks are dropped; duplicate stacks are merged.
        for entry in entries.into_iter().filter(|e| e.quantity > 0) {
            let slot: &mut u32 = inventory.entry(entry.item_id).or_insert(0);
            *slot = slot.saturating_add(entry.quantity);
        }
        Ok(inventory)
    }
}

// ---------------------------------------------------------------------------
// Item catalog entries
// ---------------------------------------------------------------------------

/// Sparse stat effect of an item. Zero fields have no effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "bindings/")]
pub struct ItemEffect {
    /// Hunger delta.
    pub hunger: i32,
    /// Happiness delta.
    pub happiness: i32,
    /// Health delta.
    pub health: i32,
    /// Cleanliness delta.
    pub cleanliness: i32,
    /// Energy delta.
    pub energy: i32,
}

impl ItemEffect {
    /// The non-zero deltas, in canonical stat order.
    pub fn changes(&self) -> Vec<StatChange> {
        [
            StatChange::new(Stat::Hunger, self.hunger),
            StatChange::new(Stat::Happiness, self.happiness),
            StatChange::new(Stat::Health, self.health),
            StatChange::new(Stat::Cleanliness, self.cleanliness),
            StatChange::new(Stat::Energy, self.energy),
        ]
        .into_iter()
        .filter(|change| change.delta != 0)
        .collect()
    }
}

/// A static catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ItemDefinition {
    /// Catalog id, e.g. `"fish"`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Category.
    #[serde(rename = "type")]
    pub item_type: ItemType,
    /// Rarity tier.
    pub rarity: Rarity,
    /// One-line description.
    pub description: String,
    /// Emoji shown in lists.
    pub emoji: String,
    /// Stat effect when used.
    pub effect: ItemEffect,
    /// Experience granted when used.
    pub xp_reward: u64,
    /// Shop price in coins. `None` for items that cannot be bought.
    pub price: Option<u64>,
}

// ---------------------------------------------------------------------------
// Commits
// ---------------------------------------------------------------------------

/// A commit read from the version-control log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct CommitInfo {
    /// Full hash.
    pub hash: String,
    /// First seven characters of the hash.
    pub short_hash: String,
    /// Subject line.
    pub message: String,
    /// Author name.
    pub author: String,
    /// Author date, in the author's own UTC offset.
    pub date: DateTime<FixedOffset>,
    /// Files touched, when known.
    pub files_changed: Option<u32>,
    /// Lines inserted, when known.
    pub lines_added: Option<u32>,
    /// Lines removed, when known.
    pub lines_deleted: Option<u32>,
}

/// Diff size of one commit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ChangeStats {
    /// Files touched.
    pub files_changed: u32,
    /// Lines inserted.
    pub lines_added: u32,
    /// Lines removed.
    pub lines_deleted: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> PetRecord {
        let now = DateTime::parse_from_rfc3339("2026-03-01T12:00:00Z")
            .map(|d| d.with_timezone(&Utc))
            .unwrap_or_default();
        let mut inventory = BTreeMap::new();
        inventory.insert(String::from("fish"), 3);
        inventory.insert(String::from("ball"), 2);
        PetRecord {
            id: PetId::new(),
            name: String::from("Buddy"),
            species: Species::Cat,
            level: 1,
            experience: 0,
            stats: PetStats::FULL,
            mood: Mood::Happy,
            is_sleeping: false,
            birth_date: now,
            last_interaction: now,
            last_save_time: now,
            last_updated: now,
            total_interactions: 0,
            inventory,
            coins: 50,
            coin_history: Vec::new(),
            last_rewarded_commit_short_hash: None,
            git_commit_count: 0,
            git_streak: 0,
            last_git_reward_date: None,
        }
    }

    #[test]
    fn inventory_persists_as_entry_list() {
        let json = serde_json::to_value(sample_record()).unwrap_or_default();
        let inventory = json.get("inventory").cloned().unwrap_or_default();
        assert_eq!(
            inventory,
            serde_json::json!([
                {"itemId": "ball", "quantity": 2},
                {"itemId": "fish", "quantity": 3}
            ])
        );
    }

    #[test]
    fn zero_and_duplicate_stacks_are_normalised_on_read() {
        let mut json = serde_json::to_value(sample_record()).unwrap_or_default();
        if let Some(obj) = json.as_object_mut() {
            obj.insert(
                String::from("inventory"),
                serde_json::json!([
                    {"itemId": "fish", "quantity": 1},
                    {"itemId": "fish", "quantity": 2},
                    {"itemId": "soap", "quantity": 0}
                ]),
            );
        }
        let record: Result<PetRecord, _> = serde_json::from_value(json);
        assert!(record.is_ok());
        if let Ok(record) = record {
            assert_eq!(record.inventory.get("fish"), Some(&3));
            assert!(!record.inventory.contains_key("soap"));
        }
    }

    #[test]
    fn legacy_git_field_names_are_accepted() {
        let mut json = serde_json::to_value(sample_record()).unwrap_or_default();
        if let Some(obj) = json.as_object_mut() {
            obj.remove("lastRewardedCommitShortHash");
            obj.remove("lastGitRewardDate");
            obj.insert(String::from("lastGitCommit"), serde_json::json!("abc1234"));
            obj.insert(String::from("lastGitDate"), serde_json::json!("2026-02-28"));
        }
        let record: Result<PetRecord, _> = serde_json::from_value(json);
        assert!(record.is_ok());
        if let Ok(record) = record {
            assert_eq!(record.last_rewarded_commit_short_hash.as_deref(), Some("abc1234"));
            assert_eq!(record.last_git_reward_date, NaiveDate::from_ymd_opt(2026, 2, 28));
        }
    }

    #[test]
    fn item_effect_changes_skip_zero_fields() {
        let effect = ItemEffect {
            happiness: 20,
            energy: -15,
            ..ItemEffect::default()
        };
        assert_eq!(
            effect.changes(),
            vec![
                StatChange::new(Stat::Happiness, 20),
                StatChange::new(Stat::Energy, -15),
            ]
        );
    }

    #[test]
    fn stats_get_mut_targets_the_named_stat() {
        let mut stats = PetStats::FULL;
        *stats.get_mut(Stat::Cleanliness) = 40;
        assert_eq!(stats.get(Stat::Cleanliness), 40);
        assert_eq!(stats.get(Stat::Energy), 100);
    }
}
