//! The [`Pet`] aggregate.
//!
//! `Pet` owns one [`PetRecord`] and is the only thing allowed to mutate it.
//! Every mutating method takes the current time explicitly, so behaviour is
//! a pure function of `(record, inputs, now)` and tests need no clock.
//!
//! Mutations are all-or-nothing: a method either returns `Ok` with the
//! record fully updated, or returns an error with the record exactly as it
//! was before the call. Guard rejections are `Ok` results with
//! `success == false` and no mutation.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info};

use petterm_ledger::{CoinLedger, STARTING_COINS, coin_reward};
use petterm_types::{
    ActionResult, CareAction, CoinEntry, CoinReason, ItemDefinition, ItemType, LevelTitle, Mood, PetId,
    PetRecord, PetStats, Rejection, Species, StatChange, TimeSyncResult,
};

use crate::actions::effects::{self, SLEEP_XP, WAKE_EFFECT, WAKE_XP};
use crate::actions::validation::{rejection_message, validate};
use crate::catalog::ItemCatalog;
use crate::decay::{TimeDecay, hours_between};
use crate::error::PetError;
use crate::inventory;
use crate::level::{
    LEVEL_UP_STAT_BOOST, calculate_new_level, level_progress_percent, level_title,
    xp_to_next_level,
};
use crate::stats::{apply_changes, boost_all, clamp_stat, compute_mood, needs_care};

/// Elapsed time below which a sync is skipped (about one minute).
pub const MIN_SYNC_HOURS: Decimal = Decimal::from_parts(17, 0, 0, false, 3);

/// Name given to a pet when the player does not choose one.
pub const DEFAULT_NAME: &str = "Buddy";

/// A virtual pet and everything it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pet {
    record: PetRecord,
}

impl Pet {
    /// Adopt a new pet at `now` with full stats, the starter inventory and
    /// the starting coin balance.
    pub fn adopt(name: &str, species: Species, now: DateTime<Utc>) -> Self {
        let trimmed = name.trim();
        let name = if trimmed.is_empty() { DEFAULT_NAME } else { trimmed };
        info!(name, %species, "pet adopted");
        Self {
            record: PetRecord {
                id: PetId::new(),
                name: name.to_owned(),
                species,
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
                inventory: inventory::starting_inventory(),
                coins: STARTING_COINS,
                coin_history: Vec::new(),
                last_rewarded_commit_short_hash: None,
                git_commit_count: 0,
                git_streak: 0,
                last_git_reward_date: None,
            },
        }
    }

    /// Wrap a loaded record, repairing values outside their valid range.
    pub fn from_record(mut record: PetRecord) -> Self {
        record.level = record.level.max(1);
        for stat in petterm_types::Stat::ALL {
            let slot = record.stats.get_mut(stat);
            *slot = clamp_stat(i64::from(*slot));
        }
        Self { record }
    }

    /// The underlying record.
    pub const fn record(&self) -> &PetRecord {
        &self.record
    }

    /// Give up the aggregate and return the record for persistence.
    pub fn into_record(self) -> PetRecord {
        self.record
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// The pet's name.
    pub fn name(&self) -> &str {
        &self.record.name
    }

    /// The pet's species.
    pub const fn species(&self) -> Species {
        self.record.species
    }

    /// Current level.
    pub const fn level(&self) -> u32 {
        self.record.level
    }

    /// Cumulative experience.
    pub const fn experience(&self) -> u64 {
        self.record.experience
    }

    /// Current stats.
    pub const fn stats(&self) -> &PetStats {
        &self.record.stats
    }

    /// Current mood.
    pub const fn mood(&self) -> Mood {
        self.record.mood
    }

    /// Whether the pet is asleep.
    pub const fn is_sleeping(&self) -> bool {
        self.record.is_sleeping
    }

    /// Coin balance.
    pub const fn coins(&self) -> u64 {
        self.record.coins
    }

    /// Retained coin history, oldest first.
    pub fn coin_history(&self) -> &[CoinEntry] {
        &self.record.coin_history
    }

    /// Owned items keyed by catalog id.
    pub const fn inventory(&self) -> &BTreeMap<String, u32> {
        &self.record.inventory
    }

    /// Quantity of one item.
    pub fn quantity(&self, item_id: &str) -> u32 {
        inventory::quantity(&self.record.inventory, item_id)
    }

    /// Owned items of one category with their quantities, in catalog order.
    /// Ids the catalog does not know are skipped.
    pub fn owned_of_type<'c>(&self, catalog: &'c ItemCatalog, item_type: ItemType) -> Vec<(&'c ItemDefinition, u32)> {
        catalog
            .by_type(item_type)
            .filter_map(|item| {
                let quantity = self.quantity(&item.id);
                (quantity > 0).then_some((item, quantity))
            })
            .collect()
    }

    /// Whether any stat is low enough to warrant attention.
    pub const fn needs_care(&self) -> bool {
        needs_care(&self.record.stats)
    }

    /// Title band for the current level.
    pub const fn title(&self) -> LevelTitle {
        level_title(self.record.level)
    }

    /// Experience still needed for the next level.
    pub fn xp_to_next_level(&self) -> u64 {
        xp_to_next_level(self.record.level, self.record.experience)
    }

    /// Rounded percentage through the current level.
    pub fn level_progress_percent(&self) -> u8 {
        level_progress_percent(self.record.level, self.record.experience)
    }

    /// Whole days since adoption.
    pub fn age_days(&self, now: DateTime<Utc>) -> i64 {
        now.signed_duration_since(self.record.birth_date)
            .num_days()
            .max(0)
    }

    /// Consecutive commit days.
    pub const fn git_streak(&self) -> u32 {
        self.record.git_streak
    }

    /// Number of commits rewarded so far.
    pub const fn git_commit_count(&self) -> u64 {
        self.record.git_commit_count
    }

    /// Short hash of the newest rewarded commit.
    pub fn last_rewarded_commit(&self) -> Option<&str> {
        self.record.last_rewarded_commit_short_hash.as_deref()
    }

    /// Calendar date of the last streak update.
    pub const fn last_git_reward_date(&self) -> Option<NaiveDate> {
        self.record.last_git_reward_date
    }

    // -----------------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------------

    /// Run a guarded action (feed, play, clean or heal).
    pub fn perform(&mut self, action: CareAction, now: DateTime<Utc>) -> Result<ActionResult, PetError> {
        if let Err(rejection) = validate(action, &self.record.stats, self.record.is_sleeping) {
            debug!(%action, ?rejection, "action refused");
            return Ok(ActionResult::rejected(
                rejection,
                rejection_message(rejection, &self.record.name),
            ));
        }
        let message = format!(
            "{} enjoyed being {}!",
            self.record.name,
            effects::past_tense(action)
        );
        let changes = effects::stat_effect(action).changes();
        self.transact(|pet| pet.apply_action(changes, effects::xp_reward(action), message, now))
    }

    /// Put the pet to sleep, or wake it up if it is already asleep.
    pub fn toggle_sleep(&mut self, now: DateTime<Utc>) -> Result<ActionResult, PetError> {
        if self.record.is_sleeping {
            let message = format!("{} woke up refreshed! ☀️", self.record.name);
            self.transact(|pet| {
                pet.record.is_sleeping = false;
                pet.apply_action(WAKE_EFFECT.changes(), WAKE_XP, message, now)
            })
        } else {
            let message = format!("{} is now sleeping. Shh! 💤", self.record.name);
            self.transact(|pet| {
                pet.record.is_sleeping = true;
                pet.apply_action(Vec::new(), SLEEP_XP, message, now)
            })
        }
    }

    /// Consume one of `item_id` and apply its effect.
    ///
    /// Sleep is not checked here; callers that care must check it first.
    pub fn use_item(
        &mut self,
        catalog: &ItemCatalog,
        item_id: &str,
        now: DateTime<Utc>,
    ) -> Result<ActionResult, PetError> {
        if !inventory::has_item(&self.record.inventory, item_id) {
            return Ok(ActionResult::rejected(
                Rejection::ItemNotOwned,
                rejection_message(Rejection::ItemNotOwned, &self.record.name),
            ));
        }
        let Some(item) = catalog.get(item_id) else {
            return Ok(ActionResult::rejected(
                Rejection::UnknownItem,
                rejection_message(Rejection::UnknownItem, &self.record.name),
            ));
        };

        let reason = item.item_type.use_reward_reason();
        let message = format!("{} enjoyed the {}! {}", self.record.name, item.name, item.emoji);
        let changes = item.effect.changes();
        let xp = item.xp_reward;
        self.transact(|pet| {
            inventory::remove_item(&mut pet.record.inventory, item_id, 1)?;
            pet.earn_coins(coin_reward(reason), reason, now)?;
            pet.apply_action(changes, xp, message, now)
        })
    }

    // -----------------------------------------------------------------------
    // Time
    // -----------------------------------------------------------------------

    /// Bring stats up to date with the time elapsed since the last sync.
    ///
    /// Returns `None` when less than about a minute has passed, the clock
    /// went backwards, or the elapsed time rounds to no change in any stat.
    /// In all three cases nothing changes, so fractional decay keeps
    /// accumulating from the same `last_updated`.
    pub fn sync_time(&mut self, decay: &TimeDecay, now: DateTime<Utc>) -> Option<TimeSyncResult> {
        let hours = hours_between(self.record.last_updated, now);
        if hours < MIN_SYNC_HOURS {
            return None;
        }
        let result = decay.calculate(hours, &self.record.stats, self.record.is_sleeping);
        if result.new_stats == self.record.stats {
            return None;
        }
        self.record.stats = result.new_stats;
        self.refresh_mood();
        self.record.last_updated = now;
        debug!(
            %hours,
            changes = result.stat_changes.len(),
            health_decay = result.health_decay_triggered,
            "time synced"
        );
        Some(result)
    }

    /// Record that the pet was written to storage at `now`.
    pub const fn mark_saved(&mut self, now: DateTime<Utc>) {
        self.record.last_save_time = now;
    }

    // -----------------------------------------------------------------------
    // Progression, coins and items
    // -----------------------------------------------------------------------

    /// Grant experience, levelling up as many times as it covers.
    ///
    /// A grant that crosses at least one level boosts every stat by 5 and
    /// pays the level-up coin reward once. Returns whether a level was
    /// gained.
    pub fn add_experience(&mut self, amount: u64, now: DateTime<Utc>) -> Result<bool, PetError> {
        let experience = self.record.experience.saturating_add(amount);
        let new_level = calculate_new_level(self.record.level, experience);
        self.record.experience = experience;
        if new_level <= self.record.level {
            return Ok(false);
        }
        self.earn_coins(coin_reward(CoinReason::LevelUp), CoinReason::LevelUp, now)?;
        info!(name = %self.record.name, from = self.record.level, to = new_level, "level up");
        self.record.level = new_level;
        boost_all(&mut self.record.stats, LEVEL_UP_STAT_BOOST);
        Ok(true)
    }

    /// Apply stat changes outside the action flow and recompute mood.
    pub fn apply_bonus(&mut self, changes: &[StatChange]) {
        apply_changes(&mut self.record.stats, changes);
        self.refresh_mood();
    }

    /// Credit coins.
    pub fn earn_coins(&mut self, amount: u64, reason: CoinReason, now: DateTime<Utc>) -> Result<(), PetError> {
        self.ledger().earn(amount, reason, now)?;
        Ok(())
    }

    /// Debit coins. Fails without change when the balance is short.
    pub fn spend_coins(&mut self, amount: u64, reason: CoinReason, now: DateTime<Utc>) -> Result<(), PetError> {
        self.ledger().spend(amount, reason, now)?;
        Ok(())
    }

    /// Add items to the inventory.
    pub fn add_item(&mut self, item_id: &str, quantity: u32) -> Result<(), PetError> {
        inventory::add_item(&mut self.record.inventory, item_id, quantity)
    }

    /// Pay `cost` and receive `quantity` of `item_id`, or neither.
    pub fn buy(
        &mut self,
        item_id: &str,
        quantity: u32,
        cost: u64,
        now: DateTime<Utc>,
    ) -> Result<(), PetError> {
        self.transact(|pet| {
            pet.spend_coins(cost, CoinReason::Purchase, now)?;
            pet.add_item(item_id, quantity)
        })
    }

    // -----------------------------------------------------------------------
    // Commit tracking
    // -----------------------------------------------------------------------

    /// Move the reward marker to `newest_short_hash` and count `rewarded`
    /// more commits.
    pub fn record_commits(&mut self, newest_short_hash: &str, rewarded: u64) {
        self.record.last_rewarded_commit_short_hash = Some(newest_short_hash.to_owned());
        self.record.git_commit_count = self.record.git_commit_count.saturating_add(rewarded);
    }

    /// Set the commit streak and the date it was last updated on.
    pub const fn set_git_streak(&mut self, streak: u32, date: NaiveDate) {
        self.record.git_streak = streak;
        self.record.last_git_reward_date = Some(date);
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn ledger(&mut self) -> CoinLedger<'_> {
        CoinLedger::new(&mut self.record.coins, &mut self.record.coin_history)
    }

    fn refresh_mood(&mut self) {
        self.record.mood = compute_mood(&self.record.stats, self.record.is_sleeping);
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.record.last_interaction = now;
        self.record.total_interactions = self.record.total_interactions.saturating_add(1);
    }

    /// Shared tail of every successful action.
    fn apply_action(
        &mut self,
        changes: Vec<StatChange>,
        xp: u64,
        message: String,
        now: DateTime<Utc>,
    ) -> Result<ActionResult, PetError> {
        apply_changes(&mut self.record.stats, &changes);
        let level_up = self.add_experience(xp, now)?;
        self.refresh_mood();
        self.touch(now);

        let message = if level_up {
            format!(
                "Level up! {} is now level {}! 🎉",
                self.record.name, self.record.level
            )
        } else {
            message
        };
        Ok(ActionResult {
            success: true,
            message,
            stat_changes: changes,
            xp_gained: xp,
            level_up,
            new_level: Some(self.record.level),
            rejection: None,
        })
    }

    /// Run `f`, restoring the record if it fails.
    fn transact<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, PetError>) -> Result<T, PetError> {
        let snapshot = self.record.clone();
        let result = f(self);
        if result.is_err() {
            self.record = snapshot;
        }
        result
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Duration;
    use rust_decimal_macros::dec;

    use petterm_types::Stat;

    use super::*;

    fn t0() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-03-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn pet() -> Pet {
        Pet::adopt("Buddy", Species::Cat, t0())
    }

    fn set_stats(pet: &mut Pet, f: impl FnOnce(&mut PetStats)) {
        let mut record = pet.record().clone();
        f(&mut record.stats);
        *pet = Pet::from_record(record);
    }

    #[test]
    fn adoption_defaults() {
        let p = Pet::adopt("  ", Species::Dragon, t0());
        assert_eq!(p.name(), DEFAULT_NAME);
        assert_eq!(p.level(), 1);
        assert_eq!(p.coins(), 50);
        assert_eq!(p.mood(), Mood::Happy);
        assert_eq!(p.quantity("fish"), 3);
        assert_eq!(p.stats(), &PetStats::FULL);
    }

    #[test]
    fn from_record_repairs_out_of_range_values() {
        let mut record = pet().into_record();
        record.level = 0;
        record.stats.hunger = 250;
        let repaired = Pet::from_record(record);
        assert_eq!(repaired.level(), 1);
        assert_eq!(repaired.stats().hunger, 100);
    }

    #[test]
    fn feed_applies_deltas_and_xp() {
        let mut p = pet();
        set_stats(&mut p, |s| s.hunger = 50);
        let result = p.perform(CareAction::Feed, t0()).unwrap();
        assert!(result.success);
        assert_eq!(result.message, "Buddy enjoyed being fed!");
        assert_eq!(result.xp_gained, 10);
        assert_eq!(p.stats().hunger, 75);
        assert_eq!(p.stats().cleanliness, 96);
        assert_eq!(p.experience(), 10);
        assert_eq!(p.record().total_interactions, 1);
    }

    #[test]
    fn feeding_a_full_pet_is_refused_without_mutation() {
        let mut p = pet();
        let before = p.clone();
        let result = p.perform(CareAction::Feed, t0()).unwrap();
        assert!(!result.success);
        assert_eq!(result.rejection, Some(Rejection::TooFull));
        assert_eq!(result.xp_gained, 0);
        assert_eq!(p, before);
    }

    #[test]
    fn feeding_five_times_from_low_hunger() {
        let mut p = pet();
        set_stats(&mut p, |s| s.hunger = 10);
        let mut outcomes = Vec::new();
        for _ in 0..5 {
            outcomes.push(p.perform(CareAction::Feed, t0()).unwrap().success);
        }
        // 10 -> 35 -> 60 -> 85 -> 100, then refused.
        assert_eq!(outcomes, vec![true, true, true, true, false]);
        assert_eq!(p.stats().hunger, 100);
        assert_eq!(p.experience(), 40);
    }

    #[test]
    fn sleeping_pet_refuses_guarded_actions() {
        let mut p = pet();
        assert!(p.toggle_sleep(t0()).unwrap().success);
        assert!(p.is_sleeping());
        assert_eq!(p.mood(), Mood::Sleepy);
        let result = p.perform(CareAction::Play, t0()).unwrap();
        assert_eq!(result.rejection, Some(Rejection::Sleeping));
        assert_eq!(result.message, "Buddy is sleeping! Wake them up first.");
    }

    #[test]
    fn sleep_grants_xp_and_wake_restores_energy() {
        let mut p = pet();
        set_stats(&mut p, |s| s.energy = 10);
        let asleep = p.toggle_sleep(t0()).unwrap();
        assert!(asleep.stat_changes.is_empty());
        assert_eq!(asleep.xp_gained, 5);
        let awake = p.toggle_sleep(t0()).unwrap();
        assert_eq!(awake.message, "Buddy woke up refreshed! ☀️");
        assert!(!p.is_sleeping());
        assert_eq!(p.stats().energy, 90);
        assert_eq!(p.experience(), 10);
    }

    #[test]
    fn level_up_boosts_stats_and_pays_once() {
        let mut p = pet();
        set_stats(&mut p, |s| {
            s.health = 50;
            s.hunger = 50;
        });
        // One grant crossing two levels.
        assert!(p.add_experience(700, t0()).unwrap());
        assert_eq!(p.level(), 3);
        assert_eq!(p.stats().health, 55);
        assert_eq!(p.coins(), 70);
        assert_eq!(p.coin_history().len(), 1);
    }

    #[test]
    fn action_crossing_a_level_reports_it() {
        let mut record = pet().into_record();
        record.experience = 295;
        record.stats.health = 40;
        let mut p = Pet::from_record(record);
        let result = p.perform(CareAction::Heal, t0()).unwrap();
        assert!(result.level_up);
        assert_eq!(result.new_level, Some(2));
        assert_eq!(result.message, "Level up! Buddy is now level 2! 🎉");
        // +30 heal, +5 level-up boost.
        assert_eq!(p.stats().health, 75);
    }

    #[test]
    fn use_item_consumes_and_pays() {
        let catalog = ItemCatalog::standard();
        let mut p = pet();
        set_stats(&mut p, |s| s.hunger = 40);
        let result = p.use_item(&catalog, "fish", t0()).unwrap();
        assert!(result.success);
        assert_eq!(p.quantity("fish"), 2);
        assert_eq!(p.stats().hunger, 70);
        assert_eq!(p.coins(), 51);
        assert_eq!(p.experience(), 10);
    }

    #[test]
    fn use_item_ignores_saturation_and_sleep() {
        let catalog = ItemCatalog::standard();
        let mut p = pet();
        assert!(p.toggle_sleep(t0()).unwrap().success);
        let result = p.use_item(&catalog, "fish", t0()).unwrap();
        assert!(result.success);
        assert_eq!(p.stats().hunger, 100);
    }

    #[test]
    fn use_item_not_owned_changes_nothing() {
        let catalog = ItemCatalog::standard();
        let mut p = pet();
        let before = p.clone();
        let result = p.use_item(&catalog, "cake", t0()).unwrap();
        assert_eq!(result.rejection, Some(Rejection::ItemNotOwned));
        assert_eq!(p, before);
    }

    #[test]
    fn owned_but_unknown_item_is_not_consumed() {
        let catalog = ItemCatalog::standard();
        let mut p = pet();
        assert!(p.add_item("mystery", 1).is_ok());
        let result = p.use_item(&catalog, "mystery", t0()).unwrap();
        assert_eq!(result.rejection, Some(Rejection::UnknownItem));
        assert_eq!(p.quantity("mystery"), 1);
    }

    #[test]
    fn owned_items_by_category() {
        let catalog = ItemCatalog::standard();
        let mut p = pet();
        assert!(p.add_item("treat", 2).is_ok());
        let food: Vec<(&str, u32)> = p
            .owned_of_type(&catalog, ItemType::Food)
            .into_iter()
            .map(|(item, quantity)| (item.id.as_str(), quantity))
            .collect();
        assert_eq!(food, vec![("fish", 3), ("treat", 2)]);
        assert_eq!(p.owned_of_type(&catalog, ItemType::Medicine).len(), 1);
    }

    #[test]
    fn sync_skips_tiny_gaps() {
        let mut p = pet();
        let decay = TimeDecay::default();
        assert!(p.sync_time(&decay, t0() + Duration::seconds(30)).is_none());
        assert!(p.sync_time(&decay, t0() - Duration::hours(3)).is_none());
        assert_eq!(p.record().last_updated, t0());
    }

    #[test]
    fn sync_applies_decay_and_advances_marker() {
        let mut p = pet();
        let decay = TimeDecay::default();
        let later = t0() + Duration::hours(10);
        let result = p.sync_time(&decay, later).unwrap();
        assert_eq!(result.hours_passed, dec!(10));
        assert_eq!(p.stats().hunger, 70);
        assert_eq!(p.record().last_updated, later);
        // A second sync at the same instant is a no-op.
        assert!(p.sync_time(&decay, later).is_none());
    }

    #[test]
    fn sync_without_visible_change_keeps_the_marker() {
        let mut p = pet();
        let decay = TimeDecay::default();
        // Five minutes of hunger decay rounds to zero.
        assert!(p.sync_time(&decay, t0() + Duration::minutes(5)).is_none());
        assert_eq!(p.record().last_updated, t0());

        // The fraction is still owed and shows up once it rounds to a point.
        let later = t0() + Duration::hours(1);
        let result = p.sync_time(&decay, later).unwrap();
        assert_eq!(result.hours_passed, dec!(1));
        assert_eq!(p.stats().hunger, 97);
        assert_eq!(p.record().last_updated, later);
    }

    #[test]
    fn buy_is_all_or_nothing() {
        let mut p = pet();
        assert!(p.buy("steak", 2, 50, t0()).is_ok());
        assert_eq!(p.coins(), 0);
        assert_eq!(p.quantity("steak"), 2);

        let before = p.clone();
        assert!(p.buy("steak", 1, 25, t0()).is_err());
        assert_eq!(p, before);
    }

    #[test]
    fn failed_buy_on_stack_overflow_refunds() {
        let mut p = pet();
        assert!(p.add_item("fish", u32::MAX - 3).is_ok());
        let before = p.clone();
        assert!(p.buy("fish", 1, 10, t0()).is_err());
        assert_eq!(p, before);
    }

    #[test]
    fn bonus_recomputes_mood() {
        let mut p = pet();
        set_stats(&mut p, |s| s.hunger = 10);
        p.apply_bonus(&[StatChange::new(Stat::Hunger, 50)]);
        assert_eq!(p.stats().hunger, 60);
        assert_ne!(p.mood(), Mood::Angry);
    }

    #[test]
    fn commit_tracking() {
        let mut p = pet();
        p.record_commits("abc1234", 3);
        let day = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        p.set_git_streak(2, day);
        assert_eq!(p.last_rewarded_commit(), Some("abc1234"));
        assert_eq!(p.git_commit_count(), 3);
        assert_eq!(p.git_streak(), 2);
        assert_eq!(p.last_git_reward_date(), Some(day));
    }
}
