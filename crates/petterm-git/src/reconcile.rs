//! Commit reward reconciliation.
//!
//! One pass reads every not-yet-rewarded commit, then pays for them in
//! commit order. All reads happen before the first mutation, and a failed
//! mutation restores the pet, so a pass is either fully applied or not at
//! all.
//!
//! # Per commit
//!
//! 1. Classify the subject and look up the base coins and XP
//! 2. Double the coins for a night-owl commit
//! 3. Add the large-commit bonus (separate ledger entry)
//! 4. Grant the XP, then the companionship stat bonus
//!
//! # Per pass
//!
//! 1. Update the streak from the oldest new commit's calendar date
//! 2. Pay the streak bonus once
//! 3. Move the marker to the newest commit

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use petterm_ledger::coin_reward;
use petterm_pet::{Pet, PetError};
use petterm_types::{CoinReason, CommitInfo, CommitReport, CommitReward, Stat, StatChange};

use crate::classify::{
    LARGE_COMMIT_XP, base_reward, classify, companionship, is_large, is_night_owl, next_streak,
    streak_bonus,
};
use crate::error::GitError;
use crate::log::CommitLog;

/// Commits considered on the very first pass.
pub const DEFAULT_BACKFILL_LIMIT: usize = 50;

/// Pays a pet for new commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitReconciler {
    backfill_limit: usize,
}

impl Default for CommitReconciler {
    fn default() -> Self {
        Self::new(DEFAULT_BACKFILL_LIMIT)
    }
}

impl CommitReconciler {
    /// Create a reconciler that backfills at most `backfill_limit` commits
    /// when the pet has never been paid for any.
    pub const fn new(backfill_limit: usize) -> Self {
        Self { backfill_limit }
    }

    /// Reward every commit newer than the pet's marker.
    ///
    /// A missing tool, a missing repository or an unreadable log produce a
    /// failed report and leave the pet untouched.
    ///
    /// # Errors
    ///
    /// Returns [`PetError`] only if crediting the pet overflows; the pet is
    /// restored first.
    pub fn reconcile<L: CommitLog + ?Sized>(
        &self,
        pet: &mut Pet,
        log: &L,
        now: DateTime<Utc>,
    ) -> Result<CommitReport, PetError> {
        let streak = pet.git_streak();
        if !log.is_available() {
            return Ok(CommitReport::failed(streak, GitError::Unavailable.to_string()));
        }
        if !log.is_inside_repository() {
            return Ok(CommitReport::failed(streak, GitError::NotARepository.to_string()));
        }

        let marker = pet.last_rewarded_commit().map(str::to_owned);
        let fetched = match marker.as_deref() {
            Some(marker) => log.commits_since(marker),
            None => log.all_commits(self.backfill_limit),
        };
        let mut commits = match fetched {
            Ok(commits) => commits,
            Err(err) => {
                warn!(error = %err, "could not read commit log");
                return Ok(CommitReport::failed(streak, err.to_string()));
            }
        };

        if let Some(marker) = marker.as_deref() {
            commits.retain(|c| c.hash != marker && c.short_hash != marker);
        }
        if commits.is_empty() {
            debug!("no new commits");
            return Ok(CommitReport::nothing_new(streak));
        }
        commits.sort_by_key(|c| c.date);
        for commit in &mut commits {
            fill_change_stats(log, commit);
        }

        let snapshot = pet.clone();
        let applied = apply(pet, &commits, now);
        if applied.is_err() {
            *pet = snapshot;
        }
        applied
    }
}

fn fill_change_stats<L: CommitLog + ?Sized>(log: &L, commit: &mut CommitInfo) {
    if commit.lines_added.is_some() || commit.lines_deleted.is_some() {
        return;
    }
    if let Some(stats) = log.change_stats(&commit.hash) {
        commit.files_changed = Some(stats.files_changed);
        commit.lines_added = Some(stats.lines_added);
        commit.lines_deleted = Some(stats.lines_deleted);
    }
}

/// Pay for `commits`, which must be non-empty and sorted oldest first.
fn apply(pet: &mut Pet, commits: &[CommitInfo], now: DateTime<Utc>) -> Result<CommitReport, PetError> {
    let (hunger, happiness) = companionship(pet.git_streak());
    let mut rewards = Vec::with_capacity(commits.len());
    let mut total_coins: u64 = 0;
    let mut total_xp: u64 = 0;

    for commit in commits {
        let commit_type = classify(&commit.message);
        let (base_coins, mut xp) = base_reward(commit_type);
        let mut bonuses = Vec::new();

        let mut coins = base_coins;
        if is_night_owl(&commit.date) {
            coins = coins.saturating_mul(2);
            bonuses.push(String::from("🦉 Night Owl Bonus! 2x coins!"));
        }
        pet.earn_coins(coins, commit_type.coin_reason(), now)?;

        if is_large(commit) {
            let bonus = coin_reward(CoinReason::GitLargeBonus);
            pet.earn_coins(bonus, CoinReason::GitLargeBonus, now)?;
            coins = coins.saturating_add(bonus);
            xp = xp.saturating_add(LARGE_COMMIT_XP);
            bonuses.push(String::from("📦 Large Commit Bonus!"));
        }

        pet.add_experience(xp, now)?;
        pet.apply_bonus(&[
            StatChange::new(Stat::Hunger, hunger),
            StatChange::new(Stat::Happiness, happiness),
        ]);
        bonuses.push(format!(
            "💚 {} enjoyed watching you code! (+{hunger} hunger, +{happiness} happiness)",
            pet.name()
        ));

        debug!(hash = %commit.short_hash, ?commit_type, coins, xp, "commit rewarded");
        total_coins = total_coins.saturating_add(coins);
        total_xp = total_xp.saturating_add(xp);
        rewards.push(CommitReward {
            short_hash: commit.short_hash.clone(),
            message: commit.message.clone(),
            commit_type,
            coins,
            xp,
            bonuses,
        });
    }

    if let Some(oldest) = commits.first() {
        let (streak, day) = next_streak(pet.git_streak(), pet.last_git_reward_date(), oldest.date.date_naive());
        pet.set_git_streak(streak, day);
    }
    if let Some((bonus, reason)) = streak_bonus(pet.git_streak()) {
        pet.earn_coins(bonus, reason, now)?;
        total_coins = total_coins.saturating_add(bonus);
    }

    let count = u64::try_from(commits.len()).unwrap_or(u64::MAX);
    if let Some(newest) = commits.last() {
        pet.record_commits(&newest.short_hash, count);
    }

    info!(commits = count, total_coins, total_xp, streak = pet.git_streak(), "commits rewarded");
    Ok(CommitReport {
        success: true,
        new_commits: count,
        total_coins,
        total_xp,
        streak: pet.git_streak(),
        rewards,
        error: None,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;
    use petterm_types::Species;

    use super::*;
    use crate::log::{ScriptedCommitLog, short_hash};

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-03-10T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn commit(hash: &str, message: &str, date: &str) -> CommitInfo {
        CommitInfo {
            hash: hash.to_owned(),
            short_hash: short_hash(hash),
            message: message.to_owned(),
            author: String::from("Dev"),
            date: DateTime::parse_from_rfc3339(date).unwrap(),
            files_changed: None,
            lines_added: None,
            lines_deleted: None,
        }
    }

    fn hungry_pet() -> Pet {
        let mut record = Pet::adopt("Buddy", Species::Cat, now()).into_record();
        record.stats.hunger = 20;
        record.stats.happiness = 20;
        Pet::from_record(record)
    }

    #[test]
    fn tool_missing_changes_nothing() {
        let mut pet = hungry_pet();
        let before = pet.clone();
        let report = CommitReconciler::default()
            .reconcile(&mut pet, &ScriptedCommitLog::unavailable(), now())
            .unwrap();
        assert!(!report.success);
        assert_eq!(
            report.error.as_deref(),
            Some("Git is not installed or not available in PATH")
        );
        assert_eq!(pet, before);
    }

    #[test]
    fn outside_repository_changes_nothing() {
        let mut pet = hungry_pet();
        let before = pet.clone();
        let report = CommitReconciler::default()
            .reconcile(&mut pet, &ScriptedCommitLog::outside_repository(), now())
            .unwrap();
        assert_eq!(
            report.error.as_deref(),
            Some("Not a Git repository. Initialize a repo with: git init")
        );
        assert_eq!(pet, before);
    }

    #[test]
    fn repository_without_commits_is_a_quiet_success() {
        let mut pet = hungry_pet();
        let before = pet.clone();
        let report = CommitReconciler::default()
            .reconcile(&mut pet, &ScriptedCommitLog::new(Vec::new()), now())
            .unwrap();
        assert!(report.success);
        assert_eq!(report.new_commits, 0);
        assert!(report.error.is_none());
        assert_eq!(pet, before);
    }

    #[test]
    fn commit_older_than_last_reward_restarts_streak() {
        let mut pet = hungry_pet();
        pet.set_git_streak(5, NaiveDate::from_ymd_opt(2026, 3, 20).unwrap());
        let log = ScriptedCommitLog::new(vec![commit("aaaaaaa1", "chore: tidy", "2026-03-10T10:00:00Z")]);
        let report = CommitReconciler::default().reconcile(&mut pet, &log, now()).unwrap();
        assert_eq!(report.streak, 1);
        assert_eq!(pet.git_streak(), 1);
        assert_eq!(pet.last_git_reward_date(), NaiveDate::from_ymd_opt(2026, 3, 10));
    }

    #[test]
    fn unreadable_log_changes_nothing() {
        let mut pet = hungry_pet();
        let before = pet.clone();
        let log = ScriptedCommitLog::new(vec![commit("aaaaaaa1", "x", "2026-03-09T10:00:00Z")]).failing();
        let report = CommitReconciler::default().reconcile(&mut pet, &log, now()).unwrap();
        assert!(!report.success);
        assert_eq!(pet, before);
    }

    #[test]
    fn first_pass_backfills_and_pays() {
        let mut pet = hungry_pet();
        // Newest first, as git returns them.
        let log = ScriptedCommitLog::new(vec![
            commit("bbbbbbb2", "feat: shop", "2026-03-09T11:00:00Z"),
            commit("aaaaaaa1", "fix: crash", "2026-03-09T10:00:00Z"),
        ]);
        let report = CommitReconciler::default().reconcile(&mut pet, &log, now()).unwrap();

        assert!(report.success);
        assert_eq!(report.new_commits, 2);
        // Oldest first.
        let kinds: Vec<_> = report.rewards.iter().map(|r| r.short_hash.as_str()).collect();
        assert_eq!(kinds, vec!["aaaaaaa", "bbbbbbb"]);
        assert_eq!(report.total_coins, 10 + 8);
        assert_eq!(report.total_xp, 20 + 15);
        assert_eq!(report.streak, 1);
        assert_eq!(pet.coins(), 50 + 18);
        assert_eq!(pet.last_rewarded_commit(), Some("bbbbbbb"));
        assert_eq!(pet.git_commit_count(), 2);
        assert_eq!(pet.last_git_reward_date(), NaiveDate::from_ymd_opt(2026, 3, 9));
        // Two companionship bonuses of +15 hunger, +10 happiness.
        assert_eq!(pet.stats().hunger, 50);
        assert_eq!(pet.stats().happiness, 40);
    }

    #[test]
    fn second_pass_only_sees_new_commits() {
        let mut pet = hungry_pet();
        let mut log = ScriptedCommitLog::new(vec![commit("aaaaaaa1", "chore", "2026-03-09T10:00:00Z")]);
        let reconciler = CommitReconciler::default();
        assert_eq!(reconciler.reconcile(&mut pet, &log, now()).unwrap().new_commits, 1);

        let again = reconciler.reconcile(&mut pet, &log, now()).unwrap();
        assert!(again.success);
        assert_eq!(again.new_commits, 0);

        log.push(commit("ccccccc3", "docs", "2026-03-10T09:00:00Z"));
        let next = reconciler.reconcile(&mut pet, &log, now()).unwrap();
        assert_eq!(next.new_commits, 1);
        assert_eq!(next.streak, 2);
        // 5 for the commit, 2 for the streak.
        assert_eq!(next.total_coins, 7);
        assert_eq!(pet.git_commit_count(), 2);
    }

    #[test]
    fn same_day_commits_do_not_inflate_streak() {
        let mut pet = hungry_pet();
        let mut log = ScriptedCommitLog::new(vec![commit("aaaaaaa1", "one", "2026-03-09T08:00:00Z")]);
        let reconciler = CommitReconciler::default();
        reconciler.reconcile(&mut pet, &log, now()).unwrap();
        log.push(commit("bbbbbbb2", "two", "2026-03-09T18:00:00Z"));
        let report = reconciler.reconcile(&mut pet, &log, now()).unwrap();
        assert_eq!(report.streak, 1);
        assert_eq!(pet.git_commit_count(), 2);
    }

    #[test]
    fn night_owl_doubles_coins_only() {
        let mut pet = hungry_pet();
        let log = ScriptedCommitLog::new(vec![commit("aaaaaaa1", "chore", "2026-03-09T23:00:00+01:00")]);
        let report = CommitReconciler::default().reconcile(&mut pet, &log, now()).unwrap();
        let reward = report.rewards.first().unwrap();
        assert_eq!(reward.coins, 10);
        assert_eq!(reward.xp, 10);
        assert_eq!(reward.bonuses.first().map(String::as_str), Some("🦉 Night Owl Bonus! 2x coins!"));
    }

    #[test]
    fn large_commit_bonus_is_a_separate_entry() {
        let mut pet = hungry_pet();
        let mut big = commit("aaaaaaa1", "chore", "2026-03-09T12:00:00Z");
        big.files_changed = Some(4);
        big.lines_added = Some(150);
        big.lines_deleted = Some(0);
        let log = ScriptedCommitLog::new(vec![big]);
        let report = CommitReconciler::default().reconcile(&mut pet, &log, now()).unwrap();
        let reward = report.rewards.first().unwrap();
        assert_eq!(reward.coins, 10);
        assert_eq!(reward.xp, 20);
        assert_eq!(pet.coins(), 60);
        let reasons: Vec<CoinReason> = pet.coin_history().iter().map(|e| e.reason).collect();
        assert_eq!(reasons, vec![CoinReason::GitCommitNormal, CoinReason::GitLargeBonus]);
    }

    #[test]
    fn stored_short_hash_marker_bounds_the_range() {
        let mut record = hungry_pet().into_record();
        record.last_rewarded_commit_short_hash = Some(String::from("aaaaaaa"));
        let mut pet = Pet::from_record(record);
        let log = ScriptedCommitLog::new(vec![
            commit("bbbbbbb2", "refactor store", "2026-03-09T12:00:00Z"),
            commit("aaaaaaa1", "old", "2026-03-08T12:00:00Z"),
        ]);
        let report = CommitReconciler::default().reconcile(&mut pet, &log, now()).unwrap();
        assert_eq!(report.new_commits, 1);
        assert_eq!(report.rewards.first().map(|r| r.message.as_str()), Some("refactor store"));
        assert_eq!(pet.last_rewarded_commit(), Some("bbbbbbb"));
    }

    #[test]
    fn backfill_respects_limit() {
        let mut pet = hungry_pet();
        let log = ScriptedCommitLog::new(vec![
            commit("ccccccc3", "three", "2026-03-09T12:00:00Z"),
            commit("bbbbbbb2", "two", "2026-03-09T11:00:00Z"),
            commit("aaaaaaa1", "one", "2026-03-09T10:00:00Z"),
        ]);
        let report = CommitReconciler::new(2).reconcile(&mut pet, &log, now()).unwrap();
        assert_eq!(report.new_commits, 2);
        assert_eq!(pet.last_rewarded_commit(), Some("ccccccc"));
    }
}
