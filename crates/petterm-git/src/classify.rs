//! Commit classification and the per-commit reward rules.
//!
//! Classification is a case-insensitive substring scan of the subject line.
//! Keyword sets are tried in priority order (bug fix, feature, refactor) and
//! the first hit wins, so "fix feature flag" is a bug fix.

use chrono::{DateTime, FixedOffset, NaiveDate, Timelike};

use petterm_types::{CoinReason, CommitInfo, CommitType};

const BUG_FIX_KEYWORDS: &[&str] = &["fix", "bug", "修复", "bugfix"];
const FEATURE_KEYWORDS: &[&str] = &["feat", "add", "新", "新增", "feature"];
const REFACTOR_KEYWORDS: &[&str] = &["refactor", "重构", "clean", "优化"];

/// Lines changed at which a commit counts as large.
pub const LARGE_COMMIT_LINES: u64 = 100;

/// Flat coins for a large commit.
pub const LARGE_COMMIT_COINS: u64 = 5;

/// Flat experience for a large commit.
pub const LARGE_COMMIT_XP: u64 = 10;

/// Classify a commit message.
pub fn classify(message: &str) -> CommitType {
    let lower = message.to_lowercase();
    let matches = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));
    if matches(BUG_FIX_KEYWORDS) {
        CommitType::BugFix
    } else if matches(FEATURE_KEYWORDS) {
        CommitType::Feature
    } else if matches(REFACTOR_KEYWORDS) {
        CommitType::Refactor
    } else {
        CommitType::Normal
    }
}

/// Base `(coins, xp)` for a classification.
pub const fn base_reward(commit_type: CommitType) -> (u64, u64) {
    match commit_type {
        CommitType::BugFix => (10, 20),
        CommitType::Feature => (8, 15),
        CommitType::Refactor => (6, 12),
        CommitType::Normal => (5, 10),
    }
}

/// Whether the commit was made between 22:00 and 06:00 in its author's
/// own UTC offset.
pub fn is_night_owl(date: &DateTime<FixedOffset>) -> bool {
    let hour = date.hour();
    hour >= 22 || hour < 6
}

/// Whether at least [`LARGE_COMMIT_LINES`] lines changed. Commits without
/// line counts never qualify.
pub fn is_large(commit: &CommitInfo) -> bool {
    if commit.lines_added.is_none() && commit.lines_deleted.is_none() {
        return false;
    }
    let added = u64::from(commit.lines_added.unwrap_or(0));
    let deleted = u64::from(commit.lines_deleted.unwrap_or(0));
    added.saturating_add(deleted) >= LARGE_COMMIT_LINES
}

/// `(hunger, happiness)` bonus the pet gets from watching one commit, given
/// the streak before this pass.
pub const fn companionship(streak: u32) -> (i32, i32) {
    if streak >= 7 {
        (20, 15)
    } else if streak >= 3 {
        (17, 12)
    } else {
        (15, 10)
    }
}

/// New streak and streak date after committing on `day`.
///
/// Same day keeps the streak, the next day extends it, and any other day
/// (including one before the last recorded day, as after a rebase) starts
/// over at 1 on `day`.
pub fn next_streak(streak: u32, last_day: Option<NaiveDate>, day: NaiveDate) -> (u32, NaiveDate) {
    let Some(last_day) = last_day else {
        return (1, day);
    };
    match day.signed_duration_since(last_day).num_days() {
        0 => (streak, day),
        1 => (streak.saturating_add(1), day),
        _ => (1, day),
    }
}

/// One-time bonus for the streak after a pass, with its ledger reason.
pub fn streak_bonus(streak: u32) -> Option<(u64, CoinReason)> {
    if streak >= 30 {
        Some((50, CoinReason::GitStreak30))
    } else if streak >= 7 {
        Some((10, CoinReason::GitStreak7))
    } else if streak > 1 {
        Some((u64::from(streak), CoinReason::GitStreakDaily))
    } else {
        None
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn at(text: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(text).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn classification_priority() {
        assert_eq!(classify("fix: feat flag"), CommitType::BugFix);
        assert_eq!(classify("Add login page"), CommitType::Feature);
        assert_eq!(classify("REFACTOR parser"), CommitType::Refactor);
        assert_eq!(classify("cleanup imports"), CommitType::Refactor);
        assert_eq!(classify("bump version"), CommitType::Normal);
        assert_eq!(classify("修复登录问题"), CommitType::BugFix);
        assert_eq!(classify("新增接口"), CommitType::Feature);
        assert_eq!(classify("代码优化"), CommitType::Refactor);
    }

    #[test]
    fn base_rewards() {
        assert_eq!(base_reward(CommitType::BugFix), (10, 20));
        assert_eq!(base_reward(CommitType::Normal), (5, 10));
    }

    #[test]
    fn night_owl_boundaries() {
        assert!(is_night_owl(&at("2026-03-01T22:00:00+00:00")));
        assert!(is_night_owl(&at("2026-03-01T23:30:00+00:00")));
        assert!(is_night_owl(&at("2026-03-01T05:59:00+00:00")));
        assert!(!is_night_owl(&at("2026-03-01T06:00:00+00:00")));
        assert!(!is_night_owl(&at("2026-03-01T21:59:00+00:00")));
        // 23:00 in the author's offset even though it is 21:00 UTC.
        assert!(is_night_owl(&at("2026-03-01T23:00:00+02:00")));
    }

    #[test]
    fn large_commit_needs_line_counts() {
        let mut commit = CommitInfo {
            hash: String::from("abc"),
            short_hash: String::from("abc"),
            message: String::new(),
            author: String::new(),
            date: at("2026-03-01T12:00:00Z"),
            files_changed: None,
            lines_added: None,
            lines_deleted: None,
        };
        assert!(!is_large(&commit));
        commit.lines_added = Some(60);
        commit.lines_deleted = Some(40);
        assert!(is_large(&commit));
        commit.lines_deleted = Some(39);
        assert!(!is_large(&commit));
    }

    #[test]
    fn companionship_tiers() {
        assert_eq!(companionship(0), (15, 10));
        assert_eq!(companionship(3), (17, 12));
        assert_eq!(companionship(7), (20, 15));
    }

    #[test]
    fn streak_transitions() {
        let d = day(2026, 3, 10);
        assert_eq!(next_streak(0, None, d), (1, d));
        assert_eq!(next_streak(4, Some(d), d), (4, d));
        assert_eq!(next_streak(4, Some(day(2026, 3, 9)), d), (5, d));
        assert_eq!(next_streak(4, Some(day(2026, 3, 7)), d), (1, d));
        let future = day(2026, 3, 12);
        assert_eq!(next_streak(4, Some(future), d), (1, d));
    }

    #[test]
    fn rewritten_history_restarts_the_streak() {
        let earlier = day(2026, 3, 10);
        assert_eq!(next_streak(5, Some(day(2026, 3, 20)), earlier), (1, earlier));
    }

    #[test]
    fn streak_bonus_tiers() {
        assert_eq!(streak_bonus(1), None);
        assert_eq!(streak_bonus(2), Some((2, CoinReason::GitStreakDaily)));
        assert_eq!(streak_bonus(6), Some((6, CoinReason::GitStreakDaily)));
        assert_eq!(streak_bonus(7), Some((10, CoinReason::GitStreak7)));
        assert_eq!(streak_bonus(29), Some((10, CoinReason::GitStreak7)));
        assert_eq!(streak_bonus(30), Some((50, CoinReason::GitStreak30)));
    }
}
