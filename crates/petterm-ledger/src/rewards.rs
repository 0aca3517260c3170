//! Fixed coin rewards per [`CoinReason`].

use petterm_types::CoinReason;

/// Coins a newly adopted pet starts with.
pub const STARTING_COINS: u64 = 50;

/// Coins credited for the given reason.
///
/// Rewards for commits, streaks and item use are fixed tiers. Reasons that
/// never credit coins (spending, unknown legacy tags) return zero.
pub const fn coin_reward(reason: CoinReason) -> u64 {
    match reason {
        CoinReason::Feed
        | CoinReason::Play
        | CoinReason::Clean
        | CoinReason::Heal
        | CoinReason::Sleep
        | CoinReason::GitStreakDaily => 1,
        CoinReason::LevelUp => 20,
        CoinReason::GitCommitNormal | CoinReason::GitLargeBonus => 5,
        CoinReason::GitCommitRefactor => 6,
        CoinReason::GitCommitFeature => 8,
        CoinReason::GitCommitBugFix | CoinReason::GitStreak7 => 10,
        CoinReason::GitStreak30 => 50,
        CoinReason::Purchase | CoinReason::Other => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_use_tiers_are_equal() {
        let tiers = [
            coin_reward(CoinReason::Feed),
            coin_reward(CoinReason::Play),
            coin_reward(CoinReason::Clean),
            coin_reward(CoinReason::Heal),
        ];
        assert!(tiers.iter().all(|&t| t == 1));
    }

    #[test]
    fn commit_tiers_rank_bug_fix_highest() {
        assert_eq!(coin_reward(CoinReason::GitCommitBugFix), 10);
        assert_eq!(coin_reward(CoinReason::GitCommitFeature), 8);
        assert_eq!(coin_reward(CoinReason::GitCommitRefactor), 6);
        assert_eq!(coin_reward(CoinReason::GitCommitNormal), 5);
    }

    #[test]
    fn spending_never_credits() {
        assert_eq!(coin_reward(CoinReason::Purchase), 0);
        assert_eq!(coin_reward(CoinReason::Other), 0);
    }
}
