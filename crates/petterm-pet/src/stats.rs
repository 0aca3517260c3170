//! Stat model: clamping, delta application, mood and care checks.
//!
//! Every write to a stat goes through [`clamp_stat`], so stored values are
//! always in `[0, 100]` no matter how large a delta is.

use petterm_types::{Mood, PetStats, Stat, StatChange};

/// Upper bound of every stat.
pub const STAT_MAX: u32 = 100;

/// Clamp an arbitrary value into `[0, 100]`.
pub fn clamp_stat(value: i64) -> u32 {
    u32::try_from(value.clamp(0, i64::from(STAT_MAX))).unwrap_or(0)
}

/// Apply one signed delta to one stat, clamping the result.
pub fn apply_delta(stats: &mut PetStats, stat: Stat, delta: i64) {
    let slot = stats.get_mut(stat);
    *slot = clamp_stat(i64::from(*slot).saturating_add(delta));
}

/// Apply a list of changes in order.
pub fn apply_changes(stats: &mut PetStats, changes: &[StatChange]) {
    for change in changes {
        apply_delta(stats, change.stat, i64::from(change.delta));
    }
}

/// Add the same amount to every stat.
pub fn boost_all(stats: &mut PetStats, amount: i64) {
    for stat in Stat::ALL {
        apply_delta(stats, stat, amount);
    }
}

/// Sum of all five stats.
pub fn total(stats: &PetStats) -> u32 {
    Stat::ALL
        .into_iter()
        .map(|stat| stats.get(stat))
        .fold(0, u32::saturating_add)
}

/// Derive the mood from the current stats.
///
/// Checked in order: asleep, health below 30, energy below 20, hunger below
/// 20, then the average of happiness, hunger and cleanliness (80+ with energy
/// above 60 is excited, 60+ happy, 40+ sad, otherwise angry). Averages are
/// compared as sums so no division is needed.
pub fn compute_mood(stats: &PetStats, is_sleeping: bool) -> Mood {
    if is_sleeping {
        return Mood::Sleepy;
    }
    if stats.health < 30 {
        return Mood::Sick;
    }
    if stats.energy < 20 {
        return Mood::Sleepy;
    }
    if stats.hunger < 20 {
        return Mood::Angry;
    }

    let sum = stats
        .happiness
        .saturating_add(stats.hunger)
        .saturating_add(stats.cleanliness);

    if sum >= 240 && stats.energy > 60 {
        Mood::Excited
    } else if sum >= 180 {
        Mood::Happy
    } else if sum >= 120 {
        Mood::Sad
    } else {
        Mood::Angry
    }
}

/// Whether any stat has dropped low enough to warrant attention.
///
/// Thresholds are asymmetric: health below 40 counts, energy only below 20.
pub const fn needs_care(stats: &PetStats) -> bool {
    stats.hunger < 30
        || stats.happiness < 30
        || stats.health < 40
        || stats.cleanliness < 30
        || stats.energy < 20
}
