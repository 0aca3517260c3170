//! Experience curve and level progression.
//!
//! The curve is `floor(100 * L * 1.5^(L-1))` cumulative XP to reach level
//! `L`. It is evaluated exactly in integers as
//! `100 * L * 3^(L-1) / 2^(L-1)`, so there is no float rounding at high
//! levels. From level 74 on the intermediate product no longer fits in a
//! `u128` and the requirement saturates to `u64::MAX`, which also bounds the
//! level loop.

use petterm_types::LevelTitle;

/// Level no pet can advance past.
pub const MAX_LEVEL: u32 = 999;

/// Stat boost applied to every stat on level-up.
pub const LEVEL_UP_STAT_BOOST: i64 = 5;

/// Total cumulative experience needed to have reached `level`.
pub fn xp_for_level(level: u32) -> u64 {
    if level <= 1 {
        return 0;
    }
    let exponent = level.saturating_sub(1);
    exact_curve(level, exponent).unwrap_or(u64::MAX)
}

fn exact_curve(level: u32, exponent: u32) -> Option<u64> {
    let numerator = 3u128
        .checked_pow(exponent)?
        .checked_mul(100)?
        .checked_mul(u128::from(level))?;
    let denominator = 2u128.checked_pow(exponent)?;
    let value = numerator.checked_div(denominator)?;
    u64::try_from(value).ok()
}

/// Experience still needed to reach the next level. Zero if already there.
pub fn xp_to_next_level(level: u32, experience: u64) -> u64 {
    xp_for_level(level.saturating_add(1)).saturating_sub(experience)
}

/// Percentage through the current level, rounded, in `[0, 100]`.
pub fn level_progress_percent(level: u32, experience: u64) -> u8 {
    let base = xp_for_level(level);
    let next = xp_for_level(level.saturating_add(1));
    let span = next.saturating_sub(base);
    if span == 0 {
        return 100;
    }
    let progress = u128::from(experience.saturating_sub(base));
    // Round half up: (progress * 200 + span) / (2 * span).
    let doubled_span = u128::from(span).saturating_mul(2);
    let percent = progress
        .saturating_mul(200)
        .saturating_add(u128::from(span))
        .checked_div(doubled_span)
        .unwrap_or(100)
        .min(100);
    u8::try_from(percent).unwrap_or(100)
}

/// Level reached with `experience`, starting from `level`.
///
/// Advances repeatedly so one large grant can jump several levels. Never
/// goes down.
pub fn calculate_new_level(level: u32, experience: u64) -> u32 {
    let mut current = level.max(1);
    while current < MAX_LEVEL && experience >= xp_for_level(current.saturating_add(1)) {
        current = current.saturating_add(1);
    }
    current
}

/// Title band for a level.
pub const fn level_title(level: u32) -> LevelTitle {
    match level {
        0..=5 => LevelTitle::Baby,
        6..=10 => LevelTitle::Young,
        11..=20 => LevelTitle::Adult,
        21..=30 => LevelTitle::Expert,
        31..=50 => LevelTitle::Master,
        _ => LevelTitle::Legend,
    }
}

/// Informational stat bonus: 5 per full five levels.
pub const fn stat_bonus(level: u32) -> u32 {
    (level / 5).saturating_mul(5)
}
