//! Time-based stat decay, applied lazily when a pet is loaded.
//!
//! Nothing runs on a timer. Callers measure the hours since the pet was last
//! brought up to date and pass them to [`TimeDecay::calculate`], which is a
//! pure function of elapsed time, current stats and the sleep flag.
//!
//! # Order of operations
//!
//! 1. Hunger, happiness and cleanliness decay by `round(hours * rate)`
//! 2. Energy decays while awake, or recovers while asleep
//! 3. If hunger, happiness or cleanliness is now below its critical
//!    threshold, health decays as well
//! 4. Warnings are generated from the post-decay stats
//!
//! All arithmetic is exact decimal. Rounding is half away from zero, and
//! every rounded quantity here is non-negative.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use petterm_types::{DecaySeverity, PetStats, Stat, StatChange, TimeSyncResult};

use crate::config::DecayConfig;
use crate::stats::{apply_delta, total};

/// Milliseconds per hour.
const MS_PER_HOUR: i64 = 3_600_000;

/// Hours a pet can be left before it counts as abandoned (exclusive).
const ABANDON_AFTER_HOURS: i64 = 48;

/// Decay calculator bound to one set of rates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeDecay {
    config: DecayConfig,
}

impl TimeDecay {
    /// Create a calculator with the given rates.
    pub const fn new(config: DecayConfig) -> Self {
        Self { config }
    }

    /// The rates in use.
    pub const fn config(&self) -> &DecayConfig {
        &self.config
    }

    /// Compute decayed stats for `hours` of elapsed time.
    ///
    /// Zero or negative elapsed time changes nothing. Zero-magnitude deltas
    /// are left out of the reported change list.
    pub fn calculate(&self, hours: Decimal, stats: &PetStats, is_sleeping: bool) -> TimeSyncResult {
        let mut result = TimeSyncResult {
            hours_passed: hours,
            stat_changes: Vec::new(),
            health_decay_triggered: false,
            warnings: Vec::new(),
            new_stats: *stats,
        };
        if hours <= Decimal::ZERO {
            return result;
        }

        let mut new_stats = *stats;
        let primary = [
            (Stat::Hunger, self.config.hunger_per_hour),
            (Stat::Happiness, self.config.happiness_per_hour),
            (Stat::Cleanliness, self.config.cleanliness_per_hour),
        ];
        for (stat, rate) in primary {
            let amount = rounded_amount(hours, rate);
            decay(&mut new_stats, &mut result.stat_changes, stat, amount.saturating_neg());
        }

        if is_sleeping {
            let recovery = rounded_amount(hours, self.config.sleep_recovery_per_hour);
            decay(&mut new_stats, &mut result.stat_changes, Stat::Energy, recovery);
        } else {
            let drain = rounded_amount(hours, self.config.energy_per_hour);
            decay(&mut new_stats, &mut result.stat_changes, Stat::Energy, drain.saturating_neg());
        }

        let critical = new_stats.hunger < self.config.critical_hunger
            || new_stats.happiness < self.config.critical_happiness
            || new_stats.cleanliness < self.config.critical_cleanliness;
        if critical {
            let loss = rounded_amount(hours, self.config.health_per_hour_when_critical);
            decay(&mut new_stats, &mut result.stat_changes, Stat::Health, loss.saturating_neg());
            result.health_decay_triggered = true;
            result
                .warnings
                .push(format!("{}% health - your pet needs care!", new_stats.health));
        }

        if new_stats.hunger < 20 {
            result
                .warnings
                .push(format!("{}% hunger - your pet is starving!", new_stats.hunger));
        }
        if new_stats.happiness < 20 {
            result
                .warnings
                .push(format!("{}% happiness - your pet is depressed!", new_stats.happiness));
        }
        if new_stats.cleanliness < 20 {
            result
                .warnings
                .push(format!("{}% cleanliness - your pet is filthy!", new_stats.cleanliness));
        }
        if new_stats.energy < 15 && !is_sleeping {
            result
                .warnings
                .push(format!("{}% energy - your pet is exhausted!", new_stats.energy));
        }

        result.new_stats = new_stats;
        result
    }
}

/// Apply `delta` and record it when non-zero.
fn decay(stats: &mut PetStats, changes: &mut Vec<StatChange>, stat: Stat, delta: i64) {
    apply_delta(stats, stat, delta);
    if delta != 0 {
        let reported = i32::try_from(delta).unwrap_or(if delta < 0 { i32::MIN } else { i32::MAX });
        changes.push(StatChange::new(stat, reported));
    }
}

/// `round(hours * rate)`, saturating at `i64::MAX` for absurd spans.
fn rounded_amount(hours: Decimal, rate: Decimal) -> i64 {
    hours
        .checked_mul(rate)
        .map(|product| product.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|rounded| rounded.to_i64())
        .unwrap_or(i64::MAX)
}

/// Exact hours between two instants. Negative if `to` precedes `from`.
pub fn hours_between(from: DateTime<Utc>, to: DateTime<Utc>) -> Decimal {
    let millis = to.signed_duration_since(from).num_milliseconds();
    Decimal::from(millis)
        .checked_div(Decimal::from(MS_PER_HOUR))
        .unwrap_or(Decimal::ZERO)
}

/// Whether the pet has been neglected: five-stat average below 20 and more
/// than 48 hours away.
pub fn is_abandoned(stats: &PetStats, hours: Decimal) -> bool {
    total(stats) < 100 && hours > Decimal::from(ABANDON_AFTER_HOURS)
}

/// Severity band for an absence of `hours`.
pub fn severity(hours: Decimal) -> DecaySeverity {
    if hours < Decimal::ONE {
        DecaySeverity::None
    } else if hours < Decimal::from(6) {
        DecaySeverity::Low
    } else if hours < Decimal::from(24) {
        DecaySeverity::Medium
    } else if hours < Decimal::from(72) {
        DecaySeverity::High
    } else {
        DecaySeverity::Critical
    }
}

fn round_whole(value: Decimal) -> u64 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .unwrap_or(0)
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// Human-readable duration: `"45 minutes"`, `"3h 20m"`, `"2 days"`, `"1d 4h"`.
pub fn format_duration(hours: Decimal) -> String {
    let hours = hours.max(Decimal::ZERO);
    let sixty = Decimal::from(60);
    let day = Decimal::from(24);

    if hours < Decimal::ONE {
        let minutes = round_whole(hours.saturating_mul(sixty));
        return plural(minutes, "minute");
    }

    if hours < day {
        let mut whole = hours.floor().to_u64().unwrap_or(0);
        let mut minutes = round_whole(hours.saturating_sub(hours.floor()).saturating_mul(sixty));
        if minutes == 60 {
            whole = whole.saturating_add(1);
            minutes = 0;
        }
        if minutes == 0 {
            return plural(whole, "hour");
        }
        return format!("{whole}h {minutes}m");
    }

    let days_dec = hours.checked_div(day).unwrap_or(Decimal::ZERO).floor();
    let mut days = days_dec.to_u64().unwrap_or(u64::MAX);
    let remainder = hours.saturating_sub(days_dec.saturating_mul(day));
    let mut rest = round_whole(remainder);
    if rest == 24 {
        days = days.saturating_add(1);
        rest = 0;
    }
    if rest == 0 {
        return plural(days, "day");
    }
    format!("{days}d {rest}h")
}

/// "Just now", "12 minutes ago", "3h 20m ago" and so on.
pub fn time_message(hours: Decimal) -> String {
    if hours < Decimal::new(1, 2) {
        return String::from("Just now");
    }
    if hours < Decimal::ONE {
        let minutes = round_whole(hours.saturating_mul(Decimal::from(60)));
        return format!("{} ago", plural(minutes, "minute"));
    }
    format!("{} ago", format_duration(hours))
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use rust_decimal_macros::dec;

    use super::*;

    fn stats(hunger: u32, happiness: u32, health: u32, cleanliness: u32, energy: u32) -> PetStats {
        PetStats {
            hunger,
            happiness,
            health,
            cleanliness,
            energy,
        }
    }

    fn calc() -> TimeDecay {
        TimeDecay::default()
    }

    #[test]
    fn zero_elapsed_changes_nothing() {
        let s = stats(50, 50, 50, 50, 50);
        let result = calc().calculate(Decimal::ZERO, &s, false);
        assert!(result.stat_changes.is_empty());
        assert_eq!(result.new_stats, s);
        assert!(!result.health_decay_triggered);
    }

    #[test]
    fn negative_elapsed_changes_nothing() {
        let s = stats(50, 50, 50, 50, 50);
        let result = calc().calculate(dec!(-3), &s, false);
        assert!(result.stat_changes.is_empty());
        assert_eq!(result.new_stats, s);
    }

    #[test]
    fn one_hour_awake() {
        let result = calc().calculate(Decimal::ONE, &PetStats::FULL, false);
        // hunger -3, happiness round(0.67) = -1, cleanliness round(0.125) = 0, energy -2
        assert_eq!(result.new_stats, stats(97, 99, 100, 100, 98));
        assert_eq!(
            result.stat_changes,
            vec![
                StatChange::new(Stat::Hunger, -3),
                StatChange::new(Stat::Happiness, -1),
                StatChange::new(Stat::Energy, -2),
            ]
        );
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn half_hour_rounds_half_away_from_zero() {
        // 0.5h * 3 = 1.5 -> 2
        let result = calc().calculate(dec!(0.5), &PetStats::FULL, false);
        assert_eq!(result.new_stats.hunger, 98);
    }

    #[test]
    fn sleeping_recovers_energy_with_clamp() {
        let full = calc().calculate(Decimal::ONE, &PetStats::FULL, true);
        assert_eq!(full.new_stats.energy, 100);

        let tired = calc().calculate(dec!(2), &stats(100, 100, 100, 100, 30), true);
        assert_eq!(tired.new_stats.energy, 50);
        assert!(tired
            .stat_changes
            .contains(&StatChange::new(Stat::Energy, 20)));
    }

    #[test]
    fn critical_stats_trigger_health_decay() {
        let result = calc().calculate(Decimal::ONE, &stats(10, 10, 80, 10, 50), false);
        assert!(result.health_decay_triggered);
        assert_eq!(result.new_stats.health, 78);
        assert!(result
            .warnings
            .iter()
            .any(|w| w == "78% health - your pet needs care!"));
        assert!(result.warnings.iter().any(|w| w.contains("starving")));
    }

    #[test]
    fn exhaustion_warning_only_when_awake() {
        let awake = calc().calculate(Decimal::ONE, &stats(100, 100, 100, 100, 10), false);
        assert!(awake.warnings.iter().any(|w| w.contains("exhausted")));
        let asleep = calc().calculate(dec!(0.05), &stats(100, 100, 100, 100, 10), true);
        assert!(!asleep.warnings.iter().any(|w| w.contains("exhausted")));
    }

    #[test]
    fn scaled_rates_decay_faster() {
        let config = DecayConfig::default().scaled(dec!(2)).unwrap_or_default();
        let result = TimeDecay::new(config).calculate(Decimal::ONE, &PetStats::FULL, false);
        assert_eq!(result.new_stats.hunger, 94);
    }

    #[test]
    fn huge_elapsed_time_bottoms_out() {
        let result = calc().calculate(dec!(1000000000000), &PetStats::FULL, false);
        assert_eq!(result.new_stats.hunger, 0);
        assert_eq!(result.new_stats.health, 0);
    }

    #[test]
    fn hours_between_is_exact() {
        let start = DateTime::<Utc>::from_timestamp(1_772_000_000, 0).unwrap_or_default();
        let later = start + Duration::minutes(90);
        assert_eq!(hours_between(start, later), dec!(1.5));
        assert_eq!(hours_between(later, start), dec!(-1.5));
    }

    #[test]
    fn abandonment_is_strictly_after_48_hours() {
        let neglected = stats(10, 10, 10, 10, 10);
        assert!(!is_abandoned(&neglected, dec!(48)));
        assert!(is_abandoned(&neglected, dec!(49)));
        assert!(!is_abandoned(&stats(20, 20, 20, 20, 20), dec!(100)));
    }

    #[test]
    fn severity_bands() {
        assert_eq!(severity(dec!(0.5)), DecaySeverity::None);
        assert_eq!(severity(dec!(1)), DecaySeverity::Low);
        assert_eq!(severity(dec!(6)), DecaySeverity::Medium);
        assert_eq!(severity(dec!(24)), DecaySeverity::High);
        assert_eq!(severity(dec!(72)), DecaySeverity::Critical);
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(dec!(0.5)), "30 minutes");
        assert_eq!(format_duration(dec!(0.0167)), "1 minute");
        assert_eq!(format_duration(dec!(1)), "1 hour");
        assert_eq!(format_duration(dec!(3.5)), "3h 30m");
        assert_eq!(format_duration(dec!(1.999)), "2 hours");
        assert_eq!(format_duration(dec!(48)), "2 days");
        assert_eq!(format_duration(dec!(28)), "1d 4h");
    }

    #[test]
    fn time_messages() {
        assert_eq!(time_message(dec!(0.005)), "Just now");
        assert_eq!(time_message(dec!(0.25)), "15 minutes ago");
        assert_eq!(time_message(dec!(2.5)), "2h 30m ago");
    }
}
