//! Tunable parameters for decay and automatic care.
//!
//! [`DecayConfig`] holds the per-hour decay rates and the critical thresholds
//! that trigger extra health loss. [`CareThresholds`] holds the stat levels
//! below which the care planner steps in. Both default to the values the
//! game ships with; the settings layer may scale or override them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-hour decay rates and critical thresholds.
///
/// Rates are exact decimals so that e.g. `0.125` cleanliness per hour never
/// accumulates float error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecayConfig {
    /// Hunger lost per hour (default: 3).
    pub hunger_per_hour: Decimal,

    /// Happiness lost per hour (default: 0.67).
    pub happiness_per_hour: Decimal,

    /// Cleanliness lost per hour (default: 0.125).
    pub cleanliness_per_hour: Decimal,

    /// Energy lost per hour while awake (default: 2).
    pub energy_per_hour: Decimal,

    /// Energy recovered per hour while asleep (default: 10).
    pub sleep_recovery_per_hour: Decimal,

    /// Hunger below which health starts to decay (default: 10).
    pub critical_hunger: u32,

    /// Happiness below which health starts to decay (default: 10).
    pub critical_happiness: u32,

    /// Cleanliness below which health starts to decay (default: 10).
    pub critical_cleanliness: u32,

    /// Health lost per hour while any critical threshold is crossed (default: 2).
    pub health_per_hour_when_critical: Decimal,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            hunger_per_hour: Decimal::new(3, 0),
            happiness_per_hour: Decimal::new(67, 2),
            cleanliness_per_hour: Decimal::new(125, 3),
            energy_per_hour: Decimal::new(2, 0),
            sleep_recovery_per_hour: Decimal::new(10, 0),
            critical_hunger: 10,
            critical_happiness: 10,
            critical_cleanliness: 10,
            health_per_hour_when_critical: Decimal::new(2, 0),
        }
    }
}

impl DecayConfig {
    /// Scale every decay rate by `multiplier`.
    ///
    /// Sleep recovery is not a decay and is left unchanged. Returns `None`
    /// if any product overflows.
    pub fn scaled(&self, multiplier: Decimal) -> Option<Self> {
        Some(Self {
            hunger_per_hour: self.hunger_per_hour.checked_mul(multiplier)?,
            happiness_per_hour: self.happiness_per_hour.checked_mul(multiplier)?,
            cleanliness_per_hour: self.cleanliness_per_hour.checked_mul(multiplier)?,
            energy_per_hour: self.energy_per_hour.checked_mul(multiplier)?,
            health_per_hour_when_critical: self
                .health_per_hour_when_critical
                .checked_mul(multiplier)?,
            ..self.clone()
        })
    }
}

/// Stat levels below which the care planner acts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareThresholds {
    /// Feed when hunger is below this (default: 70).
    #[serde(default = "default_hunger_threshold")]
    pub hunger: u32,

    /// Play when happiness is below this (default: 60).
    #[serde(default = "default_happiness_threshold")]
    pub happiness: u32,

    /// Clean when cleanliness is below this (default: 60).
    #[serde(default = "default_cleanliness_threshold")]
    pub cleanliness: u32,

    /// Suggest rest when energy is below this (default: 50).
    #[serde(default = "default_energy_threshold")]
    pub energy: u32,

    /// Heal when health is below this (default: 70).
    #[serde(default = "default_health_threshold")]
    pub health: u32,
}

impl Default for CareThresholds {
    fn default() -> Self {
        Self {
            hunger: default_hunger_threshold(),
            happiness: default_happiness_threshold(),
            cleanliness: default_cleanliness_threshold(),
            energy: default_energy_threshold(),
            health: default_health_threshold(),
        }
    }
}

const fn default_hunger_threshold() -> u32 {
    70
}
const fn default_happiness_threshold() -> u32 {
    60
}
const fn default_cleanliness_threshold() -> u32 {
    60
}
const fn default_energy_threshold() -> u32 {
    50
}
const fn default_health_threshold() -> u32 {
    70
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_rates_are_exact() {
        let config = DecayConfig::default();
        assert_eq!(config.happiness_per_hour, dec!(0.67));
        assert_eq!(config.cleanliness_per_hour, dec!(0.125));
    }

    #[test]
    fn scaling_leaves_sleep_recovery_alone() {
        let scaled = DecayConfig::default().scaled(dec!(2));
        assert!(scaled.is_some());
        if let Some(scaled) = scaled {
            assert_eq!(scaled.hunger_per_hour, dec!(6));
            assert_eq!(scaled.energy_per_hour, dec!(4));
            assert_eq!(scaled.sleep_recovery_per_hour, dec!(10));
            assert_eq!(scaled.critical_hunger, 10);
        }
    }

    #[test]
    fn care_thresholds_default() {
        let t = CareThresholds::default();
        assert_eq!((t.hunger, t.happiness, t.cleanliness, t.energy, t.health), (70, 60, 60, 50, 70));
    }
}
