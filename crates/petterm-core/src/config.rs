//! User settings for Pet Terminal.
//!
//! Settings live in `config.yaml` inside the data directory. Every field has
//! a default, so a missing file, an empty file or a file that only sets one
//! key all load. Two environment variables override the file:
//!
//! - `PET_TERMINAL_HOME` -- the data directory (default `~/.pet-terminal`)
//! - `PET_TERMINAL_DECAY_RATE` -- the decay multiplier

use std::path::{Path, PathBuf};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use petterm_git::DEFAULT_BACKFILL_LIMIT;
use petterm_pet::{CareThresholds, DecayConfig};

/// Settings file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Data directory name under the home directory.
pub const DATA_DIR_NAME: &str = ".pet-terminal";

/// Environment variable naming the data directory.
pub const HOME_ENV: &str = "PET_TERMINAL_HOME";

/// Environment variable overriding the decay multiplier.
pub const DECAY_RATE_ENV: &str = "PET_TERMINAL_DECAY_RATE";

/// Smallest accepted decay multiplier.
pub const MIN_DECAY_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// Largest accepted decay multiplier.
pub const MAX_DECAY_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

const MAX_THRESHOLD: u32 = 100;

/// Errors that can occur when loading or saving settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read or write the settings file.
    #[error("failed to access config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse or emit YAML.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level user settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Multiplier on every decay rate (0.5 is half speed, 2 is double).
    #[serde(default = "default_decay_rate", with = "rust_decimal::serde::float")]
    pub decay_rate: Decimal,

    /// Automatic care.
    #[serde(default)]
    pub auto_care: AutoCareSettings,

    /// Commit rewards.
    #[serde(default)]
    pub git: GitSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            decay_rate: default_decay_rate(),
            auto_care: AutoCareSettings::default(),
            git: GitSettings::default(),
        }
    }
}

/// Automatic care settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoCareSettings {
    /// Restock supplies before one-click care (default: false).
    #[serde(default)]
    pub enabled: bool,

    /// Stat levels below which care kicks in.
    #[serde(default)]
    pub thresholds: CareThresholds,
}

/// Commit reward settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitSettings {
    /// Commits rewarded on the very first check (default: 50).
    #[serde(default = "default_backfill_limit")]
    pub backfill_limit: usize,
}

impl Default for GitSettings {
    fn default() -> Self {
        Self {
            backfill_limit: default_backfill_limit(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse settings from a YAML string. An empty string yields defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Load settings, falling back to defaults when the file is missing or
    /// unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::from_file(path) {
            Ok(settings) => settings,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ignoring malformed config, using defaults");
                Self::default()
            }
        }
    }

    /// Write settings as YAML, creating the parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Write the default settings to `path` unless a file is already there.
    /// Returns whether a file was created.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the write fails.
    pub fn create_default(path: &Path) -> Result<bool, ConfigError> {
        if path.exists() {
            return Ok(false);
        }
        Self::default().save(path)?;
        Ok(true)
    }

    /// Apply environment overrides read through `lookup`.
    ///
    /// An unparsable decay rate is ignored with a warning; a parsable one is
    /// clamped into range.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let Some(raw) = lookup(DECAY_RATE_ENV) else {
            return;
        };
        match Decimal::from_str(raw.trim()) {
            Ok(rate) => self.set_decay_rate(rate),
            Err(err) => warn!(value = %raw, error = %err, "ignoring invalid {DECAY_RATE_ENV}"),
        }
    }

    /// Set the decay multiplier, clamped to `0.1..=5.0`.
    pub fn set_decay_rate(&mut self, rate: Decimal) {
        self.decay_rate = rate.clamp(MIN_DECAY_RATE, MAX_DECAY_RATE);
    }

    /// Problems with the current values. Empty when everything is in range.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.decay_rate < MIN_DECAY_RATE || self.decay_rate > MAX_DECAY_RATE {
            errors.push(format!(
                "decay_rate must be between {MIN_DECAY_RATE} and {MAX_DECAY_RATE}"
            ));
        }
        let t = &self.auto_care.thresholds;
        for (name, value) in [
            ("hunger", t.hunger),
            ("happiness", t.happiness),
            ("cleanliness", t.cleanliness),
            ("energy", t.energy),
            ("health", t.health),
        ] {
            if value > MAX_THRESHOLD {
                errors.push(format!("{name} threshold must be between 0 and {MAX_THRESHOLD}"));
            }
        }
        errors
    }

    /// Decay rates scaled by the (clamped) multiplier.
    pub fn decay_config(&self) -> DecayConfig {
        let base = DecayConfig::default();
        let rate = self.decay_rate.clamp(MIN_DECAY_RATE, MAX_DECAY_RATE);
        base.scaled(rate).unwrap_or(base)
    }
}

/// Resolve the data directory: `PET_TERMINAL_HOME` if set and non-empty,
/// else `<home>/.pet-terminal`. `None` when neither is known.
pub fn resolve_data_dir(lookup: impl Fn(&str) -> Option<String>, home: Option<PathBuf>) -> Option<PathBuf> {
    lookup(HOME_ENV)
        .filter(|dir| !dir.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| home.map(|home| home.join(DATA_DIR_NAME)))
}

// ---------------------------------------------------------------------------
// Default value functions for serde
// ---------------------------------------------------------------------------

const fn default_decay_rate() -> Decimal {
    Decimal::ONE
}

const fn default_backfill_limit() -> usize {
    DEFAULT_BACKFILL_LIMIT
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.decay_rate, dec!(1));
        assert!(!settings.auto_care.enabled);
        assert_eq!(settings.auto_care.thresholds.hunger, 70);
        assert_eq!(settings.auto_care.thresholds.energy, 50);
        assert_eq!(settings.git.backfill_limit, 50);
        assert!(settings.validate().is_empty());
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r"
decay_rate: 2.5
auto_care:
  enabled: true
  thresholds:
    hunger: 80
    happiness: 50
    cleanliness: 40
    energy: 30
    health: 90
git:
  backfill_limit: 10
";
        let settings = Settings::parse(yaml);
        assert!(settings.is_ok());
        let settings = settings.ok().unwrap_or_default();
        assert_eq!(settings.decay_rate, dec!(2.5));
        assert!(settings.auto_care.enabled);
        assert_eq!(settings.auto_care.thresholds.hunger, 80);
        assert_eq!(settings.auto_care.thresholds.health, 90);
        assert_eq!(settings.git.backfill_limit, 10);
    }

    #[test]
    fn parse_partial_yaml() {
        let settings = Settings::parse("auto_care:\n  enabled: true\n").unwrap();
        assert!(settings.auto_care.enabled);
        assert_eq!(settings.auto_care.thresholds.happiness, 60);
        assert_eq!(settings.decay_rate, dec!(1));
    }

    #[test]
    fn parse_empty_yaml() {
        assert_eq!(Settings::parse("").unwrap(), Settings::default());
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        assert!(Settings::parse("decay_rate: [fast").is_err());
    }

    #[test]
    fn setter_clamps() {
        let mut settings = Settings::default();
        settings.set_decay_rate(dec!(9));
        assert_eq!(settings.decay_rate, dec!(5));
        settings.set_decay_rate(dec!(0.01));
        assert_eq!(settings.decay_rate, dec!(0.1));
    }

    #[test]
    fn validate_reports_out_of_range() {
        let mut settings = Settings::default();
        settings.decay_rate = dec!(7);
        settings.auto_care.thresholds.health = 150;
        let errors = settings.validate();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.starts_with("decay_rate")));
        assert!(errors.iter().any(|e| e.starts_with("health threshold")));
    }

    #[test]
    fn decay_config_is_scaled() {
        let mut settings = Settings::default();
        settings.set_decay_rate(dec!(2));
        let decay = settings.decay_config();
        assert_eq!(decay.hunger_per_hour, dec!(6));
        assert_eq!(decay.sleep_recovery_per_hour, dec!(10));
    }

    #[test]
    fn env_overrides() {
        let mut settings = Settings::default();
        settings.apply_env_overrides(|key| (key == DECAY_RATE_ENV).then(|| String::from("3")));
        assert_eq!(settings.decay_rate, dec!(3));

        settings.apply_env_overrides(|key| (key == DECAY_RATE_ENV).then(|| String::from("fast")));
        assert_eq!(settings.decay_rate, dec!(3));

        settings.apply_env_overrides(|_| None);
        assert_eq!(settings.decay_rate, dec!(3));
    }

    #[test]
    fn data_dir_resolution() {
        let home = Some(PathBuf::from("/home/dev"));
        assert_eq!(
            resolve_data_dir(|_| None, home.clone()),
            Some(PathBuf::from("/home/dev/.pet-terminal"))
        );
        assert_eq!(
            resolve_data_dir(|_| Some(String::from("/tmp/pets")), home),
            Some(PathBuf::from("/tmp/pets"))
        );
        assert_eq!(resolve_data_dir(|_| Some(String::new()), None), None);
    }

    #[test]
    fn save_and_reload() {
        let dir = std::env::temp_dir().join(format!("petterm-config-{}", uuid::Uuid::new_v4()));
        let path = dir.join(CONFIG_FILE_NAME);

        assert!(Settings::create_default(&path).unwrap());
        assert!(!Settings::create_default(&path).unwrap());
        assert_eq!(Settings::load_or_default(&path), Settings::default());

        let mut custom = Settings::default();
        custom.auto_care.enabled = true;
        custom.set_decay_rate(dec!(0.5));
        custom.save(&path).unwrap();
        assert_eq!(Settings::from_file(&path).unwrap(), custom);

        std::fs::write(&path, "auto_care: [").unwrap();
        assert_eq!(Settings::load_or_default(&path), Settings::default());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
