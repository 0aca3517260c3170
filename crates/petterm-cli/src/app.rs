//! Wiring: data directory, settings and the JSON-backed service.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use petterm_core::config::CONFIG_FILE_NAME;
use petterm_core::{PetService, Settings, resolve_data_dir};
use petterm_store::JsonStore;

/// Everything a command handler needs.
pub struct App {
    /// The command service over the user's save file.
    pub service: PetService<JsonStore>,
    data_dir: PathBuf,
}

impl App {
    /// Resolve the data directory, load settings and open the store.
    pub fn open() -> Result<Self> {
        let env = |key: &str| std::env::var(key).ok();
        let data_dir = resolve_data_dir(env, dirs::home_dir())
            .context("could not determine the home directory; set PET_TERMINAL_HOME")?;

        let mut settings = Settings::load_or_default(&data_dir.join(CONFIG_FILE_NAME));
        settings.apply_env_overrides(env);
        for problem in settings.validate() {
            warn!(%problem, "config value out of range");
        }

        let store = JsonStore::open(&data_dir)
            .with_context(|| format!("could not open data directory {}", data_dir.display()))?;
        debug!(dir = %data_dir.display(), "store opened");
        Ok(Self {
            service: PetService::new(store, settings),
            data_dir,
        })
    }

    /// The data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of `config.yaml`.
    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE_NAME)
    }

    /// The current time.
    pub fn now() -> DateTime<Utc> {
        Utc::now()
    }
}
