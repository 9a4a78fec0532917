//! Composition of configuration, the file-backed store and the budget session.

use std::{
    env,
    path::{Path, PathBuf},
};

use budget_config::{model::default_base_dir, Config, ConfigManager};
use budget_core::{
    session::BudgetSession,
    storage::StorageKeys,
    time::{Clock, SystemClock},
};
use budget_storage_json::JsonFileStore;
use tracing::{debug, info};

use crate::errors::Result;

/// Environment variable overriding the base directory for config and data.
pub const HOME_ENV: &str = "MONTHLY_BUDGET_HOME";

/// Base directory from `MONTHLY_BUDGET_HOME`, else the platform data directory.
pub fn resolve_base_dir() -> PathBuf {
    env::var_os(HOME_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(default_base_dir)
}

/// Reads the configuration stored under `base`, falling back to defaults.
pub fn load_config(base: &Path) -> Result<(ConfigManager, Config)> {
    let manager = ConfigManager::with_base_dir(base.to_path_buf())?;
    let config = manager.load()?;
    Ok((manager, config))
}

/// An opened budget: its configuration and a live session over the data directory.
pub struct App {
    base_dir: PathBuf,
    config: Config,
    session: BudgetSession,
}

impl App {
    /// Opens the session for `config` using the system clock.
    pub fn open(base_dir: PathBuf, config: Config) -> Result<Self> {
        Self::open_with_clock(base_dir, config, Box::new(SystemClock))
    }

    pub fn open_with_clock(
        base_dir: PathBuf,
        config: Config,
        clock: Box<dyn Clock>,
    ) -> Result<Self> {
        let data_dir = config.resolve_data_dir(&base_dir);
        let store = JsonFileStore::new(data_dir)?;
        debug!(root = %store.root().display(), "opening budget store");
        let keys = StorageKeys {
            primary: config.primary_key.clone(),
            history: config.history_key.clone(),
        };
        let session = BudgetSession::load(Box::new(store), keys, clock);
        Ok(Self {
            base_dir,
            config,
            session,
        })
    }

    /// Runs the automatic month check and, when configured, seeds starter entries.
    ///
    /// Returns whether the month check archived a finished period.
    pub fn start(&mut self) -> bool {
        let rolled_over = self.session.check_and_handle_month_change();
        if self.config.seed_sample_data && self.session.initialize_sample_data() {
            info!("seeded starter entries into an empty ledger");
        }
        rolled_over
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &BudgetSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut BudgetSession {
        &mut self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use budget_core::time::FixedClock;
    use chrono::NaiveDate;

    fn clock(year: i32, month: u32) -> Box<FixedClock> {
        Box::new(FixedClock::at_noon(
            NaiveDate::from_ymd_opt(year, month, 10).unwrap(),
        ))
    }

    #[test]
    fn start_tags_a_fresh_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut app =
            App::open_with_clock(dir.path().to_path_buf(), Config::default(), clock(2025, 11))
                .unwrap();

        assert!(!app.start());
        assert_eq!(
            app.session().current_month().map(|period| period.to_string()),
            Some("2025-11".to_string())
        );
        assert!(dir.path().join("data").join("monthly-budget-data.json").exists());
    }

    #[test]
    fn seeding_follows_configuration() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            seed_sample_data: true,
            ..Config::default()
        };
        let mut app =
            App::open_with_clock(dir.path().to_path_buf(), config, clock(2025, 11)).unwrap();

        app.start();
        assert_eq!(app.session().ledger().income.len(), 2);
        assert_eq!(app.session().ledger().expenses.len(), 6);

        app.start();
        assert_eq!(app.session().ledger().expenses.len(), 6);
    }

    #[test]
    fn load_config_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let (manager, config) = load_config(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(manager.config_path().starts_with(dir.path()));
    }
}
