use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_PRIMARY_KEY: &str = "monthly-budget-data";
pub const DEFAULT_HISTORY_KEY: &str = "monthly-budget-history";
const APP_DIR_NAME: &str = "monthly_budget";

/// Stores user-configurable preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional directory for budget records. Defaults to the platform data directory.
    pub data_dir: Option<PathBuf>,
    #[serde(default = "Config::default_primary_key")]
    pub primary_key: String,
    #[serde(default = "Config::default_history_key")]
    pub history_key: String,
    /// Seed starter entries when the ledger is empty.
    #[serde(default)]
    pub seed_sample_data: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            primary_key: Self::default_primary_key(),
            history_key: Self::default_history_key(),
            seed_sample_data: false,
            log_filter: None,
        }
    }
}

impl Config {
    pub fn default_primary_key() -> String {
        DEFAULT_PRIMARY_KEY.into()
    }

    pub fn default_history_key() -> String {
        DEFAULT_HISTORY_KEY.into()
    }

    /// Directory holding the budget records: `data_dir` when set, else `<base>/data`.
    pub fn resolve_data_dir(&self, base: &Path) -> PathBuf {
        if let Some(path) = &self.data_dir {
            return path.clone();
        }
        base.join("data")
    }
}

/// Platform data directory for the application, falling back to the home directory.
pub fn default_base_dir() -> PathBuf {
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.primary_key, "monthly-budget-data");
        assert_eq!(config.history_key, "monthly-budget-history");
        assert!(!config.seed_sample_data);
    }

    #[test]
    fn explicit_data_dir_wins() {
        let config = Config {
            data_dir: Some(PathBuf::from("/tmp/budget")),
            ..Config::default()
        };
        assert_eq!(
            config.resolve_data_dir(Path::new("/home/user/.local/share/monthly_budget")),
            PathBuf::from("/tmp/budget")
        );
    }

    #[test]
    fn data_dir_defaults_under_base() {
        let base = Path::new("/var/lib/monthly_budget");
        assert_eq!(
            Config::default().resolve_data_dir(base),
            base.join("data")
        );
    }
}
