//! User settings for the expense log
//!
//! Persisted as `config.json` next to the ledger.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::DEFAULT_CATEGORY;
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Category recorded when an expense is added without one
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Symbol prefixed to amounts in reports (empty for none)
    #[serde(default)]
    pub currency_symbol: String,

    /// Whether adding an expense reports budget violations
    #[serde(default = "default_warn")]
    pub warn_on_budget_exceeded: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_warn() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_category: default_category(),
            currency_symbol: String::new(),
            warn_on_budget_exceeded: default_warn(),
        }
    }
}

impl Settings {
    /// Load settings from disk, writing the defaults on first run
    ///
    /// Unlike the budget file, a malformed settings file is an error.
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            return read_json(&settings_path).map_err(|e| {
                ExpenseError::Config(format!("Failed to load settings: {}", e))
            });
        }

        let settings = Settings::default();
        settings.save(paths)?;
        info!(path = %settings_path.display(), "wrote default settings");
        Ok(settings)
    }

    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_category, "Other");
        assert!(settings.currency_symbol.is_empty());
        assert!(settings.warn_on_budget_exceeded);
    }

    #[test]
    fn test_first_run_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().join("fresh"));

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(paths.settings_file().exists());

        let content = std::fs::read_to_string(paths.settings_file()).unwrap();
        assert!(content.contains("\"default_category\": \"Other\""));
        assert_eq!(Settings::load_or_create(&paths).unwrap(), settings);
    }

    #[test]
    fn test_existing_file_is_not_overwritten() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let raw = r#"{"default_category": "Misc"}"#;
        std::fs::write(paths.settings_file(), raw).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_category, "Misc");
        assert_eq!(std::fs::read_to_string(paths.settings_file()).unwrap(), raw);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            default_category: "Misc".into(),
            currency_symbol: "€".into(),
            warn_on_budget_exceeded: false,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "$"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "$");
        assert_eq!(loaded.default_category, "Other");
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
    }
}
