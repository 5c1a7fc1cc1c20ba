// Configuration - where files live and how output looks
//
// Precedence (highest wins):
// 1. Environment variables (RECORDBOOK_*)
// 2. TOML file: $RECORDBOOK_CONFIG, else ./recordbook.toml if present
// 3. Built-in defaults

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "recordbook.toml";

pub const ENV_CONFIG: &str = "RECORDBOOK_CONFIG";
pub const ENV_DATA_DIR: &str = "RECORDBOOK_DATA_DIR";
pub const ENV_CURRENCY: &str = "RECORDBOOK_CURRENCY";
pub const ENV_LOG: &str = "RECORDBOOK_LOG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory every relative file name below is resolved against
    pub data_dir: PathBuf,

    /// JSON snapshot written and re-read by the inventory logger
    pub inventory_file: String,

    /// Comma separated `id,name,score` input for the grading report
    pub students_file: String,

    pub report_file: String,

    pub currency_symbol: String,

    /// tracing filter directive, overridden by RUST_LOG
    pub log_filter: String,

    /// Starting balance of the demo savings account
    pub opening_balance: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_dir: PathBuf::from("."),
            inventory_file: "inventory.json".to_string(),
            students_file: "students.txt".to_string(),
            report_file: "report.txt".to_string(),
            currency_symbol: "$".to_string(),
            log_filter: "warn".to_string(),
            opening_balance: 1000.0,
        }
    }
}

impl AppConfig {
    /// Resolve the full configuration from the process environment
    pub fn load() -> Result<Self> {
        let explicit = std::env::var_os(ENV_CONFIG).map(PathBuf::from);
        let config = Self::load_from(explicit.as_deref())?;
        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Read a TOML file, or fall back to defaults
    ///
    /// An explicit path must exist. Without one, `./recordbook.toml` is used
    /// only when present.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    return Ok(AppConfig::default());
                }
                default
            }
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply RECORDBOOK_* overrides from any key lookup (the process env in production)
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|v| !v.trim().is_empty()) {
            self.data_dir = PathBuf::from(dir.trim());
        }
        if let Some(symbol) = lookup(ENV_CURRENCY) {
            self.currency_symbol = symbol;
        }
        if let Some(filter) = lookup(ENV_LOG).filter(|v| !v.trim().is_empty()) {
            self.log_filter = filter.trim().to_string();
        }
        self
    }

    pub fn inventory_path(&self) -> PathBuf {
        self.data_dir.join(&self.inventory_file)
    }

    pub fn students_path(&self) -> PathBuf {
        self.data_dir.join(&self.students_file)
    }

    pub fn report_path(&self) -> PathBuf {
        self.data_dir.join(&self.report_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_file_names() {
        let config = AppConfig::default();
        assert_eq!(config.inventory_path(), PathBuf::from("./inventory.json"));
        assert_eq!(config.students_path(), PathBuf::from("./students.txt"));
        assert_eq!(config.report_path(), PathBuf::from("./report.txt"));
        assert_eq!(config.opening_balance, 1000.0);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            data_dir = "/tmp/records"
            currency_symbol = "GH₵"
            "#,
        )
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/records"));
        assert_eq!(config.currency_symbol, "GH₵");
        assert_eq!(config.report_file, "report.txt");
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(AppConfig::from_toml_str("opening_balance = \"lots\"").is_err());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(AppConfig::load_from(Some(&missing)).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recordbook.toml");
        std::fs::write(&path, "students_file = \"class.csv\"\nopening_balance = 250.0\n").unwrap();

        let config = AppConfig::load_from(Some(&path)).unwrap();
        assert_eq!(config.students_file, "class.csv");
        assert_eq!(config.opening_balance, 250.0);
    }

    #[test]
    fn test_env_overrides_win() {
        let env: HashMap<&str, &str> = [
            (ENV_DATA_DIR, " /var/lib/recordbook "),
            (ENV_CURRENCY, "€"),
            (ENV_LOG, "debug"),
        ]
        .into_iter()
        .collect();

        let config = AppConfig::default().with_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.data_dir, PathBuf::from("/var/lib/recordbook"));
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_blank_env_values_ignored() {
        let config = AppConfig::default().with_overrides(|key| match key {
            ENV_DATA_DIR | ENV_LOG => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(config, AppConfig::default());
    }
}
