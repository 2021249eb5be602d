use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SENIOR_CUTOFF: i64 = 10;

/// Environment variable that overrides the config directory.
pub const HOME_ENV: &str = "PATTERNBOOK_HOME";

/// How the threshold-keyed sales factory picks a seniority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalesDispatch {
    /// The catalog's historical outcome: the case label is a boolean that
    /// never equals the numeric threshold, so the default branch always wins.
    #[default]
    Literal,
    /// `threshold > cutoff` selects senior.
    Comparison,
}

impl fmt::Display for SalesDispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SalesDispatch::Literal => f.write_str("literal"),
            SalesDispatch::Comparison => f.write_str("comparison"),
        }
    }
}

impl FromStr for SalesDispatch {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "literal" => Ok(SalesDispatch::Literal),
            "comparison" => Ok(SalesDispatch::Comparison),
            other => Err(CatalogError::Config(format!(
                "Invalid sales-dispatch '{}' (expected literal or comparison)",
                other
            ))),
        }
    }
}

/// Configuration for patternbook, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    #[serde(default)]
    pub sales_dispatch: SalesDispatch,

    /// Thresholds strictly above this are senior under comparison dispatch
    #[serde(default = "default_senior_cutoff")]
    pub senior_cutoff: i64,
}

fn default_senior_cutoff() -> i64 {
    DEFAULT_SENIOR_CUTOFF
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            sales_dispatch: SalesDispatch::default(),
            senior_cutoff: DEFAULT_SENIOR_CUTOFF,
        }
    }
}

impl CatalogConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: CatalogConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "sales-dispatch" => Ok(self.sales_dispatch.to_string()),
            "senior-cutoff" => Ok(self.senior_cutoff.to_string()),
            other => Err(CatalogError::Config(format!("Unknown config key: {}", other))),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "sales-dispatch" => self.sales_dispatch = value.parse()?,
            "senior-cutoff" => {
                self.senior_cutoff = value.parse().map_err(|_| {
                    CatalogError::Config(format!("senior-cutoff must be an integer, got '{}'", value))
                })?
            }
            other => {
                return Err(CatalogError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }

    /// Keys accepted by [`CatalogConfig::get`] and [`CatalogConfig::set`], in display order.
    pub fn keys() -> &'static [&'static str] {
        &["sales-dispatch", "senior-cutoff"]
    }
}

/// Resolves the config directory: `$PATTERNBOOK_HOME` if set, else the
/// platform config dir.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    directories::ProjectDirs::from("com", "patternbook", "patternbook")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| CatalogError::Config("Could not determine config directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert_eq!(config.sales_dispatch, SalesDispatch::Literal);
        assert_eq!(config.senior_cutoff, 10);
    }

    #[test]
    fn test_set_and_get_keys() {
        let mut config = CatalogConfig::default();
        config.set("sales-dispatch", "Comparison").unwrap();
        config.set("senior-cutoff", "20").unwrap();
        assert_eq!(config.get("sales-dispatch").unwrap(), "comparison");
        assert_eq!(config.get("senior-cutoff").unwrap(), "20");
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = CatalogConfig::default();
        assert!(config.set("sales-dispatch", "switch").is_err());
        assert!(config.set("senior-cutoff", "ten").is_err());
        assert!(config.set("color", "red").is_err());
        assert!(config.get("color").is_err());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = CatalogConfig::load(temp_dir.path().join("missing")).unwrap();
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("nested");

        let mut config = CatalogConfig::default();
        config.set("sales-dispatch", "comparison").unwrap();
        config.save(&dir).unwrap();

        let loaded = CatalogConfig::load(&dir).unwrap();
        assert_eq!(loaded.sales_dispatch, SalesDispatch::Comparison);
        assert_eq!(loaded.senior_cutoff, 10);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: CatalogConfig = serde_json::from_str(r#"{"senior_cutoff": 3}"#).unwrap();
        assert_eq!(config.sales_dispatch, SalesDispatch::Literal);
        assert_eq!(config.senior_cutoff, 3);
    }
}
