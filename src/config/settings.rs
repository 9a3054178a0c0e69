//! User settings for saldo
//!
//! A small JSON settings file holding display preferences. The ledger
//! itself lives in the database file; this only affects rendering.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::paths::SaldoPaths;
use crate::error::SaldoError;

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "kr".to_string()
}

/// User settings for saldo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol rendered after amounts, e.g. "1250.00 kr"
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating the file with defaults if absent
    pub fn load_or_create(paths: &SaldoPaths) -> Result<Self, SaldoError> {
        let path = paths.settings_file();

        if path.exists() {
            let contents = fs::read_to_string(&path).map_err(|e| {
                SaldoError::Config(format!("Failed to read {}: {}", path.display(), e))
            })?;
            let settings = serde_json::from_str(&contents).map_err(|e| {
                SaldoError::Config(format!("Failed to parse {}: {}", path.display(), e))
            })?;
            Ok(settings)
        } else {
            let settings = Self::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk atomically (write to temp, then rename)
    pub fn save(&self, paths: &SaldoPaths) -> Result<(), SaldoError> {
        paths.ensure_directories()?;
        write_json_atomic(&paths.settings_file(), self)
    }
}

/// Write JSON to a file atomically so a crash mid-write cannot corrupt it
fn write_json_atomic<T: Serialize>(path: &Path, data: &T) -> Result<(), SaldoError> {
    let temp_path = path.with_extension("json.tmp");

    let json = serde_json::to_string_pretty(data)
        .map_err(|e| SaldoError::Config(format!("Failed to serialize settings: {}", e)))?;

    fs::write(&temp_path, json)
        .map_err(|e| SaldoError::Io(format!("Failed to write temp file: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        SaldoError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_or_create_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SaldoPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.currency_symbol, "kr");
        assert!(paths.settings_file().exists());
    }

    #[test]
    fn test_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SaldoPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "€".to_string();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
    }
}
