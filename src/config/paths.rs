//! Path management for saldo
//!
//! Provides XDG-compliant path resolution for the configuration file and
//! the ledger database.
//!
//! ## Path Resolution Order
//!
//! 1. `SALDO_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/saldo` or `~/.config/saldo`
//! 3. Windows: `%APPDATA%\saldo`

use std::path::PathBuf;

use crate::error::SaldoError;

/// Manages all paths used by saldo
#[derive(Debug, Clone)]
pub struct SaldoPaths {
    /// Base directory for all saldo data
    base_dir: PathBuf,
}

impl SaldoPaths {
    /// Create a new SaldoPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SaldoError> {
        let base_dir = if let Ok(custom) = std::env::var("SALDO_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SaldoPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/saldo/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the ledger database file
    pub fn ledger_file(&self) -> PathBuf {
        self.base_dir.join("ledger.db")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), SaldoError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SaldoError::Io(format!("Failed to create base directory: {}", e)))?;
        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SaldoError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| SaldoError::Config("Could not determine home directory".into()))
        })?;
    Ok(config_base.join("saldo"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SaldoError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SaldoError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("saldo"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SaldoPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.ledger_file(), temp_dir.path().join("ledger.db"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SaldoPaths::with_base_dir(temp_dir.path().join("nested").join("saldo"));

        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }
}
