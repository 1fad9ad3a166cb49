//! Path management for the Rigel tax CLI
//!
//! Provides XDG-compliant path resolution for configuration and tax tables.
//!
//! ## Path Resolution Order
//!
//! 1. `RIGEL_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/rigel-tax` or `~/.config/rigel-tax`
//! 3. Windows: `%APPDATA%\rigel-tax`

use std::path::PathBuf;

use crate::error::RigelError;

/// Manages all paths used by the Rigel tax CLI
#[derive(Debug, Clone)]
pub struct RigelPaths {
    /// Base directory for all Rigel data
    base_dir: PathBuf,
}

impl RigelPaths {
    /// Create a new RigelPaths instance
    ///
    /// Path resolution:
    /// 1. `RIGEL_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/rigel-tax` or `~/.config/rigel-tax`
    /// 3. Windows: `%APPDATA%\rigel-tax`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, RigelError> {
        let base_dir = if let Ok(custom) = std::env::var("RIGEL_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create RigelPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/rigel-tax/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the user-supplied tax-year tables file
    ///
    /// The 2024 table ships built in; this file adds or overrides years.
    pub fn tax_tables_file(&self) -> PathBuf {
        self.base_dir.join("tax_tables.yaml")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), RigelError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| RigelError::Io(format!("Failed to create base directory: {}", e)))?;

        Ok(())
    }

    /// Check if Rigel has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, RigelError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("rigel-tax"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, RigelError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| RigelError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("rigel-tax"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RigelPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.tax_tables_file(),
            temp_dir.path().join("tax_tables.yaml")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RigelPaths::with_base_dir(temp_dir.path().join("nested").join("dir"));

        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
        assert!(!paths.is_initialized());
    }
}
