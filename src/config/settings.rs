//! User settings for the Rigel tax CLI
//!
//! Manages user preferences: the default tax year, currency symbol, and the
//! standard VAT rate used by the VAT estimator when no rate is supplied.

use serde::{Deserialize, Serialize};

use super::paths::RigelPaths;
use crate::error::RigelError;

/// User settings for the Rigel tax CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Tax year used when a command does not specify one
    #[serde(default = "default_tax_year")]
    pub default_tax_year: u16,

    /// Currency symbol for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Standard VAT rate as a fraction (0.15 since April 2018)
    #[serde(default = "default_vat_rate")]
    pub vat_rate: f64,

    /// Whether multi-entity grouping is active for deferred tax summaries
    #[serde(default)]
    pub multi_entity: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_tax_year() -> u16 {
    2024
}

fn default_currency() -> String {
    "R".to_string()
}

fn default_vat_rate() -> f64 {
    0.15
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_tax_year: default_tax_year(),
            currency_symbol: default_currency(),
            vat_rate: default_vat_rate(),
            multi_entity: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &RigelPaths) -> Result<Self, RigelError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| RigelError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| RigelError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Create default settings
            let settings = Settings::default();
            // Don't save yet - let caller decide when to persist
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &RigelPaths) -> Result<(), RigelError> {
        // Ensure the config directory exists
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| RigelError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| RigelError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_tax_year, 2024);
        assert_eq!(settings.currency_symbol, "R");
        assert!((settings.vat_rate - 0.15).abs() < f64::EPSILON);
        assert!(!settings.multi_entity);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RigelPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.default_tax_year = 2025;
        settings.multi_entity = true;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_tax_year, 2025);
        assert!(loaded.multi_entity);
    }

    #[test]
    fn test_serde_round_trip() {
        let settings = Settings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings.default_tax_year, deserialized.default_tax_year);
    }
}
