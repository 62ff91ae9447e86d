//! User settings for satchel-cli
//!
//! A small preferences file next to the data directory. Every field has a
//! serde default so older settings files keep loading as fields are added.

use serde::{Deserialize, Serialize};

use super::paths::SatchelPaths;
use crate::error::SatchelError;
use crate::storage::file_io::write_json_atomic;

/// User settings for satchel-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Date display format (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Currency symbol used when rendering finance amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    "%d-%m-%Y".to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            date_format: default_date_format(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating the file with defaults if absent
    pub fn load_or_create(paths: &SatchelPaths) -> Result<Self, SatchelError> {
        let path = paths.settings_file();

        if !path.exists() {
            let settings = Self::default();
            settings.save(paths)?;
            return Ok(settings);
        }

        let raw = std::fs::read_to_string(&path)
            .map_err(|e| SatchelError::Config(format!("Failed to read settings: {}", e)))?;
        serde_json::from_str(&raw)
            .map_err(|e| SatchelError::Config(format!("Failed to parse settings: {}", e)))
    }

    /// Persist settings to disk
    pub fn save(&self, paths: &SatchelPaths) -> Result<(), SatchelError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
