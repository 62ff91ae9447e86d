//! Path management for satchel-cli
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `SATCHEL_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/satchel-cli` or `~/.config/satchel-cli`
//! 3. Windows: `%APPDATA%\satchel-cli`

use std::path::PathBuf;

use crate::error::SatchelError;

/// Manages all paths used by satchel-cli
#[derive(Debug, Clone)]
pub struct SatchelPaths {
    /// Base directory for all satchel-cli data
    base_dir: PathBuf,
}

impl SatchelPaths {
    /// Create a new SatchelPaths instance
    ///
    /// Path resolution:
    /// 1. `SATCHEL_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/satchel-cli` or `~/.config/satchel-cli`
    /// 3. Windows: `%APPDATA%\satchel-cli`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SatchelError> {
        let base_dir = if let Ok(custom) = std::env::var("SATCHEL_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SatchelPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/satchel-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/satchel-cli/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to a backing document inside the data directory
    pub fn data_file(&self, file_name: &str) -> PathBuf {
        self.data_dir().join(file_name)
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), SatchelError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SatchelError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SatchelError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SatchelError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("satchel-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SatchelError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SatchelError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("satchel-cli"))
}
