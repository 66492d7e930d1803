//! Path management for wedplan
//!
//! Provides XDG-compliant path resolution for configuration and data files.
//!
//! ## Path Resolution Order
//!
//! 1. `WEDPLAN_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/wedplan` or `~/.config/wedplan`
//! 3. Windows: `%APPDATA%\wedplan`

use std::path::PathBuf;

use crate::error::WedplanError;

/// Manages all paths used by wedplan
#[derive(Debug, Clone)]
pub struct WedplanPaths {
    base_dir: PathBuf,
}

impl WedplanPaths {
    /// Resolve paths from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, WedplanError> {
        let base_dir = match std::env::var("WEDPLAN_DATA_DIR") {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the JSON collections
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    pub fn wedding_file(&self) -> PathBuf {
        self.data_dir().join("wedding.json")
    }

    pub fn tasks_file(&self) -> PathBuf {
        self.data_dir().join("tasks.json")
    }

    pub fn budget_categories_file(&self) -> PathBuf {
        self.data_dir().join("budget_categories.json")
    }

    pub fn budget_items_file(&self) -> PathBuf {
        self.data_dir().join("budget_items.json")
    }

    pub fn guests_file(&self) -> PathBuf {
        self.data_dir().join("guests.json")
    }

    pub fn vendors_file(&self) -> PathBuf {
        self.data_dir().join("vendors.json")
    }

    pub fn moodboards_file(&self) -> PathBuf {
        self.data_dir().join("moodboards.json")
    }

    pub fn events_file(&self) -> PathBuf {
        self.data_dir().join("day_of_events.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), WedplanError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| WedplanError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| WedplanError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if wedplan has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, WedplanError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("wedplan"));
    }

    let home = std::env::var("HOME")
        .map_err(|_| WedplanError::Config("Could not determine HOME directory".into()))?;
    Ok(PathBuf::from(home).join(".config").join("wedplan"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, WedplanError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| WedplanError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("wedplan"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WedplanPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WedplanPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WedplanPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.guests_file(),
            temp_dir.path().join("data").join("guests.json")
        );
        assert_eq!(
            paths.events_file(),
            temp_dir.path().join("data").join("day_of_events.json")
        );
    }
}
