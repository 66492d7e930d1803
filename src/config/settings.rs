//! User settings for wedplan
//!
//! Manages display preferences and the inspiration search configuration.

use serde::{Deserialize, Serialize};

use super::paths::WedplanPaths;
use crate::error::WedplanError;

/// Environment variable holding the Pinterest access token
pub const ACCESS_TOKEN_ENV: &str = "PINTEREST_ACCESS_TOKEN";

/// Environment variable overriding the proxy server port
pub const PORT_ENV: &str = "WEDPLAN_PORT";

/// Inspiration search settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Base URL of the pin search API
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Results requested per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Port used by `wedplan serve`
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_api_base() -> String {
    "https://api.pinterest.com/v5".to_string()
}

fn default_page_size() -> u32 {
    25
}

fn default_port() -> u16 {
    3000
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            page_size: default_page_size(),
            port: default_port(),
        }
    }
}

impl SearchSettings {
    /// Read the access token from the environment, treating blank as unset
    pub fn access_token(&self) -> Option<String> {
        std::env::var(ACCESS_TOKEN_ENV)
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }

    /// Port to bind, honouring `WEDPLAN_PORT`
    pub fn effective_port(&self) -> u16 {
        std::env::var(PORT_ENV)
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(self.port)
    }
}

/// User settings for wedplan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Inspiration search configuration
    #[serde(default)]
    pub search: SearchSettings,

    /// Whether onboarding has been completed
    #[serde(default)]
    pub setup_completed: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%b %-d, %Y".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            search: SearchSettings::default(),
            setup_completed: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &WedplanPaths) -> Result<Self, WedplanError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Not persisted until the caller decides to save
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| WedplanError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| WedplanError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &WedplanPaths) -> Result<(), WedplanError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| WedplanError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| WedplanError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
