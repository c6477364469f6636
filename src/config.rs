//! Configuration file support for pinview.
//!
//! Viewer behaviour (zoom policy, reset-on-reopen) and logging preferences are
//! stored as JSON so they can be exported, edited and re-imported.

use pinview_core::ViewerSettings;
use serde::{Deserialize, Serialize};

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Get the display name for this log level.
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

    /// Parse a level name, case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Application configuration that can be exported and imported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Application name (for identification)
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// User preferences
    #[serde(default)]
    pub preferences: UserPreferences,

    /// Zoom policy and session behaviour handed to the engine
    #[serde(default)]
    pub viewer: ViewerSettings,
}

fn default_app_name() -> String {
    "pinview".to_string()
}

/// User preferences section of the config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl AppConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            app_name: default_app_name(),
            preferences: UserPreferences::default(),
            viewer: ViewerSettings::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        config.validate()?;
        Ok(config)
    }

    /// Check the viewer settings for values the engine cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let viewer = &self.viewer;
        if !viewer.max_zoom.is_finite() || viewer.max_zoom < 1.0 {
            return Err(ConfigError::InvalidSetting {
                name: "viewer.max_zoom",
                reason: format!("must be a finite value >= 1, got {}", viewer.max_zoom),
            });
        }
        if !viewer.zoom_step.is_finite() || viewer.zoom_step <= 0.0 {
            return Err(ConfigError::InvalidSetting {
                name: "viewer.zoom_step",
                reason: format!("must be a finite value > 0, got {}", viewer.zoom_step),
            });
        }
        Ok(())
    }

    /// Read and parse a configuration file.
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Like [`AppConfig::load`], but a missing file is `Ok(None)`.
    pub fn load_if_exists(path: &std::path::Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        Self::load(path).map(Some)
    }

    /// Write the configuration to `path`, creating parent directories.
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Get the default filename for config export.
    pub fn default_filename() -> &'static str {
        "pinview-config.json"
    }

    /// Get the default config file path for auto-load/save.
    /// Returns None on WASM (no filesystem access).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<std::path::PathBuf> {
        // Try to use XDG config directory, fall back to home directory
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("pinview").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("pinview")
                    .join(Self::default_filename())
            })
        }
    }

    /// Load the configuration from the default path.
    ///
    /// `Ok(None)` when there is no config directory or no file in it. Errors are
    /// returned rather than logged so the caller can report them once logging is up.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_default_path() -> Result<Option<Self>, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_if_exists(&path),
            None => Ok(None),
        }
    }

    /// Save configuration to the default path.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_default_path(&self) -> Result<std::path::PathBuf, ConfigError> {
        let path = Self::default_path().ok_or_else(|| {
            ConfigError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;
        self.save(&path)?;
        Ok(path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// A setting holds a value the viewer cannot use
    #[error("Invalid setting {name}: {reason}")]
    InvalidSetting { name: &'static str, reason: String },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trip() {
        let config = AppConfig::new();
        let json = config.to_json().unwrap();
        let parsed = AppConfig::from_json(&json).unwrap();
        assert_eq!(parsed.version, CONFIG_VERSION);
        assert_eq!(parsed.viewer, ViewerSettings::default());
        assert_eq!(parsed.preferences.log_level, LogLevel::Info);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = AppConfig::from_json(r#"{ "version": 1 }"#).unwrap();
        assert_eq!(config.app_name, "pinview");
        assert_eq!(config.viewer.max_zoom, 3.0);
        assert!(!config.viewer.reset_on_reopen);
    }

    #[test]
    fn test_partial_viewer_section() {
        let json = r#"{ "version": 1, "viewer": { "reset_on_reopen": true, "zoom_step": 0.25 } }"#;
        let config = AppConfig::from_json(json).unwrap();
        assert!(config.viewer.reset_on_reopen);
        assert_eq!(config.viewer.zoom_step, 0.25);
        assert_eq!(config.viewer.max_zoom, 3.0);
    }

    #[test]
    fn test_log_level_lowercase() {
        let json = r#"{ "version": 1, "preferences": { "log_level": "debug" } }"#;
        let config = AppConfig::from_json(json).unwrap();
        assert_eq!(config.preferences.log_level, LogLevel::Debug);
        assert_eq!(
            config.preferences.log_level.to_level_filter(),
            log::LevelFilter::Debug
        );
    }

    #[test]
    fn test_version_too_new() {
        let result = AppConfig::from_json(r#"{ "version": 99 }"#);
        assert!(matches!(
            result,
            Err(ConfigError::VersionTooNew {
                file_version: 99,
                supported_version: CONFIG_VERSION
            })
        ));
    }

    #[test]
    fn test_invalid_zoom_step() {
        let json = r#"{ "version": 1, "viewer": { "zoom_step": 0.0 } }"#;
        assert!(matches!(
            AppConfig::from_json(json),
            Err(ConfigError::InvalidSetting { name: "viewer.zoom_step", .. })
        ));
    }

    #[test]
    fn test_invalid_max_zoom() {
        let json = r#"{ "version": 1, "viewer": { "max_zoom": 0.5 } }"#;
        assert!(matches!(
            AppConfig::from_json(json),
            Err(ConfigError::InvalidSetting { name: "viewer.max_zoom", .. })
        ));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            AppConfig::from_json("not json"),
            Err(ConfigError::ParseError(_))
        ));
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir()
            .join(format!("pinview-config-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_load_if_exists_missing_file() {
        let path = temp_path("absent.json");
        assert!(AppConfig::load_if_exists(&path).unwrap().is_none());
    }

    #[test]
    fn test_load_if_exists_reports_invalid_file() {
        let path = temp_path("invalid.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{ "version": 1, "viewer": { "zoom_step": -1 } }"#).unwrap();

        let result = AppConfig::load_if_exists(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidSetting { name: "viewer.zoom_step", .. })
        ));
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("nested/saved.json");
        let mut config = AppConfig::new();
        config.preferences.log_level = LogLevel::Trace;
        config.viewer.reset_on_reopen = true;
        config.save(&path).unwrap();

        let loaded = AppConfig::load_if_exists(&path).unwrap().unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.preferences.log_level, LogLevel::Trace);
        assert!(loaded.viewer.reset_on_reopen);
        assert_eq!(loaded.viewer.max_zoom, 3.0);
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("WARN"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("trace"), Some(LogLevel::Trace));
        assert_eq!(LogLevel::parse("loud"), None);
        assert_eq!(LogLevel::Trace.name(), "Trace");
    }
}
