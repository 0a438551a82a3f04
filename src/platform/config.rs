// Synaptik - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for Synaptik configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/synaptik/ or %APPDATA%\Synaptik\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Default location of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored so newer config files still load.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Width of the left control panel in points.
    pub control_panel_width: Option<f32>,
    /// Width of the right log panel in points.
    pub log_panel_width: Option<f32>,
    /// Prefix log panel lines with the time they were recorded.
    pub show_timestamps: Option<bool>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    /// Width of the left control panel in points.
    pub control_panel_width: f32,
    /// Width of the right log panel in points.
    pub log_panel_width: f32,
    /// Prefix log panel lines with their time.
    pub show_timestamps: bool,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dark_mode: true,
            control_panel_width: constants::DEFAULT_PANEL_WIDTH,
            log_panel_width: constants::DEFAULT_PANEL_WIDTH,
            show_timestamps: false,
            log_level: None,
        }
    }
}

/// Load and validate the config file at `config_path`.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// A missing file is a first run: defaults, no warnings. An unreadable or
/// unparseable file yields defaults plus one warning; the application still
/// starts.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(e) => {
            let err = ConfigError::Io {
                path: config_path.to_path_buf(),
                source: e,
            };
            warnings.push(format!("{err}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let err = ConfigError::TomlParse {
                path: config_path.to_path_buf(),
                source: e,
            };
            warnings.push(format!("{err}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let (config, field_warnings) = validate(raw);
    warnings.extend(field_warnings);
    (config, warnings)
}

/// Validate each field of a parsed config, accumulating every problem.
pub fn validate(raw: RawConfig) -> (AppConfig, Vec<String>) {
    let mut config = AppConfig::default();
    let mut warnings = Vec::new();

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => warnings.push(out_of_range(
                "ui.theme",
                other,
                "\"dark\" or \"light\"; using dark",
            )),
        }
    }

    // -- UI: panel widths --
    if let Some(width) = raw.ui.control_panel_width {
        match checked_panel_width("ui.control_panel_width", width) {
            Ok(w) => config.control_panel_width = w,
            Err(msg) => warnings.push(msg),
        }
    }
    if let Some(width) = raw.ui.log_panel_width {
        match checked_panel_width("ui.log_panel_width", width) {
            Ok(w) => config.log_panel_width = w,
            Err(msg) => warnings.push(msg),
        }
    }

    if let Some(show) = raw.ui.show_timestamps {
        config.show_timestamps = show;
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let lowered = level.to_lowercase();
        if constants::VALID_LOG_LEVELS.contains(&lowered.as_str()) {
            config.log_level = Some(lowered);
        } else {
            warnings.push(out_of_range(
                "logging.level",
                level,
                &format!(
                    "one of {}; using {}",
                    constants::VALID_LOG_LEVELS.join(", "),
                    constants::DEFAULT_LOG_LEVEL
                ),
            ));
        }
    }

    (config, warnings)
}

fn checked_panel_width(field: &str, width: f32) -> Result<f32, String> {
    if (constants::MIN_PANEL_WIDTH..=constants::MAX_PANEL_WIDTH).contains(&width) {
        Ok(width)
    } else {
        Err(out_of_range(
            field,
            &width.to_string(),
            &format!(
                "{}-{}; using {}",
                constants::MIN_PANEL_WIDTH,
                constants::MAX_PANEL_WIDTH,
                constants::DEFAULT_PANEL_WIDTH
            ),
        ))
    }
}

fn out_of_range(field: &str, value: &str, expected: &str) -> String {
    ConfigError::ValueOutOfRange {
        field: field.to_string(),
        value: value.to_string(),
        expected: expected.to_string(),
    }
    .to_string()
}
