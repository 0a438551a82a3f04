// Synaptik - util/constants.rs
//
// Single source of truth for named constants, texts, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Synaptik";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "Synaptik";

/// Long application title shown in the window title bar.
pub const APP_TITLE: &str = "Synaptik - Simulation and Control System";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Authors as declared in Cargo.toml.
pub const APP_AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

/// Documentation location. Not opened by the application; only logged.
pub const DOCUMENTATION_URL: &str = "https://synaptik-docs.com";

// =============================================================================
// Window
// =============================================================================

/// Initial window size in logical pixels.
pub const WINDOW_INITIAL_SIZE: [f32; 2] = [1200.0, 800.0];

/// Smallest window size that still fits both side panels and a usable chart.
pub const WINDOW_MIN_SIZE: [f32; 2] = [800.0, 500.0];

// =============================================================================
// Layout limits
// =============================================================================

/// Default width of the control and log panels (points).
pub const DEFAULT_PANEL_WIDTH: f32 = 300.0;

/// Minimum user-configurable side panel width (points).
pub const MIN_PANEL_WIDTH: f32 = 150.0;

/// Maximum user-configurable side panel width (points).
pub const MAX_PANEL_WIDTH: f32 = 600.0;

// =============================================================================
// Log transcript
// =============================================================================

/// First line of every transcript.
pub const TRANSCRIPT_SEED_LINE: &str = "Execution logs will appear here...";

/// Timestamp format used when `[ui] show_timestamps` is enabled.
pub const TRANSCRIPT_TIME_FORMAT: &str = "%H:%M:%S";

// =============================================================================
// Project files
// =============================================================================

/// Extension of Synaptik project files (without the dot).
pub const PROJECT_EXTENSION: &str = "syn";

/// Text written by "Save Project". No project format exists yet.
pub const PROJECT_PLACEHOLDER_CONTENT: &str = "Project data";

/// Extension accepted by "Import Data" (without the dot).
pub const IMPORT_EXTENSION: &str = "csv";

// =============================================================================
// Example chart
// =============================================================================

/// Title shown above the visualization plot.
pub const EXAMPLE_CHART_TITLE: &str = "Example Chart";

/// Points of the static example series.
pub const EXAMPLE_CHART_POINTS: [[f64; 2]; 3] = [[0.0, 0.0], [1.0, 1.0], [2.0, 0.0]];

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
