// Synaptik - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration loading (config.toml)
// 3. Logging initialisation (debug mode support)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::ui::...` etc.
pub use synaptik::app;
pub use synaptik::platform;
pub use synaptik::ui;
pub use synaptik::util;

use clap::Parser;
use std::path::PathBuf;

/// Synaptik - Simulation and Control System.
#[derive(Parser, Debug)]
#[command(name = "Synaptik", version, about)]
struct Cli {
    /// Read configuration from this file instead of the platform default.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is loaded before logging so its level can take part in the
    // filter; its warnings are reported once the subscriber exists.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| platform_paths.config_file());
    let (config, config_warnings) = platform::config::load_config(&config_path);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config = %config_path.display(),
        "Synaptik starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Configuration warning");
    }

    let dark_mode = config.dark_mode;
    let state = app::state::AppState::new(config, cli.debug);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(util::constants::APP_TITLE)
            .with_inner_size(util::constants::WINDOW_INITIAL_SIZE)
            .with_min_inner_size(util::constants::WINDOW_MIN_SIZE),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(ui::theme::visuals(dark_mode));
            Ok(Box::new(gui::SynaptikApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch Synaptik GUI: {e}");
        std::process::exit(1);
    }
}
