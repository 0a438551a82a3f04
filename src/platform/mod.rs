// Synaptik - platform/mod.rs
//
// Platform abstraction layer: config directories, config.toml, native
// file dialogs.
// Dependencies: standard library, directories, rfd, app-layer traits.
// Must NOT depend on: ui.

pub mod config;
pub mod dialogs;
