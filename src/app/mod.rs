// Synaptik - app/mod.rs
//
// Application layer: state ownership and the action table.
// Dependencies: core layer, util, platform config values.
// Must NOT depend on: ui, native dialogs.

pub mod actions;
pub mod state;
