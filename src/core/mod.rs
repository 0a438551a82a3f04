// Synaptik - core/mod.rs
//
// Core layer: data model, project file I/O, chart data.
// Dependencies: util, standard library, chrono.
// Must NOT depend on: app, ui, platform.

pub mod chart;
pub mod model;
pub mod project;
