// Synaptik - ui/panels/mod.rs

pub mod control;
pub mod dialog;
pub mod log;
pub mod visual;
