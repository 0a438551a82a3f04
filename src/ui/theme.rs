// Synaptik - ui/theme.rs
//
// Visual style and layout constants. No dependencies on app state.

use egui::Color32;

/// Panel heading size in points.
pub const HEADING_SIZE: f32 = 18.0;

/// Outer margin around each panel's contents.
pub const PANEL_MARGIN: f32 = 10.0;

/// Vertical gap between controls in the control panel.
pub const CONTROL_SPACING: f32 = 5.0;

/// Minimum width of the control panel buttons.
pub const BUTTON_MIN_WIDTH: f32 = 160.0;

/// Colour of the example chart line.
pub const CHART_LINE: Color32 = Color32::from_rgb(59, 130, 246); // Blue 500

/// Accent for error dialog titles.
pub const ERROR_ACCENT: Color32 = Color32::from_rgb(220, 38, 38); // Red 600

/// Accent for informational dialog titles.
pub const INFO_ACCENT: Color32 = Color32::from_rgb(59, 130, 246); // Blue 500

/// Dark or light visuals as configured.
pub fn visuals(dark_mode: bool) -> egui::Visuals {
    if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    }
}

/// Large panel heading text.
pub fn heading(text: &str) -> egui::RichText {
    egui::RichText::new(text).size(HEADING_SIZE).strong()
}
