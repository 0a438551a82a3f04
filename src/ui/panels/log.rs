// Synaptik - ui/panels/log.rs
//
// Right-hand log panel: read-only, wrapped, scrollable view of the
// transcript that stays pinned to the newest line.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the log panel.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(theme::PANEL_MARGIN);
        ui.label(theme::heading("Logs and Results"));
    });
    ui.add_space(theme::PANEL_MARGIN);

    let with_timestamp = state.config.show_timestamps;
    egui::ScrollArea::vertical()
        .id_salt("log_transcript")
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for line in state.transcript.lines() {
                ui.add(egui::Label::new(line.display_text(with_timestamp)).wrap());
            }
        });
}
