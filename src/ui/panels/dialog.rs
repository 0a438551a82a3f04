// Synaptik - ui/panels/dialog.rs
//
// Modal message dialog: shown while `state.dialog` is set.
// Rendered as a centred, non-resizable, non-collapsible window.

use crate::app::state::AppState;
use crate::core::model::DialogKind;
use crate::ui::theme;

/// Render the pending dialog, if any.
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let Some(dialog) = state.dialog.as_ref() else {
        return;
    };

    let accent = match dialog.kind {
        DialogKind::Info => theme::INFO_ACCENT,
        DialogKind::Error => theme::ERROR_ACCENT,
    };

    let mut open = true;
    let mut acknowledged = false;
    egui::Window::new(egui::RichText::new(&dialog.title).color(accent))
        .id(egui::Id::new("modal_dialog"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(8.0);
            for line in dialog.message.lines() {
                ui.label(line);
            }
            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    acknowledged = true;
                }
            });
            ui.add_space(4.0);
        });

    if !open || acknowledged {
        state.dismiss_dialog();
    }
}
