// Synaptik - ui/panels/control.rs
//
// Left-hand control panel: the two parameter inputs and the run/reset
// buttons. Button clicks are returned as actions for the caller to dispatch.

use crate::app::actions::Action;
use crate::app::state::AppState;
use crate::ui::theme;

/// Render the control panel. Returns the action requested this frame.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> Option<Action> {
    let mut requested = None;

    ui.vertical_centered(|ui| {
        ui.add_space(theme::PANEL_MARGIN);
        ui.label(theme::heading("Control Panel"));
    });
    ui.add_space(theme::PANEL_MARGIN);

    ui.label("Parameter 1:");
    ui.add(
        egui::TextEdit::singleline(&mut state.parameters.param1)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(theme::CONTROL_SPACING);

    ui.label("Parameter 2:");
    ui.add(
        egui::TextEdit::singleline(&mut state.parameters.param2)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(theme::PANEL_MARGIN);

    ui.vertical_centered(|ui| {
        let min = egui::vec2(theme::BUTTON_MIN_WIDTH, 0.0);
        if ui
            .add(egui::Button::new(Action::ExecuteSimulation.label()).min_size(min))
            .clicked()
        {
            requested = Some(Action::ExecuteSimulation);
        }
        ui.add_space(theme::CONTROL_SPACING);
        if ui
            .add(egui::Button::new(Action::ResetParameters.label()).min_size(min))
            .clicked()
        {
            requested = Some(Action::ResetParameters);
        }
    });

    requested
}
