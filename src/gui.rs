// Synaptik - gui.rs
//
// Top-level eframe::App implementation.
// Lays out the menu bar and the three panels, collects the action requested
// this frame, and dispatches it once every panel has been drawn.

use crate::app::actions::{self, Action, FilePicker, MenuGroup};
use crate::app::state::AppState;
use crate::platform::dialogs::NativeFilePicker;
use crate::ui;

/// The Synaptik application shell.
pub struct SynaptikApp {
    pub state: AppState,
    picker: Box<dyn FilePicker>,
}

impl SynaptikApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            picker: Box::new(NativeFilePicker),
        }
    }
}

impl eframe::App for SynaptikApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut requested: Option<Action> = None;
        // While a dialog is open everything behind it is disabled.
        let interactive = !self.state.is_modal();

        // Top menu bar, built from the action table.
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui.add_enabled_ui(interactive, |ui| {
                egui::menu::bar(ui, |ui| {
                    for group in MenuGroup::ALL {
                        ui.menu_button(group.label(), |ui| {
                            for entry in actions::actions_in_menu(group) {
                                if ui.button(entry.label).clicked() {
                                    requested = Some(entry.action);
                                    ui.close_menu();
                                }
                            }
                            if group == MenuGroup::File {
                                ui.separator();
                                if ui.button("Exit").clicked() {
                                    tracing::info!("Exit requested from menu");
                                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                                }
                            }
                        });
                    }
                });
            });
        });

        // Left: control panel (fixed width).
        egui::SidePanel::left("control_panel")
            .resizable(false)
            .exact_width(self.state.config.control_panel_width)
            .show(ctx, |ui| {
                ui.add_enabled_ui(interactive, |ui| {
                    if let Some(action) = ui::panels::control::render(ui, &mut self.state) {
                        requested = Some(action);
                    }
                });
            });

        // Right: log panel (fixed width).
        egui::SidePanel::right("log_panel")
            .resizable(false)
            .exact_width(self.state.config.log_panel_width)
            .show(ctx, |ui| {
                ui::panels::log::render(ui, &self.state);
            });

        // Center: visualization (fills the rest).
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(interactive, |ui| {
                ui::panels::visual::render(ui);
            });
        });

        ui::panels::dialog::render(ctx, &mut self.state);

        if let Some(action) = requested {
            actions::dispatch(action, &mut self.state, self.picker.as_ref());
            // Dialogs and new log lines should appear without waiting for input.
            ctx.request_repaint();
        }
    }
}
