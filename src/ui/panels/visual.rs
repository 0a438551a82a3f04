// Synaptik - ui/panels/visual.rs
//
// Central visualization panel: a single static example plot that fills the
// remaining space.

use crate::core::chart;
use crate::ui::theme;
use egui_plot::{Line, Plot, PlotPoints};

/// Render the visualization panel.
pub fn render(ui: &mut egui::Ui) {
    let series = chart::example_series();

    ui.vertical_centered(|ui| {
        ui.add_space(theme::PANEL_MARGIN);
        ui.label(theme::heading("Visualization"));
        ui.add_space(theme::CONTROL_SPACING);
        ui.label(egui::RichText::new(series.title).strong());
    });

    Plot::new("example_chart")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(series.points))
                    .color(theme::CHART_LINE)
                    .name(series.title),
            );
        });
}
