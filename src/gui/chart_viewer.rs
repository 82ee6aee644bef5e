//! Chart Viewer Widget
//! Shows the salesperson and city bar charts, side by side when there is room.

use crate::charts::{BarCategory, BarDatum, ChartPlotter};

/// Minimum width for a chart before they stack vertically.
const CHART_MIN_WIDTH: f32 = 420.0;
const CHART_SPACING: f32 = 15.0;

pub struct ChartViewer;

impl ChartViewer {
    pub fn show(ui: &mut egui::Ui, by_salesperson: &[BarDatum], by_city: &[BarDatum]) {
        let side_by_side = ui.available_width() >= 2.0 * CHART_MIN_WIDTH + CHART_SPACING;

        if side_by_side {
            let chart_width = (ui.available_width() - CHART_SPACING) / 2.0;
            ui.horizontal_top(|ui| {
                Self::chart_card(ui, chart_width, BarCategory::Salesperson, by_salesperson);
                ui.add_space(CHART_SPACING);
                Self::chart_card(ui, chart_width, BarCategory::City, by_city);
            });
        } else {
            let chart_width = ui.available_width();
            Self::chart_card(ui, chart_width, BarCategory::Salesperson, by_salesperson);
            ui.add_space(CHART_SPACING);
            Self::chart_card(ui, chart_width, BarCategory::City, by_city);
        }
    }

    fn chart_card(ui: &mut egui::Ui, width: f32, category: BarCategory, bars: &[BarDatum]) {
        egui::Frame::none()
            .rounding(8.0)
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(width - 24.0);
                ui.vertical(|ui| {
                    ChartPlotter::draw_bar_chart(ui, category, bars);
                });
            });
    }
}
