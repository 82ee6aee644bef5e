//! Chart Plotter Module
//! Draws the interactive sales-rate bar charts using egui_plot.

use super::bars::{BarCategory, BarDatum};
use egui::{Color32, RichText};
use egui_plot::{Bar, BarChart, Plot};

const CHART_HEIGHT: f32 = 320.0;
const BAR_WIDTH: f64 = 0.6;

/// Draws categorical bar charts with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Convert a scheme color to egui.
    pub fn bar_color(category: BarCategory, value: f64, bars: &[BarDatum]) -> Color32 {
        let (r, g, b) = category.scheme().rgb_for(value, bars);
        Color32::from_rgb(r, g, b)
    }

    /// Draw one bar chart. X-axis: categories (highest first), Y-axis: Sales%.
    pub fn draw_bar_chart(ui: &mut egui::Ui, category: BarCategory, bars: &[BarDatum]) {
        ui.label(RichText::new(category.chart_title()).size(15.0).strong());
        ui.add_space(4.0);

        if bars.is_empty() {
            ui.label(RichText::new("No rows with a sales rate").color(Color32::GRAY));
            return;
        }

        let x_labels: Vec<String> = bars.iter().map(|b| b.label.clone()).collect();

        let chart_bars: Vec<Bar> = bars
            .iter()
            .enumerate()
            .map(|(i, bar)| {
                // Bar name doubles as the hover tooltip
                Bar::new(i as f64, bar.value)
                    .width(BAR_WIDTH)
                    .name(format!(
                        "{}\nSales%: {:.1}\nSales: {}",
                        bar.label,
                        bar.value,
                        crate::stats::format_thousands(bar.sales)
                    ))
                    .fill(Self::bar_color(category, bar.value, bars))
            })
            .collect();

        Plot::new(format!("bars_{:?}", category))
            .height(CHART_HEIGHT)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label(category.axis_title())
            .y_axis_label("Sales %")
            .include_y(0.0)
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                    return String::new();
                }
                x_labels.get(idx as usize).cloned().unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(chart_bars).color(Color32::GRAY));
            });
    }
}
