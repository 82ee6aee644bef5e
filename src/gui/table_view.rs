//! Metric cards and the tier-colored sales table.

use crate::data::SalesRecord;
use crate::stats::{classify_rate, format_metric, format_thousands, SummaryMetrics, Tier};
use egui::{Color32, RichText};

const HIGH_FILL: Color32 = Color32::from_rgb(0xd4, 0xf4, 0xdd);
const MEDIUM_FILL: Color32 = Color32::from_rgb(0xff, 0xf3, 0xcd);
const LOW_FILL: Color32 = Color32::from_rgb(0xf8, 0xd7, 0xda);

/// Background for a `Sales%` cell; `None` tier is left unfilled.
pub fn tier_fill(tier: Tier) -> Option<Color32> {
    match tier {
        Tier::High => Some(HIGH_FILL),
        Tier::Medium => Some(MEDIUM_FILL),
        Tier::Low => Some(LOW_FILL),
        Tier::None => None,
    }
}

fn format_rate(value: Option<f64>) -> String {
    value.map(|v| format!("{:.1}", v)).unwrap_or_else(|| "-".to_string())
}

pub struct TableView;

impl TableView {
    /// Three metric cards: total, average and top sales.
    pub fn show_metrics(ui: &mut egui::Ui, metrics: &SummaryMetrics) {
        let cards = [
            ("📈 Total Sales", format_thousands(metrics.total)),
            ("📉 Average Sales", format_metric(metrics.mean)),
            ("🔥 Top Sales", format_metric(metrics.max)),
        ];
        let card_width = (ui.available_width() - 30.0) / 3.0;

        ui.horizontal(|ui| {
            for (title, value) in cards {
                egui::Frame::none()
                    .rounding(8.0)
                    .fill(ui.visuals().widgets.noninteractive.bg_fill)
                    .inner_margin(12.0)
                    .show(ui, |ui| {
                        ui.set_width(card_width - 24.0);
                        ui.vertical(|ui| {
                            ui.label(RichText::new(title).size(13.0).color(Color32::GRAY));
                            ui.label(RichText::new(value).size(26.0).strong());
                        });
                    });
                ui.add_space(10.0);
            }
        });
    }

    /// Sales table with the `Sales%` cell colored by tier.
    pub fn show_table(ui: &mut egui::Ui, records: &[SalesRecord]) {
        if records.is_empty() {
            ui.label(RichText::new("No rows match the current filters").color(Color32::GRAY));
            return;
        }

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new("sales_table")
                    .striped(true)
                    .min_col_width(90.0)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        for header in ["Name", "City", "Sales", "Sales%", "Customer%"] {
                            ui.label(RichText::new(header).strong().size(12.0));
                        }
                        ui.end_row();

                        for record in records {
                            ui.label(RichText::new(&record.name).size(12.0));
                            ui.label(
                                RichText::new(record.city.as_deref().unwrap_or("-")).size(12.0),
                            );
                            ui.label(RichText::new(format_metric(record.sales)).size(12.0));
                            Self::rate_cell(ui, record.sales_percent);
                            ui.label(
                                RichText::new(format_rate(record.customer_percent)).size(12.0),
                            );
                            ui.end_row();
                        }
                    });
            });
    }

    fn rate_cell(ui: &mut egui::Ui, value: Option<f64>) {
        let text = format_rate(value);
        match tier_fill(classify_rate(value)) {
            Some(fill) => {
                egui::Frame::none()
                    .fill(fill)
                    .rounding(3.0)
                    .inner_margin(egui::Margin::symmetric(6.0, 1.0))
                    .show(ui, |ui| {
                        ui.label(RichText::new(text).size(12.0).color(Color32::BLACK));
                    });
            }
            None => {
                ui.label(RichText::new(text).size(12.0));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_fill() {
        assert_eq!(tier_fill(Tier::High), Some(Color32::from_rgb(212, 244, 221)));
        assert_eq!(tier_fill(Tier::Medium), Some(Color32::from_rgb(255, 243, 205)));
        assert_eq!(tier_fill(Tier::Low), Some(Color32::from_rgb(248, 215, 218)));
        assert_eq!(tier_fill(Tier::None), None);
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(Some(45.0)), "45.0");
        assert_eq!(format_rate(None), "-");
    }
}
