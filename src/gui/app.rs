//! Sales Report Main Application
//! Main window with the filter panel, metric cards, table and charts.

use crate::charts::StaticChartRenderer;
use crate::config::ReportSettings;
use crate::data::write_csv;
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction, TableView};
use crate::report::{ReportError, ReportView, SalesReport};
use egui::{Color32, RichText, SidePanel};
use tracing::{error, info, warn};

/// Main application window.
pub struct SalesReportApp {
    report: Result<SalesReport, String>,
    settings: ReportSettings,
    control_panel: ControlPanel,
    view: ReportView,
}

impl SalesReportApp {
    /// A failed load is kept as a message; the window then shows only that error.
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        report: Result<SalesReport, ReportError>,
        settings: ReportSettings,
    ) -> Self {
        let mut app = Self {
            report: report.map_err(|e| e.to_string()),
            settings,
            control_panel: ControlPanel::new(),
            view: ReportView::default(),
        };
        app.refresh_view();
        app
    }

    /// Re-run the filter for the current selection
    fn refresh_view(&mut self) {
        let Ok(report) = &self.report else {
            return;
        };

        match report.view(&self.control_panel.salesperson, &self.control_panel.city) {
            Ok(view) => {
                self.control_panel
                    .set_status(&format!("Showing {} rows", view.records.len()));
                self.view = view;
            }
            Err(e) => {
                error!(error = %e, "Failed to filter sales table");
                self.control_panel.set_status(&format!("Error: {}", e));
                self.view = ReportView::default();
            }
        }
    }

    /// Handle CSV download - always the full cleaned table
    fn handle_download_csv(&mut self) {
        let Ok(report) = &self.report else {
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name(&self.settings.export_file_name)
            .save_file()
        else {
            return; // User cancelled
        };

        match write_csv(&report.cleaned, &path) {
            Ok(()) => {
                self.control_panel
                    .set_status(&format!("Saved {}", path.display()));
                self.control_panel.last_export = Some(path);
            }
            Err(e) => {
                error!(error = %e, "CSV export failed");
                self.control_panel.set_status(&format!("Error: {}", e));
            }
        }
    }

    /// Handle chart export - renders the currently filtered charts to PNG
    fn handle_export_charts(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name("sales_report.png")
            .save_file()
        else {
            return;
        };

        let size = (self.settings.chart_width, self.settings.chart_height);
        match StaticChartRenderer::render_report_charts(&path, &self.view.records, size) {
            Ok(files) => {
                self.control_panel
                    .set_status(&format!("Saved {} chart(s)", files.len()));
                self.control_panel.last_export = files.into_iter().next();
            }
            Err(e) => {
                error!(error = %e, "Chart export failed");
                self.control_panel.set_status(&format!("Error: {}", e));
            }
        }
    }

    fn handle_open_last_export(&mut self) {
        if let Some(path) = self.control_panel.last_export.clone() {
            info!(path = %path.display(), "Opening export");
            if let Err(e) = open::that(&path) {
                warn!(error = %e, "Could not open export");
                self.control_panel
                    .set_status(&format!("Error: cannot open {}: {}", path.display(), e));
            }
        }
    }

    fn show_load_error(ctx: &egui::Context, message: &str) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(60.0);
                ui.label(
                    RichText::new("❌ Failed to load the sales file")
                        .size(22.0)
                        .color(Color32::from_rgb(220, 53, 69)),
                );
                ui.add_space(10.0);
                ui.label(RichText::new(message).size(14.0));
            });
        });
    }
}

impl eframe::App for SalesReportApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let report = match &self.report {
            Ok(report) => report,
            Err(message) => {
                Self::show_load_error(ctx, message);
                return;
            }
        };

        // Left panel - Control Panel
        let mut action = ControlPanelAction::None;
        SidePanel::left("control_panel")
            .min_width(300.0)
            .max_width(350.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    action = self
                        .control_panel
                        .show(ui, &report.salespeople, &report.cities);
                });
            });

        // Central panel - metrics, table, charts
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.label(RichText::new("📊 Daily Sales Report").size(24.0).strong());
                    ui.add_space(10.0);

                    TableView::show_metrics(ui, &report.metrics);
                    ui.add_space(15.0);

                    ui.label(RichText::new("📋 Sales Table").size(16.0).strong());
                    ui.add_space(5.0);
                    TableView::show_table(ui, &self.view.records);
                    ui.add_space(15.0);

                    ChartViewer::show(ui, &self.view.by_salesperson, &self.view.by_city);
                });
        });

        match action {
            ControlPanelAction::SelectionChanged => self.refresh_view(),
            ControlPanelAction::DownloadCsv => self.handle_download_csv(),
            ControlPanelAction::ExportCharts => self.handle_export_charts(),
            ControlPanelAction::OpenLastExport => self.handle_open_last_export(),
            ControlPanelAction::None => {}
        }
    }
}
