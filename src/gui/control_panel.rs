//! Control Panel Widget
//! Left side panel with the salesperson/city filters and export buttons.

use crate::data::{Selection, ALL_LABEL};
use egui::{Color32, ComboBox, RichText};
use std::path::PathBuf;

/// Left side control panel with filter selection and export controls.
pub struct ControlPanel {
    pub salesperson: Selection,
    pub city: Selection,
    pub status: String,
    pub last_export: Option<PathBuf>,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            salesperson: Selection::All,
            city: Selection::All,
            status: "Ready".to_string(),
            last_export: None,
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the control panel
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        salespeople: &[String],
        cities: &[String],
    ) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📊 Sales Report")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Filter Section =====
        ui.label(RichText::new("🎯 Filter Data").size(14.0).strong());
        ui.add_space(8.0);

        let label_width = 90.0;
        let combo_width = 170.0;

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("👤 Salesperson:"));
            if Self::selection_combo(ui, "salesperson", combo_width, &mut self.salesperson, salespeople) {
                action = ControlPanelAction::SelectionChanged;
            }
        });

        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("🏙 City:"));
            if Self::selection_combo(ui, "city", combo_width, &mut self.city, cities) {
                action = ControlPanelAction::SelectionChanged;
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Export Section =====
        ui.label(RichText::new("📥 Export").size(14.0).strong());
        ui.add_space(8.0);

        ui.vertical_centered(|ui| {
            let csv_button = egui::Button::new(RichText::new("📥 Download CSV").size(14.0))
                .min_size(egui::vec2(180.0, 30.0));
            if ui.add(csv_button).clicked() {
                action = ControlPanelAction::DownloadCsv;
            }

            ui.add_space(6.0);

            let chart_button = egui::Button::new(RichText::new("🖼 Export Charts").size(14.0))
                .min_size(egui::vec2(180.0, 30.0));
            if ui.add(chart_button).clicked() {
                action = ControlPanelAction::ExportCharts;
            }

            ui.add_space(6.0);

            ui.add_enabled_ui(self.last_export.is_some(), |ui| {
                if ui.button("📂 Open Last Export").clicked() {
                    action = ControlPanelAction::OpenLastExport;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status Section =====
        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Saved") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    /// Combo box offering "All" followed by each option. Returns true on change.
    fn selection_combo(
        ui: &mut egui::Ui,
        id: &str,
        width: f32,
        current: &mut Selection,
        options: &[String],
    ) -> bool {
        let mut changed = false;

        ComboBox::from_id_salt(id)
            .width(width)
            .selected_text(current.to_string())
            .show_ui(ui, |ui| {
                if ui
                    .selectable_label(*current == Selection::All, ALL_LABEL)
                    .clicked()
                {
                    changed |= *current != Selection::All;
                    *current = Selection::All;
                }
                for option in options {
                    let choice = Selection::Only(option.clone());
                    if ui.selectable_label(*current == choice, option).clicked() {
                        changed |= *current != choice;
                        *current = choice;
                    }
                }
            });

        changed
    }

    /// Set status line
    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    SelectionChanged,
    DownloadCsv,
    ExportCharts,
    OpenLastExport,
}
