//! Static Chart Renderer
//! Writes the two sales-rate bar charts to PNG files with plotters.
//!
//! Layout per image:
//! 1. Caption centered on top
//! 2. Bars sorted highest first, filled by the chart's color scheme
//! 3. Category labels under each bar, Sales % on the y-axis

use super::bars::{bar_series, value_range, BarCategory, BarDatum};
use crate::data::SalesRecord;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Nothing to draw for '{0}'")]
    NoData(&'static str),
    #[error("Chart drawing failed: {0}")]
    Draw(String),
}

fn draw_err<E: std::fmt::Display>(err: E) -> RenderError {
    RenderError::Draw(err.to_string())
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Output paths derived from a user-chosen base path:
    /// `<stem>_by_salesperson.png` and `<stem>_by_city.png` in the same folder.
    pub fn chart_paths(base: &Path) -> (PathBuf, PathBuf) {
        let stem = base
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "sales_report".to_string());
        let dir = base.parent().unwrap_or_else(|| Path::new(""));

        (
            dir.join(format!("{}_by_salesperson.png", stem)),
            dir.join(format!("{}_by_city.png", stem)),
        )
    }

    /// Render both charts for the given rows. Empty charts are skipped;
    /// it is an error only when neither chart has bars.
    pub fn render_report_charts(
        base: &Path,
        records: &[SalesRecord],
        size: (u32, u32),
    ) -> Result<Vec<PathBuf>, RenderError> {
        let (by_person, by_city) = Self::chart_paths(base);
        let mut written = Vec::new();

        for (category, path) in [
            (BarCategory::Salesperson, by_person),
            (BarCategory::City, by_city),
        ] {
            let bars = bar_series(records, category);
            match Self::render_bar_chart(&path, category, &bars, size) {
                Ok(()) => written.push(path),
                Err(RenderError::NoData(title)) => warn!(chart = title, "Skipping empty chart"),
                Err(e) => return Err(e),
            }
        }

        if written.is_empty() {
            return Err(RenderError::NoData("sales report"));
        }
        info!(files = ?written, "Charts exported");
        Ok(written)
    }

    /// Render one bar chart to a PNG file.
    pub fn render_bar_chart(
        path: &Path,
        category: BarCategory,
        bars: &[BarDatum],
        size: (u32, u32),
    ) -> Result<(), RenderError> {
        if bars.is_empty() {
            return Err(RenderError::NoData(category.chart_title()));
        }

        let root = BitMapBackend::new(path, size).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let (min, max) = value_range(bars);
        let y_low = min.min(0.0);
        let y_high = if max > 0.0 { max * 1.1 } else { 1.0 };

        let mut chart = ChartBuilder::on(&root)
            .caption(category.chart_title(), ("sans-serif", 26))
            .margin(20)
            .x_label_area_size(70)
            .y_label_area_size(60)
            .build_cartesian_2d((0..bars.len()).into_segmented(), y_low..y_high)
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(bars.len())
            .x_label_formatter(&|v| match v {
                SegmentValue::CenterOf(i) => {
                    bars.get(*i).map(|b| b.label.clone()).unwrap_or_default()
                }
                _ => String::new(),
            })
            .x_desc(category.axis_title())
            .y_desc("Sales %")
            .draw()
            .map_err(draw_err)?;

        chart
            .draw_series(bars.iter().enumerate().map(|(i, bar)| {
                let (r, g, b) = category.scheme().rgb_for(bar.value, bars);
                let mut rect = Rectangle::new(
                    [
                        (SegmentValue::Exact(i), 0.0),
                        (SegmentValue::Exact(i + 1), bar.value),
                    ],
                    RGBColor(r, g, b).filled(),
                );
                rect.set_margin(0, 0, 8, 8);
                rect
            }))
            .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
        Ok(())
    }
}
