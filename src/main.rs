//! Sales Report - Daily sales CSV cleaning, metrics & interactive charts
//!
//! Loads the sales file once, cleans it, and shows metric cards, a filtered
//! tier-colored table and two bar charts. `--headless` prints the same report.

mod charts;
mod config;
mod data;
mod gui;
mod report;
mod stats;

use anyhow::Context;
use clap::Parser;
use config::{Cli, ReportSettings};
use data::{write_csv, Selection};
use eframe::egui;
use gui::SalesReportApp;
use report::SalesReport;
use stats::{classify_rate, format_metric, format_thousands};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let settings = ReportSettings::resolve(&cli).context("Failed to load settings")?;

    if cli.headless {
        return run_headless(&settings, cli.export.as_deref());
    }

    // Load once up front; a failure is shown in the window instead of the report
    let report = SalesReport::prepare(&settings.input_path);
    if let Err(e) = &report {
        error!(error = %e, "Sales file could not be loaded");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([1000.0, 700.0])
            .with_title("Daily Sales Report"),
        ..Default::default()
    };

    eframe::run_native(
        "Daily Sales Report",
        options,
        Box::new(|cc| Ok(Box::new(SalesReportApp::new(cc, report, settings)))),
    )
    .map_err(|e| anyhow::anyhow!("Window failed: {}", e))
}

/// Print metrics and the cleaned table; optionally write the cleaned CSV.
fn run_headless(settings: &ReportSettings, export: Option<&std::path::Path>) -> anyhow::Result<()> {
    let report = SalesReport::prepare(&settings.input_path).with_context(|| {
        format!("Failed to load {}", settings.input_path.display())
    })?;

    println!("Total Sales:   {}", format_thousands(report.metrics.total));
    println!("Average Sales: {}", format_metric(report.metrics.mean));
    println!("Top Sales:     {}", format_metric(report.metrics.max));
    println!("Rows with sales: {}", report.metrics.count);
    println!();

    let view = report.view(&Selection::All, &Selection::All)?;
    println!(
        "{:<20} {:<15} {:>12} {:>8} {:>10} {}",
        "Name", "City", "Sales", "Sales%", "Customer%", "Tier"
    );
    for record in &view.records {
        println!(
            "{:<20} {:<15} {:>12} {:>8} {:>10} {:?}",
            record.name,
            record.city.as_deref().unwrap_or("-"),
            format_metric(record.sales),
            record
                .sales_percent
                .map(|v| format!("{:.1}", v))
                .unwrap_or_else(|| "-".into()),
            record
                .customer_percent
                .map(|v| format!("{:.1}", v))
                .unwrap_or_else(|| "-".into()),
            classify_rate(record.sales_percent),
        );
    }

    if let Some(path) = export {
        write_csv(&report.cleaned, path)?;
        info!(path = %path.display(), "Headless export written");
    }

    Ok(())
}
