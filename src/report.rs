//! Report assembly: load → clean → metrics, then per-selection views.

use crate::charts::{bar_series, BarCategory, BarDatum};
use crate::data::{
    filter_by_selection, selection_options, LoadError, ProcessorError, SalesCleaner, SalesLoader,
    SalesRecord, Selection, CITY_COL, NAME_COL,
};
use crate::stats::SummaryMetrics;
use polars::prelude::DataFrame;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("Failed to clean sales data: {0}")]
    Clean(#[from] ProcessorError),
}

/// The cleaned table and everything derived from it once per session.
pub struct SalesReport {
    pub cleaned: DataFrame,
    pub metrics: SummaryMetrics,
    pub salespeople: Vec<String>,
    pub cities: Vec<String>,
}

/// Rows and chart series for one salesperson/city selection.
#[derive(Debug, Clone, Default)]
pub struct ReportView {
    pub records: Vec<SalesRecord>,
    pub by_salesperson: Vec<BarDatum>,
    pub by_city: Vec<BarDatum>,
}

impl SalesReport {
    /// Load and clean the sales file.
    pub fn prepare(path: &Path) -> Result<Self, ReportError> {
        let raw = SalesLoader::load(path)?;
        Self::from_raw(&raw)
    }

    pub fn from_raw(raw: &DataFrame) -> Result<Self, ReportError> {
        let cleaned = SalesCleaner::clean(raw)?;
        let metrics = SummaryMetrics::from_frame(&cleaned)?;

        Ok(Self {
            salespeople: selection_options(&cleaned, NAME_COL),
            cities: selection_options(&cleaned, CITY_COL),
            metrics,
            cleaned,
        })
    }

    /// Filter the cleaned table and derive the rows and bar series to show.
    pub fn view(&self, salesperson: &Selection, city: &Selection) -> Result<ReportView, ProcessorError> {
        let filtered = filter_by_selection(&self.cleaned, salesperson, city)?;
        let records = SalesRecord::from_frame(&filtered)?;

        Ok(ReportView {
            by_salesperson: bar_series(&records, BarCategory::Salesperson),
            by_city: bar_series(&records, BarCategory::City),
            records,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{classify_rate, Tier};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sales_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            ",Name,City,Sales,Sales%,Customer%\n\
             0,Ali,Riyadh,1200,45%,30%\n\
             1,Sara,Jeddah,900,abc,25%\n\
             2,Ali,Jeddah,300,\"1,234%\",40%\n\
             3,Omar,Riyadh,n/a,29%,10%\n\
             4,Total,,2400,100%,100%\n"
        )
        .unwrap();
        file
    }

    #[test]
    fn test_end_to_end_cleaning() {
        let file = sales_file();
        let report = SalesReport::prepare(file.path()).unwrap();

        assert_eq!(report.cleaned.height(), 4);
        assert!(report.cleaned.column("Unnamed: 0").is_err());
        assert_eq!(report.salespeople, vec!["Ali", "Omar", "Sara"]);
        assert_eq!(report.cities, vec!["Jeddah", "Riyadh"]);

        let view = report.view(&Selection::All, &Selection::All).unwrap();
        assert!(view.records.iter().all(|r| r.name != "Total"));

        let sara = view.records.iter().find(|r| r.name == "Sara").unwrap();
        assert_eq!(sara.sales_percent, None);
        assert_eq!(classify_rate(sara.sales_percent), Tier::None);

        let omar = view.records.iter().find(|r| r.name == "Omar").unwrap();
        assert_eq!(omar.sales, None);
        assert_eq!(classify_rate(omar.sales_percent), Tier::Low);
    }

    #[test]
    fn test_metrics_over_cleaned_table() {
        let file = sales_file();
        let report = SalesReport::prepare(file.path()).unwrap();

        assert_eq!(report.metrics.total, 2400.0);
        assert_eq!(report.metrics.mean, Some(800.0));
        assert_eq!(report.metrics.max, Some(1200.0));
    }

    #[test]
    fn test_view_for_one_salesperson() {
        let file = sales_file();
        let report = SalesReport::prepare(file.path()).unwrap();

        let view = report
            .view(&Selection::Only("Ali".into()), &Selection::All)
            .unwrap();
        assert_eq!(view.records.len(), 2);
        assert_eq!(view.by_salesperson.len(), 1);
        assert_eq!(view.by_salesperson[0].value, 1279.0);

        let cities: Vec<&str> = view.by_city.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(cities, vec!["Jeddah", "Riyadh"]);
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let result = SalesReport::prepare(Path::new("no/such/sales.csv"));
        assert!(matches!(result, Err(ReportError::Load(LoadError::NotFound(_)))));
    }

    #[test]
    fn test_missing_column_is_clean_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Name,City,Sales\nAli,Riyadh,100\n").unwrap();

        let result = SalesReport::prepare(file.path());
        assert!(matches!(
            result,
            Err(ReportError::Clean(ProcessorError::MissingColumn(_)))
        ));
    }
}
