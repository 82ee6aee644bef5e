//! Data Processor Module
//! Handles cleaning of the raw sales table: placeholder columns, sentinel rows
//! and numeric coercion.

use super::loader::{
    CUSTOMER_PCT_COL, NAME_COL, PLACEHOLDER_PREFIX, SALES_COL, SALES_PCT_COL,
};
use polars::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

/// Aggregate row appended by the upstream export.
pub const TOTAL_SENTINEL: &str = "Total";

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Required column '{0}' is missing")]
    MissingColumn(String),
}

/// Parse a numeric cell. Blank, unparseable and NaN values are missing.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Parse a percent-like cell such as `"45%"` or `"1,234%"`.
pub fn parse_percent(raw: &str) -> Option<f64> {
    let stripped: String = raw.chars().filter(|c| *c != '%' && *c != ',').collect();
    parse_number(&stripped)
}

/// Cleans the raw sales table. Every operation returns a new frame.
pub struct SalesCleaner;

impl SalesCleaner {
    /// Run the full cleaning pipeline on a freshly loaded table.
    pub fn clean(raw: &DataFrame) -> Result<DataFrame, ProcessorError> {
        let df = Self::drop_placeholder_columns(raw)?;
        Self::require_columns(&df, &[NAME_COL, SALES_COL, SALES_PCT_COL, CUSTOMER_PCT_COL])?;

        let df = Self::drop_invalid_rows(&df)?;
        let df = Self::coerce_numeric(&df, SALES_COL)?;
        let df = Self::coerce_percent(&df, SALES_PCT_COL)?;
        let df = Self::coerce_percent(&df, CUSTOMER_PCT_COL)?;

        info!(
            raw_rows = raw.height(),
            rows = df.height(),
            columns = df.width(),
            "Sales table cleaned"
        );
        Ok(df)
    }

    /// Remove every column whose name starts with `Unnamed`.
    pub fn drop_placeholder_columns(df: &DataFrame) -> Result<DataFrame, ProcessorError> {
        let (keep, dropped): (Vec<String>, Vec<String>) = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .partition(|name| !name.starts_with(PLACEHOLDER_PREFIX));

        if !dropped.is_empty() {
            debug!(columns = ?dropped, "Dropping placeholder columns");
        }
        Ok(df.select(keep)?)
    }

    /// Remove rows with a null name and the `Total` sentinel row.
    pub fn drop_invalid_rows(df: &DataFrame) -> Result<DataFrame, ProcessorError> {
        Self::require_columns(df, &[NAME_COL])?;

        // A null name makes the comparison null, which the filter drops too
        let filtered = df
            .clone()
            .lazy()
            .filter(col(NAME_COL).neq(lit(TOTAL_SENTINEL)))
            .collect()?;

        debug!(
            removed = df.height() - filtered.height(),
            "Dropped rows without a salesperson"
        );
        Ok(filtered)
    }

    /// Convert a column to `Float64`; unparseable cells become null.
    pub fn coerce_numeric(df: &DataFrame, column: &str) -> Result<DataFrame, ProcessorError> {
        Self::coerce_with(df, column, parse_number)
    }

    /// Strip `%` and `,` then convert to `Float64`; unparseable cells become null.
    pub fn coerce_percent(df: &DataFrame, column: &str) -> Result<DataFrame, ProcessorError> {
        Self::coerce_with(df, column, parse_percent)
    }

    fn coerce_with(
        df: &DataFrame,
        column: &str,
        parse: fn(&str) -> Option<f64>,
    ) -> Result<DataFrame, ProcessorError> {
        Self::require_columns(df, &[column])?;

        let text = df.column(column)?.cast(&DataType::String)?;
        let values: Vec<Option<f64>> = text.str()?.into_iter().map(|v| v.and_then(parse)).collect();

        let missing = values.iter().filter(|v| v.is_none()).count();
        if missing > 0 {
            debug!(column, missing, "Cells coerced to missing");
        }

        let mut out = df.clone();
        out.with_column(Column::new(column.into(), values))?;
        Ok(out)
    }

    fn require_columns(df: &DataFrame, columns: &[&str]) -> Result<(), ProcessorError> {
        let names = df.get_column_names();
        match columns
            .iter()
            .find(|wanted| !names.iter().any(|name| name.as_str() == **wanted))
        {
            Some(missing) => Err(ProcessorError::MissingColumn(missing.to_string())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CITY_COL;

    fn raw_frame() -> DataFrame {
        df!(
            "Unnamed: 0" => &["0", "1", "2", "3", "4"],
            NAME_COL => &[Some("Ali"), Some("Sara"), None, Some("Omar"), Some("Total")],
            CITY_COL => &[Some("Riyadh"), Some("Jeddah"), Some("Riyadh"), None, None],
            SALES_COL => &["1200", "abc", "50", " 300 ", "1550"],
            SALES_PCT_COL => &["45%", "abc", "10%", "1,234%", "100%"],
            CUSTOMER_PCT_COL => &[Some("30%"), Some("12.5%"), None, Some(""), Some("100%")]
        )
        .unwrap()
    }

    fn floats(df: &DataFrame, column: &str) -> Vec<Option<f64>> {
        df.column(column).unwrap().f64().unwrap().into_iter().collect()
    }

    #[test]
    fn test_parse_percent() {
        assert_eq!(parse_percent("45%"), Some(45.0));
        assert_eq!(parse_percent("1,234%"), Some(1234.0));
        assert_eq!(parse_percent("12.5"), Some(12.5));
        assert_eq!(parse_percent("abc"), None);
        assert_eq!(parse_percent("%"), None);
        assert_eq!(parse_percent("nan"), None);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 300 "), Some(300.0));
        assert_eq!(parse_number("-12.5"), Some(-12.5));
        assert_eq!(parse_number("1,200"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_drop_placeholder_columns() {
        let df = SalesCleaner::drop_placeholder_columns(&raw_frame()).unwrap();
        let names: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();

        assert!(names.iter().all(|n| !n.starts_with("Unnamed")));
        assert_eq!(names.len(), 5);
    }

    #[test]
    fn test_placeholder_match_is_case_sensitive_and_anchored() {
        let df = df!(
            "unnamed" => &["a"],
            "Col Unnamed" => &["b"],
            "Unnamed: 3" => &["c"]
        )
        .unwrap();
        let cleaned = SalesCleaner::drop_placeholder_columns(&df).unwrap();
        let names: Vec<String> = cleaned.get_column_names().iter().map(|s| s.to_string()).collect();

        assert_eq!(names, vec!["unnamed", "Col Unnamed"]);
    }

    #[test]
    fn test_drop_invalid_rows() {
        let df = SalesCleaner::drop_invalid_rows(&raw_frame()).unwrap();
        let names: Vec<Option<&str>> = df.column(NAME_COL).unwrap().str().unwrap().into_iter().collect();

        assert_eq!(names, vec![Some("Ali"), Some("Sara"), Some("Omar")]);
    }

    #[test]
    fn test_total_match_is_exact() {
        let df = df!(NAME_COL => &["Total", "total", "Totals"]).unwrap();
        let cleaned = SalesCleaner::drop_invalid_rows(&df).unwrap();

        assert_eq!(cleaned.height(), 2);
    }

    #[test]
    fn test_coerce_numeric_leaves_other_columns() {
        let raw = raw_frame();
        let df = SalesCleaner::coerce_numeric(&raw, SALES_COL).unwrap();

        assert_eq!(
            floats(&df, SALES_COL),
            vec![Some(1200.0), None, Some(50.0), Some(300.0), Some(1550.0)]
        );
        assert_eq!(df.column(SALES_PCT_COL).unwrap().dtype(), &DataType::String);
        let names: Vec<Option<&str>> = df.column(NAME_COL).unwrap().str().unwrap().into_iter().collect();
        assert_eq!(names[4], Some("Total"));
        assert_eq!(names[2], None);
    }

    #[test]
    fn test_coerce_percent() {
        let df = SalesCleaner::coerce_percent(&raw_frame(), SALES_PCT_COL).unwrap();

        assert_eq!(
            floats(&df, SALES_PCT_COL),
            vec![Some(45.0), None, Some(10.0), Some(1234.0), Some(100.0)]
        );
    }

    #[test]
    fn test_coerce_accepts_numeric_column() {
        let df = df!(SALES_COL => &[Some(1.5), None]).unwrap();
        let coerced = SalesCleaner::coerce_numeric(&df, SALES_COL).unwrap();

        assert_eq!(floats(&coerced, SALES_COL), vec![Some(1.5), None]);
    }

    #[test]
    fn test_clean_pipeline() {
        let df = SalesCleaner::clean(&raw_frame()).unwrap();

        assert_eq!(df.height(), 3);
        assert!(df.column("Unnamed: 0").is_err());
        assert_eq!(floats(&df, SALES_COL), vec![Some(1200.0), None, Some(300.0)]);
        assert_eq!(floats(&df, SALES_PCT_COL), vec![Some(45.0), None, Some(1234.0)]);
        assert_eq!(floats(&df, CUSTOMER_PCT_COL), vec![Some(30.0), Some(12.5), None]);
    }

    #[test]
    fn test_clean_requires_columns() {
        let df = df!(NAME_COL => &["Ali"], SALES_COL => &["1"]).unwrap();
        let err = SalesCleaner::clean(&df).unwrap_err();

        assert!(matches!(err, ProcessorError::MissingColumn(ref c) if c == SALES_PCT_COL));
    }
}
