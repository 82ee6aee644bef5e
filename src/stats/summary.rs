//! Summary Metrics Module
//! Total, average and top sales over the cleaned `Sales` column.

use crate::data::{ProcessorError, SALES_COL};
use polars::prelude::*;
use statrs::statistics::Statistics;

/// Headline metrics shown above the sales table.
///
/// Missing cells are ignored by all three. With no values the total is zero
/// and there is no mean or max.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryMetrics {
    pub total: f64,
    pub mean: Option<f64>,
    pub max: Option<f64>,
    pub count: usize,
}

impl SummaryMetrics {
    /// Compute metrics from possibly-missing sales values.
    pub fn from_values(values: &[Option<f64>]) -> Self {
        let present: Vec<f64> = values.iter().flatten().copied().collect();
        if present.is_empty() {
            return Self {
                total: 0.0,
                mean: None,
                max: None,
                count: 0,
            };
        }

        Self {
            total: present.iter().sum(),
            mean: Some(Statistics::mean(present.iter())),
            max: Some(Statistics::max(present.iter())),
            count: present.len(),
        }
    }

    /// Compute metrics over the `Sales` column of a cleaned table.
    pub fn from_frame(df: &DataFrame) -> Result<Self, ProcessorError> {
        let sales = df.column(SALES_COL)?.cast(&DataType::Float64)?;
        let values: Vec<Option<f64>> = sales.f64()?.into_iter().collect();
        Ok(Self::from_values(&values))
    }
}

/// Format a value with thousands separators and no decimals, e.g. `1,234,567`.
pub fn format_thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format an optional metric; missing shows as `-`.
pub fn format_metric(value: Option<f64>) -> String {
    value.map(format_thousands).unwrap_or_else(|| "-".to_string())
}
