//! Typed rows extracted from a cleaned sales table.

use super::loader::{CITY_COL, CUSTOMER_PCT_COL, NAME_COL, SALES_COL, SALES_PCT_COL};
use super::processor::ProcessorError;
use polars::prelude::*;

/// One salesperson row of the cleaned table.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecord {
    pub name: String,
    pub city: Option<String>,
    pub sales: Option<f64>,
    pub sales_percent: Option<f64>,
    pub customer_percent: Option<f64>,
}

impl SalesRecord {
    /// Convert a cleaned (or filtered) frame into typed rows.
    ///
    /// `City` is optional; a frame without it yields records with no city.
    pub fn from_frame(df: &DataFrame) -> Result<Vec<SalesRecord>, ProcessorError> {
        let names = df.column(NAME_COL)?.cast(&DataType::String)?;
        let names = names.str()?;
        let cities = match df.column(CITY_COL) {
            Ok(column) => Some(column.cast(&DataType::String)?),
            Err(_) => None,
        };
        let cities = cities.as_ref().map(|c| c.str()).transpose()?;
        let sales = Self::float_column(df, SALES_COL)?;
        let sales_pct = Self::float_column(df, SALES_PCT_COL)?;
        let customer_pct = Self::float_column(df, CUSTOMER_PCT_COL)?;

        let records = (0..df.height())
            .filter_map(|i| {
                // Cleaned tables never carry a null name
                let name = names.get(i)?;
                Some(SalesRecord {
                    name: name.to_string(),
                    city: cities.and_then(|c| c.get(i)).map(str::to_string),
                    sales: sales.get(i),
                    sales_percent: sales_pct.get(i),
                    customer_percent: customer_pct.get(i),
                })
            })
            .collect();

        Ok(records)
    }

    fn float_column(df: &DataFrame, column: &str) -> Result<Float64Chunked, ProcessorError> {
        let cast = df.column(column)?.cast(&DataType::Float64)?;
        Ok(cast.f64()?.clone())
    }
}
