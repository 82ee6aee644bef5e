//! Sidebar selection filters over the cleaned sales table.

use super::loader::{CITY_COL, NAME_COL};
use super::processor::ProcessorError;
use polars::prelude::*;
use std::collections::BTreeSet;
use std::fmt;

/// Label shown for the "no filter" choice.
pub const ALL_LABEL: &str = "All";

/// A single filter choice: everything, or one exact value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    fn value(&self) -> Option<&str> {
        match self {
            Selection::All => None,
            Selection::Only(value) => Some(value),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str(ALL_LABEL),
            Selection::Only(value) => f.write_str(value),
        }
    }
}

/// Narrow the table by salesperson and city. Both filters are exact matches
/// and combine with AND; rows with a null city never match a specific city.
pub fn filter_by_selection(
    df: &DataFrame,
    salesperson: &Selection,
    city: &Selection,
) -> Result<DataFrame, ProcessorError> {
    let mut lazy = df.clone().lazy();
    if let Some(name) = salesperson.value() {
        lazy = lazy.filter(col(NAME_COL).eq(lit(name)));
    }
    if let Some(city) = city.value() {
        lazy = lazy.filter(col(CITY_COL).eq(lit(city)));
    }
    Ok(lazy.collect()?)
}

/// Sorted distinct non-null values of a column, used as selection options.
/// A missing column yields no options.
pub fn selection_options(df: &DataFrame, column: &str) -> Vec<String> {
    df.column(column)
        .ok()
        .and_then(|c| c.cast(&DataType::String).ok())
        .map(|c| {
            c.str()
                .map(|ca| {
                    ca.into_iter()
                        .flatten()
                        .map(str::to_string)
                        .collect::<BTreeSet<_>>()
                        .into_iter()
                        .collect()
                })
                .unwrap_or_default()
        })
        .unwrap_or_default()
}
