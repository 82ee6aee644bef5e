//! Stats module - Summary metrics and rate tiers

mod summary;
mod tier;

pub use summary::{format_metric, format_thousands, SummaryMetrics};
pub use tier::{classify_rate, Tier};
