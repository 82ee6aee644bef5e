//! Data module - CSV loading, cleaning, filtering and export

mod export;
mod filter;
mod loader;
mod processor;
mod record;

pub use export::write_csv;
pub use filter::{filter_by_selection, selection_options, Selection, ALL_LABEL};
pub use loader::{LoadError, SalesLoader, CITY_COL, NAME_COL, SALES_COL};
pub use processor::{ProcessorError, SalesCleaner};
pub use record::SalesRecord;
