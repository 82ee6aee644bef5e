//! CSV Sales Loader Module
//! Reads the raw sales file into an all-text DataFrame using Polars.

use polars::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

pub const NAME_COL: &str = "Name";
pub const CITY_COL: &str = "City";
pub const SALES_COL: &str = "Sales";
pub const SALES_PCT_COL: &str = "Sales%";
pub const CUSTOMER_PCT_COL: &str = "Customer%";

/// Prefix given to blank header cells, matching what spreadsheet exports emit
/// for a written-out index column.
pub const PLACEHOLDER_PREFIX: &str = "Unnamed";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Sales file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to read {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
    #[error("Sales file {} has no header row", .0.display())]
    Empty(PathBuf),
}

/// Loads the raw sales table. Every column comes back as `String`; typing
/// happens later in [`crate::data::SalesCleaner`].
pub struct SalesLoader;

impl SalesLoader {
    /// Load a delimited sales file.
    pub fn load(path: &Path) -> Result<DataFrame, LoadError> {
        if !path.is_file() {
            return Err(LoadError::NotFound(path.to_path_buf()));
        }
        info!(path = %path.display(), "Loading sales file");

        let csv_err = |source: PolarsError| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        };

        // Header row is read as data so blank header cells stay visible
        let grid = LazyCsvReader::new(path)
            .with_has_header(false)
            .with_infer_schema_length(Some(0))
            .finish()
            .and_then(|lazy| lazy.collect())
            .map_err(csv_err)?;

        if grid.height() == 0 {
            return Err(LoadError::Empty(path.to_path_buf()));
        }

        let header = Self::header_names(&grid).map_err(csv_err)?;
        let mut df = grid.slice(1, grid.height() - 1);
        df.set_column_names(header.iter().map(String::as_str))
            .map_err(csv_err)?;

        debug!(rows = df.height(), columns = ?header, "Sales file loaded");
        Ok(df)
    }

    /// Build column names from the first row.
    ///
    /// Blank cells become `Unnamed: {index}` and repeated names get a
    /// `.1`, `.2`, ... suffix so every name is unique.
    fn header_names(grid: &DataFrame) -> PolarsResult<Vec<String>> {
        let mut used: HashSet<String> = HashSet::new();
        let mut names = Vec::with_capacity(grid.width());

        for (i, column) in grid.get_columns().iter().enumerate() {
            let base = match column.str()?.get(0) {
                Some(raw) if !raw.is_empty() => raw.to_string(),
                _ => format!("{}: {}", PLACEHOLDER_PREFIX, i),
            };

            let mut name = base.clone();
            let mut suffix = 0;
            while !used.insert(name.clone()) {
                suffix += 1;
                name = format!("{}.{}", base, suffix);
            }
            names.push(name);
        }

        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    fn column_names(df: &DataFrame) -> Vec<String> {
        df.get_column_names().iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_load_keeps_every_cell_as_text() {
        let file = create_test_csv(
            "Name,City,Sales,Sales%,Customer%\n\
             Ali,Riyadh,1200,45%,30%\n\
             Sara,Jeddah,n/a,\"1,234%\",12%\n",
        );
        let df = SalesLoader::load(file.path()).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(
            column_names(&df),
            vec!["Name", "City", "Sales", "Sales%", "Customer%"]
        );
        for column in df.get_columns() {
            assert_eq!(column.dtype(), &DataType::String);
        }
        let pct = df.column(SALES_PCT_COL).unwrap().str().unwrap();
        assert_eq!(pct.get(1), Some("1,234%"));
        let sales = df.column(SALES_COL).unwrap().str().unwrap();
        assert_eq!(sales.get(1), Some("n/a"));
    }

    #[test]
    fn test_blank_header_becomes_placeholder() {
        let file = create_test_csv(",Name,Sales\n0,Ali,100\n1,Sara,200\n");
        let df = SalesLoader::load(file.path()).unwrap();

        assert_eq!(column_names(&df), vec!["Unnamed: 0", "Name", "Sales"]);
    }

    #[test]
    fn test_duplicate_headers_get_suffix() {
        let file = create_test_csv("Name,Sales,Sales\nAli,1,2\n");
        let df = SalesLoader::load(file.path()).unwrap();

        assert_eq!(column_names(&df), vec!["Name", "Sales", "Sales.1"]);
    }

    #[test]
    fn test_header_only_file_has_no_rows() {
        let file = create_test_csv("Name,City,Sales,Sales%,Customer%\n");
        let df = SalesLoader::load(file.path()).unwrap();

        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 5);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let result = SalesLoader::load(Path::new("definitely/not/here/sales.csv"));
        assert!(matches!(result, Err(LoadError::NotFound(_))));
    }

    #[test]
    fn test_empty_file_fails() {
        let file = create_test_csv("");
        assert!(SalesLoader::load(file.path()).is_err());
    }
}
