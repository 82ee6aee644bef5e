//! Command line and settings file handling.

use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read settings file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid settings file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Daily sales report viewer.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Sales CSV to load (overrides the settings file).
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// JSON settings file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the report to stdout instead of opening a window.
    #[arg(long)]
    pub headless: bool,

    /// With --headless, also write the cleaned table to this CSV file.
    #[arg(long, requires = "headless")]
    pub export: Option<PathBuf>,
}

/// Report settings; every field is optional in the settings file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    pub input_path: PathBuf,
    pub export_file_name: String,
    pub chart_width: u32,
    pub chart_height: u32,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("sales.csv"),
            export_file_name: "sales_report.csv".to_string(),
            chart_width: 1000,
            chart_height: 600,
        }
    }
}

impl ReportSettings {
    /// Read settings from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve settings: CLI flag, then settings file, then defaults.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut settings = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(input) = &cli.input {
            settings.input_path = input.clone();
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn settings_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_flags() {
        let settings = ReportSettings::resolve(&Cli::default()).unwrap();
        assert_eq!(settings, ReportSettings::default());
        assert_eq!(settings.input_path, PathBuf::from("sales.csv"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = settings_file(r#"{ "input_path": "data/june.csv", "chart_width": 1400 }"#);
        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            ..Cli::default()
        };
        let settings = ReportSettings::resolve(&cli).unwrap();

        assert_eq!(settings.input_path, PathBuf::from("data/june.csv"));
        assert_eq!(settings.chart_width, 1400);
        assert_eq!(settings.chart_height, 600);
        assert_eq!(settings.export_file_name, "sales_report.csv");
    }

    #[test]
    fn test_cli_input_wins_over_file() {
        let file = settings_file(r#"{ "input_path": "data/june.csv" }"#);
        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            input: Some(PathBuf::from("override.csv")),
            ..Cli::default()
        };

        let settings = ReportSettings::resolve(&cli).unwrap();
        assert_eq!(settings.input_path, PathBuf::from("override.csv"));
    }

    #[test]
    fn test_invalid_file_is_error() {
        let file = settings_file("{ not json");
        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            ..Cli::default()
        };

        assert!(matches!(
            ReportSettings::resolve(&cli),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from(["sales_report", "--headless", "--export", "out.csv"]);
        assert!(cli.headless);
        assert_eq!(cli.export, Some(PathBuf::from("out.csv")));
        assert_eq!(cli.input, None);
    }
}
