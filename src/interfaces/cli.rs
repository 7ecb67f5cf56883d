use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use serde::Serialize;

use crate::application::ColumnInspector;
use crate::domain::csv::{ColumnReport, InspectionConfig};
use crate::domain::error::{AppError, Result};
use crate::infrastructure::config::ConfigService;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "count-csv-vars",
    author,
    version,
    about = "Count CSV columns (variables) in a file",
    long_about = None
)]
pub struct CliArgs {
    /// Path to CSV file
    pub csv: PathBuf,

    /// Print header names (first row) rather than just the count
    #[arg(long)]
    pub names: bool,

    /// Print `name: type` for each column, inferred from sampled rows
    #[arg(long)]
    pub types: bool,

    /// Single-character delimiter to use instead of comma
    #[arg(long, value_name = "DELIM", allow_hyphen_values = true)]
    pub delimiter: Option<String>,

    /// Number of data rows to sample for --types [default: 100]
    #[arg(long, value_name = "N")]
    pub sample_rows: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// TOML file with default settings
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// What the invocation reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Count,
    Names,
    Types,
}

impl CliArgs {
    /// `--types` wins over `--names`
    pub fn mode(&self) -> Mode {
        if self.types {
            Mode::Types
        } else if self.names {
            Mode::Names
        } else {
            Mode::Count
        }
    }

    /// Reject a malformed `--delimiter` before any file is read
    pub fn validate_flags(&self) -> Result<()> {
        match &self.delimiter {
            Some(delimiter) => InspectionConfig::new()
                .with_delimiter(delimiter.clone())
                .validate(),
            None => Ok(()),
        }
    }

    /// Merge configured defaults with explicit flags
    pub fn inspection_config(&self) -> Result<InspectionConfig> {
        let mut service = ConfigService::new();
        if let Some(path) = &self.config {
            service = service.with_file(path);
        }

        let mut config = service.load()?;
        if let Some(delimiter) = &self.delimiter {
            config.delimiter = Some(delimiter.clone());
        }
        if let Some(sample_rows) = self.sample_rows {
            config.sample_rows = sample_rows;
        }
        Ok(config)
    }
}

#[derive(Debug, Serialize)]
struct InspectionReport {
    columns: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    types: Option<Vec<ColumnReport>>,
}

/// Run the requested inspection and return the lines to print
pub fn execute(args: &CliArgs) -> Result<Vec<String>> {
    args.validate_flags()?;
    let config = args.inspection_config()?;
    config.validate()?;

    let inspector = ColumnInspector::new(config);
    let path = args.csv.as_path();

    let report = match args.mode() {
        Mode::Count => InspectionReport {
            columns: inspector.count_columns(path)?,
            names: None,
            types: None,
        },
        Mode::Names => {
            let header = inspector.header_names(path)?;
            InspectionReport {
                columns: header.column_count(),
                names: Some(header.names),
                types: None,
            }
        }
        Mode::Types => {
            let reports = inspector.infer_types(path)?;
            InspectionReport {
                columns: reports.len(),
                names: None,
                types: Some(reports),
            }
        }
    };

    match args.format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => {
            let json = serde_json::to_string(&report)
                .map_err(|e| AppError::ParseError(format!("Failed to encode JSON: {}", e)))?;
            Ok(vec![json])
        }
    }
}

fn render_text(report: InspectionReport) -> Vec<String> {
    if let Some(types) = report.types {
        return types.iter().map(ColumnReport::to_string).collect();
    }
    if let Some(names) = report.names {
        return vec![names.join(",")];
    }
    vec![report.columns.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::csv::ColumnType;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("count-csv-vars").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_mode_precedence() {
        assert_eq!(parse(&["a.csv"]).mode(), Mode::Count);
        assert_eq!(parse(&["a.csv", "--names"]).mode(), Mode::Names);
        assert_eq!(parse(&["a.csv", "--types"]).mode(), Mode::Types);
        assert_eq!(parse(&["a.csv", "--names", "--types"]).mode(), Mode::Types);
    }

    #[test]
    fn test_flags_parse() {
        let args = parse(&["data.csv", "--delimiter", ";", "--sample-rows", "10", "-vv"]);
        assert_eq!(args.csv, PathBuf::from("data.csv"));
        assert_eq!(args.delimiter.as_deref(), Some(";"));
        assert_eq!(args.sample_rows, Some(10));
        assert_eq!(args.verbose, 2);
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn test_hyphen_delimiter() {
        let args = parse(&["data.csv", "--delimiter", "-"]);
        assert_eq!(args.delimiter.as_deref(), Some("-"));
    }

    #[test]
    fn test_bad_delimiter_rejected_before_config_is_loaded() {
        let args = parse(&[
            "data.csv",
            "--delimiter",
            "ab",
            "--config",
            "/definitely/not/here.toml",
        ]);
        let err = execute(&args).unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_csv_path_required() {
        assert!(CliArgs::try_parse_from(["count-csv-vars"]).is_err());
    }

    #[test]
    fn test_render_text() {
        let count = InspectionReport {
            columns: 2,
            names: None,
            types: None,
        };
        assert_eq!(render_text(count), vec!["2"]);

        let names = InspectionReport {
            columns: 0,
            names: Some(Vec::new()),
            types: None,
        };
        assert_eq!(render_text(names), vec![""]);

        let types = InspectionReport {
            columns: 2,
            names: None,
            types: Some(vec![
                ColumnReport::new("name", ColumnType::Str),
                ColumnReport::new("age", ColumnType::Int),
            ]),
        };
        assert_eq!(render_text(types), vec!["name: str", "age: int"]);
    }
}
