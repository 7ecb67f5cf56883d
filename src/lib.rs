mod app;
mod application;
mod domain;
mod infrastructure;
mod interfaces;

pub use crate::app::run;
pub use crate::application::ColumnInspector;
pub use crate::domain::csv::{
    classify_value, ColumnObservations, ColumnReport, ColumnType, CsvHeader, InspectionConfig,
    TypeSet, DEFAULT_SAMPLE_ROWS,
};
pub use crate::domain::error::{AppError, Result};
pub use crate::infrastructure::config::{ConfigService, ENV_PREFIX};
pub use crate::infrastructure::csv::{CsvParser, CsvSource, TypeInferencer};
pub use crate::interfaces::cli::{execute, CliArgs, Mode, OutputFormat};
