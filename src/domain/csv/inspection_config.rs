// ============================================================
// INSPECTION CONFIGURATION
// ============================================================
// Settings controlling how a CSV file is read and sampled

use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};

/// Default number of data rows sampled for type inference
pub const DEFAULT_SAMPLE_ROWS: usize = 100;

/// Configuration for CSV column inspection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectionConfig {
    /// Maximum number of data rows (after the header) sampled for type
    /// inference (default: 100)
    pub sample_rows: usize,

    /// Single-character delimiter override. Comma when unset.
    pub delimiter: Option<String>,
}

impl Default for InspectionConfig {
    fn default() -> Self {
        Self {
            sample_rows: DEFAULT_SAMPLE_ROWS,
            delimiter: None,
        }
    }
}

impl InspectionConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sample_rows(mut self, sample_rows: usize) -> Self {
        self.sample_rows = sample_rows;
        self
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    /// Delimiter byte to parse with, `None` meaning the comma default.
    ///
    /// The override must be exactly one character, and that character must
    /// be ASCII since records are split on a single byte.
    pub fn delimiter_byte(&self) -> Result<Option<u8>> {
        let Some(delimiter) = self.delimiter.as_deref() else {
            return Ok(None);
        };

        let mut chars = delimiter.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if ch.is_ascii() => Ok(Some(ch as u8)),
            (Some(ch), None) => Err(AppError::InvalidArgument(format!(
                "--delimiter must be an ASCII character, got {:?}",
                ch
            ))),
            _ => Err(AppError::InvalidArgument(
                "--delimiter must be a single character".to_string(),
            )),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.delimiter_byte().map(|_| ())
    }
}
