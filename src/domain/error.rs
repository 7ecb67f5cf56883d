use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Serialize)]
pub enum AppError {
    #[error("Error: file not found: {0}")]
    NotFound(String),
    #[error("Error: not a file: {0}")]
    InvalidInput(String),
    #[error("Error: {0}")]
    InvalidArgument(String),
    #[error("Error reading CSV: {0}")]
    ParseError(String),
    #[error("Error reading CSV: {0}")]
    IoError(String),
    #[error("Error loading configuration: {0}")]
    ConfigError(String),
}

impl AppError {
    /// Process exit status reported for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::NotFound(_) => 2,
            AppError::InvalidInput(_) => 3,
            AppError::InvalidArgument(_) => 4,
            AppError::ParseError(_) | AppError::IoError(_) | AppError::ConfigError(_) => 5,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::ParseError(err.to_string())
    }
}

impl From<figment::Error> for AppError {
    fn from(err: figment::Error) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_per_category() {
        assert_eq!(AppError::NotFound("a.csv".into()).exit_code(), 2);
        assert_eq!(AppError::InvalidInput("dir".into()).exit_code(), 3);
        assert_eq!(AppError::InvalidArgument("x".into()).exit_code(), 4);
        assert_eq!(AppError::ParseError("x".into()).exit_code(), 5);
        assert_eq!(AppError::IoError("x".into()).exit_code(), 5);
        assert_eq!(AppError::ConfigError("x".into()).exit_code(), 5);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            AppError::NotFound("data.csv".into()).to_string(),
            "Error: file not found: data.csv"
        );
        assert_eq!(
            AppError::InvalidInput("data".into()).to_string(),
            "Error: not a file: data"
        );
        assert_eq!(
            AppError::ParseError("bad record".into()).to_string(),
            "Error reading CSV: bad record"
        );
    }
}
