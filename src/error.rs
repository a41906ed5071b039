//! Error types for Speedplot.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Speedplot operations.
pub type Result<T> = std::result::Result<T, SpeedplotError>;

/// Errors that can occur in Speedplot.
#[derive(Debug, Error)]
pub enum SpeedplotError {
    /// Failed to open a file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required column is absent from the CSV header.
    #[error("Missing column '{column}' in CSV header")]
    MissingColumn { column: String },

    /// A numeric field could not be parsed.
    #[error("Line {line}: invalid {column} value '{value}'")]
    InvalidNumber {
        line: u64,
        column: String,
        value: String,
    },

    /// A row ends before a required column.
    #[error("Line {line}: missing {column} value")]
    MissingField { line: u64, column: String },

    /// Malformed CSV.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Unsupported output image format.
    #[error("Unsupported output format: {extension}")]
    UnsupportedFormat { extension: String },

    /// Failed to draw the chart.
    #[error("Render error: {0}")]
    Render(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SpeedplotError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a MissingColumn error.
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    /// Create an InvalidNumber error.
    pub fn invalid_number(line: u64, column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            line,
            column: column.into(),
            value: value.into(),
        }
    }

    /// Create a MissingField error.
    pub fn missing_field(line: u64, column: impl Into<String>) -> Self {
        Self::MissingField {
            line,
            column: column.into(),
        }
    }

    /// Create an UnsupportedFormat error.
    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            extension: extension.into(),
        }
    }
}

impl<E: std::error::Error + Send + Sync> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for SpeedplotError
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        Self::Render(err.to_string())
    }
}
