//! Error types for scengen
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::models::ConditionSuffix;

/// Result type alias for scengen operations
pub type ScengenResult<T> = Result<T, ScengenError>;

/// Main error type for scengen operations
#[derive(Error, Debug)]
pub enum ScengenError {
    /// Registered template could not be opened
    #[error("template file '{}' not found for condition {suffix}", path.display())]
    MissingTemplate {
        suffix: ConditionSuffix,
        path: PathBuf,
    },

    /// Template exists but is not UTF-8 text
    #[error("template file '{}' is not valid UTF-8", path.display())]
    InvalidUtf8 { path: PathBuf },

    /// Scenario data file is absent or not a JSON object
    #[error("invalid scenario data in {}: {message}", path.display())]
    InvalidData { path: PathBuf, message: String },

    /// Template lacks the anchor a data substitution injects at
    #[error("template file '{}' has no '{anchor}' anchor", path.display())]
    MissingAnchor { path: PathBuf, anchor: String },

    /// Config file could not be parsed
    #[error("invalid config in {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// Config parsed but describes an unusable run
    #[error("invalid configuration: {message}")]
    Validation { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
