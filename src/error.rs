//! Error types for docver
//!
//! Defines a comprehensive error enum covering all failure modes across the system.
//! Uses thiserror for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for docver operations
pub type Result<T> = std::result::Result<T, DocverError>;

/// Comprehensive error type for docver operations
#[derive(Error, Debug)]
pub enum DocverError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Manifest file missing at the expected location
    #[error("Manifest not found: {}", path.display())]
    ManifestNotFound { path: PathBuf },

    /// Manifest reading errors (malformed XML, missing elements)
    #[error("Manifest error: {0}")]
    Manifest(#[from] pomfile::Error),

    /// Parsing errors (formats, CLI values)
    #[error("Parse error: {0}")]
    Parse(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}
