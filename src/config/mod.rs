//! Configuration system
//!
//! The documentation build configuration, resolved from a Maven manifest.
//!
//! Loads an optional base file (docver.yaml) with support for:
//! - Version fields (`version`, `release`) filled from the manifest
//! - Project/author/copyright metadata with sensible defaults
//! - Pass-through of unknown base-file keys
//! - Post-resolution validation

mod docs_config;
pub mod validation;

pub use docs_config::{DocsConfig, DEFAULT_BASE_FILE};
pub use validation::{validate_config, validate_config_result, ValidationError};
