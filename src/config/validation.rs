//! Configuration validation
//!
//! Validates a resolved docs configuration for correctness:
//! - Version was resolved and is non-empty
//! - `release` is identical to `version`
//! - Project name is present

use super::docs_config::DocsConfig;
use crate::DocverError;

/// Validation error details
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validation result
pub type ValidationResult = std::result::Result<(), Vec<ValidationError>>;

/// Validate a resolved docs configuration
pub fn validate_config(config: &DocsConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.version.is_empty() {
        errors.push(ValidationError::new(
            "version",
            "Version was not resolved; the manifest's version element is missing or empty",
        ));
    }

    if config.release != config.version {
        errors.push(ValidationError::new(
            "release",
            format!(
                "Release '{}' does not match version '{}'",
                config.release, config.version
            ),
        ));
    }

    if config.project.is_empty() {
        errors.push(ValidationError::new(
            "project",
            "Project name is empty; set it in the base config or the manifest's <name>",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate configuration and return a Result
pub fn validate_config_result(config: &DocsConfig) -> crate::Result<()> {
    validate_config(config).map_err(|errors| {
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        DocverError::Config(format!(
            "Configuration validation failed:\n  - {}",
            messages.join("\n  - ")
        ))
    })
}
