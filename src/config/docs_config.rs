//! Docs configuration file handling
//!
//! Loads and manages the base docver.yaml file and overlays the version
//! resolved from the Maven manifest. Unknown keys in the base file are
//! retained and re-emitted, so an existing docs configuration can be
//! imported wholesale and extended.

use crate::manifest::ResolvedManifest;
use crate::Result;
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Conventional base configuration file name inside the docs directory
pub const DEFAULT_BASE_FILE: &str = "docver.yaml";

/// Documentation build configuration
///
/// The explicit struct handed to the documentation build step. `version` and
/// `release` always carry the identical string resolved from the manifest.
/// The struct is passed by value; nothing here is global or mutable across
/// calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsConfig {
    /// Project name shown in the generated docs
    #[serde(default)]
    pub project: String,

    /// Author line for the generated docs
    #[serde(default)]
    pub author: String,

    /// Copyright line; defaults to the current year (plus the author) at
    /// resolution time when the base file leaves it empty
    #[serde(default)]
    pub copyright: String,

    /// Resolved project version
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,

    /// Release string; always identical to `version`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub release: String,

    /// Any other keys from the base file, passed through untouched.
    /// BTreeMap keeps re-emitted output deterministic.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

fn default_copyright(author: &str) -> String {
    let year = Utc::now().year();
    if author.is_empty() {
        year.to_string()
    } else {
        format!("{}, {}", year, author)
    }
}

impl DocsConfig {
    /// Create a new configuration with empty fields and the current year as
    /// the copyright line
    pub fn new() -> Self {
        Self {
            project: String::new(),
            author: String::new(),
            copyright: default_copyright(""),
            version: String::new(),
            release: String::new(),
            extra: BTreeMap::new(),
        }
    }

    /// Load a base configuration from a specific path
    ///
    /// An explicitly named base file that does not exist is a configuration
    /// error, not a silent fallback to defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(crate::DocverError::Config(format!(
                "Base config file not found: {}",
                path.display()
            )));
        }

        tracing::info!(path = %path.display(), "Loading docs configuration");

        let content = fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;

        tracing::debug!(
            project = %config.project,
            extra_keys = config.extra.len(),
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// Save the configuration to a specific path as YAML
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        tracing::info!(path = %path.display(), "Saving docs configuration");

        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;

        Ok(())
    }

    /// Copy a version string into both the `version` and `release` fields
    pub fn with_version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self.release = version.to_string();
        self
    }

    /// Set the author, refreshing the copyright line when it still holds
    /// the bare default
    pub fn with_author(mut self, author: &str) -> Self {
        self.author = author.to_string();
        if self.copyright.is_empty() || self.copyright == default_copyright("") {
            self.copyright = default_copyright(author);
        }
        self
    }

    /// Overlay a resolved manifest onto this configuration
    ///
    /// Sets both version fields and fills `project` (manifest name, else
    /// artifactId) and `copyright` where the base left them empty.
    pub fn apply_manifest(mut self, resolved: &ResolvedManifest) -> Self {
        self.version = resolved.version.clone();
        self.release = resolved.version.clone();

        if self.project.is_empty() {
            if let Some(name) = resolved
                .pom
                .name
                .clone()
                .or_else(|| resolved.pom.artifact_id.clone())
            {
                self.project = name;
            }
        }

        if self.copyright.is_empty() {
            self.copyright = default_copyright(&self.author);
        }

        self
    }

    /// Build the configuration for a documentation build
    ///
    /// Loads the base file when given (defaults otherwise), resolves the
    /// manifest, and overlays the version into both fields. This is the
    /// whole pipeline behind `docver emit`.
    pub fn from_manifest(manifest_path: impl AsRef<Path>, base: Option<&Path>) -> Result<Self> {
        let base_config = match base {
            Some(path) => Self::load(path)?,
            None => Self::new(),
        };

        let resolved = crate::manifest::resolve(manifest_path)?;
        Ok(base_config.apply_manifest(&resolved))
    }

    /// Render the configuration as YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Render the configuration as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render the known fields as shell export lines
    ///
    /// Values are quoted with `shlex` so the output is safe to `eval`.
    /// Extra base-file keys are not exported; they only round-trip through
    /// the YAML and JSON forms.
    pub fn to_env(&self) -> Result<String> {
        let mut out = String::new();
        for (key, value) in [
            ("DOCS_PROJECT", &self.project),
            ("DOCS_AUTHOR", &self.author),
            ("DOCS_COPYRIGHT", &self.copyright),
            ("DOCS_VERSION", &self.version),
            ("DOCS_RELEASE", &self.release),
        ] {
            let quoted = shlex::try_quote(value).map_err(|e| {
                crate::DocverError::Config(format!(
                    "Cannot quote {} for shell export: {}",
                    key, e
                ))
            })?;
            out.push_str(&format!("export {}={}\n", key, quoted));
        }
        Ok(out)
    }

    /// Get the conventional base config path inside a docs directory
    pub fn default_base_path(docs_dir: impl AsRef<Path>) -> PathBuf {
        docs_dir.as_ref().join(DEFAULT_BASE_FILE)
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self::new()
    }
}
