//! Manifest resolution pipeline

use crate::{DocverError, Result};
use pomfile::Pom;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Conventional manifest file name
pub const DEFAULT_MANIFEST: &str = "pom.xml";

/// A manifest that has been read and resolved
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedManifest {
    /// Path the manifest was read from
    pub path: PathBuf,

    /// Extracted version string
    pub version: String,

    /// Parsed project coordinates
    pub pom: Pom,
}

/// Get the conventional manifest path for a docs directory
///
/// The manifest lives one level above the documentation source directory.
pub fn locate_manifest(docs_dir: impl AsRef<Path>) -> PathBuf {
    docs_dir.as_ref().join("..").join(DEFAULT_MANIFEST)
}

/// Resolve a manifest: read it once, extract the version, parse coordinates
///
/// The file content is read in one scoped pass; both the extractor and the
/// coordinate parser run over the same string.
pub fn resolve(manifest_path: impl AsRef<Path>) -> Result<ResolvedManifest> {
    let path = manifest_path.as_ref();
    ensure_exists(path)?;

    tracing::info!(path = %path.display(), "Resolving manifest version");

    let content = fs::read_to_string(path)?;
    let version = pomfile::extract_version(&content)?;
    let pom = Pom::parse(&content)?;

    tracing::debug!(
        version = %version,
        coordinates = %pom.coordinates(),
        "Manifest resolved"
    );

    Ok(ResolvedManifest {
        path: path.to_path_buf(),
        version,
        pom,
    })
}

/// Resolve just the version string from a manifest
pub fn resolve_version(manifest_path: impl AsRef<Path>) -> Result<String> {
    let path = manifest_path.as_ref();
    ensure_exists(path)?;

    tracing::debug!(path = %path.display(), "Extracting manifest version");

    Ok(pomfile::extract_version_from_file(path)?)
}

/// Load the coordinates without requiring a version element
///
/// `inspect` uses this so it still works on the broken manifests a user is
/// diagnosing.
pub fn load_pom(manifest_path: impl AsRef<Path>) -> Result<Pom> {
    let path = manifest_path.as_ref();
    ensure_exists(path)?;

    tracing::debug!(path = %path.display(), "Loading manifest coordinates");

    Ok(Pom::from_file(path)?)
}

fn ensure_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(DocverError::ManifestNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
        <project xmlns="http://maven.apache.org/POM/4.0.0">
            <groupId>org.example</groupId>
            <artifactId>example-app</artifactId>
            <version>1.2.3</version>
            <name>Example Application</name>
        </project>
    "#;

    fn write_manifest(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("pom.xml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_locate_manifest() {
        let path = locate_manifest("docs");
        assert_eq!(path, PathBuf::from("docs/../pom.xml"));
    }

    #[test]
    fn test_resolve() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, SAMPLE_POM);

        let resolved = resolve(&path).unwrap();
        assert_eq!(resolved.version, "1.2.3");
        assert_eq!(resolved.path, path);
        assert_eq!(resolved.pom.artifact_id.as_deref(), Some("example-app"));
        assert_eq!(resolved.pom.name.as_deref(), Some("Example Application"));
    }

    #[test]
    fn test_resolve_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = resolve(dir.path().join("pom.xml")).unwrap_err();

        assert!(matches!(err, DocverError::ManifestNotFound { .. }));
        assert!(err.to_string().contains("Manifest not found"));
    }

    #[test]
    fn test_resolve_missing_version_element() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(
            &dir,
            r#"<project xmlns="http://maven.apache.org/POM/4.0.0"><artifactId>a</artifactId></project>"#,
        );

        let err = resolve(&path).unwrap_err();
        assert!(err.to_string().contains("Element not found"));
    }

    #[test]
    fn test_resolve_malformed_manifest() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, "<project><version>1.0");

        let err = resolve(&path).unwrap_err();
        assert!(matches!(
            err,
            DocverError::Manifest(pomfile::Error::Parse(_))
        ));
    }

    #[test]
    fn test_resolve_version_only() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, SAMPLE_POM);

        assert_eq!(resolve_version(&path).unwrap(), "1.2.3");
    }

    #[test]
    fn test_load_pom_without_version() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(
            &dir,
            r#"<project xmlns="http://maven.apache.org/POM/4.0.0"><artifactId>broken</artifactId></project>"#,
        );

        let pom = load_pom(&path).unwrap();
        assert_eq!(pom.artifact_id.as_deref(), Some("broken"));
        assert_eq!(pom.effective_version(), None);
    }
}
