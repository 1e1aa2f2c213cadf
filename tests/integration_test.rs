//! Integration tests for docver
//!
//! These tests verify the full workflow from manifest resolution through
//! configuration emission.

use docver::config::{validate_config, validate_config_result, DocsConfig};
use docver::manifest;
use docver::DocverError;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const POM_XMLNS: &str = "http://maven.apache.org/POM/4.0.0";

/// Helper to write a manifest file into a temp directory
fn write_manifest(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("pom.xml");
    fs::write(&path, content).unwrap();
    path
}

/// Helper to build a minimal namespaced manifest with the given version
fn manifest_with_version(version: &str) -> String {
    format!(
        r#"<project xmlns="{}"><version>{}</version></project>"#,
        POM_XMLNS, version
    )
}

mod extraction_tests {
    use super::*;

    #[test]
    fn test_extracts_version_text() {
        let xml = manifest_with_version("1.2.3");
        assert_eq!(pomfile::extract_version(&xml).unwrap(), "1.2.3");
    }

    #[test]
    fn test_missing_element_is_lookup_error() {
        let xml = format!(r#"<project xmlns="{}"><artifactId>a</artifactId></project>"#, POM_XMLNS);
        let err = pomfile::extract_version(&xml).unwrap_err();
        assert!(matches!(err, pomfile::Error::ElementNotFound { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = pomfile::extract_version_from_file(dir.path().join("pom.xml")).unwrap_err();
        assert!(matches!(err, pomfile::Error::Io(_)));
    }

    #[test]
    fn test_malformed_xml_is_parse_error() {
        let err = pomfile::extract_version("<project><version>1.0").unwrap_err();
        assert!(matches!(err, pomfile::Error::Parse(_)));
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, &manifest_with_version("4.5.6"));

        let first = pomfile::extract_version_from_file(&path).unwrap();
        let second = pomfile::extract_version_from_file(&path).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, "4.5.6");
    }

    #[test]
    fn test_version_outside_namespace_never_matches() {
        let xml = r#"<project><version>9.0.0</version></project>"#;
        let err = pomfile::extract_version(xml).unwrap_err();
        assert!(matches!(err, pomfile::Error::ElementNotFound { .. }));
    }

    #[test]
    fn test_prefixed_namespace_matches() {
        let xml = format!(
            r#"<m:project xmlns:m="{}"><m:version>2.0.0</m:version></m:project>"#,
            POM_XMLNS
        );
        assert_eq!(pomfile::extract_version(&xml).unwrap(), "2.0.0");
    }

    #[test]
    fn test_escaped_version_text_is_decoded() {
        let xml = manifest_with_version("1&#46;2");
        assert_eq!(pomfile::extract_version(&xml).unwrap(), "1.2");
    }
}

mod resolution_tests {
    use super::*;

    #[test]
    fn test_conventional_manifest_location() {
        // Manifest one level above the docs directory
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("pom.xml"), manifest_with_version("3.0.0")).unwrap();
        let docs_dir = project.path().join("docs");
        fs::create_dir(&docs_dir).unwrap();

        let manifest_path = manifest::locate_manifest(&docs_dir);
        let resolved = manifest::resolve(&manifest_path).unwrap();
        assert_eq!(resolved.version, "3.0.0");
    }

    #[test]
    fn test_missing_manifest_is_reported_clearly() {
        let dir = TempDir::new().unwrap();
        let err = manifest::resolve(dir.path().join("pom.xml")).unwrap_err();

        assert!(matches!(err, DocverError::ManifestNotFound { .. }));
        assert!(err.to_string().contains("Manifest not found"));
    }

    #[test]
    fn test_parent_version_wins_in_document_order() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(
            &dir,
            &format!(
                r#"<project xmlns="{}">
                    <parent>
                        <groupId>org.example</groupId>
                        <artifactId>parent</artifactId>
                        <version>7.0.0</version>
                    </parent>
                    <artifactId>child</artifactId>
                    <version>7.0.1</version>
                </project>"#,
                POM_XMLNS
            ),
        );

        let resolved = manifest::resolve(&path).unwrap();
        // First match in document order is the parent's
        assert_eq!(resolved.version, "7.0.0");
        // The typed view still knows the project's own version
        assert_eq!(resolved.pom.version.as_deref(), Some("7.0.1"));
    }

    #[test]
    fn test_inherited_version_resolves() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(
            &dir,
            &format!(
                r#"<project xmlns="{}">
                    <parent>
                        <groupId>org.example</groupId>
                        <artifactId>parent</artifactId>
                        <version>5.5.0</version>
                    </parent>
                    <artifactId>child</artifactId>
                </project>"#,
                POM_XMLNS
            ),
        );

        let resolved = manifest::resolve(&path).unwrap();
        assert_eq!(resolved.version, "5.5.0");
        assert_eq!(resolved.pom.effective_version(), Some("5.5.0"));
    }

    #[test]
    fn test_inspect_works_without_version() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(
            &dir,
            &format!(
                r#"<project xmlns="{}"><artifactId>broken</artifactId></project>"#,
                POM_XMLNS
            ),
        );

        // resolve() refuses, load_pom() still answers
        assert!(manifest::resolve(&path).is_err());
        let pom = manifest::load_pom(&path).unwrap();
        assert_eq!(pom.artifact_id.as_deref(), Some("broken"));
    }
}

mod config_tests {
    use super::*;

    #[test]
    fn test_end_to_end_both_fields_hold_version() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, &manifest_with_version("9.0.0"));

        let config = DocsConfig::from_manifest(&path, None).unwrap();
        assert_eq!(config.version, "9.0.0");
        assert_eq!(config.release, "9.0.0");
    }

    #[test]
    fn test_base_config_is_extended_not_replaced() {
        let dir = TempDir::new().unwrap();
        let manifest_path = write_manifest(&dir, &manifest_with_version("1.0.0"));

        let base_path = dir.path().join("docver.yaml");
        fs::write(
            &base_path,
            "project: Example Docs\nauthor: Jane Doe\nhtml_theme: alabaster\n",
        )
        .unwrap();

        let config = DocsConfig::from_manifest(&manifest_path, Some(&base_path)).unwrap();
        assert_eq!(config.project, "Example Docs");
        assert_eq!(config.author, "Jane Doe");
        assert_eq!(config.version, "1.0.0");
        assert_eq!(config.release, "1.0.0");

        // Unknown keys survive the round trip
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("html_theme: alabaster"));
    }

    #[test]
    fn test_project_defaults_from_manifest_name() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(
            &dir,
            &format!(
                r#"<project xmlns="{}">
                    <artifactId>example-app</artifactId>
                    <version>1.0.0</version>
                    <name>Example Application</name>
                </project>"#,
                POM_XMLNS
            ),
        );

        let config = DocsConfig::from_manifest(&path, None).unwrap();
        assert_eq!(config.project, "Example Application");
    }

    #[test]
    fn test_entities_in_manifest_reach_config() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(
            &dir,
            &format!(
                r#"<project xmlns="{}">
                    <artifactId>pipes</artifactId>
                    <version>1&#46;0&#46;0</version>
                    <name>Pipes &amp; Filters</name>
                </project>"#,
                POM_XMLNS
            ),
        );

        let config = DocsConfig::from_manifest(&path, None).unwrap();
        assert_eq!(config.version, "1.0.0");
        assert_eq!(config.release, "1.0.0");
        // The ampersand and its surrounding spaces survive into the config
        assert_eq!(config.project, "Pipes & Filters");
    }

    #[test]
    fn test_missing_explicit_base_is_an_error() {
        let dir = TempDir::new().unwrap();
        let manifest_path = write_manifest(&dir, &manifest_with_version("1.0.0"));

        let err = DocsConfig::from_manifest(&manifest_path, Some(&dir.path().join("absent.yaml")))
            .unwrap_err();
        assert!(err.to_string().contains("Base config file not found"));
    }

    #[test]
    fn test_env_output_is_eval_safe() {
        let dir = TempDir::new().unwrap();
        let manifest_path = write_manifest(&dir, &manifest_with_version("1.0.0"));

        let base_path = dir.path().join("docver.yaml");
        fs::write(&base_path, "project: Jane's Docs\n").unwrap();

        let config = DocsConfig::from_manifest(&manifest_path, Some(&base_path)).unwrap();
        let env = config.to_env().unwrap();
        assert!(env.contains("export DOCS_VERSION=1.0.0"));
        assert!(env.contains(r#"export DOCS_PROJECT="Jane's Docs""#));
    }
}

mod validation_tests {
    use super::*;

    #[test]
    fn test_resolved_config_validates() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(
            &dir,
            &format!(
                r#"<project xmlns="{}">
                    <artifactId>example-app</artifactId>
                    <version>1.0.0</version>
                </project>"#,
                POM_XMLNS
            ),
        );

        let config = DocsConfig::from_manifest(&path, None).unwrap();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_unresolved_config_fails_validation() {
        let config = DocsConfig::new();
        let err = validate_config_result(&config).unwrap_err();
        assert!(err.to_string().contains("Configuration validation failed"));
    }

    #[test]
    fn test_empty_version_element_fails_validation() {
        // Self-closing version counts as present but empty; validation is
        // where that gets rejected
        let dir = TempDir::new().unwrap();
        let path = write_manifest(
            &dir,
            &format!(r#"<project xmlns="{}"><version/></project>"#, POM_XMLNS),
        );

        let config = DocsConfig::from_manifest(&path, None).unwrap();
        assert!(config.version.is_empty());
        assert!(validate_config(&config).is_err());
    }
}

mod pipeline_tests {
    use super::*;

    #[test]
    fn test_full_pipeline_with_saved_base() {
        let project = TempDir::new().unwrap();
        fs::write(
            project.path().join("pom.xml"),
            format!(
                r#"<project xmlns="{}">
                    <groupId>org.example</groupId>
                    <artifactId>example-app</artifactId>
                    <version>2.4.0</version>
                    <name>Example Application</name>
                </project>"#,
                POM_XMLNS
            ),
        )
        .unwrap();

        let docs_dir = project.path().join("docs");
        fs::create_dir(&docs_dir).unwrap();

        // Seed a base config the way `docver init` would
        let base_path = DocsConfig::default_base_path(&docs_dir);
        let seeded = DocsConfig::new().with_author("Jane Doe");
        seeded.save(&base_path).unwrap();

        // Resolve and overlay
        let manifest_path = manifest::locate_manifest(&docs_dir);
        let config = DocsConfig::from_manifest(&manifest_path, Some(&base_path)).unwrap();

        assert_eq!(config.version, "2.4.0");
        assert_eq!(config.release, "2.4.0");
        assert_eq!(config.project, "Example Application");
        assert_eq!(config.author, "Jane Doe");
        assert!(validate_config(&config).is_ok());

        // Emit all three formats without loss
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("version: 2.4.0"));
        assert!(yaml.contains("release: 2.4.0"));

        let json = config.to_json().unwrap();
        assert!(json.contains("\"version\": \"2.4.0\""));

        let env = config.to_env().unwrap();
        assert!(env.contains("export DOCS_RELEASE=2.4.0"));
    }

    #[test]
    fn test_failures_leave_no_config_behind() {
        // A manifest missing its version element produces an error, not a
        // partially filled configuration
        let dir = TempDir::new().unwrap();
        let path = write_manifest(
            &dir,
            &format!(r#"<project xmlns="{}"><name>Broken</name></project>"#, POM_XMLNS),
        );

        let result = DocsConfig::from_manifest(&path, None);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Element not found"));
    }
}
