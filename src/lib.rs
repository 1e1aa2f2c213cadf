//! docver - Documentation version resolver
//!
//! docver reads the version of a Maven project from its `pom.xml` and hands
//! it to the documentation build as configuration, so the docs always carry
//! the version the build system says they describe. One synchronous pass per
//! invocation: read the manifest, extract the version, emit the config.
//!
//! # Architecture
//!
//! - **manifest**: Manifest location and the resolution pipeline
//! - **config**: The docs build configuration (`DocsConfig`) and validation
//! - **error**: Error types shared across the crate
//! - **logging**: tracing subscriber setup
//!
//! The namespaced XML extraction itself lives in the `pomfile` crate under
//! `crates/pomfile`.

// Core modules
pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;

// Re-exports
pub use config::{DocsConfig, ValidationError};
pub use error::{DocverError, Result};
pub use manifest::ResolvedManifest;
