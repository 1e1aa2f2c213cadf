//! Manifest location and resolution
//!
//! Finds the Maven manifest relative to the docs directory and runs the
//! one-shot resolution pipeline over it: read once, extract the version,
//! parse the coordinates.
//!
//! # Example Manifest
//!
//! ```xml
//! <project xmlns="http://maven.apache.org/POM/4.0.0">
//!   <groupId>org.example</groupId>
//!   <artifactId>example-app</artifactId>
//!   <version>1.2.3</version>
//!   <name>Example Application</name>
//! </project>
//! ```

mod resolver;

pub use resolver::{
    load_pom, locate_manifest, resolve, resolve_version, ResolvedManifest, DEFAULT_MANIFEST,
};
