//! Basic usage example for the pomfile crate
//!
//! This example demonstrates the core functionality of the POM reader:
//! - Extracting the version string from a manifest
//! - Parsing the full set of project coordinates
//! - Looking up arbitrary namespaced elements
//!
//! To run this example:
//! ```sh
//! cd crates/pomfile
//! cargo run --example extract [path/to/pom.xml]
//! ```

use pomfile::{extract_version, find_first_text, Pom, Result, POM_XMLNS};

const SAMPLE_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
    <groupId>org.example</groupId>
    <artifactId>sample-app</artifactId>
    <version>1.2.3</version>
    <name>Sample Application</name>
</project>
"#;

fn main() -> Result<()> {
    let xml = match std::env::args().nth(1) {
        Some(path) => {
            println!("Reading {}\n", path);
            std::fs::read_to_string(path)?
        }
        None => {
            println!("No manifest given, using the embedded sample\n");
            SAMPLE_POM.to_string()
        }
    };

    // The one-call path: just the version string
    match extract_version(&xml) {
        Ok(version) => println!("✓ Version: {}", version),
        Err(e) => eprintln!("Failed to extract version: {}", e),
    }

    // The typed path: full project coordinates
    println!("\n=== Coordinates ===");
    let pom = Pom::parse(&xml)?;
    println!("Project:           {}", pom.coordinates());
    if let Some(name) = &pom.name {
        println!("Name:              {}", name);
    }
    if let Some(packaging) = &pom.packaging {
        println!("Packaging:         {}", packaging);
    }
    if let Some(parent) = &pom.parent {
        println!("Parent:            {}", parent.coordinates());
    }
    match pom.effective_version() {
        Some(version) => println!("Effective version: {}", version),
        None => println!("Effective version: (none declared)"),
    }

    // The generic path: any element in the POM namespace
    println!("\n=== Element lookup ===");
    for element in ["artifactId", "groupId", "modelVersion"] {
        match find_first_text(&xml, POM_XMLNS, element)? {
            Some(text) => println!("{}: {}", element, text),
            None => println!("{}: (not present)", element),
        }
    }

    Ok(())
}
