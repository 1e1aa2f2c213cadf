//! Maven POM reader for Rust
//!
//! A type-safe reader for Maven `pom.xml` build manifests. The crate offers
//! two views of a manifest: a namespace-aware lookup for a single element's
//! text ([`find_first_text`], [`extract_version`]) and a typed snapshot of
//! the project coordinates ([`Pom`]).
//!
//! # Example
//!
//! ```no_run
//! use pomfile::Pom;
//!
//! let pom = Pom::from_file("pom.xml")?;
//! if let Some(version) = pom.effective_version() {
//!     println!("version: {}", version);
//! }
//! # Ok::<(), pomfile::Error>(())
//! ```

use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesRef, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;
use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// The XML namespace URI of Maven POM elements.
pub const POM_XMLNS: &str = "http://maven.apache.org/POM/4.0.0";

/// Errors that can occur while reading a POM
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed XML
    #[error("XML parse error: {0}")]
    Parse(String),

    /// Expected element missing from the document
    #[error("Element not found: {{{namespace}}}{element}")]
    ElementNotFound { namespace: String, element: String },
}

/// Result type for POM operations
pub type Result<T> = std::result::Result<T, Error>;

/// Coordinates of a parent project declared in a `<parent>` block
#[derive(Debug, Clone, Default, Serialize)]
pub struct Parent {
    /// Parent group identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    /// Parent artifact identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_id: Option<String>,

    /// Parent version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Parent {
    /// Render the parent coordinates as `groupId:artifactId:version`
    pub fn coordinates(&self) -> String {
        format!(
            "{}:{}:{}",
            self.group_id.as_deref().unwrap_or("?"),
            self.artifact_id.as_deref().unwrap_or("?"),
            self.version.as_deref().unwrap_or("?")
        )
    }
}

/// A parsed POM manifest
///
/// Holds the project-level Maven coordinates plus the optional `<parent>`
/// block. Only elements in the POM namespace are captured; the first
/// occurrence of each field wins, and nested occurrences (a dependency's
/// `<version>`, for example) never populate project-level fields.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Pom {
    /// Project group identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    /// Project artifact identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_id: Option<String>,

    /// Project version as declared (not inherited)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Packaging type (jar, pom, bundle, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packaging: Option<String>,

    /// Human-readable project name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Parent project coordinates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Parent>,
}

impl Pom {
    /// Parse a POM from XML content
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = NsReader::from_str(xml);

        let mut pom = Pom::default();
        // Open-element path, root included. The bool records whether the
        // element resolved into the POM namespace.
        let mut path: Vec<(String, bool)> = Vec::new();
        // Text arrives in fragments around entity references; it is kept
        // verbatim here and trimmed once at the closing tag.
        let mut text = String::new();
        let mut seen_root = false;

        loop {
            match reader.read_resolved_event() {
                Ok((resolve, Event::Start(ref e))) => {
                    seen_root = true;
                    let local = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                    path.push((local, namespace_matches(&resolve, POM_XMLNS)));
                    text.clear();
                }
                Ok((_, Event::Empty(_))) => {
                    // Self-closing elements carry no text; the matching
                    // coordinate stays absent.
                    seen_root = true;
                }
                Ok((_, Event::Text(ref t))) => {
                    let content = t
                        .decode()
                        .map_err(|e| Error::Parse(format!("Invalid text content: {}", e)))?;
                    text.push_str(&content);
                }
                Ok((_, Event::GeneralRef(ref r))) => {
                    append_general_ref(&mut text, r)?;
                }
                Ok((_, Event::CData(t))) => {
                    text.push_str(&String::from_utf8_lossy(&t.into_inner()));
                }
                Ok((_, Event::End(_))) => match path.pop() {
                    Some((local, in_pom_ns)) => {
                        if in_pom_ns {
                            assign_field(&mut pom, &path, &local, text.trim());
                        }
                        text.clear();
                    }
                    None => {
                        return Err(Error::Parse(
                            "Closing tag with no matching open element".to_string(),
                        ));
                    }
                },
                Ok((_, Event::Eof)) => {
                    if !path.is_empty() {
                        return Err(Error::Parse(
                            "Unexpected end of document inside an element".to_string(),
                        ));
                    }
                    if !seen_root {
                        return Err(Error::Parse("No root element found".to_string()));
                    }
                    break;
                }
                Err(e) => {
                    return Err(Error::Parse(format!("Error parsing manifest XML: {}", e)));
                }
                Ok(_) => {}
            }
        }

        Ok(pom)
    }

    /// Parse a POM from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Get the project version, falling back to the parent's version when
    /// the project inherits it (Maven's inheritance rule)
    pub fn effective_version(&self) -> Option<&str> {
        self.version
            .as_deref()
            .or_else(|| self.parent.as_ref().and_then(|p| p.version.as_deref()))
    }

    /// Get the project group id, falling back to the parent's
    pub fn effective_group_id(&self) -> Option<&str> {
        self.group_id
            .as_deref()
            .or_else(|| self.parent.as_ref().and_then(|p| p.group_id.as_deref()))
    }

    /// Render the project coordinates as `groupId:artifactId:version`
    pub fn coordinates(&self) -> String {
        format!(
            "{}:{}:{}",
            self.effective_group_id().unwrap_or("?"),
            self.artifact_id.as_deref().unwrap_or("?"),
            self.effective_version().unwrap_or("?")
        )
    }
}

/// Find the text of the first element with the given namespace URI and local
/// name, anywhere under the document root, in document order.
///
/// This is a single tree traversal with an explicit namespace parameter;
/// both default (`xmlns="..."`) and prefixed (`xmlns:m="..."`) declarations
/// in the document are honored. The traversal stops at the first match.
/// Returns `Ok(None)` when the document is well formed but no element
/// matches.
pub fn find_first_text(xml: &str, namespace: &str, element: &str) -> Result<Option<String>> {
    let mut reader = NsReader::from_str(xml);

    let mut depth = 0usize;
    let mut seen_root = false;

    loop {
        match reader.read_resolved_event() {
            Ok((resolve, Event::Start(ref e))) => {
                seen_root = true;
                if namespace_matches(&resolve, namespace)
                    && e.local_name().as_ref() == element.as_bytes()
                {
                    return collect_element_text(&mut reader).map(Some);
                }
                depth += 1;
            }
            Ok((resolve, Event::Empty(ref e))) => {
                seen_root = true;
                if namespace_matches(&resolve, namespace)
                    && e.local_name().as_ref() == element.as_bytes()
                {
                    // Self-closing match: present, with empty text.
                    return Ok(Some(String::new()));
                }
            }
            Ok((_, Event::End(_))) => {
                if depth == 0 {
                    return Err(Error::Parse(
                        "Closing tag with no matching open element".to_string(),
                    ));
                }
                depth -= 1;
            }
            Ok((_, Event::Eof)) => {
                if depth > 0 {
                    return Err(Error::Parse(
                        "Unexpected end of document inside an element".to_string(),
                    ));
                }
                if !seen_root {
                    return Err(Error::Parse("No root element found".to_string()));
                }
                return Ok(None);
            }
            Err(e) => {
                return Err(Error::Parse(format!("Error parsing manifest XML: {}", e)));
            }
            Ok(_) => {}
        }
    }
}

/// Extract the version string from POM XML content
///
/// Applies [`find_first_text`] with the POM namespace and the `version`
/// element; a missing element is an [`Error::ElementNotFound`].
pub fn extract_version(xml: &str) -> Result<String> {
    find_first_text(xml, POM_XMLNS, "version")?.ok_or_else(|| Error::ElementNotFound {
        namespace: POM_XMLNS.to_string(),
        element: "version".to_string(),
    })
}

/// Extract the version string from a POM file
pub fn extract_version_from_file(path: impl AsRef<Path>) -> Result<String> {
    let content = fs::read_to_string(path)?;
    extract_version(&content)
}

fn namespace_matches(resolve: &ResolveResult<'_>, uri: &str) -> bool {
    matches!(resolve, ResolveResult::Bound(Namespace(ns)) if *ns == uri.as_bytes())
}

/// Accumulate the text content of the element whose `Start` event was just
/// read, consuming events up to its matching `End`. Character and entity
/// references are resolved into the text.
fn collect_element_text(reader: &mut NsReader<&[u8]>) -> Result<String> {
    let mut text = String::new();
    let mut depth = 0usize;

    loop {
        match reader.read_resolved_event() {
            Ok((_, Event::Start(_))) => depth += 1,
            Ok((_, Event::End(_))) => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }
            Ok((_, Event::Text(ref t))) => {
                let content = t
                    .decode()
                    .map_err(|e| Error::Parse(format!("Invalid text content: {}", e)))?;
                text.push_str(&content);
            }
            Ok((_, Event::GeneralRef(ref r))) => {
                append_general_ref(&mut text, r)?;
            }
            Ok((_, Event::CData(t))) => {
                text.push_str(&String::from_utf8_lossy(&t.into_inner()));
            }
            Ok((_, Event::Eof)) => {
                return Err(Error::Parse(
                    "Unexpected end of document inside an element".to_string(),
                ));
            }
            Err(e) => {
                return Err(Error::Parse(format!("Error parsing manifest XML: {}", e)));
            }
            Ok(_) => {}
        }
    }

    Ok(text.trim().to_string())
}

/// Resolve a general reference (`&amp;`, `&#46;`, ...) and append its
/// replacement text. Character references and the predefined XML entities
/// are supported; an undefined entity is a parse error.
fn append_general_ref(text: &mut String, r: &BytesRef<'_>) -> Result<()> {
    if let Some(ch) = r
        .resolve_char_ref()
        .map_err(|e| Error::Parse(format!("Invalid character reference: {}", e)))?
    {
        text.push(ch);
        return Ok(());
    }

    let name = r
        .decode()
        .map_err(|e| Error::Parse(format!("Invalid entity reference: {}", e)))?;
    match resolve_predefined_entity(&name) {
        Some(replacement) => {
            text.push_str(replacement);
            Ok(())
        }
        None => Err(Error::Parse(format!(
            "Unresolvable entity reference: &{};",
            name
        ))),
    }
}

/// Route accumulated element text into the right coordinate field.
///
/// `path` is the ancestor chain after the element itself was popped, so
/// `path.len() == 1` means a direct child of the root.
fn assign_field(pom: &mut Pom, path: &[(String, bool)], local: &str, value: &str) {
    if value.is_empty() {
        return;
    }

    match path.len() {
        1 => match local {
            "groupId" => set_if_absent(&mut pom.group_id, value),
            "artifactId" => set_if_absent(&mut pom.artifact_id, value),
            "version" => set_if_absent(&mut pom.version, value),
            "packaging" => set_if_absent(&mut pom.packaging, value),
            "name" => set_if_absent(&mut pom.name, value),
            _ => {}
        },
        2 if path[1].0 == "parent" && path[1].1 => {
            let parent = pom.parent.get_or_insert_with(Parent::default);
            match local {
                "groupId" => set_if_absent(&mut parent.group_id, value),
                "artifactId" => set_if_absent(&mut parent.artifact_id, value),
                "version" => set_if_absent(&mut parent.version, value),
                _ => {}
            }
        }
        _ => {}
    }
}

fn set_if_absent(slot: &mut Option<String>, value: &str) {
    if slot.is_none() {
        *slot = Some(value.to_string());
    }
}
