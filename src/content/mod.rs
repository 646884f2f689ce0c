//! Content entry model
//!
//! This module handles the declarative content list of a packaging
//! manifest: one entry per source (literal path, directory, or glob
//! pattern) with its destination inside the package and optional metadata.

pub mod kind;
pub mod serialization;

#[cfg(test)]
mod tests;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ContentError, Result};

// Re-export commonly used types
pub use kind::EntryKind;

/// Contents of a package as declared in its manifest
pub type Contents = Vec<ContentEntry>;

/// A content declaration from a packaging manifest
///
/// The `source` is interpreted during expansion: a literal file, a
/// directory, or a glob pattern, depending on its shape and the expansion
/// mode. Virtual kinds (`symlink`, `dir`, `ghost`) are never resolved
/// against the filesystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "serialization::RawContentEntry")]
pub struct ContentEntry {
    /// Source path, directory, or glob pattern
    #[serde(rename = "src")]
    pub source: String,

    /// Destination path inside the package
    #[serde(rename = "dst")]
    pub destination: String,

    /// Content type tag
    #[serde(rename = "type", skip_serializing_if = "EntryKind::is_file")]
    pub kind: EntryKind,

    /// Packager this entry is restricted to; `None` applies to all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packager: Option<String>,

    /// Declared file metadata, carried through expansion verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_info: Option<FileInfo>,
}

impl ContentEntry {
    /// Create a new regular-file content entry
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            kind: EntryKind::File,
            packager: None,
            file_info: None,
        }
    }

    /// Create a new content entry with an explicit kind
    pub fn with_kind(
        source: impl Into<String>,
        destination: impl Into<String>,
        kind: EntryKind,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            kind,
            packager: None,
            file_info: None,
        }
    }

    /// Validate content entry
    ///
    /// Decoded entries are already validated; this re-checks directly
    /// constructed values at the expansion boundary.
    pub fn validate(&self) -> Result<()> {
        if self.source.is_empty() {
            return Err(ContentError::EmptyField { field: "src" });
        }
        if self.destination.is_empty() {
            return Err(ContentError::EmptyField { field: "dst" });
        }
        Ok(())
    }

    /// Check if this entry applies when building for the given packager
    pub fn applies_to(&self, packager: &str) -> bool {
        self.packager.as_deref().is_none_or(|p| p == packager)
    }
}

/// Declared file metadata
///
/// Every field is independently optional. An absent field means the
/// packager applies its own default at archive-build time; expansion never
/// fills these from the filesystem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileInfo {
    /// Permission bits, e.g. `0o644`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<u32>,

    /// Modification time recorded in the package
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtime: Option<DateTime<Utc>>,

    /// Owning user name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    /// Owning group name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}
