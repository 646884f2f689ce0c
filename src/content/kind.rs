//! Content type tags
//!
//! The `type` field of a content entry, parsed once at decode time. The
//! pipe-delimited `config|noreplace` form is the only tag with a modifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ContentError;

/// Content type tag of an entry
///
/// Defaults to a regular file. The `symlink`, `dir` and `ghost` kinds are
/// declarations only: expansion copies them through without touching the
/// filesystem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file
    #[default]
    File,

    /// Configuration file
    Config {
        /// Keep the installed copy on upgrade (rpm noreplace semantics)
        noreplace: bool,
    },

    /// Symbolic link; the entry source is the link target
    Symlink,

    /// Directory created inside the package
    Dir,

    /// File owned by the package but not shipped in it (rpm ghost)
    Ghost,
}

impl EntryKind {
    /// Check if this is the default regular-file kind
    pub fn is_file(&self) -> bool {
        matches!(self, EntryKind::File)
    }

    /// Check if this kind declares a package-side object that never
    /// resolves against the filesystem
    pub fn is_virtual(&self) -> bool {
        matches!(self, EntryKind::Symlink | EntryKind::Dir | EntryKind::Ghost)
    }
}

impl FromStr for EntryKind {
    type Err = ContentError;

    fn from_str(tag: &str) -> std::result::Result<Self, Self::Err> {
        match tag {
            "" | "file" => Ok(EntryKind::File),
            "config" => Ok(EntryKind::Config { noreplace: false }),
            "config|noreplace" => Ok(EntryKind::Config { noreplace: true }),
            "symlink" => Ok(EntryKind::Symlink),
            "dir" => Ok(EntryKind::Dir),
            "ghost" => Ok(EntryKind::Ghost),
            _ => Err(ContentError::InvalidType {
                tag: tag.to_string(),
            }),
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            EntryKind::File => "file",
            EntryKind::Config { noreplace: false } => "config",
            EntryKind::Config { noreplace: true } => "config|noreplace",
            EntryKind::Symlink => "symlink",
            EntryKind::Dir => "dir",
            EntryKind::Ghost => "ghost",
        };
        f.write_str(tag)
    }
}

impl Serialize for EntryKind {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for EntryKind {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(serde::de::Error::custom)
    }
}
