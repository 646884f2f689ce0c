//! Serialization implementations for ContentEntry
//!
//! Decoding is strict: unknown fields are rejected, `src` and `dst` are
//! required and must be non-empty. An empty `packager` tag is normalized to
//! "applies to all packagers".

use serde::Deserialize;

use super::{ContentEntry, EntryKind, FileInfo};
use crate::error::ContentError;

/// Wire shape of a content entry, validated into [`ContentEntry`]
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct RawContentEntry {
    src: String,
    dst: String,
    #[serde(rename = "type", default)]
    kind: EntryKind,
    #[serde(default)]
    packager: Option<String>,
    #[serde(default)]
    file_info: Option<FileInfo>,
}

impl TryFrom<RawContentEntry> for ContentEntry {
    type Error = ContentError;

    fn try_from(raw: RawContentEntry) -> std::result::Result<Self, Self::Error> {
        let entry = ContentEntry {
            source: raw.src,
            destination: raw.dst,
            kind: raw.kind,
            packager: raw.packager.filter(|p| !p.is_empty()),
            file_info: raw.file_info,
        };
        entry.validate()?;
        Ok(entry)
    }
}
