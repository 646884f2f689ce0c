//! Glob expansion engine
//!
//! This module turns the declared content list into a concrete manifest,
//! one resolved entry per file placed into the package. It handles:
//! - Classifying sources (literal file, directory, glob pattern)
//! - Expanding patterns and walking directories down to regular files
//! - Computing destinations below the declared destination root
//! - Rejecting destination collisions across the whole manifest
//!
//! Expansion keeps no state between calls and never mutates the input
//! slice, so concurrent calls are safe. Errors are all-or-nothing.

pub(crate) mod matcher;

mod collision;


use std::collections::BTreeSet;
use std::path::Path;

use serde::Serialize;

use crate::content::{ContentEntry, EntryKind, FileInfo};
use crate::error::{ContentError, Result};
use crate::path_utils::{join_destination, to_forward_slashes};

use collision::check_collisions;
use matcher::{DiskMatcher, Matcher, PathKind, has_glob_metachars, unescape};

/// A single file of the resolved package manifest
///
/// Produced by [`expand`]. The `source` names one literal file on disk
/// (or, for virtual kinds, the declared source verbatim) and the
/// `destination` is final.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedEntry {
    /// Literal path of the source file, forward-slash separated
    pub source: String,

    /// Final destination inside the package
    pub destination: String,

    /// Content type tag inherited from the declaring entry
    #[serde(rename = "type", skip_serializing_if = "EntryKind::is_file")]
    pub kind: EntryKind,

    /// Packager restriction inherited from the declaring entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packager: Option<String>,

    /// Declared metadata inherited from the declaring entry, verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_info: Option<FileInfo>,
}

/// The resolved contents of a package
pub type ResolvedContents = Vec<ResolvedEntry>;

impl ResolvedEntry {
    /// Build a resolved entry carrying the declaring entry's metadata
    fn inherit(entry: &ContentEntry, source: String, destination: String) -> Self {
        Self {
            source,
            destination,
            kind: entry.kind,
            packager: entry.packager.clone(),
            file_info: entry.file_info.clone(),
        }
    }

    /// Check if this entry applies when building for the given packager
    pub fn applies_to(&self, packager: &str) -> bool {
        self.packager.as_deref().is_none_or(|p| p == packager)
    }
}

/// Expand the declared contents into a concrete file manifest.
///
/// Each entry resolves in input order. A source with glob metacharacters
/// expands to every regular file it matches, with destinations joined
/// below the declared destination from the path relative to the pattern's
/// static prefix. A literal file maps to its destination exactly as
/// declared. A literal directory is walked recursively when
/// `literal_dirs` is set; otherwise a bare directory source contributes
/// nothing, since globbing packages regular files only. Virtual kinds
/// (`symlink`, `dir`, `ghost`) pass through without touching the
/// filesystem.
///
/// With `literal_dirs` set no source is treated as a pattern; every
/// source is looked up verbatim.
///
/// Output preserves entry order, lexicographic within each entry's
/// expansion. The input slice is never mutated and the call keeps no
/// state between invocations, so concurrent calls over the same slice are
/// fine.
///
/// # Errors
///
/// Fails on the first invalid entry, malformed pattern, source that
/// matches nothing, filesystem read error, or destination collision
/// anywhere in the expanded manifest. No partial result is returned.
pub fn expand(contents: &[ContentEntry], literal_dirs: bool) -> Result<ResolvedContents> {
    expand_with(&DiskMatcher, contents, literal_dirs)
}

pub(crate) fn expand_with(
    matcher: &dyn Matcher,
    contents: &[ContentEntry],
    literal_dirs: bool,
) -> Result<ResolvedContents> {
    let mut resolved = Vec::new();
    for entry in contents {
        entry.validate()?;
        if entry.kind.is_virtual() {
            // Symlink, dir and ghost entries declare package-side objects;
            // their sources never resolve against the filesystem.
            resolved.push(ResolvedEntry::inherit(
                entry,
                entry.source.clone(),
                entry.destination.clone(),
            ));
        } else if literal_dirs || !has_glob_metachars(&entry.source) {
            expand_literal(matcher, entry, literal_dirs, &mut resolved)?;
        } else {
            expand_pattern(matcher, entry, &mut resolved)?;
        }
    }
    check_collisions(&resolved)?;
    Ok(resolved)
}

/// Resolve a source that names a literal path
fn expand_literal(
    matcher: &dyn Matcher,
    entry: &ContentEntry,
    literal_dirs: bool,
    resolved: &mut Vec<ResolvedEntry>,
) -> Result<()> {
    // In glob mode a metacharacter-free source may still carry escapes;
    // in literal mode the source is taken verbatim.
    let source = if literal_dirs {
        entry.source.clone()
    } else {
        unescape(&entry.source)
    };
    let path = Path::new(&source);

    match matcher.path_kind(path)? {
        PathKind::File => {
            resolved.push(ResolvedEntry::inherit(
                entry,
                to_forward_slashes(path),
                entry.destination.clone(),
            ));
        }
        PathKind::Directory if literal_dirs => {
            for file in matcher.walk(path)? {
                let suffix = file.strip_prefix(path).unwrap_or(&file);
                let destination = join_destination(&entry.destination, suffix);
                resolved.push(ResolvedEntry::inherit(
                    entry,
                    to_forward_slashes(&file),
                    destination,
                ));
            }
        }
        // A bare directory source only expands in literal mode; other
        // special files are never packaged.
        PathKind::Directory | PathKind::Other => {}
        PathKind::Missing => {
            return Err(ContentError::NoMatchingFiles {
                pattern: entry.source.clone(),
            });
        }
    }
    Ok(())
}

/// Resolve a source that is a glob pattern
fn expand_pattern(
    matcher: &dyn Matcher,
    entry: &ContentEntry,
    resolved: &mut Vec<ResolvedEntry>,
) -> Result<()> {
    let matches = matcher.glob(&entry.source)?;
    if matches.paths.is_empty() {
        return Err(ContentError::NoMatchingFiles {
            pattern: entry.source.clone(),
        });
    }

    // Directory matches are walked to their regular-file leaves; the set
    // keeps the union deduplicated and in lexicographic order.
    let mut files = BTreeSet::new();
    for path in &matches.paths {
        match matcher.path_kind(path)? {
            PathKind::File => {
                files.insert(path.clone());
            }
            PathKind::Directory => {
                files.extend(matcher.walk(path)?);
            }
            // Special files are never packaged; a match that vanished
            // between enumeration and classification is skipped the same
            // way.
            PathKind::Other | PathKind::Missing => {}
        }
    }

    for file in &files {
        let suffix = file.strip_prefix(&matches.root).unwrap_or(file);
        let destination = join_destination(&entry.destination, suffix);
        resolved.push(ResolvedEntry::inherit(
            entry,
            to_forward_slashes(file),
            destination,
        ));
    }
    Ok(())
}
