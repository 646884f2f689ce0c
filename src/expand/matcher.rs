//! Filesystem matching for content expansion
//!
//! Pattern compilation and directory walking sit behind the [`Matcher`]
//! trait so the expansion logic can be driven by an in-memory matcher in
//! tests. [`DiskMatcher`] is the production implementation, backed by wax
//! for globs and walkdir for recursive listing.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use wax::Glob;

use crate::error::{ContentError, Result};
use crate::path_utils::to_forward_slashes;

/// Characters that make a source a glob pattern instead of a literal path.
/// Mirrors the syntax wax accepts, including `<...>` repetitions.
const GLOB_METACHARS: &[char] = &['*', '?', '[', ']', '{', '}', '<', '>'];

/// Check whether a source contains unescaped glob metacharacters.
///
/// A backslash escapes a following metacharacter; a backslash before any
/// other character is a plain path character, so Windows separators pass
/// through untouched.
pub(crate) fn has_glob_metachars(source: &str) -> bool {
    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if chars.peek().is_some_and(|next| GLOB_METACHARS.contains(next)) {
                chars.next();
            }
        } else if GLOB_METACHARS.contains(&c) {
            return true;
        }
    }
    false
}

/// Remove backslash escapes in front of glob metacharacters.
///
/// Turns an escaped literal source like `file\*.txt` into the path it
/// names. Backslashes not followed by a metacharacter are kept.
pub(crate) fn unescape(source: &str) -> String {
    let mut result = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek().copied() {
                Some(next) if GLOB_METACHARS.contains(&next) => {
                    result.push(next);
                    chars.next();
                }
                _ => result.push(c),
            }
        } else {
            result.push(c);
        }
    }
    result
}

/// Classification of a path on the filesystem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PathKind {
    /// Regular file
    File,
    /// Directory
    Directory,
    /// Exists, but is neither a regular file nor a directory
    Other,
    /// Does not exist
    Missing,
}

/// Raw matches of a glob pattern
#[derive(Debug, Clone)]
pub(crate) struct GlobMatches {
    /// Static non-wildcard prefix of the pattern; destination suffixes are
    /// computed relative to this root
    pub root: PathBuf,

    /// Matched paths, sorted and deduplicated
    pub paths: Vec<PathBuf>,
}

/// Filesystem capabilities needed by expansion
pub(crate) trait Matcher {
    /// Enumerate everything a glob pattern matches
    fn glob(&self, pattern: &str) -> Result<GlobMatches>;

    /// Classify a single path, following symlinks
    fn path_kind(&self, path: &Path) -> Result<PathKind>;

    /// List the regular files beneath a directory, sorted
    fn walk(&self, dir: &Path) -> Result<Vec<PathBuf>>;
}

/// Matcher backed by the real filesystem
pub(crate) struct DiskMatcher;

impl Matcher for DiskMatcher {
    fn glob(&self, pattern: &str) -> Result<GlobMatches> {
        let glob = Glob::new(pattern).map_err(|e| ContentError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        let (root, glob) = glob.partition();

        // A relative pattern with no static prefix walks the working
        // directory; matched paths are normalized back to relative form.
        let walk_base = if root.as_os_str().is_empty() {
            Path::new(".")
        } else {
            root.as_path()
        };

        let mut paths = BTreeSet::new();
        if self.path_kind(walk_base)? != PathKind::Missing {
            for entry in glob.walk(walk_base) {
                let entry = entry.map_err(|e| ContentError::ReadFailed {
                    path: e
                        .path()
                        .map_or_else(|| pattern.to_string(), to_forward_slashes),
                    reason: e.to_string(),
                })?;
                let path = entry.path().strip_prefix(".").unwrap_or(entry.path());
                paths.insert(path.to_path_buf());
            }
        }

        Ok(GlobMatches {
            root,
            paths: paths.into_iter().collect(),
        })
    }

    fn path_kind(&self, path: &Path) -> Result<PathKind> {
        match fs::metadata(path) {
            Ok(meta) if meta.is_file() => Ok(PathKind::File),
            Ok(meta) if meta.is_dir() => Ok(PathKind::Directory),
            Ok(_) => Ok(PathKind::Other),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(PathKind::Missing),
            Err(e) => Err(ContentError::ReadFailed {
                path: to_forward_slashes(path),
                reason: e.to_string(),
            }),
        }
    }

    fn walk(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = BTreeSet::new();
        for entry in WalkDir::new(dir).follow_links(true) {
            let entry = entry.map_err(|e| ContentError::ReadFailed {
                path: e
                    .path()
                    .map_or_else(|| to_forward_slashes(dir), to_forward_slashes),
                reason: e.to_string(),
            })?;
            if entry.file_type().is_file() {
                files.insert(entry.into_path());
            }
        }
        Ok(files.into_iter().collect())
    }
}
