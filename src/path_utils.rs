//! Cross-platform path utilities for pkgfiles
//!
//! This module provides utilities for handling paths across different platforms
//! (Windows, macOS, Linux) with consistent behavior. Package destinations are
//! always forward-slash separated, whatever the host separator is.

use std::path::Path;

/// Convert a path to a forward-slash separated string.
///
/// # Arguments
///
/// * `path` - The path to convert
///
/// # Returns
///
/// On Windows, the path with the native `\` separator replaced by `/`;
/// elsewhere the path unchanged, so a filename that happens to contain a
/// backslash is preserved
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use pkgfiles::path_utils::to_forward_slashes;
///
/// assert_eq!(to_forward_slashes(Path::new("usr/share/app")), "usr/share/app");
/// ```
pub fn to_forward_slashes(path: &Path) -> String {
    let path = path.to_string_lossy();
    if cfg!(windows) {
        path.replace('\\', "/")
    } else {
        path.into_owned()
    }
}

/// Join a declared destination with the suffix an expansion produced.
///
/// The suffix is converted with [`to_forward_slashes`] first. A trailing
/// `/` on the destination does not produce a doubled separator, and an
/// empty suffix leaves the destination unchanged.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use pkgfiles::path_utils::join_destination;
///
/// assert_eq!(join_destination("/bla", Path::new("nested/b.txt")), "/bla/nested/b.txt");
/// assert_eq!(join_destination("/bla/", Path::new("a.txt")), "/bla/a.txt");
/// ```
pub fn join_destination(destination: &str, suffix: &Path) -> String {
    let suffix = to_forward_slashes(suffix);
    if suffix.is_empty() {
        return destination.to_string();
    }
    if destination.ends_with('/') {
        format!("{destination}{suffix}")
    } else {
        format!("{destination}/{suffix}")
    }
}
