//! pkgfiles - content manifest resolution for package builders
//!
//! Resolves the declarative `contents` list of a packaging manifest (deb,
//! rpm, apk and friends) into the concrete set of files to place in the
//! archive: glob patterns expand to the regular files they match,
//! directories walk recursively, literal files map one to one, and the
//! whole resolved manifest is checked for destination collisions.
//!
//! Expansion only reads the filesystem. Copying files, writing archives
//! and applying metadata defaults belong to the package builder consuming
//! the resolved manifest.
//!
//! # Example
//!
//! ```no_run
//! use pkgfiles::{ContentEntry, expand};
//!
//! # fn main() -> pkgfiles::Result<()> {
//! let contents = vec![
//!     ContentEntry::new("config/*.conf", "/etc/app"),
//!     ContentEntry::new("target/release/app", "/usr/bin/app"),
//! ];
//!
//! for file in expand(&contents, false)? {
//!     println!("{} -> {}", file.source, file.destination);
//! }
//! # Ok(())
//! # }
//! ```

pub mod content;
pub mod error;
pub mod expand;
pub mod path_utils;

pub use content::{ContentEntry, Contents, EntryKind, FileInfo};
pub use error::{ContentError, Result};
pub use expand::{ResolvedContents, ResolvedEntry, expand};
