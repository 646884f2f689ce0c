//! Error types and handling for pkgfiles
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Every fallible operation in the crate returns [`ContentError`] through the
//! [`Result`] alias. Expansion is all-or-nothing: the first error aborts the
//! call and no partial manifest is returned.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for content resolution
#[derive(Error, Diagnostic, Debug)]
pub enum ContentError {
    // Content model errors
    #[error("Invalid content type: {tag}")]
    #[diagnostic(
        code(pkgfiles::content::invalid_type),
        help("Valid types: file, config, config|noreplace, symlink, dir, ghost")
    )]
    InvalidType { tag: String },

    #[error("Content {field} must not be empty")]
    #[diagnostic(
        code(pkgfiles::content::empty_field),
        help("Every content entry needs both a src and a dst")
    )]
    EmptyField { field: &'static str },

    // Expansion errors
    #[error("Invalid glob pattern '{pattern}': {reason}")]
    #[diagnostic(
        code(pkgfiles::expand::invalid_pattern),
        help("Backslash-escape glob characters to match them literally")
    )]
    InvalidPattern { pattern: String, reason: String },

    #[error("No files match '{pattern}'")]
    #[diagnostic(
        code(pkgfiles::expand::no_matching_files),
        help("Check that the path exists and the pattern is correct")
    )]
    NoMatchingFiles { pattern: String },

    #[error("Failed to read {path}: {reason}")]
    #[diagnostic(code(pkgfiles::expand::read_failed))]
    ReadFailed { path: String, reason: String },

    #[error(
        "Content collision: '{new_source}' and '{existing_source}' both resolve to {destination}"
    )]
    #[diagnostic(
        code(pkgfiles::expand::collision),
        help("Every content entry must expand to a unique destination path")
    )]
    DestinationCollision {
        destination: String,
        existing_source: String,
        new_source: String,
    },
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ContentError>;
