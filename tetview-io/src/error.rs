//! Error types for mesh loading.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for mesh loading operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while loading a mesh file.
///
/// Malformed content is reported with the section being read and, where
/// it applies, the offset of the offending item, so a viewer can name
/// the failure instead of showing garbage geometry.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The token stream ended before the declared counts were satisfied.
    #[error("unexpected end of file in the {section} section")]
    UnexpectedEof {
        /// Section being read when the stream ran out.
        section: &'static str,
    },

    /// A token could not be parsed as the expected number.
    #[error("invalid token {token:?} in the {section} section")]
    InvalidToken {
        /// Section being read.
        section: &'static str,
        /// The offending token.
        token: String,
    },

    /// A vertex index falls outside the declared point set.
    ///
    /// Indices are 1-based in the file, so both `0` and anything above
    /// the point count are out of range.
    #[error(
        "point index {index} out of range in {section} item {item} (mesh has {point_count} points)"
    )]
    IndexOutOfRange {
        /// Section being read.
        section: &'static str,
        /// Zero-based offset of the element within its section.
        item: usize,
        /// The 1-based index as declared in the file.
        index: usize,
        /// Number of points the file declared.
        point_count: usize,
    },
}
