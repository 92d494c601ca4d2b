use std::path::PathBuf;

use thiserror::Error;

/// The primary error type for icon generation.
///
/// Every variant aborts the run. Per-file PNG failures are not part of this
/// enum: they are reported as [`SaveError`] and the renderer moves past them.
#[derive(Debug, Error)]
pub enum GenError {
    /// The source path does not resolve to a readable file.
    #[error("source image not found or unreadable: {}", .path.display())]
    MissingSource {
        /// The configured source path.
        path: PathBuf,
        /// Why the file could not be read, if an I/O call failed.
        #[source]
        source: Option<std::io::Error>,
    },
    /// The source file was read but is not a decodable image.
    #[error("failed to decode source image {}: {source}", .path.display())]
    Decode {
        /// The configured source path.
        path: PathBuf,
        /// The decoder's error.
        #[source]
        source: image::ImageError,
    },
    /// For I/O failures outside of PNG saving (descriptor files).
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// The file or directory being written.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// A failed PNG write for one output file.
#[derive(Debug, Error)]
#[error("failed to save {}: {source}", .path.display())]
pub struct SaveError {
    /// The file that could not be written.
    pub path: PathBuf,
    /// Directory creation, file creation or encoder failure.
    #[source]
    pub source: image::ImageError,
}

/// A type alias for `Result<T, GenError>`, used throughout the crate.
pub type GenResult<T> = Result<T, GenError>;
