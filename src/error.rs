//! Error types for manifest generation.
//!
//! Filesystem failures are classified by where they happen (the routes
//! directory or the manifest destination) so the CLI can name the failing
//! path instead of surfacing a bare OS error.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced while scanning routes or writing the manifest.
#[derive(Error, Debug)]
pub enum RoutegenError {
    /// The routes directory does not exist.
    #[error("routes directory not found: {}", path.display())]
    SourceMissing {
        /// Directory that was scanned.
        path: PathBuf,
    },

    /// The routes path exists but is not a directory.
    #[error("routes path is not a directory: {}", path.display())]
    NotADirectory {
        /// Path that was scanned.
        path: PathBuf,
    },

    /// The routes directory cannot be listed for lack of permission.
    #[error("permission denied reading routes directory: {}", path.display())]
    PermissionDenied {
        /// Directory that was scanned.
        path: PathBuf,
    },

    /// Any other read failure: listing the routes directory or reading a
    /// manifest back from disk.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The manifest could not be written.
    #[error("failed to write manifest {}: {source}", path.display())]
    Write {
        /// Manifest destination.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// JSON encoding of the manifest failed.
    #[error("failed to encode manifest: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The configuration file could not be loaded or failed validation.
    #[error("invalid configuration {}: {message}", path.display())]
    Config {
        /// Configuration file, or `<flags>` for command-line values.
        path: PathBuf,
        /// What was wrong with it.
        message: String,
    },

    /// The manifest on disk is missing or differs from the routes directory.
    #[error("manifest is out of date: {}", path.display())]
    Stale {
        /// Manifest destination.
        path: PathBuf,
    },
}

impl RoutegenError {
    /// Classify an I/O error raised while listing the routes directory.
    #[must_use]
    pub fn from_scan(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => Self::SourceMissing { path },
            io::ErrorKind::NotADirectory => Self::NotADirectory { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Read { path, source: err },
        }
    }

    /// Wrap an I/O error raised while writing the manifest.
    #[must_use]
    pub fn from_write(path: &Path, err: io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

/// Result alias used across the library.
pub type Result<T> = std::result::Result<T, RoutegenError>;
