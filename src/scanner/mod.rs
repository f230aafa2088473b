//! Route file discovery.
//!
//! The scanner lists a single directory level and keeps the entries whose
//! names end in `.<extension>`. The suffix match is case-sensitive, so
//! `ride.GPX` is not a route. Entries come back in directory-listing order;
//! sorting is the caller's decision.

/// File-name ignore patterns.
pub mod ignore;

pub use ignore::{should_ignore, validate_pattern};

use crate::error::{Result, RoutegenError};
use std::io;
use std::path::PathBuf;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Scanner for the route files of one directory.
#[derive(Debug, Clone)]
pub struct RouteScanner {
    /// Directory to list
    root: PathBuf,
    /// Suffix a file name must end with, including the dot
    suffix: String,
    /// Patterns excluding otherwise matching files
    ignore_patterns: Vec<String>,
}

impl RouteScanner {
    /// Create a scanner for `root` matching `.<extension>` files.
    ///
    /// # Arguments
    ///
    /// * `root` - Directory to scan (not descended into)
    /// * `extension` - Extension without the leading dot, e.g. `gpx`
    /// * `ignore_patterns` - File-name patterns to exclude
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, extension: &str, ignore_patterns: Vec<String>) -> Self {
        Self {
            root: root.into(),
            suffix: format!(".{extension}"),
            ignore_patterns,
        }
    }

    /// Whether a file name carries the route suffix.
    #[must_use]
    pub fn matches(&self, file_name: &str) -> bool {
        file_name.ends_with(&self.suffix)
    }

    /// List the route file names in directory order.
    ///
    /// Directories are skipped even when their name ends in the suffix,
    /// and so are names that are not valid UTF-8.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The directory does not exist
    /// - The path is not a directory
    /// - The directory cannot be read
    pub fn scan(&self) -> Result<Vec<String>> {
        let metadata =
            std::fs::metadata(&self.root).map_err(|e| RoutegenError::from_scan(&self.root, e))?;
        if !metadata.is_dir() {
            return Err(RoutegenError::NotADirectory {
                path: self.root.clone(),
            });
        }

        let mut names = Vec::new();

        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
        {
            let entry =
                entry.map_err(|e| RoutegenError::from_scan(&self.root, io::Error::from(e)))?;

            let Some(file_name) = entry.file_name().to_str() else {
                warn!(
                    "Skipping entry with non UTF-8 name: {}",
                    entry.path().display()
                );
                continue;
            };

            if !self.matches(file_name) {
                continue;
            }

            // A symlink to a directory counts as a directory here
            if entry.file_type().is_dir() || entry.path().is_dir() {
                debug!("Skipping directory {file_name}");
                continue;
            }

            if should_ignore(file_name, &self.ignore_patterns) {
                debug!("Ignoring {file_name}");
                continue;
            }

            debug!("Found route {file_name}");
            names.push(file_name.to_owned());
        }

        Ok(names)
    }
}
