//! The route manifest: what gets written to `routes.json`.
//!
//! A manifest is rebuilt from scratch on every run. Each route file found
//! in the routes directory becomes one [`RouteEntry`] holding a display
//! name and the file's URL path relative to the site root, and the whole
//! list is written as a bare JSON array:
//!
//! ```json
//! [
//!   {
//!     "name": "Morning Ride",
//!     "file": "routes/morning_ride.gpx"
//!   }
//! ]
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use routegen::config::ManifestConfig;
//! use routegen::manifest::Manifest;
//!
//! # fn main() -> routegen::error::Result<()> {
//! let config = ManifestConfig::default();
//! let manifest = Manifest::generate(&config)?;
//! manifest.save(&config.output, config.ensure_ascii)?;
//! # Ok(())
//! # }
//! ```

/// Pretty JSON encoding with optional ASCII escaping.
pub mod json;
/// Display-name derivation.
pub mod naming;

use crate::config::ManifestConfig;
use crate::error::{Result, RoutegenError};
use crate::scanner::RouteScanner;
use crate::utils::{join_url, parent_or_current, resolve_symlinks, to_url_path};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info};

pub use naming::display_name;

/// One route in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Human-readable label, e.g. `Morning Ride`
    pub name: String,
    /// URL path of the route file, e.g. `routes/morning_ride.gpx`
    pub file: String,
}

impl RouteEntry {
    /// Build the entry for `file_name` found in the directory `dir_url`.
    #[must_use]
    pub fn new(dir_url: &str, file_name: &str, extension: &str) -> Self {
        Self {
            name: display_name(file_name, extension),
            file: join_url(dir_url, file_name),
        }
    }

    /// File name part of [`RouteEntry::file`].
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.file.rsplit('/').next().unwrap_or(&self.file)
    }
}

/// Ordered list of route entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: Vec<RouteEntry>,
}

impl Manifest {
    /// Create an empty manifest
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a manifest from file names listed in `routes_dir`, keeping their order.
    #[must_use]
    pub fn from_file_names<I, S>(routes_dir: &Path, file_names: I, extension: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dir_url = to_url_path(routes_dir);
        let entries = file_names
            .into_iter()
            .map(|name| RouteEntry::new(&dir_url, name.as_ref(), extension))
            .collect();
        Self { entries }
    }

    /// Scan the configured routes directory and build its manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if the routes directory is missing, not a
    /// directory, or unreadable.
    pub fn generate(config: &ManifestConfig) -> Result<Self> {
        let scanner = RouteScanner::new(
            &config.routes_dir,
            &config.extension,
            config.ignore_patterns.clone(),
        );
        let file_names = scanner.scan()?;

        let mut manifest =
            Self::from_file_names(&config.routes_dir, file_names, &config.extension);
        if config.sort {
            manifest.sort_by_file();
        }

        info!(
            "Found {} route(s) in {}",
            manifest.len(),
            config.routes_dir.display()
        );
        Ok(manifest)
    }

    /// Sort entries by file path (byte order).
    pub fn sort_by_file(&mut self) {
        self.entries.sort_by(|a, b| a.file.cmp(&b.file));
    }

    /// Entries in manifest order
    #[must_use]
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Number of routes
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the manifest lists no routes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Encode the manifest as the bytes written to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON encoding fails.
    pub fn to_json_bytes(&self, ensure_ascii: bool) -> Result<Vec<u8>> {
        Ok(json::to_vec_pretty(self, ensure_ascii)?)
    }

    /// Encode the manifest as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON encoding fails.
    pub fn to_json(&self, ensure_ascii: bool) -> Result<String> {
        let bytes = self.to_json_bytes(ensure_ascii)?;
        String::from_utf8(bytes)
            .map_err(|e| serde_json::Error::io(io::Error::new(io::ErrorKind::InvalidData, e)))
            .map_err(Into::into)
    }

    /// Write the manifest to `path`, replacing any previous content.
    ///
    /// The document goes to a temporary file next to the destination that
    /// is then renamed into place, so a failed write never leaves a
    /// truncated manifest behind. A symlinked destination is written
    /// through, and an existing file keeps its permissions.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `path` exists and is read-only
    /// - The destination directory is not writable
    /// - JSON encoding fails
    pub fn save(&self, path: &Path, ensure_ascii: bool) -> Result<()> {
        let bytes = self.to_json_bytes(ensure_ascii)?;

        let target = resolve_symlinks(path).map_err(|e| RoutegenError::from_write(path, e))?;
        let existing = std::fs::metadata(&target).ok();
        if let Some(metadata) = &existing {
            if metadata.is_dir() {
                return Err(RoutegenError::from_write(
                    path,
                    io::Error::new(io::ErrorKind::IsADirectory, "destination is a directory"),
                ));
            }
            if metadata.permissions().readonly() {
                return Err(RoutegenError::from_write(
                    path,
                    io::Error::from(io::ErrorKind::PermissionDenied),
                ));
            }
        }

        let dir = parent_or_current(&target);
        let mut builder = tempfile::Builder::new();
        builder.prefix(".routegen-").suffix(".tmp");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(0o644));
        }

        let mut tmp = builder
            .tempfile_in(dir)
            .map_err(|e| RoutegenError::from_write(path, e))?;
        if let Some(metadata) = existing {
            tmp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(|e| RoutegenError::from_write(path, e))?;
        }
        tmp.write_all(&bytes)
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| RoutegenError::from_write(path, e))?;
        tmp.persist(&target)
            .map_err(|e| RoutegenError::from_write(path, e.error))?;

        debug!("Wrote {} bytes to {}", bytes.len(), target.display());
        Ok(())
    }

    /// Load a manifest previously written to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a manifest.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path).map_err(|e| RoutegenError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(serde_json::from_slice(&data)?)
    }

    /// Check whether the document at `path` is exactly what [`Manifest::save`] would write.
    ///
    /// A missing file counts as out of date.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or encoding fails.
    pub fn is_current(&self, path: &Path, ensure_ascii: bool) -> Result<bool> {
        let on_disk = match std::fs::read(path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(e) => {
                return Err(RoutegenError::Read {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };
        Ok(on_disk == self.to_json_bytes(ensure_ascii)?)
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a RouteEntry;
    type IntoIter = std::slice::Iter<'a, RouteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
