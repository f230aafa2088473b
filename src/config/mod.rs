//! Configuration for manifest generation.
//!
//! Values are layered, lowest precedence first:
//!
//! 1. Built-in defaults (`routes` → `routes.json`, `.gpx`, listing order)
//! 2. A TOML file: `--config <path>`, or `routegen.toml` in the invocation
//!    directory when present
//! 3. Environment: `ROUTEGEN_ROUTES_DIR`, `ROUTEGEN_OUTPUT`
//! 4. Command-line flags
//!
//! ```toml
//! [manifest]
//! routes_dir = "routes"
//! output = "routes.json"
//! extension = "gpx"
//! sort = false
//! ensure_ascii = true
//! ignore_patterns = ["wip_*"]
//! ```

/// TOML parsing and value validation.
pub mod parser;
/// Unknown-key detection for config files.
pub mod validator;

use crate::error::{Result, RoutegenError};
use crate::{DEFAULT_CONFIG_FILE, DEFAULT_EXTENSION, DEFAULT_OUTPUT_FILE, DEFAULT_ROUTES_DIR};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable overriding the routes directory.
pub const ENV_ROUTES_DIR: &str = "ROUTEGEN_ROUTES_DIR";

/// Environment variable overriding the manifest destination.
pub const ENV_OUTPUT: &str = "ROUTEGEN_OUTPUT";

/// Contents of a `routegen.toml` file.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// `[manifest]` table
    #[serde(default)]
    pub manifest: ManifestConfig,
}

/// Resolved settings for one manifest run.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ManifestConfig {
    /// Directory scanned for route files
    #[serde(default = "default_routes_dir")]
    pub routes_dir: PathBuf,
    /// Manifest destination
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Route file extension, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Sort entries by file name instead of keeping listing order
    #[serde(default)]
    pub sort: bool,
    /// Escape non-ASCII characters in the manifest
    #[serde(default = "default_ensure_ascii")]
    pub ensure_ascii: bool,
    /// File-name patterns left out of the manifest
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            routes_dir: default_routes_dir(),
            output: default_output(),
            extension: default_extension(),
            sort: false,
            ensure_ascii: default_ensure_ascii(),
            ignore_patterns: Vec::new(),
        }
    }
}

impl ManifestConfig {
    /// Apply `ROUTEGEN_*` environment overrides.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_ROUTES_DIR).filter(|v| !v.is_empty()) {
            self.routes_dir = PathBuf::from(dir);
        }
        if let Some(output) = lookup(ENV_OUTPUT).filter(|v| !v.is_empty()) {
            self.output = PathBuf::from(output);
        }
    }

    /// Normalize and validate the settings.
    ///
    /// A leading dot on the extension is accepted and dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if a value is unusable (empty paths, an extension
    /// containing dots or separators).
    pub fn validate(&mut self, origin: &Path) -> Result<()> {
        if let Some(stripped) = self.extension.strip_prefix('.') {
            self.extension = stripped.to_string();
        }
        parser::validate_manifest(self).map_err(|message| RoutegenError::Config {
            path: origin.to_path_buf(),
            message,
        })
    }
}

impl Config {
    /// Load configuration from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The file contains invalid TOML
    /// - A value fails validation
    pub fn load(path: &Path) -> Result<Self> {
        parser::parse_config_file(path)
    }

    /// Find and load the configuration for this invocation.
    ///
    /// An explicit path must exist. Without one, `routegen.toml` in the
    /// current directory is used when present, defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen file cannot be loaded.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(RoutegenError::Config {
                    path: path.to_path_buf(),
                    message: "file not found".to_string(),
                });
            }
            return Self::load(path);
        }

        let implicit = Path::new(DEFAULT_CONFIG_FILE);
        if implicit.is_file() {
            tracing::debug!("Using configuration from {}", implicit.display());
            return Self::load(implicit);
        }

        Ok(Self::default())
    }
}

// Default functions for serde
fn default_routes_dir() -> PathBuf {
    PathBuf::from(DEFAULT_ROUTES_DIR)
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

const fn default_ensure_ascii() -> bool {
    true
}
