#![warn(missing_docs)]

//! # routegen - Route Manifest Generator
//!
//! routegen scans a directory of GPX route files and regenerates the
//! `routes.json` manifest a web route navigator reads to populate its
//! route picker. Each manifest entry pairs a display name derived from the
//! file name with the file's relative URL path.
//!
//! ## Architecture
//!
//! - [`scanner`]: Single-level directory listing and extension filtering
//! - [`manifest`]: Manifest data model, display names, and JSON encoding
//! - [`config`]: Layered configuration (defaults, TOML file, environment, flags)
//! - [`error`]: Error taxonomy for scan and write failures
//! - [`commands`]: Command implementations (generate, check, list, completion)
//! - [`output`]: Console output and verbosity
//! - [`utils`]: Logging setup and path helpers
//!
//! ## Example Usage
//!
//! ```no_run
//! use routegen::config::ManifestConfig;
//! use routegen::manifest::Manifest;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = ManifestConfig::default();
//!
//! // Scans ./routes for *.gpx files
//! let manifest = Manifest::generate(&config)?;
//!
//! // Overwrites ./routes.json
//! manifest.save(&config.output, config.ensure_ascii)?;
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions (argument parsing structures).
pub mod cli;

/// Commands module containing all CLI command implementations.
pub mod commands;

/// Configuration parsing, validation, and layering.
pub mod config;

/// Error types for scanning and writing.
pub mod error;

/// Route manifest model and persistence.
pub mod manifest;

/// Output formatting and verbosity control.
pub mod output;

/// Route file discovery.
pub mod scanner;

/// Utility functions and helpers.
pub mod utils;

pub use error::{Result, RoutegenError};
pub use manifest::{Manifest, RouteEntry};

/// Current version of the routegen binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default directory scanned for route files, relative to the invocation directory.
pub const DEFAULT_ROUTES_DIR: &str = "routes";

/// Default manifest file name, relative to the invocation directory.
pub const DEFAULT_OUTPUT_FILE: &str = "routes.json";

/// Default route file extension (matched case-sensitively).
pub const DEFAULT_EXTENSION: &str = "gpx";

/// Configuration file picked up from the invocation directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "routegen.toml";
