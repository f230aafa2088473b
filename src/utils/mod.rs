//! Utility functions and helpers.
//!
//! - [`logging`]: tracing subscriber setup
//! - [`paths`]: URL-style path rendering for manifest entries

/// Tracing subscriber initialization
pub mod logging;
/// Path manipulation for manifest entries
pub mod paths;

pub use paths::{join_url, parent_or_current, resolve_symlinks, to_url_path};
