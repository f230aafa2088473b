//! Command implementations for the routegen CLI.
//!
//! Every manifest command resolves its configuration the same way through
//! [`resolve_config`], then hands off to the library.

/// `routegen check`
pub mod check;
/// `routegen completion`
pub mod completion;
/// `routegen generate` (the default command)
pub mod generate;
/// `routegen list`
pub mod list;

use crate::cli::ManifestArgs;
use crate::config::{Config, ManifestConfig};
use anyhow::{Context, Result};
use std::path::Path;

/// Origin reported for invalid values coming from flags or the environment.
const FLAGS_ORIGIN: &str = "<command line>";

/// Resolve the configuration for one run.
///
/// Precedence, lowest first: defaults, config file, environment, flags.
///
/// # Errors
///
/// Returns an error if the config file cannot be loaded or the resolved
/// values fail validation.
pub fn resolve_config(config_path: Option<&Path>, args: &ManifestArgs) -> Result<ManifestConfig> {
    let mut config = Config::discover(config_path)
        .context("Failed to load configuration")?
        .manifest;
    config.apply_env();
    args.apply(&mut config);
    config.validate(Path::new(FLAGS_ORIGIN))?;
    Ok(config)
}

/// Format a route count for console messages.
#[must_use]
pub fn route_count(count: usize) -> String {
    if count == 1 {
        "1 route".to_string()
    } else {
        format!("{count} routes")
    }
}
