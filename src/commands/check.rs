use crate::config::ManifestConfig;
use crate::error::RoutegenError;
use crate::manifest::Manifest;
use crate::output;
use anyhow::Result;

use super::route_count;

/// Verify the manifest on disk is what `generate` would write
///
/// Nothing is written either way.
///
/// # Errors
///
/// Returns an error if the routes directory cannot be scanned, or a
/// [`RoutegenError::Stale`] if the manifest is missing or out of date.
pub fn execute(config: &ManifestConfig) -> Result<()> {
    let manifest = Manifest::generate(config)?;

    if manifest.is_current(&config.output, config.ensure_ascii)? {
        output::confirm(&format!(
            "{} is up to date ({})",
            config.output.display(),
            route_count(manifest.len())
        ));
        return Ok(());
    }

    output::info("Run `routegen generate` to update it.");
    Err(RoutegenError::Stale {
        path: config.output.clone(),
    }
    .into())
}
