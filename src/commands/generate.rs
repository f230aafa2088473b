use crate::config::ManifestConfig;
use crate::manifest::Manifest;
use crate::output;
use anyhow::{Context, Result};

use super::route_count;

/// Scan the routes directory and write the manifest
///
/// With `dry_run` the document is printed to stdout and nothing is written.
/// A missing routes directory fails before the destination is touched.
///
/// # Errors
///
/// Returns an error if:
/// - The routes directory is missing, not a directory, or unreadable
/// - The manifest cannot be written
pub fn execute(config: &ManifestConfig, dry_run: bool) -> Result<Manifest> {
    let manifest = Manifest::generate(config)?;

    if dry_run {
        println!("{}", manifest.to_json(config.ensure_ascii)?);
        return Ok(manifest);
    }

    manifest
        .save(&config.output, config.ensure_ascii)
        .with_context(|| format!("Failed to update {}", config.output.display()))?;

    output::confirm(&format!(
        "{} updated successfully ({})",
        config.output.display(),
        route_count(manifest.len())
    ));

    Ok(manifest)
}
