use crate::config::ManifestConfig;
use crate::manifest::Manifest;
use crate::output;
use anyhow::Result;

/// Print the routes that `generate` would write, one `name<TAB>file` per line
///
/// # Errors
///
/// Returns an error if the routes directory cannot be scanned.
pub fn execute(config: &ManifestConfig) -> Result<Manifest> {
    let manifest = Manifest::generate(config)?;

    if manifest.is_empty() {
        output::info(&format!(
            "No .{} files in {}",
            config.extension,
            config.routes_dir.display()
        ));
    }

    for entry in &manifest {
        println!("{}\t{}", entry.name, entry.file);
    }

    Ok(manifest)
}
