use super::validator::ConfigValidator;
use super::{Config, ManifestConfig};
use crate::error::{Result, RoutegenError};
use crate::scanner::validate_pattern;
use std::path::Path;

/// Read and parse a config file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or validated.
pub fn parse_config_file(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| RoutegenError::Config {
        path: path.to_path_buf(),
        message: format!("failed to read: {e}"),
    })?;
    parse_config_str(&content, path)
}

/// Parse config file contents; `path` is only used in messages.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or a value fails validation.
pub fn parse_config_str(content: &str, path: &Path) -> Result<Config> {
    let config_error = |message: String| RoutegenError::Config {
        path: path.to_path_buf(),
        message,
    };

    let raw: toml::Table = toml::from_str(content).map_err(|e| config_error(e.to_string()))?;
    ConfigValidator::new().warn_unknown_fields(&raw, path);

    let mut config: Config = toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    config.manifest.validate(path)?;
    Ok(config)
}

/// Checks a manifest section, returning a message describing the first problem.
pub(crate) fn validate_manifest(config: &ManifestConfig) -> std::result::Result<(), String> {
    if config.routes_dir.as_os_str().is_empty() {
        return Err("routes_dir must not be empty".to_string());
    }

    if config.output.as_os_str().is_empty() {
        return Err("output must not be empty".to_string());
    }

    let ext = &config.extension;
    if ext.is_empty() {
        return Err("extension must not be empty".to_string());
    }
    if ext.contains(['.', '/', '\\']) {
        return Err(format!(
            "extension must be a bare suffix like \"gpx\", got \"{ext}\""
        ));
    }

    for pattern in &config.ignore_patterns {
        validate_pattern(pattern)?;
    }

    Ok(())
}
