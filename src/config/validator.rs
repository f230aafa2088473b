use std::collections::HashSet;
use std::path::Path;
use tracing::warn;

/// Recognized configuration keys, used to flag typos in config files
pub struct ConfigValidator {
    /// Dotted keys (`section.key`) that routegen understands
    known_fields: HashSet<&'static str>,
}

impl ConfigValidator {
    /// Create a new validator with known configuration fields
    #[must_use]
    pub fn new() -> Self {
        let known_fields = HashSet::from([
            "manifest",
            "manifest.routes_dir",
            "manifest.output",
            "manifest.extension",
            "manifest.sort",
            "manifest.ensure_ascii",
            "manifest.ignore_patterns",
        ]);

        Self { known_fields }
    }

    /// Collect dotted keys not recognized by routegen
    #[must_use]
    pub fn unknown_fields(&self, table: &toml::Table) -> Vec<String> {
        let mut unknown = Vec::new();
        self.check_table(table, "", &mut unknown);
        unknown.sort();
        unknown
    }

    /// Log a warning for every unknown key; unknown keys never fail a load
    pub fn warn_unknown_fields(&self, table: &toml::Table, config_path: &Path) {
        for field in self.unknown_fields(table) {
            warn!(
                "Unknown configuration field '{field}' in {}",
                config_path.display()
            );
        }
    }

    fn check_table(&self, table: &toml::Table, prefix: &str, unknown: &mut Vec<String>) {
        for (key, value) in table {
            let full_key = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };

            if !self.known_fields.contains(full_key.as_str()) {
                unknown.push(full_key);
                continue;
            }

            if let toml::Value::Table(nested) = value {
                self.check_table(nested, &full_key, unknown);
            }
        }
    }
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}
