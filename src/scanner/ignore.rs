use glob::Pattern;

/// Determines if a file name matches any ignore pattern.
///
/// Patterns are shell globs over the bare file name: `wip_*`, `*.bak.gpx`,
/// `*test*`, `draft?.gpx`. A pattern that is not a valid glob only matches
/// a file with exactly that name.
#[must_use]
pub fn should_ignore(file_name: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|pattern| {
        Pattern::new(pattern).map_or_else(|_| file_name == pattern, |glob| glob.matches(file_name))
    })
}

/// Check that an ignore pattern is a valid glob.
///
/// # Errors
///
/// Returns a message naming the pattern and the glob syntax error.
pub fn validate_pattern(pattern: &str) -> Result<(), String> {
    Pattern::new(pattern)
        .map(|_| ())
        .map_err(|e| format!("invalid ignore pattern \"{pattern}\": {e}"))
}
