//! Logging initialization.
//!
//! Diagnostics go through `tracing` and are written to stderr so stdout
//! only ever carries the confirmation line or a `--dry-run` document.

use crate::output::Verbosity;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the verbosity-derived filter.
pub const LOG_ENV: &str = "RUST_LOG";

/// Default filter directive for a verbosity level.
#[must_use]
pub const fn default_directive(verbosity: Verbosity) -> &'static str {
    match verbosity {
        Verbosity::Quiet => "error",
        Verbosity::Normal => "warn",
        Verbosity::Verbose => "debug",
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows `-v` / `-q`.
/// Calling this twice is harmless, the second subscriber is dropped.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(Verbosity::Quiet), "error");
        assert_eq!(default_directive(Verbosity::Normal), "warn");
        assert_eq!(default_directive(Verbosity::Verbose), "debug");
    }
}
