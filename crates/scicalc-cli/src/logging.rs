//! Tracing subscriber setup
//!
//! Engine events go to stderr so stdout stays clean for results. `RUST_LOG`
//! wins over the verbosity flags when it is set.

use crate::config::Verbosity;
use tracing_subscriber::EnvFilter;

/// Builds the filter for a verbosity level, preferring `RUST_LOG`
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter()))
}

/// Installs the global fmt subscriber.
///
/// Returns `false` if a subscriber was already installed.
pub fn init_tracing(verbosity: Verbosity) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(verbosity.is_verbose())
        .without_time()
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_for_each_level() {
        // Only checks that every level yields a usable directive string
        for verbosity in [
            Verbosity::Quiet,
            Verbosity::Normal,
            Verbosity::Verbose,
            Verbosity::Debug,
        ] {
            assert!(verbosity.log_filter().parse::<EnvFilter>().is_ok());
        }
    }

    #[test]
    fn test_init_twice_is_harmless() {
        let _ = init_tracing(Verbosity::Quiet);
        assert!(!init_tracing(Verbosity::Quiet));
    }
}
