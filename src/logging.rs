use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Filter for the configured level; an unparsable directive falls back to
/// `info`.
pub fn configured_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over the
/// configured level. Events go to stderr so they never interleave with the
/// form on stdout.
pub fn init_tracing(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| configured_filter(&config.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
