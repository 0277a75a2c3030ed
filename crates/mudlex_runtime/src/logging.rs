//! Log setup for the `mudlex` binary.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `mudlex_parser=trace`.
pub const LOG_ENV: &str = "MUDLEX_LOG";

/// Default filter when [`LOG_ENV`] is unset or malformed.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs a stderr subscriber filtered by [`LOG_ENV`].
///
/// Calling it twice is harmless; the second call leaves the first
/// subscriber in place.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
