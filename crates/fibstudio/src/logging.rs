//! Tracing filter setup.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Build the log filter from `RUST_LOG`-style directives.
///
/// Logs at WARN and above unless the directives say otherwise. A bare level
/// such as `debug` raises every target.
pub fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives)
}

/// Log filter for the current process environment.
pub fn env_log_filter() -> EnvFilter {
    log_filter(&std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default())
}
