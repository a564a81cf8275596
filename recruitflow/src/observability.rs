//! Tracing setup for binaries embedding the library.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors from telemetry initialization.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The fallback filter string could not be parsed.
    #[error("invalid log filter '{value}': {source}")]
    Filter {
        /// The rejected filter string.
        value: String,
        /// The underlying parse error.
        source: tracing_subscriber::filter::ParseError,
    },

    /// A global subscriber was already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Installs a global fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` (e.g. `"info"`
/// or `"recruitflow=debug"`) applies. Call once at startup.
pub fn init_tracing(default_filter: &str) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter).map_err(|source| TelemetryError::Filter {
            value: default_filter.to_string(),
            source,
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| TelemetryError::Install(e.to_string()))
}
