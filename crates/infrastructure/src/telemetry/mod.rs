//! Logging setup
//!
//! A `tracing-subscriber` registry with an `EnvFilter` and a single `fmt`
//! layer in pretty or JSON form.

use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{LogFormat, LoggingConfig};

/// Logging initialization errors
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directive does not parse
    #[error("Invalid log filter {directive:?}: {reason}")]
    InvalidFilter { directive: String, reason: String },

    /// A global subscriber is already installed
    #[error("Failed to install subscriber: {0}")]
    Init(String),
}

/// Filter directive for the given `-v` count
///
/// Without `-v` the configured level applies; each `-v` raises it one step.
pub fn log_filter(config: &LoggingConfig, verbosity: u8) -> String {
    match verbosity {
        0 => config.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over both the config and `-v`.
pub fn init_logging(config: &LoggingConfig, verbosity: u8) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let directive = log_filter(config, verbosity);
            EnvFilter::try_new(&directive).map_err(|e| TelemetryError::InvalidFilter {
                directive,
                reason: e.to_string(),
            })?
        },
    };

    let (pretty, json) = match config.format {
        LogFormat::Pretty => (Some(fmt::layer().with_target(false)), None),
        LogFormat::Json => (None, Some(fmt::layer().json().with_current_span(false))),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(json)
        .try_init()
        .map_err(|e| TelemetryError::Init(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_zero_uses_config_level() {
        let config = LoggingConfig {
            level: "warn".to_string(),
            ..LoggingConfig::default()
        };
        assert_eq!(log_filter(&config, 0), "warn");
    }

    #[test]
    fn verbosity_raises_level() {
        let config = LoggingConfig::default();
        assert_eq!(log_filter(&config, 1), "debug");
        assert_eq!(log_filter(&config, 2), "trace");
        assert_eq!(log_filter(&config, 7), "trace");
    }

    #[test]
    fn default_level_is_info() {
        assert_eq!(log_filter(&LoggingConfig::default(), 0), "info");
    }
}
