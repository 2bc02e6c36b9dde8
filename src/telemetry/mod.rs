//! Tracing subscriber setup.
//!
//! | Source | Effect |
//! |--------|--------|
//! | `RUST_LOG` | Filter directives, takes precedence |
//! | `logging.level` | Filter used when `RUST_LOG` is unset |
//! | `logging.json` | JSON lines instead of human-readable output |

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Result type for telemetry operations
pub type TelemetryResult<T> = Result<T, TelemetryError>;

/// Telemetry-specific error type
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),
    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),
}

/// Build the filter from `RUST_LOG`, falling back to the configured level
pub fn build_env_filter(config: &LoggingConfig) -> TelemetryResult<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| TelemetryError::InvalidFilter(e.to_string())),
    }
}

/// Install the global tracing subscriber.
///
/// Fails if a global subscriber is already set.
pub fn init_telemetry(config: &LoggingConfig) -> TelemetryResult<()> {
    let env_filter = build_env_filter(config)?;

    let result = if config.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
    };

    result.map_err(|e| TelemetryError::SubscriberInit(e.to_string()))?;

    tracing::info!(level = %config.level, json = config.json, "Tracing initialized");
    Ok(())
}
