//! # Stream Telemetry
//!
//! Structured logging for msg-stream processes and test harnesses.
//!
//! The `msg-stream` library only emits `tracing` events and spans; this crate
//! decides where they go.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stream_telemetry::{init_telemetry, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! let _guard = init_telemetry(&config).expect("Failed to init telemetry");
//!
//! // Stream operations are now logged
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `MSG_STREAM_SERVICE_NAME` | `msg-stream` | Service name in the startup event |
//! | `MSG_STREAM_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `MSG_STREAM_CONSOLE_OUTPUT` | `true` | Write events to stdout |
//! | `MSG_STREAM_JSON_LOGS` | `false` | JSON lines instead of pretty output |

#![warn(missing_docs)]

mod config;
mod logging;

pub use config::{TelemetryConfig, DEFAULT_SERVICE_NAME};
pub use logging::{build_subscriber, BoxedSubscriber};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// A global subscriber is already installed.
    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),

    /// Configuration could not be turned into a subscriber.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Install the global subscriber described by `config`.
///
/// Returns a guard that should be held for the lifetime of the application.
/// Calling this a second time in the same process fails with
/// [`TelemetryError::SubscriberInit`].
pub fn init_telemetry(config: &TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    logging::init_logging(config)?;

    Ok(TelemetryGuard {
        service_name: config.service_name.clone(),
    })
}

/// Guard that keeps telemetry active.
pub struct TelemetryGuard {
    service_name: String,
}

impl TelemetryGuard {
    /// Service name the guard was created for.
    pub fn service_name(&self) -> &str {
        &self.service_name
    }
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!(service = %self.service_name, "Shutting down telemetry...");
    }
}

/// Convenience macro for creating a span tagged with a stream label.
///
/// # Example
///
/// ```rust,ignore
/// use stream_telemetry::stream_span;
///
/// let _span = stream_span!("drain_audit_log", "audit", batch = 3).entered();
/// ```
#[macro_export]
macro_rules! stream_span {
    ($name:expr, $label:expr) => {
        tracing::info_span!($name, stream = $label)
    };
    ($name:expr, $label:expr, $($field:tt)*) => {
        tracing::info_span!($name, stream = $label, $($field)*)
    };
}
