//! Telemetry configuration from environment variables.

use std::env;

use serde::{Deserialize, Serialize};

/// Default service name attached to log output.
pub const DEFAULT_SERVICE_NAME: &str = "msg-stream";

/// Configuration for structured logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Service name attached to the startup event
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error, or an `EnvFilter` directive)
    pub log_level: String,

    /// Whether to write events to the console at all
    pub console_output: bool,

    /// Whether to format events as JSON lines
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `MSG_STREAM_SERVICE_NAME`: Service name (default: msg-stream)
    /// - `MSG_STREAM_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `MSG_STREAM_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `MSG_STREAM_JSON_LOGS`: Enable JSON logs (default: false)
    pub fn from_env() -> Self {
        Self {
            service_name: env::var("MSG_STREAM_SERVICE_NAME")
                .unwrap_or_else(|_| DEFAULT_SERVICE_NAME.to_string()),

            log_level: env::var("MSG_STREAM_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            console_output: env::var("MSG_STREAM_CONSOLE_OUTPUT")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(true),

            json_logs: env::var("MSG_STREAM_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),
        }
    }

    /// Quiet configuration for test harnesses: everything down to `debug`
    /// passes the filter, nothing is printed.
    pub fn for_tests() -> Self {
        Self {
            service_name: format!("{}-tests", DEFAULT_SERVICE_NAME),
            log_level: "debug".to_string(),
            console_output: false,
            json_logs: false,
        }
    }
}
