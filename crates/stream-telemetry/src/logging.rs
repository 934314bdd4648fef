//! Structured logging setup.
//!
//! Builds a `tracing-subscriber` registry with an `EnvFilter` and either a
//! pretty (development) or JSON (containers) formatting layer.

use tracing::Subscriber;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

use crate::{TelemetryConfig, TelemetryError};

/// Boxed subscriber produced by [`build_subscriber`].
pub type BoxedSubscriber = Box<dyn Subscriber + Send + Sync + 'static>;

/// Build (but do not install) the subscriber described by `config`.
///
/// Useful on its own with `tracing::subscriber::with_default` when a global
/// subscriber is not wanted.
pub fn build_subscriber(config: &TelemetryConfig) -> Result<BoxedSubscriber, TelemetryError> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| TelemetryError::Config(format!("invalid log level '{}': {}", config.log_level, e)))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    if !config.console_output {
        return Ok(Box::new(registry));
    }

    if config.json_logs {
        // JSON output for containers/production
        let json_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);
        Ok(Box::new(registry.with(json_layer)))
    } else {
        // Pretty output for development
        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_ansi(true);
        Ok(Box::new(registry.with(fmt_layer)))
    }
}

/// Build the subscriber and install it as the global default.
pub fn init_logging(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let subscriber = build_subscriber(config)?;
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| TelemetryError::SubscriberInit(e.to_string()))?;

    tracing::info!(
        service = %config.service_name,
        log_level = %config.log_level,
        json_logs = config.json_logs,
        "Structured logging initialized"
    );
    Ok(())
}
