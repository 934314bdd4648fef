//! Stream configuration and validation
//!
//! # Example
//!
//! ```
//! use msg_stream::domain::StreamConfigBuilder;
//!
//! let config = StreamConfigBuilder::new()
//!     .capacity_limit(10)
//!     .build()
//!     .expect("Valid config");
//! assert_eq!(config.operation_budget(), 20);
//! ```

use std::env;

use serde::{Deserialize, Serialize};

use super::errors::StreamError;
use super::invariants::{invariant_positive_capacity, operation_budget_for, DEFAULT_CAPACITY};

/// Environment variable read by [`StreamConfig::from_env`].
pub const CAPACITY_ENV_VAR: &str = "MSG_STREAM_CAPACITY";

/// Parse a raw `MSG_STREAM_CAPACITY` value.
///
/// `None`, blank or non-numeric input yields [`DEFAULT_CAPACITY`]. Zero is
/// returned as is.
pub fn parse_capacity(raw: Option<&str>) -> usize {
    raw.and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_CAPACITY)
}

/// Message stream configuration
///
/// The operation budget is not configurable on its own; it is always derived
/// from the capacity limit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamConfig {
    /// Maximum number of messages held at once
    pub capacity_limit: usize,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            capacity_limit: DEFAULT_CAPACITY,
        }
    }
}

impl StreamConfig {
    /// Create a new configuration with validation
    pub fn new(capacity_limit: usize) -> Result<Self, StreamError> {
        let config = Self { capacity_limit };
        config.validate()?;
        Ok(config)
    }

    /// Read the capacity from `MSG_STREAM_CAPACITY`.
    ///
    /// Missing or unparseable values fall back to the default. A parsed value
    /// of zero is kept so that [`validate`](Self::validate) can reject it.
    pub fn from_env() -> Self {
        Self {
            capacity_limit: parse_capacity(env::var(CAPACITY_ENV_VAR).ok().as_deref()),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), StreamError> {
        invariant_positive_capacity(self.capacity_limit)
    }

    /// Lifetime operation budget implied by this configuration
    pub fn operation_budget(&self) -> usize {
        operation_budget_for(self.capacity_limit)
    }

    /// Builder-style method to set the capacity limit
    pub fn with_capacity_limit(mut self, capacity_limit: usize) -> Self {
        self.capacity_limit = capacity_limit;
        self
    }
}

/// Builder for StreamConfig with validation
#[derive(Default)]
pub struct StreamConfigBuilder {
    capacity_limit: Option<usize>,
}

impl StreamConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum number of messages (must be > 0)
    pub fn capacity_limit(mut self, limit: usize) -> Self {
        self.capacity_limit = Some(limit);
        self
    }

    /// Build the StreamConfig, validating all parameters
    pub fn build(self) -> Result<StreamConfig, StreamError> {
        let config = self.build_unchecked();
        config.validate()?;
        Ok(config)
    }

    /// Build without validation
    pub fn build_unchecked(self) -> StreamConfig {
        let defaults = StreamConfig::default();

        StreamConfig {
            capacity_limit: self.capacity_limit.unwrap_or(defaults.capacity_limit),
        }
    }
}
