//! # Domain Errors
//!
//! Error types for the bounded message stream.
//!
//! Every failed call is reported to the caller as one of these kinds. None
//! are recovered internally and none leave a mutator partially applied.

use thiserror::Error;

/// Message stream error types.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StreamError {
    /// A non-positive capacity was supplied at construction.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Appended message is longer than the per-message ceiling.
    #[error("Message too large: {len} > {max} characters")]
    MessageTooLarge {
        /// Length of the rejected message, in characters
        len: usize,
        /// Maximum allowed length
        max: usize,
    },

    /// Buffer already holds `capacity` elements.
    #[error("Stream capacity exceeded: already holding {capacity} messages")]
    CapacityExceeded {
        /// Capacity limit of the buffer
        capacity: usize,
    },

    /// Mutator would push the operation counter past the budget.
    #[error("Maximum number of operations reached: budget of {budget} exhausted")]
    OperationBudgetExceeded {
        /// Lifetime operation budget of the buffer
        budget: usize,
    },

    /// Clear or full read on a buffer holding zero elements.
    #[error("Stream is empty")]
    EmptyBuffer,

    /// Range read with indices out of bounds or out of order.
    #[error("Index out of range: [{low}, {high}] for stream of length {len}")]
    IndexOutOfRange {
        /// Requested lower index (inclusive)
        low: usize,
        /// Requested upper index (inclusive)
        high: usize,
        /// Stream length at the time of the call
        len: usize,
    },
}

impl StreamError {
    /// Short, stable label for the error kind, used as a metrics/log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid_argument",
            Self::MessageTooLarge { .. } => "message_too_large",
            Self::CapacityExceeded { .. } => "capacity_exceeded",
            Self::OperationBudgetExceeded { .. } => "operation_budget_exceeded",
            Self::EmptyBuffer => "empty_buffer",
            Self::IndexOutOfRange { .. } => "index_out_of_range",
        }
    }
}
