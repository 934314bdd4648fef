//! # Msg-Stream
//!
//! Bounded, append-mostly message buffer for short text records.
//!
//! **Architecture:** Hexagonal (Domain + Ports + Service)
//!
//! ## Purpose
//!
//! Collect short messages (log-like records) in insertion order while
//! refusing unbounded growth or runaway mutation.
//!
//! ## Limits
//!
//! | Limit | Value | Error on violation |
//! |-------|-------|--------------------|
//! | Capacity | `limit` (default 256) | `CapacityExceeded` |
//! | Message size | 300 characters | `MessageTooLarge` |
//! | Operation budget | `2 × limit` mutating calls | `OperationBudgetExceeded` |
//!
//! The budget is charged before any other check and is never refunded, so a
//! rejected `append` or `clear` still uses up one unit.
//!
//! ## Module Structure
//!
//! ```text
//! msg-stream/
//! ├── domain/      # BoundedMessageBuffer, StreamConfig, StreamError, invariants
//! ├── ports/       # MessageBufferApi (driving port)
//! ├── service/     # MessageBufferService (tracing spans + metrics)
//! └── metrics.rs   # MetricsRecorder, Metrics, NoOpMetrics
//! ```
//!
//! ## Usage Example
//!
//! ```
//! use msg_stream::{BoundedMessageBuffer, StreamError};
//!
//! let mut stream = BoundedMessageBuffer::with_limit(5)?;
//! for i in 0..5 {
//!     stream.append(i.to_string())?;
//! }
//! assert_eq!(stream.read_range(2, 4)?, vec!["2", "3", "4"]);
//!
//! let copy = BoundedMessageBuffer::copy_of(&stream);
//! stream.clear()?;
//! assert!(matches!(stream.read_all(), Err(StreamError::EmptyBuffer)));
//! assert_eq!(copy.read_all()?.len(), 5);
//! # Ok::<(), StreamError>(())
//! ```
//!
//! ## Concurrency
//!
//! Single-threaded and synchronous. No internal locking; wrap an instance in
//! a mutex if it must be shared.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports
pub use domain::{
    BoundedMessageBuffer, BufferStatus, StreamConfig, StreamConfigBuilder, StreamError,
    DEFAULT_CAPACITY, MAX_MESSAGE_LEN,
};
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use ports::MessageBufferApi;
pub use service::MessageBufferService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
