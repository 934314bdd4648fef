//! # Domain Module
//!
//! Core types for the bounded message stream.
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - No internal synchronisation (callers serialise access)

pub mod buffer;
pub mod config;
pub mod errors;
pub mod invariants;
pub mod value_objects;

pub use buffer::BoundedMessageBuffer;
pub use config::{parse_capacity, StreamConfig, StreamConfigBuilder, CAPACITY_ENV_VAR};
pub use errors::StreamError;
pub use invariants::*;
pub use value_objects::BufferStatus;
