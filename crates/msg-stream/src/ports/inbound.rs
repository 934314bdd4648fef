//! # Inbound Ports
//!
//! API trait defining what a message stream can do.
//!
//! Implemented by the bare [`BoundedMessageBuffer`](crate::domain::BoundedMessageBuffer)
//! and by the instrumented [`MessageBufferService`](crate::service::MessageBufferService),
//! so callers can swap one for the other.

use crate::domain::{BufferStatus, StreamError};

/// Message stream API - inbound port.
pub trait MessageBufferApi {
    /// Append a message to the end of the stream.
    fn append(&mut self, message: String) -> Result<(), StreamError>;

    /// Remove every stored message.
    fn clear(&mut self) -> Result<(), StreamError>;

    /// Copy of every stored message, oldest first.
    fn read_all(&self) -> Result<Vec<String>, StreamError>;

    /// Copy of the messages at positions `low..=high`.
    fn read_range(&self, low: usize, high: usize) -> Result<Vec<String>, StreamError>;

    /// Current occupancy and budget usage.
    fn status(&self) -> BufferStatus;
}
