//! Message Buffer Service
//!
//! Wraps a [`BoundedMessageBuffer`] with a tracing span per operation and a
//! pluggable metrics recorder. Behaviour is otherwise identical to the bare
//! buffer: every call is forwarded and every error is passed through.

use std::time::Instant;

use tracing::{debug, info_span};

use crate::domain::{BoundedMessageBuffer, BufferStatus, StreamConfig, StreamError};
use crate::metrics::{MetricsRecorder, NoOpMetrics};
use crate::ports::MessageBufferApi;

/// Instrumented message stream
///
/// Implements the `MessageBufferApi` port on top of the domain buffer.
pub struct MessageBufferService<M: MetricsRecorder = NoOpMetrics> {
    /// Label attached to every span (e.g. the stream's owner)
    label: String,
    /// Underlying domain buffer
    buffer: BoundedMessageBuffer,
    /// Metrics sink
    metrics: M,
}

impl MessageBufferService<NoOpMetrics> {
    /// Create a service with default limits and metrics disabled
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_buffer(label, BoundedMessageBuffer::new(), NoOpMetrics)
    }
}

impl<M: MetricsRecorder> MessageBufferService<M> {
    /// Wrap an existing buffer
    pub fn with_buffer(label: impl Into<String>, buffer: BoundedMessageBuffer, metrics: M) -> Self {
        Self {
            label: label.into(),
            buffer,
            metrics,
        }
    }

    /// Create a service with a fresh buffer built from `config`
    ///
    /// # Errors
    /// - `InvalidArgument` if the configured capacity is zero
    pub fn with_config(
        label: impl Into<String>,
        config: &StreamConfig,
        metrics: M,
    ) -> Result<Self, StreamError> {
        let buffer = BoundedMessageBuffer::from_config(config)?;
        Ok(Self::with_buffer(label, buffer, metrics))
    }

    /// Label attached to this service's spans
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Read-only access to the wrapped buffer
    pub fn buffer(&self) -> &BoundedMessageBuffer {
        &self.buffer
    }

    /// Metrics recorder
    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    /// Unwrap into the domain buffer
    pub fn into_inner(self) -> BoundedMessageBuffer {
        self.buffer
    }

    fn observe<T>(&self, result: Result<T, StreamError>) -> Result<T, StreamError> {
        if let Err(ref err) = result {
            debug!(label = %self.label, kind = err.kind(), error = %err, "Stream operation rejected");
            self.metrics.record_rejection(err);
        }
        result
    }
}

impl<M: MetricsRecorder> MessageBufferApi for MessageBufferService<M> {
    fn append(&mut self, message: String) -> Result<(), StreamError> {
        let span = info_span!("stream_append", label = %self.label, message_bytes = message.len());
        let _guard = span.enter();

        let start = Instant::now();
        let result = self.buffer.append(message);
        if result.is_ok() {
            self.metrics.record_append(start.elapsed());
        }
        self.observe(result)
    }

    fn clear(&mut self) -> Result<(), StreamError> {
        let span = info_span!("stream_clear", label = %self.label);
        let _guard = span.enter();

        let result = self.buffer.clear();
        if result.is_ok() {
            self.metrics.record_clear();
        }
        self.observe(result)
    }

    fn read_all(&self) -> Result<Vec<String>, StreamError> {
        let span = info_span!("stream_read_all", label = %self.label);
        let _guard = span.enter();

        let result = self.buffer.read_all();
        if result.is_ok() {
            self.metrics.record_read();
        }
        self.observe(result)
    }

    fn read_range(&self, low: usize, high: usize) -> Result<Vec<String>, StreamError> {
        let span = info_span!("stream_read_range", label = %self.label, low, high);
        let _guard = span.enter();

        let result = self.buffer.read_range(low, high);
        if result.is_ok() {
            self.metrics.record_read();
        }
        self.observe(result)
    }

    fn status(&self) -> BufferStatus {
        self.buffer.status()
    }
}

impl MessageBufferApi for BoundedMessageBuffer {
    fn append(&mut self, message: String) -> Result<(), StreamError> {
        BoundedMessageBuffer::append(self, message)
    }

    fn clear(&mut self) -> Result<(), StreamError> {
        BoundedMessageBuffer::clear(self)
    }

    fn read_all(&self) -> Result<Vec<String>, StreamError> {
        BoundedMessageBuffer::read_all(self)
    }

    fn read_range(&self, low: usize, high: usize) -> Result<Vec<String>, StreamError> {
        BoundedMessageBuffer::read_range(self, low, high)
    }

    fn status(&self) -> BufferStatus {
        BoundedMessageBuffer::status(self)
    }
}
