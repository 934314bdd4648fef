//! Metrics hooks for message stream operations
//!
//! Counts successful operations and rejections per error kind so callers can
//! see how close a stream runs to its limits.
//!
//! ## Usage
//!
//! ```
//! use msg_stream::metrics::Metrics;
//! use std::time::Duration;
//!
//! let metrics = Metrics::new();
//! metrics.record_append(Duration::from_nanos(80));
//! assert_eq!(metrics.snapshot().appends, 1);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::domain::StreamError;

/// Metrics collector for message stream operations
///
/// Thread-safe counters, so one collector can be shared by many streams.
#[derive(Default)]
pub struct Metrics {
    /// Successful appends
    pub appends: AtomicU64,
    /// Successful clears
    pub clears: AtomicU64,
    /// Successful reads (full or ranged)
    pub reads: AtomicU64,
    /// Appends rejected for message size
    pub rejected_too_large: AtomicU64,
    /// Appends rejected for capacity
    pub rejected_capacity: AtomicU64,
    /// Mutators rejected for budget exhaustion
    pub rejected_budget: AtomicU64,
    /// Clears or reads rejected on an empty stream
    pub rejected_empty: AtomicU64,
    /// Range reads rejected for bad indices
    pub rejected_index: AtomicU64,
    /// Cumulative append time in nanoseconds
    pub append_time_ns: AtomicU64,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful append
    pub fn record_append(&self, duration: Duration) {
        self.appends.fetch_add(1, Ordering::Relaxed);
        self.append_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
    }

    /// Record a successful clear
    pub fn record_clear(&self) {
        self.clears.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a successful read
    pub fn record_read(&self) {
        self.reads.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a rejected operation under its error kind
    pub fn record_rejection(&self, error: &StreamError) {
        let counter = match error {
            StreamError::MessageTooLarge { .. } => &self.rejected_too_large,
            StreamError::CapacityExceeded { .. } => &self.rejected_capacity,
            StreamError::OperationBudgetExceeded { .. } => &self.rejected_budget,
            StreamError::EmptyBuffer => &self.rejected_empty,
            StreamError::IndexOutOfRange { .. } => &self.rejected_index,
            // Construction errors never reach a live stream
            StreamError::InvalidArgument(_) => return,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            appends: self.appends.load(Ordering::Relaxed),
            clears: self.clears.load(Ordering::Relaxed),
            reads: self.reads.load(Ordering::Relaxed),
            rejected_too_large: self.rejected_too_large.load(Ordering::Relaxed),
            rejected_capacity: self.rejected_capacity.load(Ordering::Relaxed),
            rejected_budget: self.rejected_budget.load(Ordering::Relaxed),
            rejected_empty: self.rejected_empty.load(Ordering::Relaxed),
            rejected_index: self.rejected_index.load(Ordering::Relaxed),
            avg_append_ns: self.avg_append_time_ns(),
        }
    }

    /// Calculate average append time in nanoseconds
    pub fn avg_append_time_ns(&self) -> u64 {
        let total = self.append_time_ns.load(Ordering::Relaxed);
        let count = self.appends.load(Ordering::Relaxed);
        if count > 0 {
            total / count
        } else {
            0
        }
    }

    /// Reset all counters
    pub fn reset(&self) {
        self.appends.store(0, Ordering::Relaxed);
        self.clears.store(0, Ordering::Relaxed);
        self.reads.store(0, Ordering::Relaxed);
        self.rejected_too_large.store(0, Ordering::Relaxed);
        self.rejected_capacity.store(0, Ordering::Relaxed);
        self.rejected_budget.store(0, Ordering::Relaxed);
        self.rejected_empty.store(0, Ordering::Relaxed);
        self.rejected_index.store(0, Ordering::Relaxed);
        self.append_time_ns.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Successful appends
    pub appends: u64,
    /// Successful clears
    pub clears: u64,
    /// Successful reads
    pub reads: u64,
    /// Appends rejected for message size
    pub rejected_too_large: u64,
    /// Appends rejected for capacity
    pub rejected_capacity: u64,
    /// Mutators rejected for budget exhaustion
    pub rejected_budget: u64,
    /// Clears or reads rejected on an empty stream
    pub rejected_empty: u64,
    /// Range reads rejected for bad indices
    pub rejected_index: u64,
    /// Average append time in nanoseconds
    pub avg_append_ns: u64,
}

impl MetricsSnapshot {
    /// Total rejected operations across all kinds
    pub fn total_rejections(&self) -> u64 {
        self.rejected_too_large
            + self.rejected_capacity
            + self.rejected_budget
            + self.rejected_empty
            + self.rejected_index
    }
}

/// Trait for custom metrics recording implementations
///
/// Implement this trait to forward stream metrics to an external system.
pub trait MetricsRecorder: Send + Sync {
    /// Record a successful append
    fn record_append(&self, duration: Duration);

    /// Record a successful clear
    fn record_clear(&self);

    /// Record a successful read
    fn record_read(&self);

    /// Record a rejected operation
    fn record_rejection(&self, error: &StreamError);
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_append(&self, _: Duration) {}
    fn record_clear(&self) {}
    fn record_read(&self) {}
    fn record_rejection(&self, _: &StreamError) {}
}

impl MetricsRecorder for Metrics {
    fn record_append(&self, duration: Duration) {
        Metrics::record_append(self, duration);
    }

    fn record_clear(&self) {
        Metrics::record_clear(self);
    }

    fn record_read(&self) {
        Metrics::record_read(self);
    }

    fn record_rejection(&self, error: &StreamError) {
        Metrics::record_rejection(self, error);
    }
}

impl<M: MetricsRecorder + ?Sized> MetricsRecorder for std::sync::Arc<M> {
    fn record_append(&self, duration: Duration) {
        (**self).record_append(duration);
    }

    fn record_clear(&self) {
        (**self).record_clear();
    }

    fn record_read(&self) {
        (**self).record_read();
    }

    fn record_rejection(&self, error: &StreamError) {
        (**self).record_rejection(error);
    }
}
