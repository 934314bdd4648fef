//! # Bounded Message Buffer
//!
//! Ordered, append-mostly store of short text messages with three limits:
//!
//! - `capacity_limit`: maximum number of messages held at once
//! - [`MAX_MESSAGE_LEN`]: maximum characters per message
//! - `operation_budget`: maximum number of mutating calls over the lifetime
//!
//! ## Mutator Ordering
//!
//! Both mutators (`append`, `clear`) charge the operation budget before
//! anything else:
//!
//! ```text
//! call ──budget step──┬── exhausted ──→ Err(OperationBudgetExceeded), counter unchanged
//!                     └── charged ──→ precondition ──┬── fails ──→ Err(..), unit stays consumed
//!                                                    └── ok ──→ resize + store
//! ```
//!
//! Reads never touch the budget.

use tracing::{debug, trace, warn};

use super::config::StreamConfig;
use super::errors::StreamError;
use super::invariants::{
    invariant_message_sizes, invariant_positive_capacity, invariant_within_budget,
    invariant_within_capacity, message_len, operation_budget_for, DEFAULT_CAPACITY,
    MAX_MESSAGE_LEN,
};
use super::value_objects::BufferStatus;

/// Bounded message stream.
///
/// INVARIANTS:
/// - `0 <= len <= capacity_limit`
/// - every stored message is at most [`MAX_MESSAGE_LEN`] characters
/// - `operations_used <= operation_budget`
/// - `capacity_limit > 0` and `operation_budget > 0`
///
/// There is no `Clone`: use [`copy_of`](Self::copy_of), which starts the copy
/// with a fresh operation counter.
#[derive(Debug)]
pub struct BoundedMessageBuffer {
    /// Stored messages in insertion order.
    elements: Vec<String>,
    /// Maximum number of messages held at once.
    capacity_limit: usize,
    /// Lifetime budget of mutating operations.
    operation_budget: usize,
    /// Mutating operations consumed so far. Never reset.
    operations_used: usize,
}

impl BoundedMessageBuffer {
    /// Creates an empty buffer with the default capacity (256, budget 512).
    pub fn new() -> Self {
        Self::with_validated_limit(DEFAULT_CAPACITY)
    }

    /// Creates an empty buffer holding at most `limit` messages.
    ///
    /// # Errors
    /// - `InvalidArgument` if `limit` is zero
    pub fn with_limit(limit: usize) -> Result<Self, StreamError> {
        invariant_positive_capacity(limit)?;
        Ok(Self::with_validated_limit(limit))
    }

    /// Creates an empty buffer from a configuration.
    ///
    /// # Errors
    /// - `InvalidArgument` if the configured capacity is zero
    pub fn from_config(config: &StreamConfig) -> Result<Self, StreamError> {
        config.validate()?;
        Ok(Self::with_validated_limit(config.capacity_limit))
    }

    /// Creates an independent deep copy of `source`.
    ///
    /// The copy inherits the capacity limit and operation budget and owns its
    /// own copy of the current messages. Its operation counter starts at zero.
    pub fn copy_of(source: &Self) -> Self {
        Self {
            elements: source.elements.clone(),
            capacity_limit: source.capacity_limit,
            operation_budget: source.operation_budget,
            operations_used: 0,
        }
    }

    fn with_validated_limit(limit: usize) -> Self {
        Self {
            elements: Vec::new(),
            capacity_limit: limit,
            operation_budget: operation_budget_for(limit),
            operations_used: 0,
        }
    }

    /// Returns the number of stored messages.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if no messages are stored.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns true if the buffer holds `capacity_limit` messages.
    pub fn is_full(&self) -> bool {
        self.elements.len() >= self.capacity_limit
    }

    /// Maximum number of messages held at once.
    pub fn capacity_limit(&self) -> usize {
        self.capacity_limit
    }

    /// Lifetime budget of mutating operations.
    pub fn operation_budget(&self) -> usize {
        self.operation_budget
    }

    /// Mutating operations consumed so far.
    pub fn operations_used(&self) -> usize {
        self.operations_used
    }

    /// Mutating operations still available.
    pub fn remaining_operations(&self) -> usize {
        self.operation_budget - self.operations_used
    }

    /// Borrowing iterator over the stored messages, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.elements.iter().map(String::as_str)
    }

    /// Snapshot of occupancy and budget usage.
    pub fn status(&self) -> BufferStatus {
        BufferStatus {
            len: self.elements.len(),
            capacity_limit: self.capacity_limit,
            operation_budget: self.operation_budget,
            operations_used: self.operations_used,
        }
    }

    /// Appends a message to the end of the stream.
    ///
    /// Charges one unit of the operation budget before validating the
    /// message, so a rejected message still consumes budget.
    ///
    /// # Errors
    /// - `OperationBudgetExceeded` if the budget is already spent; the
    ///   counter stays at `operation_budget`
    /// - `MessageTooLarge` if the message exceeds [`MAX_MESSAGE_LEN`] characters
    /// - `CapacityExceeded` if `capacity_limit` messages are already stored
    pub fn append(&mut self, message: impl Into<String>) -> Result<(), StreamError> {
        self.count_up()?;

        let message = message.into();
        let len = message_len(&message);
        if len > MAX_MESSAGE_LEN {
            return Err(StreamError::MessageTooLarge {
                len,
                max: MAX_MESSAGE_LEN,
            });
        }

        if self.is_full() {
            return Err(StreamError::CapacityExceeded {
                capacity: self.capacity_limit,
            });
        }

        self.resize(self.elements.len() + 1);
        self.elements.push(message);
        self.debug_check_invariants();

        debug!(
            len = self.elements.len(),
            operations_used = self.operations_used,
            "Message appended"
        );
        Ok(())
    }

    /// Removes every stored message.
    ///
    /// # Errors
    /// - `OperationBudgetExceeded` if the budget is already spent; the
    ///   counter stays at `operation_budget`
    /// - `EmptyBuffer` if there is nothing to clear (budget is still charged)
    pub fn clear(&mut self) -> Result<(), StreamError> {
        self.count_up()?;

        if self.is_empty() {
            return Err(StreamError::EmptyBuffer);
        }

        let removed = self.elements.len();
        self.resize(0);
        self.debug_check_invariants();

        debug!(
            removed,
            operations_used = self.operations_used,
            "Stream cleared"
        );
        Ok(())
    }

    /// Returns a copy of every stored message, oldest first.
    ///
    /// # Errors
    /// - `EmptyBuffer` if no messages are stored
    pub fn read_all(&self) -> Result<Vec<String>, StreamError> {
        if self.is_empty() {
            return Err(StreamError::EmptyBuffer);
        }
        self.read(0, self.elements.len() - 1)
    }

    /// Returns a copy of the messages at positions `low..=high`.
    ///
    /// An empty stream has no valid range, so every call on it fails.
    ///
    /// # Errors
    /// - `IndexOutOfRange` if `high >= len` or `low > high`
    pub fn read_range(&self, low: usize, high: usize) -> Result<Vec<String>, StreamError> {
        self.read(low, high)
    }

    fn read(&self, low: usize, high: usize) -> Result<Vec<String>, StreamError> {
        let len = self.elements.len();
        if high >= len || low > high {
            return Err(StreamError::IndexOutOfRange { low, high, len });
        }

        trace!(low, high, len, "Reading stream section");
        Ok(self.elements[low..=high].to_vec())
    }

    /// Charges one unit of the operation budget.
    ///
    /// On exhaustion the counter is left as is, so `operations_used` never
    /// exceeds `operation_budget`.
    fn count_up(&mut self) -> Result<(), StreamError> {
        if self.operations_used >= self.operation_budget {
            warn!(
                budget = self.operation_budget,
                "Operation budget exhausted, rejecting mutation"
            );
            return Err(StreamError::OperationBudgetExceeded {
                budget: self.operation_budget,
            });
        }
        self.operations_used += 1;
        Ok(())
    }

    fn debug_check_invariants(&self) {
        debug_assert!(invariant_within_capacity(
            self.elements.len(),
            self.capacity_limit
        ));
        debug_assert!(invariant_within_budget(
            self.operations_used,
            self.operation_budget
        ));
        debug_assert!(invariant_message_sizes(&self.elements));
    }

    /// Grows or shrinks the backing storage to hold exactly `target_len`
    /// messages, keeping as many existing messages as fit.
    ///
    /// Growing only reserves room; the caller fills the new slot.
    fn resize(&mut self, target_len: usize) {
        let len = self.elements.len();
        if target_len > len {
            self.elements.reserve(target_len - len);
        } else {
            self.elements.truncate(target_len);
            self.elements.shrink_to(target_len);
        }
    }
}

impl Default for BoundedMessageBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&BoundedMessageBuffer> for BoundedMessageBuffer {
    fn from(source: &BoundedMessageBuffer) -> Self {
        Self::copy_of(source)
    }
}
