//! Value objects for the message stream.

use serde::{Deserialize, Serialize};

/// Point-in-time view of a buffer's occupancy and budget usage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferStatus {
    /// Number of messages currently stored.
    pub len: usize,
    /// Maximum number of messages held at once.
    pub capacity_limit: usize,
    /// Lifetime budget of mutating operations.
    pub operation_budget: usize,
    /// Mutating operations consumed so far.
    pub operations_used: usize,
}

impl BufferStatus {
    /// Mutating operations still available.
    pub fn remaining_operations(&self) -> usize {
        self.operation_budget.saturating_sub(self.operations_used)
    }

    /// True when no further message can be appended without a clear.
    pub fn is_full(&self) -> bool {
        self.len >= self.capacity_limit
    }

    /// True once every mutator call will fail with a budget error.
    pub fn budget_exhausted(&self) -> bool {
        self.operations_used >= self.operation_budget
    }
}
