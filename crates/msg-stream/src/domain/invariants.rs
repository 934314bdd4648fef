//! # Domain Invariants
//!
//! Limits and business rules that must always hold for a message stream.

use super::errors::StreamError;

/// Capacity used when no limit is supplied.
pub const DEFAULT_CAPACITY: usize = 256;

/// Maximum message length, in characters.
///
/// Counted in Unicode scalar values (`char`), so a character outside the
/// Basic Multilingual Plane such as an emoji counts once, not as two UTF-16
/// code units.
pub const MAX_MESSAGE_LEN: usize = 300;

/// Operation budget is this multiple of the capacity limit.
pub const BUDGET_MULTIPLIER: usize = 2;

/// Operation budget for a given capacity limit.
///
/// Saturates instead of overflowing for absurdly large limits.
pub fn operation_budget_for(capacity_limit: usize) -> usize {
    capacity_limit.saturating_mul(BUDGET_MULTIPLIER)
}

/// Message length in characters (Unicode scalar values).
pub fn message_len(message: &str) -> usize {
    message.chars().count()
}

/// Invariant: capacity limit is strictly positive.
pub fn invariant_positive_capacity(capacity_limit: usize) -> Result<(), StreamError> {
    if capacity_limit == 0 {
        return Err(StreamError::InvalidArgument(
            "limit must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

/// Invariant: stored element count never exceeds the capacity limit.
pub fn invariant_within_capacity(len: usize, capacity_limit: usize) -> bool {
    len <= capacity_limit
}

/// Invariant: operations used never exceed the operation budget.
pub fn invariant_within_budget(operations_used: usize, operation_budget: usize) -> bool {
    operations_used <= operation_budget
}

/// Invariant: no stored message exceeds [`MAX_MESSAGE_LEN`].
pub fn invariant_message_sizes<I, S>(messages: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    messages
        .into_iter()
        .all(|m| message_len(m.as_ref()) <= MAX_MESSAGE_LEN)
}
