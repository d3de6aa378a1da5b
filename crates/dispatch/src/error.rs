//! Dispatch error taxonomy.
//!
//! Every failure here is local and non-fatal: it is returned to the
//! immediate caller, never escalated to a panic, and nothing is retried
//! automatically.

use thiserror::Error;

use wareflow_core::ItemId;

/// Result type used across the dispatch layer.
pub type DispatchResult<T> = Result<T, DispatchError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Dispatch attempted with no pending orders. Callers may retry later.
    #[error("no pending orders")]
    EmptyQueue,

    /// The order references an item absent from the stock snapshot.
    /// The order has been dropped.
    #[error("unknown item {0}")]
    UnknownItem(ItemId),

    /// Requested quantity exceeds available stock. The order has been
    /// dropped.
    #[error("insufficient stock for item {item_id}: requested {requested}, available {available}")]
    InsufficientStock {
        item_id: ItemId,
        requested: i64,
        available: i64,
    },

    /// The injected commit callback reported failure. The order has still
    /// been consumed (at-most-once dispatch).
    #[error("commit failed: {0}")]
    CommitFailed(String),

    /// A submitted order failed boundary validation.
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DispatchError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
