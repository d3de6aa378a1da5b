//! Store contract and error model.

use thiserror::Error;

use wareflow_core::{ItemId, StockView};

/// Result type used across the store layer.
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("item not found: {0}")]
    ItemNotFound(ItemId),

    #[error("insufficient stock for item {item_id}: requested {requested}, available {available}")]
    InsufficientStock {
        item_id: ItemId,
        requested: i64,
        available: i64,
    },

    #[error("validation failed: {0}")]
    Validation(String),
}

impl StoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Contract between the dispatch core and the inventory system.
///
/// Absence of an item from the snapshot means "unknown item" to the
/// scheduler. `commit_fulfillment` updates stock and appends an audit
/// record as one unit; callers treat its outcome as opaque
/// success/failure.
pub trait InventoryStore {
    /// Produce a point-in-time stock snapshot for all known items.
    fn stock_snapshot(&self) -> StockView;

    /// Set `item_id`'s stock to `new_quantity` and append an audit record
    /// carrying the signed `quantity_delta` and the counterparty name.
    fn commit_fulfillment(
        &mut self,
        item_id: ItemId,
        new_quantity: i64,
        quantity_delta: i64,
        party: &str,
    ) -> StoreResult<()>;
}
