//! Fulfillment request submitted to the scheduler.

use serde::{Deserialize, Serialize};

use wareflow_core::ItemId;

/// A pending fulfillment request.
///
/// Orders live from submission until the dispatch that removes them; a
/// dispatched order (successful or rejected) is never reinserted or
/// retried automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Caller-supplied urgency; higher dispatches first.
    pub priority: i32,
    pub item_id: ItemId,
    /// Units requested. Must be positive; `submit` rejects anything else.
    pub quantity: i64,
}

impl Order {
    pub fn new(priority: i32, item_id: ItemId, quantity: i64) -> Self {
        Self {
            priority,
            item_id,
            quantity,
        }
    }
}
