//! Order scheduler: urgency-ordered pending set plus the dispatch step.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use wareflow_core::StockView;

use crate::error::{DispatchError, DispatchResult};
use crate::order::Order;

/// Opaque failure reported by a [`FulfillmentSink`].
///
/// The scheduler does not inspect causes beyond success/failure; whatever
/// the sink puts in here is surfaced verbatim through
/// [`DispatchError::CommitFailed`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct CommitError(String);

impl CommitError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Commit seam between the scheduler and the inventory store.
///
/// Implementations persist the stock decrement and append an audit record
/// as one unit. Closures get a blanket implementation, so tests and small
/// callers can pass `|order, new_quantity| ...` directly.
pub trait FulfillmentSink {
    fn commit(&mut self, order: &Order, new_quantity: i64) -> Result<(), CommitError>;
}

impl<F> FulfillmentSink for F
where
    F: FnMut(&Order, i64) -> Result<(), CommitError>,
{
    fn commit(&mut self, order: &Order, new_quantity: i64) -> Result<(), CommitError> {
        self(order, new_quantity)
    }
}

/// Outcome of a successful dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fulfillment {
    pub order: Order,
    /// Stock remaining for the item after the decrement; always >= 0.
    pub new_quantity: i64,
}

/// Pending entry: the order plus its submission sequence number.
///
/// Ordering is (priority, reversed sequence), so the heap pops the highest
/// priority first and breaks ties FIFO by submission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingOrder {
    order: Order,
    seq: u64,
}

impl Ord for PendingOrder {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order
            .priority
            .cmp(&other.order.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for PendingOrder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Holds pending fulfillment requests ordered by urgency.
///
/// Single-threaded and synchronous: each call runs to completion. The
/// stock check inside [`dispatch`](Self::dispatch) is made against the
/// caller-supplied snapshot, so a caller introducing concurrency must
/// serialize dispatches per item or accept the check/commit race.
#[derive(Debug, Clone, Default)]
pub struct OrderScheduler {
    pending: BinaryHeap<PendingOrder>,
    next_seq: u64,
}

impl OrderScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Insert `order` into the pending set.
    ///
    /// The only check is the positivity of the requested quantity; there is
    /// no capacity limit and no stock validation at submission time.
    pub fn submit(&mut self, order: Order) -> DispatchResult<()> {
        if order.quantity <= 0 {
            return Err(DispatchError::validation("order quantity must be positive"));
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(PendingOrder { order, seq });
        Ok(())
    }

    /// Pop the most urgent pending order and attempt to fulfill it against
    /// `stock`.
    ///
    /// The popped order is removed regardless of outcome: rejected orders
    /// are permanently dropped, never re-queued. On success the sink has
    /// been invoked with the order and the post-decrement quantity.
    pub fn dispatch<S>(&mut self, stock: &StockView, sink: &mut S) -> DispatchResult<Fulfillment>
    where
        S: FulfillmentSink + ?Sized,
    {
        let PendingOrder { order, .. } = self.pending.pop().ok_or(DispatchError::EmptyQueue)?;

        let available = stock
            .available(order.item_id)
            .ok_or(DispatchError::UnknownItem(order.item_id))?;

        if available < order.quantity {
            return Err(DispatchError::InsufficientStock {
                item_id: order.item_id,
                requested: order.quantity,
                available,
            });
        }

        let new_quantity = available - order.quantity;
        sink.commit(&order, new_quantity)
            .map_err(|e| DispatchError::CommitFailed(e.to_string()))?;

        Ok(Fulfillment {
            order,
            new_quantity,
        })
    }
}
