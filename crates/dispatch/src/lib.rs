//! Priority-based order fulfillment.
//!
//! This crate contains the dispatch half of the warehouse core: pending
//! fulfillment requests ordered by urgency, popped one at a time and
//! checked against a stock snapshot. Deterministic domain logic only; the
//! actual stock mutation is delegated through the [`FulfillmentSink`] seam.

pub mod error;
pub mod order;
pub mod scheduler;

pub use error::DispatchError;
pub use order::Order;
pub use scheduler::{CommitError, Fulfillment, FulfillmentSink, OrderScheduler};
