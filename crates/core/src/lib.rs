//! `wareflow-core` — shared warehouse domain primitives.
//!
//! Strongly-typed identifiers and the stock snapshot model. This crate is
//! **pure domain** (no IO, no logging); the store and any outer surfaces
//! build on top of it.

pub mod id;
pub mod stock;

pub use id::{ItemId, ParseIdError, ShelfId};
pub use stock::{LOW_STOCK_THRESHOLD, StockView};
