//! Inventory store collaborator.
//!
//! The dispatch core treats the store as external: it asks for a stock
//! snapshot, and on success hands the decrement back through a single
//! commit call. This crate defines that contract ([`InventoryStore`]) and
//! ships an in-memory implementation with an append-only audit log.

pub mod memory;
pub mod store;

pub use memory::{InMemoryInventoryStore, ItemRecord, TransactionKind, TransactionRecord};
pub use store::{InventoryStore, StoreError};
