//! In-memory inventory store: item records plus an append-only
//! transaction log.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use wareflow_core::{ItemId, StockView};

use crate::store::{InventoryStore, StoreError, StoreResult};

/// One item row: descriptive fields plus live stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub item_id: ItemId,
    pub name: String,
    pub category: String,
    pub vendor: String,
    pub stock: i64,
}

/// Direction of a stock movement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Incoming,
    Outgoing,
}

/// Audit record appended for every stock movement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub transaction_id: Uuid,
    pub item_id: ItemId,
    /// Signed delta: positive for incoming stock, negative for outgoing.
    pub quantity_delta: i64,
    pub kind: TransactionKind,
    /// Vendor for incoming stock, client for outgoing.
    pub party: String,
    pub occurred_at: DateTime<Utc>,
}

/// In-memory inventory store.
///
/// Single-threaded: each call runs to completion, so the stock update and
/// the audit append inside one call are atomic with respect to any other
/// call.
#[derive(Debug, Clone)]
pub struct InMemoryInventoryStore {
    items: BTreeMap<ItemId, ItemRecord>,
    transactions: Vec<TransactionRecord>,
    next_item_id: u64,
}

impl InMemoryInventoryStore {
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
            transactions: Vec::new(),
            next_item_id: 1,
        }
    }

    /// Register a new item and return its freshly assigned id.
    pub fn add_item(
        &mut self,
        name: &str,
        category: &str,
        initial_quantity: i64,
        vendor: &str,
    ) -> StoreResult<ItemId> {
        if name.trim().is_empty() {
            return Err(StoreError::validation("item name cannot be empty"));
        }
        if initial_quantity < 0 {
            return Err(StoreError::validation("initial quantity cannot be negative"));
        }

        let item_id = ItemId::new(self.next_item_id);
        self.next_item_id += 1;

        self.items.insert(
            item_id,
            ItemRecord {
                item_id,
                name: name.to_string(),
                category: category.to_string(),
                vendor: vendor.to_string(),
                stock: initial_quantity,
            },
        );
        info!(item_id = %item_id, name, "item added");
        Ok(item_id)
    }

    pub fn item(&self, item_id: ItemId) -> Option<&ItemRecord> {
        self.items.get(&item_id)
    }

    /// All item records, ascending by id.
    pub fn items(&self) -> impl Iterator<Item = &ItemRecord> {
        self.items.values()
    }

    /// Record incoming stock from `vendor`.
    pub fn record_incoming(
        &mut self,
        item_id: ItemId,
        quantity: i64,
        vendor: &str,
    ) -> StoreResult<()> {
        self.apply_movement(item_id, quantity, TransactionKind::Incoming, vendor)
    }

    /// Record outgoing stock to `client`.
    pub fn record_outgoing(
        &mut self,
        item_id: ItemId,
        quantity: i64,
        client: &str,
    ) -> StoreResult<()> {
        self.apply_movement(item_id, quantity, TransactionKind::Outgoing, client)
    }

    /// Transaction history, newest first.
    pub fn transactions(&self) -> impl Iterator<Item = &TransactionRecord> {
        self.transactions.iter().rev()
    }

    fn apply_movement(
        &mut self,
        item_id: ItemId,
        quantity: i64,
        kind: TransactionKind,
        party: &str,
    ) -> StoreResult<()> {
        if quantity <= 0 {
            return Err(StoreError::validation("movement quantity must be positive"));
        }

        let item = self
            .items
            .get_mut(&item_id)
            .ok_or(StoreError::ItemNotFound(item_id))?;

        let delta = match kind {
            TransactionKind::Incoming => quantity,
            TransactionKind::Outgoing => -quantity,
        };
        let new_stock = item.stock + delta;
        if new_stock < 0 {
            return Err(StoreError::InsufficientStock {
                item_id,
                requested: quantity,
                available: item.stock,
            });
        }

        item.stock = new_stock;
        self.push_transaction(item_id, delta, kind, party);
        Ok(())
    }

    fn push_transaction(
        &mut self,
        item_id: ItemId,
        quantity_delta: i64,
        kind: TransactionKind,
        party: &str,
    ) {
        info!(item_id = %item_id, delta = quantity_delta, kind = ?kind, party, "stock movement recorded");
        self.transactions.push(TransactionRecord {
            transaction_id: Uuid::now_v7(),
            item_id,
            quantity_delta,
            kind,
            party: party.to_string(),
            occurred_at: Utc::now(),
        });
    }
}

impl Default for InMemoryInventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryStore for InMemoryInventoryStore {
    fn stock_snapshot(&self) -> StockView {
        self.items
            .values()
            .map(|item| (item.item_id, item.stock))
            .collect()
    }

    fn commit_fulfillment(
        &mut self,
        item_id: ItemId,
        new_quantity: i64,
        quantity_delta: i64,
        party: &str,
    ) -> StoreResult<()> {
        if new_quantity < 0 {
            return Err(StoreError::validation("committed quantity cannot be negative"));
        }

        let item = self
            .items
            .get_mut(&item_id)
            .ok_or(StoreError::ItemNotFound(item_id))?;

        item.stock = new_quantity;
        self.push_transaction(item_id, quantity_delta, TransactionKind::Outgoing, party);
        Ok(())
    }
}
