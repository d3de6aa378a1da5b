//! Point-in-time stock snapshots and low-stock detection.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::id::ItemId;

/// Default threshold below which an item is flagged as low on stock.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// A point-in-time copy of available stock, keyed by item.
///
/// A snapshot is stale the moment it is produced. Callers own the refresh
/// cadence: fetch one snapshot per unit of work and re-fetch rather than
/// assuming freshness across operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockView {
    quantities: BTreeMap<ItemId, i64>,
}

impl StockView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Available quantity for `item_id`, or `None` if the item is unknown
    /// to the snapshot.
    pub fn available(&self, item_id: ItemId) -> Option<i64> {
        self.quantities.get(&item_id).copied()
    }

    pub fn set(&mut self, item_id: ItemId, quantity: i64) {
        self.quantities.insert(item_id, quantity);
    }

    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemId, i64)> + '_ {
        self.quantities.iter().map(|(id, qty)| (*id, *qty))
    }

    /// Items whose quantity is strictly below `threshold`.
    ///
    /// Pure function of the snapshot; see [`LOW_STOCK_THRESHOLD`] for the
    /// conventional cutoff.
    pub fn low_stock(&self, threshold: i64) -> BTreeSet<ItemId> {
        self.quantities
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(id, _)| *id)
            .collect()
    }
}

impl FromIterator<(ItemId, i64)> for StockView {
    fn from_iter<I: IntoIterator<Item = (ItemId, i64)>>(iter: I) -> Self {
        Self {
            quantities: iter.into_iter().collect(),
        }
    }
}
