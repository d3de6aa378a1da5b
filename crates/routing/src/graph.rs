//! Undirected weighted connectivity graph between storage shelves.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use wareflow_core::ShelfId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoutingError {
    /// The relaxation algorithm's correctness invariant assumes
    /// non-negative travel costs, so negative weights are rejected at the
    /// boundary instead of corrupting the computation.
    #[error("negative edge weight {weight} between shelves {from} and {to}")]
    NegativeWeight {
        from: ShelfId,
        to: ShelfId,
        weight: i64,
    },
}

/// Travel-cost graph over shelf identifiers.
///
/// Built fresh per routing session by adding edges; there is no removal.
/// Multi-edges and self-loops are allowed and kept as-is: duplicate
/// adjacency entries are harmless for shortest-path correctness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfGraph {
    adjacency: BTreeMap<ShelfId, Vec<(ShelfId, u64)>>,
}

impl ShelfGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `weight` as the travel cost between `from` and `to`, in
    /// both directions.
    pub fn add_edge(&mut self, from: ShelfId, to: ShelfId, weight: i64) -> Result<(), RoutingError> {
        if weight < 0 {
            return Err(RoutingError::NegativeWeight { from, to, weight });
        }
        let w = weight as u64;

        self.adjacency.entry(from).or_default().push((to, w));
        self.adjacency.entry(to).or_default().push((from, w));
        Ok(())
    }

    /// Whether `shelf` appears as an endpoint of some edge.
    pub fn contains(&self, shelf: ShelfId) -> bool {
        self.adjacency.contains_key(&shelf)
    }

    /// All shelves that appear as an endpoint of some edge, ascending.
    pub fn nodes(&self) -> impl Iterator<Item = ShelfId> + '_ {
        self.adjacency.keys().copied()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Adjacency entries for `shelf` (empty if the shelf is unknown).
    pub fn neighbors(&self, shelf: ShelfId) -> &[(ShelfId, u64)] {
        self.adjacency
            .get(&shelf)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
