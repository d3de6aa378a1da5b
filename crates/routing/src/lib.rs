//! Shelf-to-shelf routing.
//!
//! The routing half of the warehouse core: an undirected weighted
//! connectivity graph over shelf identifiers, plus single-source shortest
//! distances over it. Read-only computation over caller-owned input: each
//! routing session builds its own [`ShelfGraph`], so concurrent sessions
//! never share state.

pub mod engine;
pub mod graph;

pub use engine::{Distance, DistanceTable, shortest_distances};
pub use graph::{RoutingError, ShelfGraph};
