//! Single-source shortest distances over a shelf graph.
//!
//! Dijkstra's algorithm with an ordered frontier: a `BTreeSet` of
//! `(distance, shelf)` pairs, where decrease-key is performed by deleting
//! the stale pair and reinserting with the new distance. `O((E + V) log V)`
//! for the intended graph sizes (tens to low thousands of shelves).

use std::collections::{BTreeMap, BTreeSet};

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use wareflow_core::ShelfId;

use crate::graph::ShelfGraph;

/// Travel distance from the routing source to one shelf.
///
/// Distances are `u64` steps; weights are expected to be modest, and
/// summed overflow is outside the contract (the wide type is the guard,
/// there is no checked arithmetic on the relaxation loop).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Steps(u64),
    Unreachable,
}

impl Distance {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Distance::Steps(_))
    }
}

impl core::fmt::Display for Distance {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Distance::Steps(n) => write!(f, "{n}"),
            Distance::Unreachable => f.write_str("unreachable"),
        }
    }
}

// Serialized as a plain integer, or the string "unreachable" for the
// sentinel (never a raw infinity-like magic value).
impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Distance::Steps(n) => serializer.serialize_u64(*n),
            Distance::Unreachable => serializer.serialize_str("unreachable"),
        }
    }
}

impl<'de> Deserialize<'de> for Distance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DistanceVisitor;

        impl<'de> Visitor<'de> for DistanceVisitor {
            type Value = Distance;

            fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str("a non-negative integer or the string \"unreachable\"")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Distance, E> {
                Ok(Distance::Steps(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Distance, E> {
                u64::try_from(v)
                    .map(Distance::Steps)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Distance, E> {
                if v == "unreachable" {
                    Ok(Distance::Unreachable)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(v), &self))
                }
            }
        }

        deserializer.deserialize_any(DistanceVisitor)
    }
}

/// Shortest distances from a single source shelf.
///
/// Contains an entry for every shelf that appears as an edge endpoint in
/// the graph, plus the source itself even when it has no edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceTable {
    source: ShelfId,
    distances: BTreeMap<ShelfId, Distance>,
}

impl DistanceTable {
    pub fn source(&self) -> ShelfId {
        self.source
    }

    /// Distance to `shelf`, or `None` if the shelf never appeared in the
    /// graph (distinct from [`Distance::Unreachable`], which means the
    /// shelf exists but no path connects it to the source).
    pub fn distance(&self, shelf: ShelfId) -> Option<Distance> {
        self.distances.get(&shelf).copied()
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// All entries, ascending by shelf id.
    pub fn iter(&self) -> impl Iterator<Item = (ShelfId, Distance)> + '_ {
        self.distances.iter().map(|(shelf, d)| (*shelf, *d))
    }
}

const INFINITE: u64 = u64::MAX;

/// Compute shortest travel distances from `source` to every shelf in
/// `graph`.
///
/// Once a shelf is extracted from the frontier its recorded distance is
/// final (the standard invariant, guaranteed by [`ShelfGraph::add_edge`]
/// rejecting negative weights). Shelves with no path from `source` come
/// back as [`Distance::Unreachable`].
pub fn shortest_distances(graph: &ShelfGraph, source: ShelfId) -> DistanceTable {
    let mut dist: BTreeMap<ShelfId, u64> = graph.nodes().map(|n| (n, INFINITE)).collect();
    dist.insert(source, 0);

    // Frontier ordered by (distance, shelf); ties resolve by shelf id.
    // Only finite, current distances are ever inside it.
    let mut frontier: BTreeSet<(u64, ShelfId)> = BTreeSet::new();
    frontier.insert((0, source));

    while let Some((d, u)) = frontier.pop_first() {
        for &(v, w) in graph.neighbors(u) {
            let candidate = d + w;
            let known = dist.get(&v).copied().unwrap_or(INFINITE);
            if candidate < known {
                if known != INFINITE {
                    frontier.remove(&(known, v));
                }
                dist.insert(v, candidate);
                frontier.insert((candidate, v));
            }
        }
    }

    let distances = dist
        .into_iter()
        .map(|(shelf, d)| {
            let distance = if d == INFINITE {
                Distance::Unreachable
            } else {
                Distance::Steps(d)
            };
            (shelf, distance)
        })
        .collect();

    DistanceTable { source, distances }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn shelf(raw: u64) -> ShelfId {
        ShelfId::new(raw)
    }

    fn graph_of(edges: &[(u64, u64, i64)]) -> ShelfGraph {
        let mut graph = ShelfGraph::new();
        for (u, v, w) in edges {
            graph.add_edge(shelf(*u), shelf(*v), *w).unwrap();
        }
        graph
    }

    #[test]
    fn prefers_cheaper_indirect_path() {
        // 1 -> 2 -> 3 costs 5, beating the direct 1 -> 3 edge at 10.
        let graph = graph_of(&[(1, 2, 4), (2, 3, 1), (1, 3, 10)]);
        let table = shortest_distances(&graph, shelf(1));

        assert_eq!(table.distance(shelf(1)), Some(Distance::Steps(0)));
        assert_eq!(table.distance(shelf(2)), Some(Distance::Steps(4)));
        assert_eq!(table.distance(shelf(3)), Some(Distance::Steps(5)));
    }

    #[test]
    fn shelves_never_mentioned_have_no_entry() {
        let graph = graph_of(&[(1, 2, 4)]);
        let table = shortest_distances(&graph, shelf(1));

        assert_eq!(table.len(), 2);
        assert_eq!(table.distance(shelf(5)), None);
    }

    #[test]
    fn disconnected_component_is_unreachable() {
        let graph = graph_of(&[(1, 2, 3), (4, 5, 7)]);
        let table = shortest_distances(&graph, shelf(1));

        assert_eq!(table.distance(shelf(1)), Some(Distance::Steps(0)));
        assert_eq!(table.distance(shelf(2)), Some(Distance::Steps(3)));
        assert_eq!(table.distance(shelf(4)), Some(Distance::Unreachable));
        assert_eq!(table.distance(shelf(5)), Some(Distance::Unreachable));
    }

    #[test]
    fn source_outside_graph_still_gets_zero_entry() {
        let graph = graph_of(&[(1, 2, 4)]);
        let table = shortest_distances(&graph, shelf(9));

        assert_eq!(table.distance(shelf(9)), Some(Distance::Steps(0)));
        assert_eq!(table.distance(shelf(1)), Some(Distance::Unreachable));
        assert_eq!(table.distance(shelf(2)), Some(Distance::Unreachable));
    }

    #[test]
    fn source_distance_is_zero_even_with_self_loop() {
        let graph = graph_of(&[(1, 1, 5), (1, 2, 2)]);
        let table = shortest_distances(&graph, shelf(1));

        assert_eq!(table.distance(shelf(1)), Some(Distance::Steps(0)));
        assert_eq!(table.distance(shelf(2)), Some(Distance::Steps(2)));
    }

    #[test]
    fn duplicate_edges_do_not_change_distances() {
        let once = graph_of(&[(1, 2, 4), (2, 3, 1)]);
        let repeated = graph_of(&[(1, 2, 4), (1, 2, 4), (2, 3, 1), (2, 3, 1)]);

        assert_eq!(
            shortest_distances(&once, shelf(1)),
            shortest_distances(&repeated, shelf(1))
        );
    }

    #[test]
    fn zero_weight_edges_are_traversed() {
        let graph = graph_of(&[(1, 2, 0), (2, 3, 2)]);
        let table = shortest_distances(&graph, shelf(1));

        assert_eq!(table.distance(shelf(2)), Some(Distance::Steps(0)));
        assert_eq!(table.distance(shelf(3)), Some(Distance::Steps(2)));
    }

    #[test]
    fn distance_serializes_as_integer_or_sentinel_string() {
        let graph = graph_of(&[(1, 2, 3), (4, 5, 7)]);
        let table = shortest_distances(&graph, shelf(1));

        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["distances"]["2"], serde_json::json!(3));
        assert_eq!(json["distances"]["4"], serde_json::json!("unreachable"));

        let back: DistanceTable = serde_json::from_value(json).unwrap();
        assert_eq!(back, table);
    }

    /// Fixpoint relaxation over the undirected edge list. Slow but
    /// obviously correct; used as the oracle for the property tests.
    fn reference_distances(
        edges: &[(u64, u64, i64)],
        source: u64,
    ) -> BTreeMap<u64, Option<u64>> {
        let mut dist: BTreeMap<u64, Option<u64>> = BTreeMap::new();
        for (u, v, _) in edges {
            dist.insert(*u, None);
            dist.insert(*v, None);
        }
        dist.insert(source, Some(0));

        loop {
            let mut changed = false;
            for (u, v, w) in edges {
                let w = *w as u64;
                for (a, b) in [(*u, *v), (*v, *u)] {
                    if let Some(da) = dist[&a] {
                        let candidate = da + w;
                        if dist[&b].is_none_or(|db| candidate < db) {
                            dist.insert(b, Some(candidate));
                            changed = true;
                        }
                    }
                }
            }
            if !changed {
                break;
            }
        }
        dist
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the engine agrees with a fixpoint-relaxation oracle
        /// on every shelf, including unreachable ones.
        #[test]
        fn matches_reference_relaxation(
            edges in prop::collection::vec((0u64..10u64, 0u64..10u64, 0i64..25i64), 1..30),
            source in 0u64..10u64,
        ) {
            let graph = graph_of(&edges);
            let table = shortest_distances(&graph, shelf(source));
            let oracle = reference_distances(&edges, source);

            for (node, expected) in &oracle {
                let got = table.distance(shelf(*node));
                match expected {
                    Some(d) => prop_assert_eq!(got, Some(Distance::Steps(*d))),
                    None => prop_assert_eq!(got, Some(Distance::Unreachable)),
                }
            }
            prop_assert_eq!(table.len(), oracle.len());
        }

        /// Property: edge insertion order does not affect the result.
        #[test]
        fn insertion_order_does_not_matter(
            edges in prop::collection::vec((0u64..8u64, 0u64..8u64, 0i64..20i64), 1..20),
            source in 0u64..8u64,
        ) {
            let forward = graph_of(&edges);

            let mut reversed_edges = edges.clone();
            reversed_edges.reverse();
            let reversed = graph_of(&reversed_edges);

            prop_assert_eq!(
                shortest_distances(&forward, shelf(source)),
                shortest_distances(&reversed, shelf(source))
            );
        }
    }
}
