//! Dijkstra shortest-path queries over a [`RoadNetwork`].
//!
//! # Determinism
//!
//! The frontier is a min-heap keyed on `(cost, NodeId)`, neighbours are
//! relaxed in ascending `NodeId` order, and a node's predecessor is replaced
//! only on a strict improvement.  Since `NodeId`s follow string order, two
//! equal-cost paths always resolve to the same route for the same network.
//!
//! # Point-to-point vs. tree
//!
//! [`RoadNetwork::shortest_time`] and [`RoadNetwork::shortest_path`] stop as
//! soon as the destination is settled.  [`RoadNetwork::shortest_paths_from`]
//! runs to exhaustion and returns a [`ShortestPathTree`] answering both
//! questions for every destination; it settles nodes in exactly the same
//! order, so its answers match the point-to-point queries.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;

use rd_core::{EdgeId, NodeId};

use crate::network::RoadNetwork;
use crate::NetworkResult;

// ── Public queries ────────────────────────────────────────────────────────────

impl RoadNetwork {
    /// Minimum travel time in minutes from `start` to `end`.
    ///
    /// Returns `f64::INFINITY` if `end` is unreachable, and
    /// [`NetworkError::NodeNotFound`](crate::NetworkError::NodeNotFound) if
    /// either endpoint is not in the network.
    pub fn shortest_time(&self, start: &str, end: &str) -> NetworkResult<f64> {
        let from = self.require_node(start)?;
        let to   = self.require_node(end)?;
        let search = dijkstra(self, from, Some(to));
        Ok(search.dist[to.index()])
    }

    /// Node ids along a minimum-time route from `start` to `end`, both
    /// inclusive.
    ///
    /// Returns an empty `Vec` if `end` is unreachable or either endpoint is
    /// unknown; callers must check for emptiness.
    pub fn shortest_path(&self, start: &str, end: &str) -> Vec<String> {
        let (Some(from), Some(to)) = (self.node_id(start), self.node_id(end)) else {
            return Vec::new();
        };
        let search = dijkstra(self, from, Some(to));
        search.path_names(self, to)
    }

    /// Single-source Dijkstra from `start` to every node.
    pub fn shortest_paths_from(&self, start: &str) -> NetworkResult<ShortestPathTree<'_>> {
        let source = self.require_node(start)?;
        let search = dijkstra(self, source, None);
        Ok(ShortestPathTree { network: self, source, search })
    }
}

// ── ShortestPathTree ──────────────────────────────────────────────────────────

/// Result of a full single-source search: travel time and route from the
/// source to any node of the network it borrows.
#[derive(Debug)]
pub struct ShortestPathTree<'a> {
    network: &'a RoadNetwork,
    source:  NodeId,
    search:  Search,
}

impl<'a> ShortestPathTree<'a> {
    pub fn source(&self) -> &'a str {
        self.network.node_name(self.source)
    }

    /// Travel time to `node`; `f64::INFINITY` if unreachable, `None` if the
    /// node is not in the network.
    pub fn time_to(&self, node: &str) -> Option<f64> {
        self.network
            .node_id(node)
            .map(|id| self.search.dist[id.index()])
    }

    /// Route to `node`, source and destination inclusive.  Empty if the node
    /// is unreachable or unknown.
    pub fn path_to(&self, node: &str) -> Vec<String> {
        match self.network.node_id(node) {
            Some(id) => self.search.path_names(self.network, id),
            None     => Vec::new(),
        }
    }

    /// Number of nodes with a finite travel time (the source included).
    pub fn reachable_count(&self) -> usize {
        self.search.dist.iter().filter(|d| d.is_finite()).count()
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

#[derive(Debug)]
struct Search {
    /// dist[v] = best known cost (minutes) to reach v.
    dist:      Vec<f64>,
    /// prev_edge[v] = EdgeId that reached v; EdgeId::INVALID for the source
    /// and unreached nodes.
    prev_edge: Vec<EdgeId>,
}

impl Search {
    fn path_names(&self, network: &RoadNetwork, to: NodeId) -> Vec<String> {
        if !self.dist[to.index()].is_finite() {
            return Vec::new();
        }
        let mut nodes = vec![to];
        let mut cur = to;
        loop {
            let e = self.prev_edge[cur.index()];
            if !e.is_valid() {
                break;
            }
            cur = network.edge_from[e.index()];
            nodes.push(cur);
        }
        nodes
            .into_iter()
            .rev()
            .map(|n| network.node_name(n).to_owned())
            .collect()
    }
}

/// Dijkstra from `from`.  With `target = Some(t)` the search stops once `t`
/// is settled; `dist[t]` is final at that point, other entries may not be.
fn dijkstra(network: &RoadNetwork, from: NodeId, target: Option<NodeId>) -> Search {
    let n = network.node_count();
    let mut dist      = vec![f64::INFINITY; n];
    let mut prev_edge = vec![EdgeId::INVALID; n];
    let mut settled   = vec![false; n];

    dist[from.index()] = 0.0;

    // Reverse turns the max-heap into a min-heap; NodeId breaks cost ties.
    let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((OrderedFloat(0.0), from)));

    while let Some(Reverse((OrderedFloat(cost), node))) = heap.pop() {
        if settled[node.index()] {
            continue;
        }
        settled[node.index()] = true;

        if Some(node) == target {
            break;
        }

        for edge in network.out_edges(node) {
            let neighbor = network.edge_to[edge.index()];
            if settled[neighbor.index()] {
                continue;
            }
            let new_cost = cost + network.edge_minutes[edge.index()];
            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev_edge[neighbor.index()] = edge;
                heap.push(Reverse((OrderedFloat(new_cost), neighbor)));
            }
        }
    }

    Search { dist, prev_edge }
}
