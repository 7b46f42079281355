//! Road network representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! Every undirected road is stored as two directed edges.  Edge arrays are
//! sorted by `(source, destination, minutes)`, so a node's neighbours are
//! scanned in ascending `NodeId` order.
//!
//! # Node ids
//!
//! Callers name nodes with strings ("A", "H1", ...).  [`RoadNetworkBuilder::build`]
//! assigns `NodeId`s in lexicographic order of those strings, which makes
//! every routing tie-break independent of the order nodes and roads were
//! added in.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use rd_core::{EdgeId, NodeId};

use crate::{NetworkError, NetworkResult};

/// Longest accepted single-road travel time in minutes.  A route has fewer
/// than `u32::MAX` edges, so sums of accepted weights stay finite.
pub const MAX_ROAD_MINUTES: f64 = 1.0e9;

// ── RoadNetwork ───────────────────────────────────────────────────────────────

/// Undirected road graph in CSR format, weighted by travel minutes.
///
/// Immutable once built; share it behind an `Arc` between snapshots.  Do not
/// construct directly; use [`RoadNetworkBuilder`].
#[derive(Debug, Clone)]
pub struct RoadNetwork {
    // ── Node data ─────────────────────────────────────────────────────────
    /// String id of each node, indexed by `NodeId`.  Sorted ascending.
    names: Vec<String>,

    /// Reverse lookup from string id to `NodeId`.
    index: FxHashMap<String, NodeId>,

    // ── CSR edge adjacency ────────────────────────────────────────────────
    /// CSR row pointer.  Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    // ── Edge data (indexed by EdgeId) ─────────────────────────────────────
    /// Source node of each directed edge.  Used to walk predecessor edges
    /// back to the source during path reconstruction.
    pub edge_from: Vec<NodeId>,

    /// Destination node of each directed edge.
    pub edge_to: Vec<NodeId>,

    /// Travel time of each directed edge in minutes.
    pub edge_minutes: Vec<f64>,
}

impl RoadNetwork {
    /// Construct an empty network with no nodes or roads.
    pub fn empty() -> Self {
        Self {
            names:          Vec::new(),
            index:          FxHashMap::default(),
            node_out_start: vec![0],
            edge_from:      Vec::new(),
            edge_to:        Vec::new(),
            edge_minutes:   Vec::new(),
        }
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Number of directed edges (two per road, one per self-loop).
    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    // ── Node lookup ───────────────────────────────────────────────────────

    #[inline]
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// Like [`node_id`](Self::node_id) but reports a missing node as
    /// [`NetworkError::NodeNotFound`].
    pub fn require_node(&self, name: &str) -> NetworkResult<NodeId> {
        self.node_id(name)
            .ok_or_else(|| NetworkError::NodeNotFound(name.to_owned()))
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// String id of `node`.
    ///
    /// # Panics
    /// Panics if `node` did not come from this network.
    #[inline]
    pub fn node_name(&self, node: NodeId) -> &str {
        &self.names[node.index()]
    }

    /// All node ids in ascending order.
    pub fn node_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    /// Cheapest direct travel time from `from` to `to`, if a road joins them.
    ///
    /// Parallel roads between the same pair are allowed; the minimum wins.
    pub fn edge_minutes_between(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.out_edges(from)
            .filter(|e| self.edge_to[e.index()] == to)
            .map(|e| self.edge_minutes[e.index()])
            .reduce(f64::min)
    }
}

// ── RoadNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`RoadNetwork`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use rd_network::RoadNetworkBuilder;
///
/// let mut b = RoadNetworkBuilder::new();
/// b.add_node("A");
/// b.add_edge("A", "H1", 4.5).unwrap(); // "H1" is created implicitly
/// let net = b.build().unwrap();
/// assert_eq!(net.node_count(), 2);
/// assert_eq!(net.edge_count(), 2); // both directions
/// ```
#[derive(Debug, Default)]
pub struct RoadNetworkBuilder {
    nodes: BTreeSet<String>,
    roads: Vec<RawRoad>,
}

#[derive(Debug)]
struct RawRoad {
    a:       String,
    b:       String,
    minutes: f64,
}

impl RoadNetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node.  Returns `false` (and changes nothing) if it already exists.
    pub fn add_node(&mut self, name: &str) -> bool {
        if self.nodes.contains(name) {
            return false;
        }
        self.nodes.insert(name.to_owned())
    }

    pub fn add_nodes<'a, I>(&mut self, names: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for name in names {
            self.add_node(name);
        }
    }

    /// Add an undirected road of `minutes` travel time between `a` and `b`.
    ///
    /// Endpoints that were never added are created implicitly.  Fails with
    /// [`NetworkError::InvalidWeight`] if `minutes` is NaN or outside
    /// `0.0..=MAX_ROAD_MINUTES`; nothing is added in that case.
    pub fn add_edge(&mut self, a: &str, b: &str, minutes: f64) -> NetworkResult<()> {
        if !(0.0..=MAX_ROAD_MINUTES).contains(&minutes) {
            return Err(NetworkError::InvalidWeight {
                from: a.to_owned(),
                to:   b.to_owned(),
                minutes,
            });
        }
        self.add_node(a);
        self.add_node(b);
        self.roads.push(RawRoad { a: a.to_owned(), b: b.to_owned(), minutes });
        Ok(())
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.nodes.contains(name)
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn road_count(&self) -> usize { self.roads.len() }

    /// Consume the builder and produce a [`RoadNetwork`].
    ///
    /// Fails with [`NetworkError::TooLarge`] if the nodes or directed edges
    /// do not fit the `u32` id space (`u32::MAX` itself is the `INVALID`
    /// sentinel).
    ///
    /// Time complexity: O(N log N + E log E).
    pub fn build(self) -> NetworkResult<RoadNetwork> {
        let edge_total = self.roads.len().saturating_mul(2);
        if self.nodes.len() >= u32::MAX as usize || edge_total >= u32::MAX as usize {
            return Err(NetworkError::TooLarge {
                nodes: self.nodes.len(),
                roads: self.roads.len(),
            });
        }

        // BTreeSet iteration is sorted, so NodeIds follow string order.
        let names: Vec<String> = self.nodes.into_iter().collect();
        let mut index: FxHashMap<String, NodeId> = FxHashMap::default();
        index.reserve(names.len());
        for (i, name) in names.iter().enumerate() {
            let id = NodeId::try_from(i).map_err(|_| NetworkError::TooLarge {
                nodes: names.len(),
                roads: self.roads.len(),
            })?;
            index.insert(name.clone(), id);
        }
        debug_assert_eq!(index.len(), names.len());

        // Expand each road into directed edges.
        let mut directed: Vec<(NodeId, NodeId, f64)> = Vec::with_capacity(self.roads.len() * 2);
        for road in &self.roads {
            let a = index[road.a.as_str()];
            let b = index[road.b.as_str()];
            directed.push((a, b, road.minutes));
            if a != b {
                directed.push((b, a, road.minutes));
            }
        }
        directed.sort_unstable_by(|x, y| {
            x.0.cmp(&y.0)
                .then(x.1.cmp(&y.1))
                .then(x.2.total_cmp(&y.2))
        });

        let node_count = names.len();
        let mut node_out_start = vec![0u32; node_count + 1];
        for &(from, _, _) in &directed {
            node_out_start[from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, directed.len());

        Ok(RoadNetwork {
            names,
            index,
            node_out_start,
            edge_from:    directed.iter().map(|e| e.0).collect(),
            edge_to:      directed.iter().map(|e| e.1).collect(),
            edge_minutes: directed.iter().map(|e| e.2).collect(),
        })
    }
}
