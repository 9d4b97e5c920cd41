//! Road graph representation and builder.
//!
//! # Data layout
//!
//! Outgoing-edge adjacency uses **Compressed Sparse Row (CSR)** format.
//! Given a `NodeId n`, its outgoing edges occupy the `EdgeId` range:
//!
//! ```text
//! node_out_start[n] .. node_out_start[n+1]
//! ```
//!
//! All edge arrays (`edge_from`, `edge_to`, `edge_waypoints`) are sorted by
//! source node and indexed by `EdgeId`, so a node's outgoing edges are a
//! contiguous index range — an O(1) lookup replacing the naive full-table
//! scan per query.
//!
//! Only edges with a non-empty waypoint polyline and known endpoints are
//! admitted; every `EdgeId` in the built graph is therefore a valid spawn
//! and routing candidate.  The graph is immutable after `build()`.

use rustc_hash::FxHashMap;

use vt_core::{EdgeId, NodeId, Point};

use crate::shape::parse_shape;
use crate::tables::{EdgeRecord, JunctionRecord};
use crate::NetworkResult;

// ── RoadNetwork ───────────────────────────────────────────────────────────────

/// Directed road graph in CSR format.
///
/// Array fields are `pub` for direct indexed access on hot paths.  Do not
/// construct directly; use [`RoadNetworkBuilder`].
#[derive(Debug)]
pub struct RoadNetwork {
    // ── Node data ─────────────────────────────────────────────────────────
    /// Original string identifier of each interned node.  Indexed by `NodeId`.
    pub node_names: Vec<String>,

    /// Junction position metadata, where the junctions table supplied one.
    /// Purely descriptive — vehicles move along edge waypoints, never nodes.
    pub node_pos: Vec<Option<Point>>,

    // ── CSR edge adjacency ────────────────────────────────────────────────
    /// CSR row pointer.  Outgoing edges of node `n` are at EdgeIds
    /// `node_out_start[n] .. node_out_start[n+1]`.  Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    // ── Edge data (indexed by EdgeId = position in sorted order) ──────────
    /// Source node of each edge.
    pub edge_from: Vec<NodeId>,

    /// Destination node of each edge.
    pub edge_to: Vec<NodeId>,

    /// Ordered waypoint polyline of each edge.  Always non-empty.
    pub edge_waypoints: Vec<Vec<Point>>,

    // ── Interning ─────────────────────────────────────────────────────────
    name_index: FxHashMap<String, NodeId>,
}

impl RoadNetwork {
    /// Construct an empty graph with no nodes or edges.  Every adjacency
    /// query on it returns an empty range.
    pub fn empty() -> Self {
        RoadNetworkBuilder::new().build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edge_to.is_empty()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// Out-degree of `node` (number of outgoing edges).
    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    /// The `k`-th outgoing edge of `node`.  Caller guarantees
    /// `k < out_degree(node)`.
    #[inline]
    pub fn out_edge(&self, node: NodeId, k: usize) -> EdgeId {
        EdgeId(self.node_out_start[node.index()] + k as u32)
    }

    // ── Edge accessors ────────────────────────────────────────────────────

    #[inline]
    pub fn edge_from(&self, edge: EdgeId) -> NodeId {
        self.edge_from[edge.index()]
    }

    #[inline]
    pub fn edge_to(&self, edge: EdgeId) -> NodeId {
        self.edge_to[edge.index()]
    }

    /// The ordered waypoint polyline of `edge`.  Never empty.
    #[inline]
    pub fn waypoints(&self, edge: EdgeId) -> &[Point] {
        &self.edge_waypoints[edge.index()]
    }

    // ── Node lookup ───────────────────────────────────────────────────────

    /// Resolve an original string node identifier to its interned `NodeId`.
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.name_index.get(name).copied()
    }

    /// The original string identifier of `node`.
    pub fn node_name(&self, node: NodeId) -> &str {
        &self.node_names[node.index()]
    }
}

// ── RoadNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`RoadNetwork`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts edge records and junction metadata in any order and
/// interns string node identifiers as it goes.  `build()` sorts edges by
/// source node and constructs the CSR arrays.
///
/// # Example
///
/// ```
/// use vt_core::Point;
/// use vt_network::RoadNetworkBuilder;
///
/// let mut b = RoadNetworkBuilder::new();
/// b.add_edge("a", "b", vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)]);
/// b.add_edge("b", "a", vec![Point::new(3.0, 4.0), Point::new(0.0, 0.0)]);
/// let net = b.build();
/// assert_eq!(net.node_count(), 2);
/// assert_eq!(net.edge_count(), 2);
/// ```
pub struct RoadNetworkBuilder {
    node_names: Vec<String>,
    node_pos:   Vec<Option<Point>>,
    name_index: FxHashMap<String, NodeId>,
    raw_edges:  Vec<RawEdge>,
}

struct RawEdge {
    from:      NodeId,
    to:        NodeId,
    waypoints: Vec<Point>,
}

impl RoadNetworkBuilder {
    pub fn new() -> Self {
        Self {
            node_names: Vec::new(),
            node_pos:   Vec::new(),
            name_index: FxHashMap::default(),
            raw_edges:  Vec::new(),
        }
    }

    /// Build a graph from flat tables in one call: all junction rows first
    /// (position metadata), then all edge rows.  Shape parse failures abort.
    pub fn from_records(
        edges:     &[EdgeRecord],
        junctions: &[JunctionRecord],
    ) -> NetworkResult<RoadNetwork> {
        let mut builder = RoadNetworkBuilder::new();
        for junction in junctions {
            builder.add_junction(&junction.id, Point::new(junction.x, junction.y));
        }
        for edge in edges {
            builder.add_edge_record(edge)?;
        }
        Ok(builder.build())
    }

    /// Intern `name`, returning its `NodeId` (existing or fresh).
    pub fn intern_node(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.name_index.get(name) {
            return id;
        }
        let id = NodeId(self.node_names.len() as u32);
        self.node_names.push(name.to_string());
        self.node_pos.push(None);
        self.name_index.insert(name.to_string(), id);
        id
    }

    /// Record junction position metadata for `name` (interning it if new).
    pub fn add_junction(&mut self, name: &str, pos: Point) -> NodeId {
        let id = self.intern_node(name);
        self.node_pos[id.index()] = Some(pos);
        id
    }

    /// Add a directed edge with an explicit waypoint polyline.
    ///
    /// Edges with an empty polyline are silently dropped — they cannot carry
    /// a vehicle.  Returns `true` if the edge was admitted.
    pub fn add_edge(&mut self, from: &str, to: &str, waypoints: Vec<Point>) -> bool {
        if waypoints.is_empty() || from.is_empty() || to.is_empty() {
            return false;
        }
        let from = self.intern_node(from);
        let to   = self.intern_node(to);
        self.raw_edges.push(RawEdge { from, to, waypoints });
        true
    }

    /// Add one edge-table row, parsing its shape string.
    ///
    /// Returns `Ok(false)` for rows dropped as unusable (empty shape or
    /// missing endpoint); fails on a malformed shape token.
    pub fn add_edge_record(&mut self, record: &EdgeRecord) -> NetworkResult<bool> {
        let waypoints = parse_shape(&record.shape)?;
        Ok(self.add_edge(&record.from, &record.to, waypoints))
    }

    pub fn node_count(&self) -> usize {
        self.node_names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.raw_edges.len()
    }

    /// Consume the builder and produce a [`RoadNetwork`].
    ///
    /// Time complexity: O(E log E) for the edge sort, where E = edges.
    /// The sort is stable so identical inputs always yield identical edge
    /// ordering (and therefore bit-identical simulation runs).
    pub fn build(self) -> RoadNetwork {
        let node_count = self.node_names.len();

        // Sort edges by source node for CSR construction.
        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        let mut node_out_start = vec![0u32; node_count + 1];
        for edge in &raw {
            node_out_start[edge.from.index() + 1] += 1;
        }
        for i in 1..node_out_start.len() {
            node_out_start[i] += node_out_start[i - 1];
        }

        let edge_from: Vec<NodeId> = raw.iter().map(|e| e.from).collect();
        let edge_to:   Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_waypoints: Vec<Vec<Point>> =
            raw.into_iter().map(|e| e.waypoints).collect();

        RoadNetwork {
            node_names: self.node_names,
            node_pos:   self.node_pos,
            node_out_start,
            edge_from,
            edge_to,
            edge_waypoints,
            name_index: self.name_index,
        }
    }
}

impl Default for RoadNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
