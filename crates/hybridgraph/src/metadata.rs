//! Aggregate graph metadata maintained by the orchestration layer.

use crate::storage::StorageKind;
use serde::{Deserialize, Serialize};

/// Which façade shape created the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphFlavor {
    /// Matrix-shaped graph, served by the compacted columnar structure
    Matrix,
    /// List-shaped graph, served by the adjacency table
    List,
}

impl GraphFlavor {
    /// Representation a graph of this flavor delegates to by default.
    pub fn default_storage(self) -> StorageKind {
        match self {
            GraphFlavor::Matrix => StorageKind::Hybrid,
            GraphFlavor::List => StorageKind::Adjacency,
        }
    }
}

impl std::fmt::Display for GraphFlavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphFlavor::Matrix => write!(f, "graph_matrix"),
            GraphFlavor::List => write!(f, "graph_list"),
        }
    }
}

/// Aggregate counters for one graph instance.
///
/// Counters only move after a representation confirms success. They are
/// maintained by [`crate::GraphStore`] alone, which exposes no removal, so
/// they never decrease.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphInternalMetadata {
    flavor: GraphFlavor,
    num_vertices: usize,
    num_edges: usize,
    num_self_loops: usize,
    num_parallel_edges: usize,
    density: f64,
    is_vertex_type_primitive: bool,
    is_edge_type_primitive: bool,
}

impl GraphInternalMetadata {
    /// Fresh metadata with zeroed counters.
    pub fn new(flavor: GraphFlavor, vertex_primitive: bool, edge_primitive: bool) -> Self {
        Self {
            flavor,
            num_vertices: 0,
            num_edges: 0,
            num_self_loops: 0,
            num_parallel_edges: 0,
            density: 0.0,
            is_vertex_type_primitive: vertex_primitive,
            is_edge_type_primitive: edge_primitive,
        }
    }

    /// Façade shape tag.
    pub fn flavor(&self) -> GraphFlavor {
        self.flavor
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Number of stored directed edge entries.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Number of edges whose source equals their destination.
    pub fn num_self_loops(&self) -> usize {
        self.num_self_loops
    }

    /// Number of edges added on top of an existing edge for the same pair.
    pub fn num_parallel_edges(&self) -> usize {
        self.num_parallel_edges
    }

    /// `E / (V * (V - 1))`, or 0 with fewer than two vertices.
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Whether vertices are value types.
    pub fn is_vertex_type_primitive(&self) -> bool {
        self.is_vertex_type_primitive
    }

    /// Whether edge weights are value types.
    pub fn is_edge_type_primitive(&self) -> bool {
        self.is_edge_type_primitive
    }

    pub(crate) fn record_vertex(&mut self) {
        self.num_vertices += 1;
        self.refresh_density();
    }

    pub(crate) fn record_edge(&mut self, self_loop: bool, parallel: bool) {
        self.num_edges += 1;
        if self_loop {
            self.num_self_loops += 1;
        }
        if parallel {
            self.num_parallel_edges += 1;
        }
        self.refresh_density();
    }

    pub(crate) fn sync_vertex_count(&mut self, count: usize) {
        if count > self.num_vertices {
            self.num_vertices = count;
            self.refresh_density();
        }
    }

    fn refresh_density(&mut self) {
        let v = self.num_vertices as f64;
        self.density = if self.num_vertices < 2 {
            0.0
        } else {
            self.num_edges as f64 / (v * (v - 1.0))
        };
    }
}
