//! Storage representation abstractions and implementations.
//!
//! This module defines the [`GraphStorage`] trait and provides three
//! interchangeable representations of the same logical graph:
//! - [`AdjacencyList`]: hash map from vertex to its ordered neighbor list
//! - [`CoordinateList`]: append-only parallel (source, destination, weight) log
//! - [`HybridCsrCoo`]: compacted sorted rows plus a COO staging buffer
//!
//! ## Design Philosophy
//!
//! - **Explicit Compaction**: staged edges are folded into the columnar rows
//!   only by [`HybridCsrCoo::compact`], never in the background
//! - **Fail Fast**: every operation returns a status, no silent failures
//! - **Permissive Shape**: representations accept self-loops and parallel
//!   edges; shape policy lives in [`GraphStore`](crate::store::GraphStore)

mod adjacency;
mod coordinate;
mod hybrid;

pub use adjacency::AdjacencyList;
pub use coordinate::CoordinateList;
pub use hybrid::HybridCsrCoo;

pub(crate) use coordinate::EdgeLog;

use crate::error::{GraphError, Result};
use crate::identity::{EdgeWeight, VertexKey};
use serde::{Deserialize, Serialize};

/// Owned `(neighbor, weight)` pairs of one vertex.
pub type NeighborList<V, W> = Vec<(V, W)>;

/// Owned `(source, destination, weight)` triple.
pub type EdgeTriple<V, W> = (V, V, W);

/// Tag naming one of the owned representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageKind {
    /// [`AdjacencyList`]
    Adjacency,
    /// [`CoordinateList`]
    Coordinate,
    /// [`HybridCsrCoo`]
    Hybrid,
}

impl std::fmt::Display for StorageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageKind::Adjacency => write!(f, "adjacency"),
            StorageKind::Coordinate => write!(f, "coordinate"),
            StorageKind::Hybrid => write!(f, "hybrid_csr_coo"),
        }
    }
}

/// Trait defining the representation interface.
///
/// All operations are synchronous and return [`Result`] for expected
/// conditions (missing vertex, missing edge, duplicate).
pub trait GraphStorage<V: VertexKey, W: EdgeWeight> {
    /// Which representation this is.
    fn kind(&self) -> StorageKind;

    /// Register a vertex.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexAlreadyExists`] if the identity is present.
    fn add_vertex(&mut self, vertex: V) -> Result<()>;

    /// Store a weighted edge.
    ///
    /// # Errors
    ///
    /// Representation-specific; typically [`GraphError::VertexNotFound`].
    fn add_edge(&mut self, src: &V, dest: &V, weight: W) -> Result<()>;

    /// Store an edge carrying `W::default()`.
    fn add_unweighted_edge(&mut self, src: &V, dest: &V) -> Result<()> {
        self.add_edge(src, dest, W::default())
    }

    /// Weight of the first edge from `src` to `dest`.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if either the vertex or the edge is absent.
    fn get_edge(&self, src: &V, dest: &V) -> Result<W>;

    /// Outgoing `(neighbor, weight)` pairs of `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if the vertex is absent.
    fn neighbors(&self, vertex: &V) -> Result<NeighborList<V, W>>;

    /// Whether the vertex identity is present.
    fn has_vertex(&self, vertex: &V) -> bool;

    /// Whether an edge `src -> dest` exists, optionally with a given weight.
    fn does_edge_exist(&self, src: &V, dest: &V, weight: Option<&W>) -> bool;

    /// Number of distinct vertices.
    fn vertex_count(&self) -> usize;

    /// Number of stored edge entries.
    fn edge_count(&self) -> usize;

    /// All vertices.
    fn vertices(&self) -> Vec<V>;

    /// All edges as `(source, destination, weight)` triples.
    fn edges(&self) -> Vec<EdgeTriple<V, W>>;

    /// Drop every vertex and edge.
    fn clear(&mut self);

    /// Remove a vertex and every incident edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Unimplemented`] unless the representation
    /// supports removal.
    fn remove_vertex(&mut self, vertex: &V) -> Result<()> {
        let _ = vertex;
        Err(GraphError::unimplemented()
            .with_message(format!("{} storage does not support vertex removal", self.kind())))
    }

    /// Remove the first edge `src -> dest`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Unimplemented`] unless the representation
    /// supports removal.
    fn remove_edge(&mut self, src: &V, dest: &V) -> Result<()> {
        let _ = (src, dest);
        Err(GraphError::unimplemented()
            .with_message(format!("{} storage does not support edge removal", self.kind())))
    }
}
