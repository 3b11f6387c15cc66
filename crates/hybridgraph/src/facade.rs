//! Convenience façades over [`GraphStore`].
//!
//! [`GraphList`] is list-shaped and backed by the adjacency table;
//! [`GraphMatrix`] is matrix-shaped, backed by the hybrid columnar structure,
//! and compacts before every read. Both apply the call-shape policy of the
//! creation options before reaching the engine:
//!
//! - `add_edge` (unweighted form) is rejected for [`GraphOption::Weighted`] graphs
//! - `add_weighted_edge` is rejected for [`GraphOption::Unweighted`] graphs
//! - undirected graphs store the reverse edge too, except for self-loops
//!
//! Failures are logged with `warn!` and returned to the caller.

use crate::context::GraphContext;
use crate::error::{GraphError, Result};
use crate::identity::{EdgeWeight, Stamped, VertexKey};
use crate::metadata::GraphFlavor;
use crate::options::{GraphCreationOptions, GraphOption};
use crate::storage::NeighborList;
use crate::store::GraphStore;
use log::warn;

/// List-shaped graph backed by the adjacency table.
#[derive(Debug, Clone)]
pub struct GraphList<V, W> {
    store: GraphStore<V, W>,
}

impl<V: VertexKey, W: EdgeWeight> GraphList<V, W> {
    /// Create a list graph with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] for contradictory options.
    pub fn new(options: &[GraphOption]) -> Result<Self> {
        Self::with_options(GraphCreationOptions::new(options))
    }

    /// Create a list graph from a prepared option set.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] for contradictory options.
    pub fn with_options(options: GraphCreationOptions) -> Result<Self> {
        let store = logged("create graph_list", GraphStore::new(GraphFlavor::List, options))?;
        Ok(Self { store })
    }

    /// Add a vertex.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexAlreadyExists`] if the vertex is present.
    pub fn add_vertex(&mut self, vertex: V) -> Result<()> {
        logged("add_vertex", self.store.add_vertex(vertex))
    }

    /// Add an unweighted edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] for weighted graphs, otherwise
    /// whatever the engine reports.
    pub fn add_edge(&mut self, src: &V, dest: &V) -> Result<()> {
        logged("add_edge", insert_edge(&mut self.store, src, dest, None))
    }

    /// Add a weighted edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] for unweighted graphs, otherwise
    /// whatever the engine reports.
    pub fn add_weighted_edge(&mut self, src: &V, dest: &V, weight: W) -> Result<()> {
        logged(
            "add_weighted_edge",
            insert_edge(&mut self.store, src, dest, Some(weight)),
        )
    }

    /// Weight of the `src -> dest` edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] or [`GraphError::EdgeNotFound`].
    pub fn get_edge(&self, src: &V, dest: &V) -> Result<W> {
        logged("get_edge", self.store.get_edge(src, dest))
    }

    /// Weight of the `src -> dest` edge, or `W::default()` on failure.
    pub fn get_edge_or_default(&self, src: &V, dest: &V) -> W {
        self.get_edge(src, dest).unwrap_or_default()
    }

    /// Outgoing `(neighbor, weight)` pairs in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if the vertex is absent.
    pub fn get_neighbors(&self, vertex: &V) -> Result<NeighborList<V, W>> {
        logged("get_neighbors", self.store.get_neighbors(vertex))
    }

    /// Graphviz DOT rendering of the graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InternalError`] if rendering fails.
    pub fn visualize(&self) -> Result<String> {
        logged("visualize", self.store.export_dot())
    }

    /// Stamp a payload with this graph's identity allocator.
    pub fn stamp<T>(&mut self, payload: T) -> Stamped<T> {
        self.store.stamp(payload)
    }

    /// The underlying engine.
    pub fn store(&self) -> &GraphStore<V, W> {
        &self.store
    }

    /// The owned context.
    pub fn context(&self) -> &GraphContext<V, W> {
        self.store.context()
    }
}

/// Matrix-shaped graph backed by the hybrid columnar structure.
///
/// Reads compact pending edges first, so they take `&mut self`.
#[derive(Debug, Clone)]
pub struct GraphMatrix<V, W> {
    store: GraphStore<V, W>,
}

impl<V: VertexKey, W: EdgeWeight> GraphMatrix<V, W> {
    /// Create a matrix graph with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] for contradictory options.
    pub fn new(options: &[GraphOption]) -> Result<Self> {
        Self::with_options(GraphCreationOptions::new(options))
    }

    /// Create a matrix graph from a prepared option set.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] for contradictory options.
    pub fn with_options(options: GraphCreationOptions) -> Result<Self> {
        let store = logged(
            "create graph_matrix",
            GraphStore::new(GraphFlavor::Matrix, options),
        )?;
        Ok(Self { store })
    }

    /// Add a vertex.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexAlreadyExists`] if the vertex is present.
    pub fn add_vertex(&mut self, vertex: V) -> Result<()> {
        logged("add_vertex", self.store.add_vertex(vertex))
    }

    /// Add an unweighted edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] for weighted graphs, otherwise
    /// whatever the engine reports.
    pub fn add_edge(&mut self, src: &V, dest: &V) -> Result<()> {
        logged("add_edge", insert_edge(&mut self.store, src, dest, None))
    }

    /// Add a weighted edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] for unweighted graphs, otherwise
    /// whatever the engine reports.
    pub fn add_weighted_edge(&mut self, src: &V, dest: &V, weight: W) -> Result<()> {
        logged(
            "add_weighted_edge",
            insert_edge(&mut self.store, src, dest, Some(weight)),
        )
    }

    /// Weight of the `src -> dest` edge, compacting first.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] or [`GraphError::EdgeNotFound`].
    pub fn get_edge(&mut self, src: &V, dest: &V) -> Result<W> {
        self.store.compact();
        logged("get_edge", self.store.get_edge(src, dest))
    }

    /// Weight of the `src -> dest` edge, or `W::default()` on failure.
    pub fn get_edge_or_default(&mut self, src: &V, dest: &V) -> W {
        self.get_edge(src, dest).unwrap_or_default()
    }

    /// Outgoing `(neighbor, weight)` pairs sorted by neighbor, compacting first.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if the vertex is absent.
    pub fn get_neighbors(&mut self, vertex: &V) -> Result<NeighborList<V, W>> {
        self.store.compact();
        logged("get_neighbors", self.store.get_neighbors(vertex))
    }

    /// Cell-style access to the `src -> dest` entry.
    pub fn edge(&mut self, src: V, dest: V) -> EdgeAccessor<'_, V, W> {
        EdgeAccessor {
            matrix: self,
            src,
            dest,
        }
    }

    /// Graphviz DOT rendering of the graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InternalError`] if rendering fails.
    pub fn visualize(&self) -> Result<String> {
        logged("visualize", self.store.export_dot())
    }

    /// Stamp a payload with this graph's identity allocator.
    pub fn stamp<T>(&mut self, payload: T) -> Stamped<T> {
        self.store.stamp(payload)
    }

    /// The underlying engine.
    pub fn store(&self) -> &GraphStore<V, W> {
        &self.store
    }

    /// The owned context.
    pub fn context(&self) -> &GraphContext<V, W> {
        self.store.context()
    }
}

/// Handle on one `src -> dest` cell of a [`GraphMatrix`].
pub struct EdgeAccessor<'a, V, W> {
    matrix: &'a mut GraphMatrix<V, W>,
    src: V,
    dest: V,
}

impl<V: VertexKey, W: EdgeWeight> EdgeAccessor<'_, V, W> {
    /// Store a weighted edge for this cell.
    ///
    /// # Errors
    ///
    /// Same as [`GraphMatrix::add_weighted_edge`].
    pub fn set(&mut self, weight: W) -> Result<()> {
        self.matrix.add_weighted_edge(&self.src, &self.dest, weight)
    }

    /// Weight stored for this cell.
    ///
    /// # Errors
    ///
    /// Same as [`GraphMatrix::get_edge`].
    pub fn get(&mut self) -> Result<W> {
        self.matrix.get_edge(&self.src, &self.dest)
    }
}

/// Apply the call-shape policy, then insert the edge and, for undirected
/// graphs, its reverse.
fn insert_edge<V: VertexKey, W: EdgeWeight>(
    store: &mut GraphStore<V, W>,
    src: &V,
    dest: &V,
    weight: Option<W>,
) -> Result<()> {
    let options = *store.options();
    let weight = match weight {
        Some(_) if options.has_option(GraphOption::Unweighted) => {
            return Err(GraphError::invalid_argument()
                .with_message("weighted edge added to a graph created Unweighted"));
        }
        None if options.has_option(GraphOption::Weighted) => {
            return Err(GraphError::invalid_argument()
                .with_message("unweighted edge added to a graph created Weighted"));
        }
        Some(weight) => weight,
        None => W::default(),
    };

    if options.is_directed() || src == dest {
        return store.add_edge(src, dest, weight);
    }
    store.add_edge(src, dest, weight.clone())?;
    store.add_edge(dest, src, weight)
}

fn logged<T>(operation: &str, result: Result<T>) -> Result<T> {
    if let Err(err) = &result {
        warn!("{operation} failed: {} ({})", err.code(), err.message());
    }
    result
}
