//! Storage orchestration: the engine entry point.
//!
//! [`GraphStore`] owns a [`GraphContext`], enforces the shape policy from the
//! creation options, forwards every request to the active representation and
//! keeps the aggregate metadata in step with confirmed mutations.

use crate::context::GraphContext;
use crate::error::{GraphError, Result};
use crate::export::{self, DotOptions};
use crate::identity::{EdgeWeight, Stamped, VertexKey};
use crate::metadata::{GraphFlavor, GraphInternalMetadata};
use crate::options::{GraphCreationOptions, GraphOption};
use crate::storage::{NeighborList, StorageKind};
use log::{debug, info, trace};

/// Lifecycle of a store as seen by readers of the active representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphState {
    /// Nothing added yet
    Constructed,
    /// Holds vertices or edges; the hybrid representation may have staged edges
    Populated,
    /// Hybrid representation built with nothing staged
    Compacted,
}

/// The graph engine.
///
/// All operations are explicit: edges staged in the hybrid representation
/// become readable only after [`GraphStore::compact`].
#[derive(Debug, Clone)]
pub struct GraphStore<V, W> {
    context: GraphContext<V, W>,
}

impl<V: VertexKey, W: EdgeWeight> GraphStore<V, W> {
    /// Create a store routed to the flavor's default representation.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] for contradictory options.
    pub fn new(flavor: GraphFlavor, options: GraphCreationOptions) -> Result<Self> {
        Self::with_storage(flavor, options, flavor.default_storage())
    }

    /// Create a store routed to an explicit representation.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] for contradictory options.
    pub fn with_storage(
        flavor: GraphFlavor,
        options: GraphCreationOptions,
        kind: StorageKind,
    ) -> Result<Self> {
        options.validate()?;
        info!("Creating {flavor} store on {kind} storage with options {options}");
        Ok(Self {
            context: GraphContext::with_storage(flavor, options, kind),
        })
    }

    /// List-shaped store with default options.
    pub fn list() -> Self {
        Self {
            context: GraphContext::new(GraphFlavor::List, GraphCreationOptions::default()),
        }
    }

    /// Matrix-shaped store with default options.
    pub fn matrix() -> Self {
        Self {
            context: GraphContext::new(GraphFlavor::Matrix, GraphCreationOptions::default()),
        }
    }

    /// Add a vertex.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexAlreadyExists`] if the identity is present.
    pub fn add_vertex(&mut self, vertex: V) -> Result<()> {
        debug!("Adding vertex: {}", vertex.label());
        self.context.active_mut().add_vertex(vertex)?;
        self.context.metadata_mut().record_vertex();
        Ok(())
    }

    /// Add a weighted edge.
    ///
    /// # Errors
    ///
    /// Checked in this order, so the first failing rule decides the status:
    ///
    /// - [`GraphError::InvalidArgument`] for a self-loop without
    ///   [`GraphOption::SelfLoops`], even when the vertex is unknown
    /// - [`GraphError::EdgeAlreadyExists`] for a repeated pair without
    ///   [`GraphOption::ParallelEdges`]
    /// - whatever the active representation reports, such as
    ///   [`GraphError::VertexNotFound`]
    pub fn add_edge(&mut self, src: &V, dest: &V, weight: W) -> Result<()> {
        debug!("Adding edge: {} -> {}", src.label(), dest.label());

        let self_loop = src == dest;
        if self_loop && !self.options().has_option(GraphOption::SelfLoops) {
            return Err(GraphError::invalid_argument().with_message(format!(
                "self-loop on {} rejected: {} not set",
                src.label(),
                GraphOption::SelfLoops
            )));
        }

        let parallel = self.context.active().does_edge_exist(src, dest, None);
        if parallel && !self.options().has_option(GraphOption::ParallelEdges) {
            return Err(GraphError::edge_already_exists().with_message(format!(
                "edge {} -> {} already exists and {} not set",
                src.label(),
                dest.label(),
                GraphOption::ParallelEdges
            )));
        }

        self.context.active_mut().add_edge(src, dest, weight)?;

        let vertex_count = self.context.active().vertex_count();
        let metadata = self.context.metadata_mut();
        metadata.record_edge(self_loop, parallel);
        metadata.sync_vertex_count(vertex_count);
        trace!(
            "Edge stored: edges={}, density={:.4}",
            metadata.num_edges(),
            metadata.density()
        );
        Ok(())
    }

    /// Add an edge carrying `W::default()`.
    ///
    /// # Errors
    ///
    /// Same as [`GraphStore::add_edge`].
    pub fn add_unweighted_edge(&mut self, src: &V, dest: &V) -> Result<()> {
        self.add_edge(src, dest, W::default())
    }

    /// Weight of the first `src -> dest` edge.
    ///
    /// # Errors
    ///
    /// Propagates the active representation's status unchanged, including
    /// [`GraphError::InternalError`] from an uncompacted hybrid structure.
    pub fn get_edge(&self, src: &V, dest: &V) -> Result<W> {
        self.context.active().get_edge(src, dest)
    }

    /// Outgoing `(neighbor, weight)` pairs of `vertex`.
    ///
    /// # Errors
    ///
    /// Propagates the active representation's status unchanged.
    pub fn get_neighbors(&self, vertex: &V) -> Result<NeighborList<V, W>> {
        self.context.active().neighbors(vertex)
    }

    /// Whether `src -> dest` exists, optionally with a given weight.
    pub fn does_edge_exist(&self, src: &V, dest: &V, weight: Option<&W>) -> bool {
        self.context.active().does_edge_exist(src, dest, weight)
    }

    /// Whether the vertex is present in the active representation.
    pub fn has_vertex(&self, vertex: &V) -> bool {
        self.context.active().has_vertex(vertex)
    }

    /// Fold staged edges into the hybrid structure.
    ///
    /// Returns the number of edges folded in; 0 when another representation
    /// is active.
    pub fn compact(&mut self) -> usize {
        if self.context.active_kind() != StorageKind::Hybrid {
            return 0;
        }
        let folded = self.context.hybrid_mut().compact();
        debug!("Compaction folded {folded} staged edges");
        folded
    }

    /// Whether reads on the active representation need [`GraphStore::compact`] first.
    pub fn needs_compaction(&self) -> bool {
        self.context.active_kind() == StorageKind::Hybrid && !self.context.hybrid().is_compacted()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> GraphState {
        let active = self.context.active();
        if active.kind() == StorageKind::Hybrid && self.context.hybrid().is_compacted() {
            GraphState::Compacted
        } else if active.vertex_count() == 0 && active.edge_count() == 0 {
            GraphState::Constructed
        } else {
            GraphState::Populated
        }
    }

    /// Clear representation `kind` and replay the active one into it.
    ///
    /// A hybrid target is compacted afterwards. Mirroring into the active
    /// representation is a no-op.
    ///
    /// # Errors
    ///
    /// Propagates any status the target reports during replay.
    pub fn mirror_into(&mut self, kind: StorageKind) -> Result<()> {
        let active = self.context.active_kind();
        if kind == active {
            return Ok(());
        }
        info!("Mirroring {active} storage into {kind}");

        if active == StorageKind::Adjacency && kind == StorageKind::Hybrid {
            self.context.rebuild_hybrid_from_adjacency();
            return Ok(());
        }

        let vertices = self.context.active().vertices();
        let edges = self.context.active().edges();
        let target = self.context.storage_mut(kind);
        target.clear();
        for vertex in vertices {
            target.add_vertex(vertex)?;
        }
        for (src, dest, weight) in edges {
            target.add_edge(&src, &dest, weight)?;
        }
        if kind == StorageKind::Hybrid {
            self.context.hybrid_mut().compact();
        }
        Ok(())
    }

    /// Stamp a user payload with this graph's identity allocator.
    pub fn stamp<T>(&mut self, payload: T) -> Stamped<T> {
        self.context.identities_mut().stamp(payload)
    }

    /// Graphviz DOT text with default styling.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InternalError`] if rendering fails.
    pub fn export_dot(&self) -> Result<String> {
        export::export_dot(self)
    }

    /// Graphviz DOT text with custom styling.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InternalError`] if rendering fails.
    pub fn export_dot_styled(&self, options: DotOptions) -> Result<String> {
        export::export_dot_styled(self, options)
    }

    /// JSON with `nodes`, `links` and `metadata`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InternalError`] if serialization fails.
    pub fn export_json(&self) -> Result<String> {
        export::export_json(self)
    }

    /// The owned context.
    pub fn context(&self) -> &GraphContext<V, W> {
        &self.context
    }

    /// Aggregate counters.
    pub fn metadata(&self) -> &GraphInternalMetadata {
        self.context.metadata()
    }

    /// Creation options.
    pub fn options(&self) -> &GraphCreationOptions {
        self.context.options()
    }
}
