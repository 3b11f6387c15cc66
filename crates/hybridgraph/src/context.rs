//! Per-graph ownership object.
//!
//! A [`GraphContext`] exclusively owns the metadata, the creation options, the
//! identity allocator and one instance of every representation. Which
//! representation serves requests is recorded as a [`StorageKind`] tag.

use crate::identity::{EdgeWeight, IdentityAllocator, VertexKey};
use crate::metadata::{GraphFlavor, GraphInternalMetadata};
use crate::options::GraphCreationOptions;
use crate::storage::{AdjacencyList, CoordinateList, GraphStorage, HybridCsrCoo, StorageKind};
use log::debug;

/// Everything one graph instance owns.
#[derive(Debug, Clone)]
pub struct GraphContext<V, W> {
    metadata: GraphInternalMetadata,
    options: GraphCreationOptions,
    identities: IdentityAllocator,
    adjacency: AdjacencyList<V, W>,
    coordinate: CoordinateList<V, W>,
    hybrid: HybridCsrCoo<V, W>,
    active: StorageKind,
}

impl<V: VertexKey, W: EdgeWeight> GraphContext<V, W> {
    /// Create a context routed to the flavor's default representation.
    pub fn new(flavor: GraphFlavor, options: GraphCreationOptions) -> Self {
        Self::with_storage(flavor, options, flavor.default_storage())
    }

    /// Create a context routed to an explicit representation.
    pub fn with_storage(
        flavor: GraphFlavor,
        options: GraphCreationOptions,
        active: StorageKind,
    ) -> Self {
        debug!("Creating context: flavor={flavor}, active={active}, options={options}");
        Self {
            metadata: GraphInternalMetadata::new(flavor, V::IS_PRIMITIVE, W::IS_PRIMITIVE),
            options,
            identities: IdentityAllocator::new(),
            adjacency: AdjacencyList::new(),
            coordinate: CoordinateList::new(),
            hybrid: HybridCsrCoo::new(),
            active,
        }
    }

    /// Tag of the representation serving requests.
    pub fn active_kind(&self) -> StorageKind {
        self.active
    }

    /// The representation serving requests.
    pub fn active(&self) -> &dyn GraphStorage<V, W> {
        self.storage(self.active)
    }

    /// Mutable access to the representation serving requests.
    pub fn active_mut(&mut self) -> &mut dyn GraphStorage<V, W> {
        self.storage_mut(self.active)
    }

    /// Any owned representation, by tag.
    pub fn storage(&self, kind: StorageKind) -> &dyn GraphStorage<V, W> {
        match kind {
            StorageKind::Adjacency => &self.adjacency,
            StorageKind::Coordinate => &self.coordinate,
            StorageKind::Hybrid => &self.hybrid,
        }
    }

    /// Mutable access to any owned representation, by tag.
    pub fn storage_mut(&mut self, kind: StorageKind) -> &mut dyn GraphStorage<V, W> {
        match kind {
            StorageKind::Adjacency => &mut self.adjacency,
            StorageKind::Coordinate => &mut self.coordinate,
            StorageKind::Hybrid => &mut self.hybrid,
        }
    }

    /// The adjacency table.
    pub fn adjacency(&self) -> &AdjacencyList<V, W> {
        &self.adjacency
    }

    /// The coordinate log.
    pub fn coordinate(&self) -> &CoordinateList<V, W> {
        &self.coordinate
    }

    /// The hybrid columnar structure.
    pub fn hybrid(&self) -> &HybridCsrCoo<V, W> {
        &self.hybrid
    }

    pub(crate) fn hybrid_mut(&mut self) -> &mut HybridCsrCoo<V, W> {
        &mut self.hybrid
    }

    /// Rebuild the hybrid structure from the adjacency table.
    pub(crate) fn rebuild_hybrid_from_adjacency(&mut self) {
        self.hybrid.populate_from_adjacency(&self.adjacency);
    }

    /// Aggregate counters.
    pub fn metadata(&self) -> &GraphInternalMetadata {
        &self.metadata
    }

    pub(crate) fn metadata_mut(&mut self) -> &mut GraphInternalMetadata {
        &mut self.metadata
    }

    /// Creation options, fixed for the life of the graph.
    pub fn options(&self) -> &GraphCreationOptions {
        &self.options
    }

    /// The identity allocator owned by this graph.
    pub fn identities(&self) -> &IdentityAllocator {
        &self.identities
    }

    /// Mutable access to the identity allocator.
    pub fn identities_mut(&mut self) -> &mut IdentityAllocator {
        &mut self.identities
    }
}
