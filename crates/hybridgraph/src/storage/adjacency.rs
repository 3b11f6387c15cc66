//! Hash-based adjacency representation.
//!
//! O(1) vertex existence, O(out-degree) edge lookup, O(1) amortized mutation.

use super::{EdgeTriple, GraphStorage, NeighborList, StorageKind};
use crate::error::{GraphError, Result};
use crate::identity::{EdgeWeight, VertexKey};
use log::trace;
use std::collections::HashMap;

/// Map from vertex to its ordered `(neighbor, weight)` list.
///
/// Edges are appended without deduplication; insertion order is preserved
/// per vertex. Removal is not supported by this representation.
#[derive(Debug, Clone)]
pub struct AdjacencyList<V, W> {
    adjacency: HashMap<V, Vec<(V, W)>>,
    num_edges: usize,
}

impl<V: VertexKey, W: EdgeWeight> AdjacencyList<V, W> {
    /// Create an empty adjacency table.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
            num_edges: 0,
        }
    }

    /// Borrowed view of a vertex's neighbor list.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if the vertex is absent.
    pub fn neighbor_slice(&self, vertex: &V) -> Result<&[(V, W)]> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or_else(GraphError::vertex_not_found)
    }

    /// Iterate over `(vertex, neighbors)` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &[(V, W)])> {
        self.adjacency.iter().map(|(v, list)| (v, list.as_slice()))
    }
}

impl<V: VertexKey, W: EdgeWeight> Default for AdjacencyList<V, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexKey, W: EdgeWeight> GraphStorage<V, W> for AdjacencyList<V, W> {
    fn kind(&self) -> StorageKind {
        StorageKind::Adjacency
    }

    fn add_vertex(&mut self, vertex: V) -> Result<()> {
        if self.adjacency.contains_key(&vertex) {
            return Err(GraphError::vertex_already_exists());
        }
        trace!("adjacency: add vertex {}", vertex.label());
        self.adjacency.insert(vertex, Vec::new());
        Ok(())
    }

    fn add_edge(&mut self, src: &V, dest: &V, weight: W) -> Result<()> {
        if !self.adjacency.contains_key(dest) {
            return Err(GraphError::vertex_not_found());
        }
        let list = self
            .adjacency
            .get_mut(src)
            .ok_or_else(GraphError::vertex_not_found)?;
        list.push((dest.clone(), weight));
        self.num_edges += 1;
        Ok(())
    }

    fn get_edge(&self, src: &V, dest: &V) -> Result<W> {
        let list = self
            .adjacency
            .get(src)
            .ok_or_else(GraphError::vertex_not_found)?;
        list.iter()
            .find(|(neighbor, _)| neighbor == dest)
            .map(|(_, weight)| weight.clone())
            .ok_or_else(GraphError::edge_not_found)
    }

    fn neighbors(&self, vertex: &V) -> Result<NeighborList<V, W>> {
        self.neighbor_slice(vertex).map(<[(V, W)]>::to_vec)
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn does_edge_exist(&self, src: &V, dest: &V, weight: Option<&W>) -> bool {
        let Some(list) = self.adjacency.get(src) else {
            return false;
        };
        list.iter().any(|(neighbor, w)| {
            neighbor == dest && weight.map_or(true, |expected| w == expected)
        })
    }

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.num_edges
    }

    fn vertices(&self) -> Vec<V> {
        let mut vertices: Vec<V> = self.adjacency.keys().cloned().collect();
        vertices.sort();
        vertices
    }

    fn edges(&self) -> Vec<EdgeTriple<V, W>> {
        let mut edges = Vec::with_capacity(self.num_edges);
        for src in self.vertices() {
            if let Some(list) = self.adjacency.get(&src) {
                for (dest, weight) in list {
                    edges.push((src.clone(), dest.clone(), weight.clone()));
                }
            }
        }
        edges
    }

    fn clear(&mut self) {
        self.adjacency.clear();
        self.num_edges = 0;
    }
}
