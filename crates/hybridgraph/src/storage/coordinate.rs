//! Coordinate (COO) representation.
//!
//! Edges live in three index-aligned sequences; appends are O(1), every query
//! is a full scan. The same log doubles as the staging buffer of
//! [`HybridCsrCoo`](super::HybridCsrCoo).

use super::{EdgeTriple, GraphStorage, NeighborList, StorageKind};
use crate::error::{GraphError, Result};
use crate::identity::{EdgeWeight, VertexKey};
use log::trace;
use std::collections::HashSet;

/// Three parallel sequences describing edge `i` as
/// `(sources[i], destinations[i], weights[i])`.
///
/// The sequences always have equal length.
#[derive(Debug, Clone)]
pub(crate) struct EdgeLog<V, W> {
    sources: Vec<V>,
    destinations: Vec<V>,
    weights: Vec<W>,
}

impl<V: VertexKey, W: EdgeWeight> EdgeLog<V, W> {
    pub(crate) fn new() -> Self {
        Self {
            sources: Vec::new(),
            destinations: Vec::new(),
            weights: Vec::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.sources.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub(crate) fn push(&mut self, src: V, dest: V, weight: W) {
        self.sources.push(src);
        self.destinations.push(dest);
        self.weights.push(weight);
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&V, &V, &W)> {
        self.sources
            .iter()
            .zip(self.destinations.iter())
            .zip(self.weights.iter())
            .map(|((s, d), w)| (s, d, w))
    }

    /// Index of the first `src -> dest` entry.
    pub(crate) fn position(&self, src: &V, dest: &V) -> Option<usize> {
        self.iter().position(|(s, d, _)| s == src && d == dest)
    }

    pub(crate) fn weight_at(&self, index: usize) -> &W {
        &self.weights[index]
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> EdgeTriple<V, W> {
        (
            self.sources.remove(index),
            self.destinations.remove(index),
            self.weights.remove(index),
        )
    }

    /// Keep only the entries for which `keep(src, dest)` holds.
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(&V, &V) -> bool) -> usize {
        let before = self.len();
        let entries = self.drain();
        for (src, dest, weight) in entries {
            if keep(&src, &dest) {
                self.push(src, dest, weight);
            }
        }
        before - self.len()
    }

    /// Move every entry out, leaving the log empty.
    pub(crate) fn drain(&mut self) -> Vec<EdgeTriple<V, W>> {
        let sources = std::mem::take(&mut self.sources);
        let destinations = std::mem::take(&mut self.destinations);
        let weights = std::mem::take(&mut self.weights);
        sources
            .into_iter()
            .zip(destinations)
            .zip(weights)
            .map(|((s, d), w)| (s, d, w))
            .collect()
    }

    pub(crate) fn clear(&mut self) {
        self.sources.clear();
        self.destinations.clear();
        self.weights.clear();
    }
}

/// Coordinate-list storage: an [`EdgeLog`] plus the set of known vertices.
///
/// Unlike [`AdjacencyList`](super::AdjacencyList), adding an edge registers
/// unknown endpoints instead of failing.
#[derive(Debug, Clone)]
pub struct CoordinateList<V, W> {
    log: EdgeLog<V, W>,
    vertices: HashSet<V>,
}

impl<V: VertexKey, W: EdgeWeight> CoordinateList<V, W> {
    /// Create an empty coordinate list.
    pub fn new() -> Self {
        Self {
            log: EdgeLog::new(),
            vertices: HashSet::new(),
        }
    }

    /// Whether at least one `src -> dest` edge is stored.
    pub fn has_edge(&self, src: &V, dest: &V) -> bool {
        self.log.position(src, dest).is_some()
    }

    /// Outgoing `(destination, weight)` pairs of `src`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if `src` is unknown.
    pub fn out_edges(&self, src: &V) -> Result<NeighborList<V, W>> {
        if !self.vertices.contains(src) {
            return Err(GraphError::vertex_not_found());
        }
        Ok(self
            .log
            .iter()
            .filter(|(s, _, _)| *s == src)
            .map(|(_, d, w)| (d.clone(), w.clone()))
            .collect())
    }

    /// Number of edges leaving `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if the vertex is unknown.
    pub fn out_degree(&self, vertex: &V) -> Result<usize> {
        if !self.vertices.contains(vertex) {
            return Err(GraphError::vertex_not_found());
        }
        Ok(self.log.iter().filter(|(s, _, _)| *s == vertex).count())
    }

    /// Number of edges entering `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if the vertex is unknown.
    pub fn in_degree(&self, vertex: &V) -> Result<usize> {
        if !self.vertices.contains(vertex) {
            return Err(GraphError::vertex_not_found());
        }
        Ok(self.log.iter().filter(|(_, d, _)| *d == vertex).count())
    }
}

impl<V: VertexKey, W: EdgeWeight> Default for CoordinateList<V, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexKey, W: EdgeWeight> GraphStorage<V, W> for CoordinateList<V, W> {
    fn kind(&self) -> StorageKind {
        StorageKind::Coordinate
    }

    fn add_vertex(&mut self, vertex: V) -> Result<()> {
        if self.vertices.contains(&vertex) {
            return Err(GraphError::vertex_already_exists());
        }
        trace!("coordinate: add vertex {}", vertex.label());
        self.vertices.insert(vertex);
        Ok(())
    }

    fn add_edge(&mut self, src: &V, dest: &V, weight: W) -> Result<()> {
        if !self.vertices.contains(src) {
            self.vertices.insert(src.clone());
        }
        if !self.vertices.contains(dest) {
            self.vertices.insert(dest.clone());
        }
        self.log.push(src.clone(), dest.clone(), weight);
        Ok(())
    }

    fn get_edge(&self, src: &V, dest: &V) -> Result<W> {
        self.log
            .position(src, dest)
            .map(|index| self.log.weight_at(index).clone())
            .ok_or_else(|| GraphError::not_found().with_message("Edge not found"))
    }

    fn neighbors(&self, vertex: &V) -> Result<NeighborList<V, W>> {
        self.out_edges(vertex)
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    fn does_edge_exist(&self, src: &V, dest: &V, weight: Option<&W>) -> bool {
        self.log.iter().any(|(s, d, w)| {
            s == src && d == dest && weight.map_or(true, |expected| w == expected)
        })
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.log.len()
    }

    fn vertices(&self) -> Vec<V> {
        let mut vertices: Vec<V> = self.vertices.iter().cloned().collect();
        vertices.sort();
        vertices
    }

    fn edges(&self) -> Vec<EdgeTriple<V, W>> {
        self.log
            .iter()
            .map(|(s, d, w)| (s.clone(), d.clone(), w.clone()))
            .collect()
    }

    fn clear(&mut self) {
        self.log.clear();
        self.vertices.clear();
    }

    fn remove_vertex(&mut self, vertex: &V) -> Result<()> {
        if !self.vertices.remove(vertex) {
            return Err(GraphError::vertex_not_found());
        }
        let stripped = self.log.retain(|s, d| s != vertex && d != vertex);
        trace!(
            "coordinate: removed vertex {} and {stripped} incident edges",
            vertex.label()
        );
        Ok(())
    }

    fn remove_edge(&mut self, src: &V, dest: &V) -> Result<()> {
        let index = self
            .log
            .position(src, dest)
            .ok_or_else(GraphError::edge_not_found)?;
        self.log.remove_at(index);
        Ok(())
    }
}
