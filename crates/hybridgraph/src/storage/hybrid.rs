//! Hybrid columnar representation: compacted CSR rows plus a COO staging log.
//!
//! Layout after compaction:
//!
//! ```text
//! row_offsets : [usize; n + 1]   row i spans row_offsets[i]..row_offsets[i + 1]
//! col_values  : [V; E]           destinations, sorted ascending within a row
//! col_weights : [W; E]           weight paired with col_values[j]
//! ```
//!
//! New edges land in the staging log and become visible to lookups only after
//! [`HybridCsrCoo::compact`]. The first compaction builds the rows from
//! scratch; later ones merge staged edges into the touched rows and copy the
//! untouched rows verbatim.

use super::{EdgeLog, EdgeTriple, GraphStorage, NeighborList, StorageKind};
use crate::error::{GraphError, Result};
use crate::identity::{EdgeWeight, VertexKey};
use crate::storage::AdjacencyList;
use log::{debug, info, trace};
use std::collections::HashMap;

/// Compacted sorted rows paired with an append-only staging buffer.
#[derive(Debug, Clone)]
pub struct HybridCsrCoo<V, W> {
    row_offsets: Vec<usize>,
    col_values: Vec<V>,
    col_weights: Vec<W>,
    staged: EdgeLog<V, W>,
    vertex_order: Vec<V>,
    vertex_to_index: HashMap<V, usize>,
    // First compacted position of each (src, dest) pair
    edge_index: HashMap<(V, V), usize>,
    built: bool,
}

impl<V: VertexKey, W: EdgeWeight> HybridCsrCoo<V, W> {
    /// Create an empty, never-compacted structure.
    pub fn new() -> Self {
        Self {
            row_offsets: Vec::new(),
            col_values: Vec::new(),
            col_weights: Vec::new(),
            staged: EdgeLog::new(),
            vertex_order: Vec::new(),
            vertex_to_index: HashMap::new(),
            edge_index: HashMap::new(),
            built: false,
        }
    }

    /// Whether the rows have been built at least once.
    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Built and no staged edges pending.
    pub fn is_compacted(&self) -> bool {
        self.built && self.staged.is_empty()
    }

    /// Number of edges waiting in the staging log.
    pub fn staged_len(&self) -> usize {
        self.staged.len()
    }

    /// Row offsets of the compacted structure (empty before the first build).
    pub fn row_offsets(&self) -> &[usize] {
        &self.row_offsets
    }

    /// Compacted destinations and weights of `vertex`'s row.
    ///
    /// `None` if the vertex is unknown or the rows were never built.
    pub fn row(&self, vertex: &V) -> Option<(&[V], &[W])> {
        if !self.built {
            return None;
        }
        let row = *self.vertex_to_index.get(vertex)?;
        let (start, end) = self.span(row);
        Some((&self.col_values[start..end], &self.col_weights[start..end]))
    }

    /// Fold every staged edge into the compacted rows.
    ///
    /// Builds the rows on first use and merges incrementally afterwards.
    /// Returns the number of staged edges folded in.
    pub fn compact(&mut self) -> usize {
        let staged = self.staged.len();
        if !self.built {
            self.build();
        } else if staged > 0 {
            self.incremental_update();
        }
        staged
    }

    /// Reset and rebuild from an adjacency table.
    ///
    /// Vertices are assigned rows in ascending key order.
    pub fn populate_from_adjacency(&mut self, adjacency: &AdjacencyList<V, W>) {
        self.clear();

        let mut vertices: Vec<&V> = adjacency.iter().map(|(vertex, _)| vertex).collect();
        vertices.sort();
        for vertex in vertices {
            self.register(vertex.clone());
        }

        for (src, neighbors) in adjacency.iter() {
            for (dest, weight) in neighbors {
                self.staged.push(src.clone(), dest.clone(), weight.clone());
            }
        }

        self.build();
    }

    fn register(&mut self, vertex: V) -> usize {
        let row = self.vertex_order.len();
        self.vertex_to_index.insert(vertex.clone(), row);
        self.vertex_order.push(vertex);
        if self.built {
            let last = self.row_offsets.last().copied().unwrap_or(0);
            self.row_offsets.push(last);
        }
        row
    }

    fn span(&self, row: usize) -> (usize, usize) {
        (self.row_offsets[row], self.row_offsets[row + 1])
    }

    /// Absolute position of the first `dest` in `row`, by binary search.
    fn find_in_row(&self, row: usize, dest: &V) -> Option<usize> {
        let (start, end) = self.span(row);
        let slice = &self.col_values[start..end];
        let offset = slice.partition_point(|candidate| candidate < dest);
        (offset < slice.len() && slice[offset] == *dest).then_some(start + offset)
    }

    fn ensure_compacted(&self) -> Result<()> {
        if self.is_compacted() {
            return Ok(());
        }
        Err(GraphError::internal().with_message(format!(
            "columnar structure is not compacted ({} staged edges, built: {}); call compact() first",
            self.staged.len(),
            self.built
        )))
    }

    fn build(&mut self) {
        let n = self.vertex_order.len();
        let staged = self.staged.drain();

        let mut degrees = vec![0usize; n];
        for (src, _, _) in &staged {
            if let Some(&row) = self.vertex_to_index.get(src) {
                degrees[row] += 1;
            }
        }

        let mut row_offsets = Vec::with_capacity(n + 1);
        row_offsets.push(0);
        let mut running = 0;
        for degree in &degrees {
            running += degree;
            row_offsets.push(running);
        }

        let mut buckets: Vec<Vec<(V, W)>> = degrees
            .iter()
            .map(|&degree| Vec::with_capacity(degree))
            .collect();
        for (src, dest, weight) in staged {
            if let Some(&row) = self.vertex_to_index.get(&src) {
                buckets[row].push((dest, weight));
            }
        }

        let mut col_values = Vec::with_capacity(running);
        let mut col_weights = Vec::with_capacity(running);
        for mut bucket in buckets {
            bucket.sort_by(|a, b| a.0.cmp(&b.0));
            for (dest, weight) in bucket {
                col_values.push(dest);
                col_weights.push(weight);
            }
        }

        self.row_offsets = row_offsets;
        self.col_values = col_values;
        self.col_weights = col_weights;
        self.built = true;
        self.rebuild_edge_index();
        info!(
            "Built columnar structure: {n} rows, {} edges",
            self.col_values.len()
        );
    }

    fn incremental_update(&mut self) {
        let n = self.vertex_order.len();
        let staged = self.staged.drain();
        let staged_count = staged.len();

        let mut pending: Vec<Vec<(V, W)>> = (0..n).map(|_| Vec::new()).collect();
        for (src, dest, weight) in staged {
            if let Some(&row) = self.vertex_to_index.get(&src) {
                pending[row].push((dest, weight));
            }
        }

        let total = self.col_values.len() + staged_count;
        let mut row_offsets = Vec::with_capacity(n + 1);
        let mut col_values = Vec::with_capacity(total);
        let mut col_weights = Vec::with_capacity(total);
        row_offsets.push(0);

        let old_offsets = std::mem::take(&mut self.row_offsets);
        let mut old_values = std::mem::take(&mut self.col_values).into_iter();
        let mut old_weights = std::mem::take(&mut self.col_weights).into_iter();

        let mut touched = 0;
        for (row, mut fresh) in pending.into_iter().enumerate() {
            let len = old_offsets[row + 1] - old_offsets[row];
            let existing = old_values
                .by_ref()
                .take(len)
                .zip(old_weights.by_ref().take(len));
            if fresh.is_empty() {
                for (dest, weight) in existing {
                    col_values.push(dest);
                    col_weights.push(weight);
                }
            } else {
                touched += 1;
                fresh.sort_by(|a, b| a.0.cmp(&b.0));
                merge_rows(existing, fresh, &mut col_values, &mut col_weights);
            }
            row_offsets.push(col_values.len());
        }

        self.row_offsets = row_offsets;
        self.col_values = col_values;
        self.col_weights = col_weights;
        self.rebuild_edge_index();
        info!("Merged {staged_count} staged edges into {touched} of {n} rows");
    }

    fn rebuild_edge_index(&mut self) {
        self.edge_index.clear();
        for (row, src) in self.vertex_order.iter().enumerate() {
            for pos in self.row_offsets[row]..self.row_offsets[row + 1] {
                self.edge_index
                    .entry((src.clone(), self.col_values[pos].clone()))
                    .or_insert(pos);
            }
        }
    }
}

/// Merge an already-sorted row with sorted fresh entries.
///
/// On equal destinations the existing entry comes first.
fn merge_rows<V: Ord, W>(
    existing: impl Iterator<Item = (V, W)>,
    fresh: Vec<(V, W)>,
    values: &mut Vec<V>,
    weights: &mut Vec<W>,
) {
    let mut existing = existing.peekable();
    let mut fresh = fresh.into_iter().peekable();
    loop {
        let take_existing = match (existing.peek(), fresh.peek()) {
            (Some((a, _)), Some((b, _))) => a <= b,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_existing {
            existing.next()
        } else {
            fresh.next()
        };
        if let Some((dest, weight)) = next {
            values.push(dest);
            weights.push(weight);
        }
    }
}

impl<V: VertexKey, W: EdgeWeight> Default for HybridCsrCoo<V, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexKey, W: EdgeWeight> GraphStorage<V, W> for HybridCsrCoo<V, W> {
    fn kind(&self) -> StorageKind {
        StorageKind::Hybrid
    }

    fn add_vertex(&mut self, vertex: V) -> Result<()> {
        if self.vertex_to_index.contains_key(&vertex) {
            return Err(GraphError::vertex_already_exists());
        }
        let row = self.register(vertex);
        trace!("hybrid: vertex assigned row {row}");
        Ok(())
    }

    fn add_edge(&mut self, src: &V, dest: &V, weight: W) -> Result<()> {
        if !self.vertex_to_index.contains_key(src) || !self.vertex_to_index.contains_key(dest) {
            return Err(GraphError::vertex_not_found());
        }
        self.staged.push(src.clone(), dest.clone(), weight);
        trace!("hybrid: staged edge, {} pending", self.staged.len());
        Ok(())
    }

    fn get_edge(&self, src: &V, dest: &V) -> Result<W> {
        let row = *self
            .vertex_to_index
            .get(src)
            .ok_or_else(GraphError::vertex_not_found)?;
        if !self.vertex_to_index.contains_key(dest) {
            return Err(GraphError::vertex_not_found());
        }
        self.ensure_compacted()?;
        self.find_in_row(row, dest)
            .map(|pos| self.col_weights[pos].clone())
            .ok_or_else(GraphError::edge_not_found)
    }

    fn neighbors(&self, vertex: &V) -> Result<NeighborList<V, W>> {
        let row = *self
            .vertex_to_index
            .get(vertex)
            .ok_or_else(GraphError::vertex_not_found)?;
        self.ensure_compacted()?;
        let (start, end) = self.span(row);
        Ok(self.col_values[start..end]
            .iter()
            .cloned()
            .zip(self.col_weights[start..end].iter().cloned())
            .collect())
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.vertex_to_index.contains_key(vertex)
    }

    fn does_edge_exist(&self, src: &V, dest: &V, weight: Option<&W>) -> bool {
        let Some(&row) = self.vertex_to_index.get(src) else {
            return false;
        };

        let in_rows = if !self.built {
            false
        } else if let Some(expected) = weight {
            let end = self.span(row).1;
            self.find_in_row(row, dest).is_some_and(|first| {
                (first..end)
                    .take_while(|&pos| self.col_values[pos] == *dest)
                    .any(|pos| self.col_weights[pos] == *expected)
            })
        } else {
            self.edge_index.contains_key(&(src.clone(), dest.clone()))
        };

        in_rows
            || self.staged.iter().any(|(s, d, w)| {
                s == src && d == dest && weight.map_or(true, |expected| w == expected)
            })
    }

    fn vertex_count(&self) -> usize {
        self.vertex_order.len()
    }

    fn edge_count(&self) -> usize {
        self.col_values.len() + self.staged.len()
    }

    fn vertices(&self) -> Vec<V> {
        self.vertex_order.clone()
    }

    fn edges(&self) -> Vec<EdgeTriple<V, W>> {
        let mut edges = Vec::with_capacity(self.edge_count());
        if self.built {
            for (row, src) in self.vertex_order.iter().enumerate() {
                let (start, end) = self.span(row);
                for pos in start..end {
                    edges.push((
                        src.clone(),
                        self.col_values[pos].clone(),
                        self.col_weights[pos].clone(),
                    ));
                }
            }
        }
        edges.extend(
            self.staged
                .iter()
                .map(|(s, d, w)| (s.clone(), d.clone(), w.clone())),
        );
        edges
    }

    fn clear(&mut self) {
        self.row_offsets.clear();
        self.col_values.clear();
        self.col_weights.clear();
        self.staged.clear();
        self.vertex_order.clear();
        self.vertex_to_index.clear();
        self.edge_index.clear();
        self.built = false;
    }

    fn remove_vertex(&mut self, vertex: &V) -> Result<()> {
        let index = *self
            .vertex_to_index
            .get(vertex)
            .ok_or_else(GraphError::vertex_not_found)?;

        let stripped = self.staged.retain(|s, d| s != vertex && d != vertex);
        debug!("hybrid: removing row {index}, {stripped} staged edges stripped");

        if self.built {
            let n = self.vertex_order.len();
            let old_offsets = std::mem::take(&mut self.row_offsets);
            let mut old_values = std::mem::take(&mut self.col_values).into_iter();
            let mut old_weights = std::mem::take(&mut self.col_weights).into_iter();

            self.row_offsets.push(0);
            for row in 0..n {
                let len = old_offsets[row + 1] - old_offsets[row];
                let entries = old_values
                    .by_ref()
                    .take(len)
                    .zip(old_weights.by_ref().take(len));
                for (dest, weight) in entries {
                    if row != index && dest != *vertex {
                        self.col_values.push(dest);
                        self.col_weights.push(weight);
                    }
                }
                if row != index {
                    self.row_offsets.push(self.col_values.len());
                }
            }
        }

        self.vertex_order.remove(index);
        self.vertex_to_index.remove(vertex);
        for (row, v) in self.vertex_order.iter().enumerate().skip(index) {
            self.vertex_to_index.insert(v.clone(), row);
        }
        if self.built {
            self.rebuild_edge_index();
        }
        Ok(())
    }

    fn remove_edge(&mut self, src: &V, dest: &V) -> Result<()> {
        let row = *self
            .vertex_to_index
            .get(src)
            .ok_or_else(GraphError::vertex_not_found)?;
        if !self.vertex_to_index.contains_key(dest) {
            return Err(GraphError::vertex_not_found());
        }

        if let Some(index) = self.staged.position(src, dest) {
            self.staged.remove_at(index);
            trace!("hybrid: removed staged edge at {index}");
            return Ok(());
        }

        let pos = if self.built {
            self.find_in_row(row, dest)
        } else {
            None
        }
        .ok_or_else(GraphError::edge_not_found)?;
        self.col_values.remove(pos);
        self.col_weights.remove(pos);
        for offset in &mut self.row_offsets[row + 1..] {
            *offset -= 1;
        }
        self.rebuild_edge_index();
        Ok(())
    }
}
