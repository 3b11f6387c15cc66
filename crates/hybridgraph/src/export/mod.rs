//! Text export for inspecting graphs in external tools.
//!
//! - **DOT**: Graphviz visualization
//! - **JSON**: D3.js-style `nodes` / `links` plus the aggregate metadata
//!
//! Both exporters read the active representation of a
//! [`GraphStore`](crate::store::GraphStore). Vertices are numbered by their
//! position in [`GraphStorage::vertices`](crate::storage::GraphStorage::vertices).

pub mod dot;
pub mod json;

pub use dot::{export_dot, export_dot_styled, DotOptions};
pub use json::export_json;

use crate::error::{GraphError, Result};
use crate::identity::VertexKey;
use std::collections::HashMap;

/// Position of each vertex in the export numbering.
fn vertex_indices<V: VertexKey>(vertices: &[V]) -> HashMap<&V, usize> {
    vertices
        .iter()
        .enumerate()
        .map(|(index, vertex)| (vertex, index))
        .collect()
}

/// Export numbers of both endpoints of an edge.
fn endpoint_indices<V: VertexKey>(
    indices: &HashMap<&V, usize>,
    src: &V,
    dest: &V,
) -> Result<(usize, usize)> {
    match (indices.get(src), indices.get(dest)) {
        (Some(&s), Some(&d)) => Ok((s, d)),
        _ => Err(GraphError::internal().with_message(format!(
            "edge {} -> {} references an unregistered vertex",
            src.label(),
            dest.label()
        ))),
    }
}
