//! JSON format export for D3.js and web visualization tools.
//!
//! Generates JSON with "nodes" and "links" arrays compatible with D3.js
//! force-directed layouts, plus the graph's aggregate metadata.

use super::{endpoint_indices, vertex_indices};
use crate::error::{GraphError, Result};
use crate::identity::{EdgeWeight, VertexKey};
use crate::store::GraphStore;
use serde_json::{json, Value};

/// Export graph to D3.js-compatible JSON format
///
/// # Errors
///
/// Returns [`GraphError::InternalError`] if serialization fails or an edge
/// references a vertex the representation does not list.
pub fn export_json<V: VertexKey, W: EdgeWeight>(store: &GraphStore<V, W>) -> Result<String> {
    let storage = store.context().active();
    let vertices = storage.vertices();
    let indices = vertex_indices(&vertices);

    let nodes_array: Vec<Value> = vertices
        .iter()
        .enumerate()
        .map(|(index, vertex)| {
            json!({
                "id": index,
                "label": vertex.label(),
            })
        })
        .collect();

    let mut links_array = Vec::new();
    for (src, dest, weight) in storage.edges() {
        let (s, d) = endpoint_indices(&indices, &src, &dest)?;
        links_array.push(json!({
            "source": s,
            "target": d,
            "weight": weight.label(),
        }));
    }

    let metadata = serde_json::to_value(store.metadata()).map_err(serialization_error)?;
    let options = serde_json::to_value(store.options()).map_err(serialization_error)?;

    let result = json!({
        "directed": store.options().is_directed(),
        "storage": storage.kind().to_string(),
        "options": options,
        "nodes": nodes_array,
        "links": links_array,
        "metadata": metadata,
    });

    serde_json::to_string_pretty(&result).map_err(serialization_error)
}

fn serialization_error(err: serde_json::Error) -> GraphError {
    GraphError::internal().with_message(format!("JSON serialization failed: {err}"))
}
