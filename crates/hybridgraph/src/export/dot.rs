//! DOT format export for Graphviz visualization.

use super::{endpoint_indices, vertex_indices};
use crate::error::Result;
use crate::identity::{EdgeWeight, VertexKey};
use crate::options::GraphOption;
use crate::store::GraphStore;

/// Options for styling DOT export
#[derive(Debug, Clone)]
pub struct DotOptions {
    /// Graph layout direction: LR, TB, RL, BT
    pub rankdir: String,
    /// Node shape (circle, box, ellipse, etc.)
    pub node_shape: String,
    /// Node fill color (hex color code)
    pub node_color: String,
    /// Edge color (hex color code); Graphviz default when `None`
    pub edge_color: Option<String>,
    /// Label edges with their weights
    pub show_weights: bool,
}

impl Default for DotOptions {
    fn default() -> Self {
        DotOptions {
            rankdir: "LR".to_string(),
            node_shape: "circle".to_string(),
            node_color: "#90CAF9".to_string(),
            edge_color: None,
            show_weights: true,
        }
    }
}

/// Export graph to Graphviz DOT format
///
/// # Errors
///
/// Returns [`GraphError::InternalError`](crate::GraphError::InternalError)
/// if an edge references a vertex the representation does not list.
pub fn export_dot<V: VertexKey, W: EdgeWeight>(store: &GraphStore<V, W>) -> Result<String> {
    export_dot_styled(store, DotOptions::default())
}

/// Export graph to Graphviz DOT format with custom styling
///
/// Undirected graphs render as `graph` with `--` connectors; a mirrored pair
/// of stored edges is drawn once. Weights are omitted for graphs created
/// with [`GraphOption::Unweighted`].
///
/// # Errors
///
/// Returns [`GraphError::InternalError`](crate::GraphError::InternalError)
/// if an edge references a vertex the representation does not list.
pub fn export_dot_styled<V: VertexKey, W: EdgeWeight>(
    store: &GraphStore<V, W>,
    options: DotOptions,
) -> Result<String> {
    let storage = store.context().active();
    let directed = store.options().is_directed();
    let show_weights =
        options.show_weights && !store.options().has_option(GraphOption::Unweighted);
    let (keyword, connector) = if directed {
        ("digraph", "->")
    } else {
        ("graph", "--")
    };

    let mut output = String::new();

    // Header
    output.push_str(&format!("{keyword} {} {{\n", store.metadata().flavor()));
    output.push_str(&format!("    rankdir={};\n", options.rankdir));
    output.push_str("    node [style=filled];\n\n");

    let vertices = storage.vertices();
    for (index, vertex) in vertices.iter().enumerate() {
        output.push_str(&format!(
            "    n{index} [label=\"{}\", shape={}, fillcolor=\"{}\"];\n",
            escape_dot_label(&vertex.label()),
            options.node_shape,
            options.node_color
        ));
    }

    output.push('\n');

    let indices = vertex_indices(&vertices);
    for (src, dest, weight) in storage.edges() {
        let (s, d) = endpoint_indices(&indices, &src, &dest)?;
        if !directed && s > d && storage.does_edge_exist(&dest, &src, Some(&weight)) {
            continue;
        }

        let mut attributes = Vec::new();
        if show_weights {
            attributes.push(format!("label=\"{}\"", escape_dot_label(&weight.label())));
        }
        if let Some(color) = &options.edge_color {
            attributes.push(format!("color=\"{color}\""));
        }
        let attributes = if attributes.is_empty() {
            String::new()
        } else {
            format!(" [{}]", attributes.join(", "))
        };

        output.push_str(&format!("    n{s} {connector} n{d}{attributes};\n"));
    }

    output.push_str("}\n");

    Ok(output)
}

/// Escape special characters for DOT labels
fn escape_dot_label(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
