//! # hybridgraph
//!
//! An embeddable, in-memory graph storage engine with interchangeable physical
//! representations of the same logical graph.
//!
//! ## Core Principles
//!
//! - **One Logical Graph, Many Layouts**: adjacency table, coordinate log, and
//!   a compacted columnar structure with a staging buffer
//! - **Explicit Compaction**: staged edges become readable only after
//!   [`GraphStore::compact`]
//! - **Status Everywhere**: every operation returns [`Result`], no panics on
//!   expected conditions
//! - **Zero Magic**: no global state; identities come from an allocator owned
//!   by each graph
//!
//! ## Architecture
//!
//! hybridgraph is organized in layers:
//!
//! ```text
//! Façades (GraphList, GraphMatrix)
//!     ↓
//! Storage Orchestration (GraphStore: shape policy, metadata)
//!     ↓
//! Graph Context (owns options, metadata, identities, representations)
//!     ↓
//! Representations (adjacency, coordinate, hybrid CSR + COO)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use hybridgraph::{GraphFlavor, GraphCreationOptions, GraphOption, GraphStore};
//!
//! let options = GraphCreationOptions::new(&[GraphOption::Directed, GraphOption::Weighted]);
//! let mut graph: GraphStore<u32, i64> = GraphStore::new(GraphFlavor::Matrix, options)?;
//!
//! graph.add_vertex(1)?;
//! graph.add_vertex(2)?;
//! graph.add_edge(&1, &2, 10)?;
//!
//! // Staged edges are folded into the sorted rows explicitly
//! graph.compact();
//! assert_eq!(graph.get_edge(&1, &2)?, 10);
//! # Ok::<(), hybridgraph::GraphError>(())
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod context;
pub mod error;
pub mod export;
pub mod facade;
pub mod identity;
pub mod metadata;
pub mod options;
pub mod storage;
pub mod store;

// Re-export main types
pub use context::GraphContext;
pub use error::{status_code, GraphError, Result, StatusCode};
pub use export::DotOptions;
pub use facade::{EdgeAccessor, GraphList, GraphMatrix};
pub use identity::{EdgeWeight, GraphValue, IdentityAllocator, Stamp, Stamped, VertexKey};
pub use metadata::{GraphFlavor, GraphInternalMetadata};
pub use options::{GraphCreationOptions, GraphOption};
pub use storage::{
    AdjacencyList, CoordinateList, EdgeTriple, GraphStorage, HybridCsrCoo, NeighborList,
    StorageKind,
};
pub use store::{GraphState, GraphStore};
