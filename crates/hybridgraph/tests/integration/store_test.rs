//! Integration tests for the storage orchestration layer
//!
//! Drives `GraphStore` end to end across every representation.

use hybridgraph::{
    GraphCreationOptions, GraphFlavor, GraphOption, GraphState, GraphStorage, GraphStore,
    StatusCode, StorageKind,
};

fn directed_weighted() -> GraphCreationOptions {
    GraphCreationOptions::new(&[GraphOption::Directed, GraphOption::Weighted])
}

fn four_cycle(kind: StorageKind) -> GraphStore<u32, u32> {
    let mut store = GraphStore::with_storage(GraphFlavor::Matrix, directed_weighted(), kind).unwrap();
    for v in 1..=4 {
        store.add_vertex(v).unwrap();
    }
    for (s, d, w) in [(1, 2, 100), (2, 3, 200), (3, 4, 300), (4, 1, 400)] {
        store.add_edge(&s, &d, w).unwrap();
    }
    store.compact();
    store
}

#[test]
fn test_directed_four_cycle_on_every_representation() {
    for kind in [StorageKind::Adjacency, StorageKind::Coordinate, StorageKind::Hybrid] {
        let store = four_cycle(kind);
        assert_eq!(store.get_edge(&1, &2).unwrap(), 100, "{kind}");
        assert_eq!(store.get_edge(&4, &1).unwrap(), 400, "{kind}");
        assert!(store.get_edge(&2, &1).unwrap_err().is_not_found(), "{kind}");
        assert_eq!(store.metadata().num_edges(), 4);
        assert_eq!(store.metadata().num_vertices(), 4);
    }
}

#[test]
fn test_four_cycle_status_codes_on_hybrid() {
    let store = four_cycle(StorageKind::Hybrid);
    assert_eq!(store.get_edge(&2, &1).unwrap_err().code(), StatusCode::EdgeNotFound);
    assert_eq!(store.get_edge(&9, &1).unwrap_err().code(), StatusCode::VertexNotFound);
    assert_eq!(store.state(), GraphState::Compacted);
}

#[test]
fn test_duplicate_vertex_through_store() {
    let mut store: GraphStore<u32, u32> = GraphStore::list();
    assert!(store.add_vertex(1).is_ok());
    assert_eq!(store.add_vertex(1).unwrap_err().code(), StatusCode::VertexAlreadyExists);
    assert_eq!(store.metadata().num_vertices(), 1);
}

#[test]
fn test_parallel_edges_policy() {
    let mut strict: GraphStore<u32, u32> =
        GraphStore::new(GraphFlavor::List, directed_weighted()).unwrap();
    strict.add_vertex(1).unwrap();
    strict.add_vertex(2).unwrap();
    strict.add_edge(&1, &2, 1).unwrap();
    let err = strict.add_edge(&1, &2, 2).unwrap_err();
    assert_eq!(err.code(), StatusCode::EdgeAlreadyExists);
    assert_eq!(strict.metadata().num_edges(), 1);

    let options = GraphCreationOptions::new(&[GraphOption::Directed, GraphOption::ParallelEdges]);
    let mut multi: GraphStore<u32, u32> = GraphStore::new(GraphFlavor::List, options).unwrap();
    multi.add_vertex(1).unwrap();
    multi.add_vertex(2).unwrap();
    multi.add_edge(&1, &2, 1).unwrap();
    multi.add_edge(&1, &2, 2).unwrap();
    assert_eq!(multi.metadata().num_parallel_edges(), 1);
    assert_eq!(multi.get_neighbors(&1).unwrap(), vec![(2, 1), (2, 2)]);
}

#[test]
fn test_parallel_detection_sees_staged_edges() {
    let mut store: GraphStore<u32, u32> = GraphStore::matrix();
    store.add_vertex(1).unwrap();
    store.add_vertex(2).unwrap();
    store.add_edge(&1, &2, 1).unwrap();
    assert!(store.needs_compaction());

    let err = store.add_edge(&1, &2, 1).unwrap_err();
    assert_eq!(err.code(), StatusCode::EdgeAlreadyExists);
}

#[test]
fn test_parallel_detection_after_compaction() {
    let mut store: GraphStore<u32, u32> = GraphStore::matrix();
    store.add_vertex(1).unwrap();
    store.add_vertex(2).unwrap();
    store.add_edge(&1, &2, 1).unwrap();
    store.compact();
    assert!(!store.needs_compaction());

    let err = store.add_edge(&1, &2, 9).unwrap_err();
    assert_eq!(err.code(), StatusCode::EdgeAlreadyExists);
    assert_eq!(store.metadata().num_edges(), 1);
    assert!(!store.needs_compaction());
}

#[test]
fn test_self_loop_policy_checked_before_vertex_lookup() {
    let options = GraphCreationOptions::new(&[GraphOption::Directed]);
    let mut store: GraphStore<u32, u32> = GraphStore::new(GraphFlavor::List, options).unwrap();
    let err = store.add_edge(&9, &9, 0).unwrap_err();
    assert_eq!(err.code(), StatusCode::InvalidArgument);

    let mut permissive: GraphStore<u32, u32> = GraphStore::list();
    let err = permissive.add_edge(&9, &9, 0).unwrap_err();
    assert_eq!(err.code(), StatusCode::VertexNotFound);
}

#[test]
fn test_uncompacted_hybrid_read_fails() {
    let mut store: GraphStore<u32, u32> = GraphStore::matrix();
    store.add_vertex(1).unwrap();
    store.add_vertex(2).unwrap();
    store.add_edge(&1, &2, 5).unwrap();

    assert_eq!(store.get_edge(&1, &2).unwrap_err().code(), StatusCode::InternalError);
    assert!(store.does_edge_exist(&1, &2, Some(&5)));

    assert_eq!(store.compact(), 1);
    assert_eq!(store.get_edge(&1, &2).unwrap(), 5);
    assert!(!store.needs_compaction());
}

#[test]
fn test_density_tracks_counts() {
    let mut store: GraphStore<u32, u32> = GraphStore::list();
    for v in 0..4 {
        store.add_vertex(v).unwrap();
    }
    store.add_edge(&0, &1, 1).unwrap();
    store.add_edge(&1, &2, 1).unwrap();
    store.add_edge(&2, &3, 1).unwrap();

    let density = store.metadata().density();
    assert!((density - 3.0 / 12.0).abs() < 1e-12);
}

#[test]
fn test_compact_is_noop_off_hybrid() {
    let mut store: GraphStore<u32, u32> = GraphStore::list();
    store.add_vertex(1).unwrap();
    assert_eq!(store.compact(), 0);
    assert!(!store.needs_compaction());
    assert_eq!(store.state(), GraphState::Populated);
}

#[test]
fn test_mirror_adjacency_into_hybrid() {
    let mut store: GraphStore<u32, u32> = GraphStore::list();
    for v in [3, 1, 2] {
        store.add_vertex(v).unwrap();
    }
    store.add_edge(&1, &3, 13).unwrap();
    store.add_edge(&1, &2, 12).unwrap();

    store.mirror_into(StorageKind::Hybrid).unwrap();
    let hybrid = store.context().hybrid();
    assert!(hybrid.is_compacted());
    assert_eq!(hybrid.get_edge(&1, &3).unwrap(), 13);
    assert_eq!(hybrid.neighbors(&1).unwrap(), vec![(2, 12), (3, 13)]);
}

#[test]
fn test_mirror_hybrid_into_coordinate() {
    let mut store = four_cycle(StorageKind::Hybrid);
    store.mirror_into(StorageKind::Coordinate).unwrap();

    let coordinate = store.context().coordinate();
    assert_eq!(coordinate.edge_count(), 4);
    assert_eq!(coordinate.vertex_count(), 4);
    assert_eq!(coordinate.get_edge(&3, &4).unwrap(), 300);

    // Mirroring into the active representation changes nothing
    store.mirror_into(StorageKind::Hybrid).unwrap();
    assert_eq!(store.get_edge(&1, &2).unwrap(), 100);
}

#[test]
fn test_exports_reflect_store() {
    let store = four_cycle(StorageKind::Adjacency);
    let dot = store.export_dot().unwrap();
    assert!(dot.starts_with("digraph graph_matrix {"));
    assert_eq!(dot.matches(" -> ").count(), 4);

    let json = store.export_json().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["links"].as_array().unwrap().len(), 4);
    assert_eq!(parsed["metadata"]["flavor"], "Matrix");
}
