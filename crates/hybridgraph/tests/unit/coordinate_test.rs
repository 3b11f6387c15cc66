//! Unit tests for the coordinate (COO) representation

use hybridgraph::{CoordinateList, GraphStorage, StatusCode};

#[test]
fn test_duplicate_vertex_rejected() {
    let mut coo: CoordinateList<u64, u64> = CoordinateList::new();
    coo.add_vertex(1).unwrap();
    assert_eq!(coo.add_vertex(1).unwrap_err().code(), StatusCode::VertexAlreadyExists);
}

#[test]
fn test_missing_edge_is_generic_not_found() {
    let mut coo: CoordinateList<u64, u64> = CoordinateList::new();
    coo.add_edge(&1, &2, 3).unwrap();

    let err = coo.get_edge(&2, &1).unwrap_err();
    assert_eq!(err.code(), StatusCode::NotFound);
    assert_eq!(err.message(), "Edge not found");
}

#[test]
fn test_out_edges_and_degrees() {
    let mut coo: CoordinateList<u64, u64> = CoordinateList::new();
    coo.add_edge(&1, &2, 12).unwrap();
    coo.add_edge(&1, &3, 13).unwrap();
    coo.add_edge(&3, &1, 31).unwrap();

    assert_eq!(coo.out_edges(&1).unwrap(), vec![(2, 12), (3, 13)]);
    assert_eq!(coo.out_degree(&1).unwrap(), 2);
    assert_eq!(coo.in_degree(&1).unwrap(), 1);
    assert_eq!(coo.in_degree(&2).unwrap(), 1);
    assert_eq!(coo.out_edges(&7).unwrap_err().code(), StatusCode::VertexNotFound);
}

#[test]
fn test_remove_vertex_strips_incident_edges() {
    let mut coo: CoordinateList<u64, u64> = CoordinateList::new();
    coo.add_edge(&1, &2, 12).unwrap();
    coo.add_edge(&2, &3, 23).unwrap();
    coo.add_edge(&3, &1, 31).unwrap();

    coo.remove_vertex(&2).unwrap();
    assert!(!coo.has_vertex(&2));
    assert_eq!(coo.edges(), vec![(3, 1, 31)]);
    assert_eq!(coo.remove_vertex(&2).unwrap_err().code(), StatusCode::VertexNotFound);

    // Identity is free again
    coo.add_vertex(2).unwrap();
    assert_eq!(coo.vertex_count(), 3);
}

#[test]
fn test_remove_missing_edge() {
    let mut coo: CoordinateList<u64, u64> = CoordinateList::new();
    coo.add_vertex(1).unwrap();
    assert_eq!(coo.remove_edge(&1, &1).unwrap_err().code(), StatusCode::EdgeNotFound);
}

#[test]
fn test_has_edge_and_weighted_existence() {
    let mut coo: CoordinateList<u64, u64> = CoordinateList::new();
    coo.add_edge(&4, &5, 45).unwrap();

    assert!(coo.has_edge(&4, &5));
    assert!(!coo.has_edge(&5, &4));
    assert!(coo.does_edge_exist(&4, &5, Some(&45)));
    assert!(!coo.does_edge_exist(&4, &5, Some(&46)));

    coo.clear();
    assert_eq!(coo.edge_count(), 0);
    assert_eq!(coo.vertex_count(), 0);
}
