//! Integration tests for the list and matrix façades

use hybridgraph::{GraphList, GraphMatrix, GraphOption, GraphStorage, StatusCode};

#[test]
fn test_undirected_weighted_stores_both_directions() {
    let mut graph: GraphList<u32, u32> =
        GraphList::new(&[GraphOption::Undirected, GraphOption::Weighted]).unwrap();
    graph.add_vertex(1).unwrap();
    graph.add_vertex(2).unwrap();
    graph.add_weighted_edge(&1, &2, 10).unwrap();

    let adjacency = graph.context().adjacency();
    assert_eq!(adjacency.get_edge(&1, &2).unwrap(), 10);
    assert_eq!(adjacency.get_edge(&2, &1).unwrap(), 10);
    assert_eq!(adjacency.edge_count(), 2);
    assert_eq!(graph.store().metadata().num_edges(), 2);
}

#[test]
fn test_undirected_matrix_stores_both_directions() {
    let mut graph: GraphMatrix<u32, u32> =
        GraphMatrix::new(&[GraphOption::Undirected, GraphOption::Weighted]).unwrap();
    graph.add_vertex(1).unwrap();
    graph.add_vertex(2).unwrap();
    graph.add_weighted_edge(&1, &2, 10).unwrap();

    assert_eq!(graph.get_edge(&1, &2).unwrap(), 10);
    assert_eq!(graph.get_edge(&2, &1).unwrap(), 10);
}

#[test]
fn test_directed_list_has_no_implicit_reverse() {
    let mut graph: GraphList<u32, u32> =
        GraphList::new(&[GraphOption::Directed, GraphOption::Weighted]).unwrap();
    for v in 1..=4 {
        graph.add_vertex(v).unwrap();
    }
    for (s, d, w) in [(1, 2, 100), (2, 3, 200), (3, 4, 300), (4, 1, 400)] {
        graph.add_weighted_edge(&s, &d, w).unwrap();
    }

    assert_eq!(graph.get_edge(&1, &2).unwrap(), 100);
    assert_eq!(graph.get_edge(&2, &1).unwrap_err().code(), StatusCode::EdgeNotFound);
    assert_eq!(graph.get_edge_or_default(&2, &1), 0);
}

#[test]
fn test_matrix_compacts_before_reads() {
    let mut graph: GraphMatrix<&'static str, f64> = GraphMatrix::new(&[]).unwrap();
    graph.add_vertex("a").unwrap();
    graph.add_vertex("b").unwrap();
    graph.add_vertex("c").unwrap();
    graph.add_weighted_edge(&"a", &"c", 2.5).unwrap();
    graph.add_weighted_edge(&"a", &"b", 1.5).unwrap();

    assert!(graph.store().needs_compaction());
    assert_eq!(graph.get_neighbors(&"a").unwrap(), vec![("b", 1.5), ("c", 2.5)]);
    assert!(!graph.store().needs_compaction());

    graph.add_weighted_edge(&"c", &"a", 0.5).unwrap();
    assert_eq!(graph.get_edge(&"c", &"a").unwrap(), 0.5);
}

#[test]
fn test_matrix_cell_access() {
    let mut graph: GraphMatrix<u32, i32> = GraphMatrix::new(&[GraphOption::Directed]).unwrap();
    graph.add_vertex(0).unwrap();
    graph.add_vertex(1).unwrap();

    graph.edge(0, 1).set(-3).unwrap();
    assert_eq!(graph.edge(0, 1).get().unwrap(), -3);
    assert_eq!(graph.edge(1, 0).get().unwrap_err().code(), StatusCode::EdgeNotFound);
}

#[test]
fn test_weight_call_shape_rejected() {
    let mut weighted: GraphMatrix<u32, i32> = GraphMatrix::new(&[GraphOption::Weighted]).unwrap();
    weighted.add_vertex(0).unwrap();
    weighted.add_vertex(1).unwrap();
    assert_eq!(weighted.add_edge(&0, &1).unwrap_err().code(), StatusCode::InvalidArgument);
    assert_eq!(weighted.store().metadata().num_edges(), 0);

    let mut unweighted: GraphList<u32, i32> =
        GraphList::new(&[GraphOption::Unweighted]).unwrap();
    unweighted.add_vertex(0).unwrap();
    unweighted.add_vertex(1).unwrap();
    let err = unweighted.add_weighted_edge(&0, &1, 5).unwrap_err();
    assert_eq!(err.code(), StatusCode::InvalidArgument);
}

#[test]
fn test_contradictory_options_rejected() {
    let err = GraphList::<u32, u32>::new(&[GraphOption::Weighted, GraphOption::Unweighted])
        .unwrap_err();
    assert_eq!(err.code(), StatusCode::InvalidArgument);
}

#[test]
fn test_visualize_produces_dot() {
    let mut graph: GraphList<u32, u32> = GraphList::new(&[GraphOption::Undirected]).unwrap();
    graph.add_vertex(1).unwrap();
    graph.add_vertex(2).unwrap();
    graph.add_weighted_edge(&1, &2, 7).unwrap();

    let dot = graph.visualize().unwrap();
    assert!(dot.starts_with("graph graph_list {"));
    assert!(dot.contains("n0 -- n1 [label=\"7\"];"));
    assert!(!dot.contains("n1 -- n0"));
}
