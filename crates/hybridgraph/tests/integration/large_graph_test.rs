//! Integration test for large graph handling (100K vertices, 500K edges).

use hybridgraph::{GraphCreationOptions, GraphFlavor, GraphOption, GraphStore, StorageKind};

fn ring_options() -> GraphCreationOptions {
    GraphCreationOptions::new(&[GraphOption::Directed, GraphOption::Weighted])
}

#[test]
#[ignore] // This test is slow, run with --ignored flag
fn test_large_graph_100k_vertices_500k_edges() {
    let mut store: GraphStore<u32, u32> =
        GraphStore::new(GraphFlavor::Matrix, ring_options()).unwrap();

    let num_vertices: u32 = 100_000;
    let edges_per_vertex: u32 = 5;

    for v in 0..num_vertices {
        store.add_vertex(v).unwrap();
    }

    for v in 0..num_vertices {
        for j in 1..=edges_per_vertex {
            store.add_edge(&v, &((v + j) % num_vertices), j).unwrap();
        }
    }

    let expected = (num_vertices * edges_per_vertex) as usize;
    assert_eq!(store.compact(), expected);
    assert_eq!(store.metadata().num_edges(), expected);

    let mid = num_vertices / 2;
    assert_eq!(store.get_edge(&mid, &(mid + 3)).unwrap(), 3);
    assert_eq!(store.get_neighbors(&mid).unwrap().len(), edges_per_vertex as usize);
}

#[test]
fn test_medium_graph_incremental_batches() {
    let mut store: GraphStore<u32, u32> =
        GraphStore::new(GraphFlavor::Matrix, ring_options()).unwrap();

    let num_vertices: u32 = 10_000;
    for v in 0..num_vertices {
        store.add_vertex(v).unwrap();
    }

    // Three batches, each followed by a compaction
    for batch in 1..=3 {
        for v in (0..num_vertices).step_by(batch as usize) {
            store.add_edge(&v, &((v + batch) % num_vertices), batch).unwrap();
        }
        store.compact();
    }

    let hybrid = store.context().hybrid();
    assert!(hybrid.is_compacted());
    let offsets = hybrid.row_offsets();
    assert_eq!(offsets.len(), num_vertices as usize + 1);
    assert!(offsets.windows(2).all(|w| w[0] <= w[1]));

    // Vertex 6 received an edge in every batch, sorted by destination
    let (dests, weights) = hybrid.row(&6).unwrap();
    assert_eq!(dests, &[7, 8, 9]);
    assert_eq!(weights, &[1, 2, 3]);
}

#[test]
fn test_medium_graph_mirrors_agree() {
    let mut store: GraphStore<u32, u32> =
        GraphStore::new(GraphFlavor::List, ring_options()).unwrap();

    let num_vertices: u32 = 5_000;
    for v in 0..num_vertices {
        store.add_vertex(v).unwrap();
    }
    for v in 0..num_vertices {
        store.add_edge(&v, &((v * 7 + 1) % num_vertices), v).unwrap();
        store.add_edge(&v, &((v * 13 + 2) % num_vertices), v + 1).unwrap();
    }

    store.mirror_into(StorageKind::Hybrid).unwrap();
    let hybrid = store.context().hybrid();
    for v in (0..num_vertices).step_by(97) {
        let mut expected = store.get_neighbors(&v).unwrap();
        expected.sort_by(|a, b| a.0.cmp(&b.0));
        let (dests, weights) = hybrid.row(&v).unwrap();
        let actual: Vec<(u32, u32)> = dests.iter().copied().zip(weights.iter().copied()).collect();
        assert_eq!(actual, expected);
    }
}
