//! Basic usage example for hybridgraph
//!
//! This example demonstrates:
//! - Creating a graph with explicit options
//! - Staging edges and compacting them into sorted rows
//! - Querying edges and neighbors
//! - Identity-stamped vertices
//! - Exporting to DOT

use hybridgraph::{
    GraphCreationOptions, GraphFlavor, GraphList, GraphOption, GraphStore, Stamped,
};

#[derive(Debug, Clone)]
struct City {
    name: &'static str,
}

fn main() -> hybridgraph::Result<()> {
    println!("Creating a directed weighted matrix graph...\n");

    let options = GraphCreationOptions::new(&[GraphOption::Directed, GraphOption::Weighted]);
    let mut graph: GraphStore<u32, u32> = GraphStore::new(GraphFlavor::Matrix, options)?;

    for v in 1..=4 {
        graph.add_vertex(v)?;
    }
    println!("✓ Added vertices 1..=4");

    for (src, dest, weight) in [(1, 2, 100), (2, 3, 200), (3, 4, 300), (4, 1, 400)] {
        graph.add_edge(&src, &dest, weight)?;
    }
    println!("✓ Staged 4 edges (state: {:?})", graph.state());

    let folded = graph.compact();
    println!("✓ Compacted {folded} edges (state: {:?})", graph.state());

    println!("\nQuerying...");
    println!("  1 -> 2 weight: {}", graph.get_edge(&1, &2)?);
    match graph.get_edge(&2, &1) {
        Ok(weight) => println!("  2 -> 1 weight: {weight}"),
        Err(err) => println!("  2 -> 1: {} ({})", err.code(), err.message()),
    }
    println!("  neighbors of 3: {:?}", graph.get_neighbors(&3)?);

    let meta = graph.metadata();
    println!(
        "\n✓ Metadata: {} vertices, {} edges, density {:.3}",
        meta.num_vertices(),
        meta.num_edges(),
        meta.density()
    );

    println!("\nBuilding an undirected list of cities...");
    let mut cities: GraphList<Stamped<City>, u32> =
        GraphList::new(&[GraphOption::Undirected, GraphOption::Weighted])?;
    let oslo = cities.stamp(City { name: "Oslo" });
    let bergen = cities.stamp(City { name: "Bergen" });
    cities.add_vertex(oslo.clone())?;
    cities.add_vertex(bergen.clone())?;
    println!(
        "✓ Added {} as {} and {} as {}",
        oslo.payload().name,
        oslo.name(),
        bergen.payload().name,
        bergen.name()
    );

    cities.add_weighted_edge(&oslo, &bergen, 463)?;
    println!(
        "✓ {} <-> {}: {} km both ways",
        oslo.payload().name,
        bergen.payload().name,
        cities.get_edge(&bergen, &oslo)?
    );

    println!("\nDOT export:\n{}", graph.export_dot()?);

    Ok(())
}
