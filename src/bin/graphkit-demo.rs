use graphkit::{BinaryHeap, EdgeList, Result, WeightedGraph};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let heap = [23, 56, 11, 9, 56, 99, 27, 34]
        .into_iter()
        .collect::<BinaryHeap<i32>>();
    let drained = heap.into_iter().map(|v| v.to_string()).collect::<Vec<_>>();
    println!("heap: {}", drained.join(" "));

    let mut graph = WeightedGraph::new(6);
    for (u, v, w) in [(1, 2, 5), (1, 4, 9), (1, 5, 1), (2, 3, 2), (4, 3, 6), (5, 4, 2)] {
        graph.add_edge(u, v, w)?;
    }
    println!("dijkstra from 1:");
    for (v, d) in graph.dijkstra(1)?.iter().enumerate().skip(1) {
        match d {
            Some(d) => println!("  {v}: {d}"),
            None => println!("  {v}: unreachable"),
        }
    }

    let mut edges = [
        (1, 2, 2),
        (1, 3, 3),
        (1, 4, 1),
        (1, 5, 10),
        (2, 4, 2),
        (3, 4, 1),
        (3, 5, 1),
        (4, 5, 3),
    ]
    .into_iter()
    .collect::<EdgeList<i32>>();
    let mst = edges.kruskal(6)?;
    println!("kruskal:");
    for e in &mst {
        println!("  {} - {} ({})", e.u, e.v, e.weight);
    }
    println!("  total weight: {}", mst.total_weight());
    tracing::info!(edges = mst.len(), "demo finished");
    Ok(())
}
