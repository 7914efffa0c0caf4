use std::time::{Duration, Instant};

use meld_sssp::graph::generators::{generate_grid_edges, GridNode};
use meld_sssp::{
    AdjacencyGraph, DecreaseKeyQueue, LazyMeldHeap, OrderedLinkedList, ShortestPathEngine,
    SortedRescan,
};
use ordered_float::OrderedFloat;

type Weight = OrderedFloat<f64>;

// Runs one corner-to-corner query and reports its duration
fn benchmark_queue<Q>(
    engine: &ShortestPathEngine<GridNode, Weight>,
    source: GridNode,
    target: GridNode,
) -> Duration
where
    Q: DecreaseKeyQueue<GridNode, Weight> + Default,
{
    let name = Q::default().name();

    let start = Instant::now();
    let path = engine.shortest_path_with::<Q>(&source, &target).unwrap();
    let duration = start.elapsed();

    let cost = engine.path_cost(&source, &path).unwrap();
    println!(
        "  {:<18} {:>4} hops, cost {:>6.1}, {:?}",
        name,
        path.len(),
        cost.into_inner(),
        duration
    );

    duration
}

fn main() {
    env_logger::init();

    // Grid sizes to sweep; the baselines drop out once their per-relaxation
    // scans make runs take minutes
    let sizes: Vec<(i32, i32)> = vec![(10, 10), (20, 20), (30, 30), (50, 50), (100, 100)];
    let baseline_cutoff = 30;

    for (width, height) in sizes {
        let graph = AdjacencyGraph::from_edges(generate_grid_edges(width, height)).unwrap();
        let engine = ShortestPathEngine::new(graph);

        let source = (1, 1);
        let target = (width, height);

        println!(
            "\n{}x{} grid ({} nodes, {} edges), {:?} -> {:?}:",
            width,
            height,
            engine.graph().node_count(),
            engine.graph().edge_count(),
            source,
            target
        );

        benchmark_queue::<LazyMeldHeap<GridNode, Weight>>(&engine, source, target);
        if width <= baseline_cutoff && height <= baseline_cutoff {
            benchmark_queue::<OrderedLinkedList<GridNode, Weight>>(&engine, source, target);
            benchmark_queue::<SortedRescan<GridNode, Weight>>(&engine, source, target);
        } else {
            println!("  (baselines skipped at this size)");
        }
    }
}
