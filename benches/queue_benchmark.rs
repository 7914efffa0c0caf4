use criterion::{black_box, criterion_group, criterion_main, Criterion};
use meld_sssp::graph::generators::{generate_grid_edges, GridNode};
use meld_sssp::{
    AdjacencyGraph, LazyMeldHeap, OrderedLinkedList, ShortestPathEngine, SortedRescan,
};
use ordered_float::OrderedFloat;

type Weight = OrderedFloat<f64>;

fn grid_engine(width: i32, height: i32) -> ShortestPathEngine<GridNode, Weight> {
    let graph = AdjacencyGraph::from_edges(generate_grid_edges(width, height)).unwrap();
    ShortestPathEngine::new(graph)
}

fn bench_queues_small_grid(c: &mut Criterion) {
    let engine = grid_engine(20, 20);
    let source = (1, 1);
    let target = (20, 20);

    let mut group = c.benchmark_group("grid_20x20");
    group.bench_function("lazy_meld_heap", |b| {
        b.iter(|| {
            engine
                .shortest_path_with::<LazyMeldHeap<GridNode, Weight>>(
                    black_box(&source),
                    black_box(&target),
                )
                .unwrap()
        })
    });
    group.bench_function("ordered_linked_list", |b| {
        b.iter(|| {
            engine
                .shortest_path_with::<OrderedLinkedList<GridNode, Weight>>(
                    black_box(&source),
                    black_box(&target),
                )
                .unwrap()
        })
    });
    group.bench_function("sorted_rescan", |b| {
        b.iter(|| {
            engine
                .shortest_path_with::<SortedRescan<GridNode, Weight>>(
                    black_box(&source),
                    black_box(&target),
                )
                .unwrap()
        })
    });
    group.finish();
}

fn bench_heap_large_grid(c: &mut Criterion) {
    let engine = grid_engine(60, 60);
    let source = (1, 1);
    let target = (60, 60);

    c.bench_function("grid_60x60/lazy_meld_heap", |b| {
        b.iter(|| {
            engine
                .shortest_path_with::<LazyMeldHeap<GridNode, Weight>>(
                    black_box(&source),
                    black_box(&target),
                )
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_queues_small_grid, bench_heap_large_grid);
criterion_main!(benches);
