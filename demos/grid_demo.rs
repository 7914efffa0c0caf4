use colored::*;
use meld_sssp::graph::generators::generate_grid_edges;
use meld_sssp::{AdjacencyGraph, ShortestPathEngine};
use ordered_float::OrderedFloat;

fn main() {
    // The four-town example: two routes from A to D, only one of them cheap
    let edges = vec![
        ("A", vec![("B", OrderedFloat(20.0)), ("C", OrderedFloat(20.0))]),
        ("B", vec![("A", OrderedFloat(30.0)), ("C", OrderedFloat(100.0))]),
        ("C", vec![("D", OrderedFloat(10.0)), ("A", OrderedFloat(20.0))]),
        ("D", vec![("C", OrderedFloat(10.0)), ("B", OrderedFloat(20.0))]),
    ];

    let engine = ShortestPathEngine::new(AdjacencyGraph::from_edges(edges).unwrap());
    let path = engine.shortest_path(&"A", &"D").unwrap();
    let cost = engine.path_cost(&"A", &path).unwrap();

    println!("{}", "--- Four towns ---".bold());
    println!(
        "A -> D via {}, total cost {}",
        format!("{:?}", path).green(),
        format!("{:.0}", cost.into_inner()).yellow()
    );

    // A larger grid: diagonal moves dominate, so opposite corners are
    // max(width, height) - 1 hops apart
    let (width, height) = (12, 8);
    let grid = AdjacencyGraph::from_edges(generate_grid_edges(width, height)).unwrap();
    let engine = ShortestPathEngine::new(grid);

    let source = (1, 1);
    let target = (width, height);
    let path = engine.shortest_path(&source, &target).unwrap();
    let cost = engine.path_cost(&source, &path).unwrap();

    println!("\n{}", format!("--- {}x{} grid ---", width, height).bold());
    for (step, node) in path.iter().enumerate() {
        println!("  {} {:?}", format!("{:>2}.", step + 1).cyan(), node);
    }
    println!(
        "{} hops, total cost {}",
        path.len().to_string().green(),
        format!("{:.0}", cost.into_inner()).yellow()
    );
}
