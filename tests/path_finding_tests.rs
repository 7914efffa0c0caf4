use meld_sssp::graph::generators::{generate_grid_edges, GridNode};
use meld_sssp::{
    AdjacencyGraph, DecreaseKeyQueue, Error, LazyMeldHeap, OrderedLinkedList, ShortestPathEngine,
    SortedRescan,
};
use ordered_float::OrderedFloat;

type Weight = OrderedFloat<f64>;

// The four-town graph from the original usage example, plus an isolated
// node E that nothing connects to
fn sample_engine() -> ShortestPathEngine<&'static str, Weight> {
    let edges = vec![
        ("A", vec![("B", OrderedFloat(20.0)), ("C", OrderedFloat(20.0))]),
        ("B", vec![("A", OrderedFloat(30.0)), ("C", OrderedFloat(100.0))]),
        ("C", vec![("D", OrderedFloat(10.0)), ("A", OrderedFloat(20.0))]),
        ("D", vec![("C", OrderedFloat(10.0)), ("B", OrderedFloat(20.0))]),
        ("E", vec![]),
    ];
    ShortestPathEngine::new(AdjacencyGraph::from_edges(edges).unwrap())
}

#[test]
fn test_shortest_path_takes_cheaper_detour() {
    let engine = sample_engine();

    // A -> C -> D costs 30; going through B costs at least 120
    let path = engine.shortest_path(&"A", &"D").unwrap();
    assert_eq!(path, vec!["C", "D"]);
    assert_eq!(engine.path_cost(&"A", &path), Some(OrderedFloat(30.0)));
}

#[test]
fn test_all_queues_agree_on_sample_graph() {
    let engine = sample_engine();

    let heap = engine
        .shortest_path_with::<LazyMeldHeap<&str, Weight>>(&"A", &"D")
        .unwrap();
    let list = engine
        .shortest_path_with::<OrderedLinkedList<&str, Weight>>(&"A", &"D")
        .unwrap();
    let rescan = engine
        .shortest_path_with::<SortedRescan<&str, Weight>>(&"A", &"D")
        .unwrap();

    assert_eq!(engine.path_cost(&"A", &heap), Some(OrderedFloat(30.0)));
    assert_eq!(engine.path_cost(&"A", &list), Some(OrderedFloat(30.0)));
    assert_eq!(engine.path_cost(&"A", &rescan), Some(OrderedFloat(30.0)));
}

#[test]
fn test_source_equals_target_is_vacuous_for_every_node() {
    let engine = sample_engine();

    let nodes: Vec<&str> = engine.graph().nodes().copied().collect();
    for node in nodes {
        let path = engine.shortest_path(&node, &node).unwrap();
        assert!(path.is_empty(), "expected empty path for {} -> {}", node, node);
    }
}

#[test]
fn test_unreachable_target_returns_empty_path() {
    let engine = sample_engine();

    let path = engine.shortest_path(&"A", &"E").unwrap();
    assert!(path.is_empty());
}

#[test]
fn test_unknown_source_is_an_error() {
    let engine = sample_engine();

    let result = engine.shortest_path(&"X", &"A");
    assert!(matches!(result, Err(Error::UnknownNode(_))));
}

#[test]
fn test_unknown_target_is_an_error() {
    let engine = sample_engine();

    let result = engine.shortest_path(&"A", &"X");
    assert!(matches!(result, Err(Error::UnknownNode(_))));
}

#[test]
fn test_neighbor_only_identifier_is_not_an_endpoint() {
    // X occurs as a neighbor but never as an entry of its own, so it can be
    // relaxed into but not queried
    let edges = vec![("A", vec![("X", OrderedFloat(5.0))])];
    let engine = ShortestPathEngine::new(AdjacencyGraph::from_edges(edges).unwrap());

    let result = engine.shortest_path(&"A", &"X");
    assert!(matches!(result, Err(Error::UnknownNode(_))));
}

#[test]
fn test_empty_edge_list_is_rejected() {
    let edges: Vec<(&str, Vec<(&str, Weight)>)> = Vec::new();
    let result = AdjacencyGraph::from_edges(edges);
    assert!(matches!(result, Err(Error::MalformedInput(_))));
}

#[test]
fn test_nan_weight_is_rejected() {
    let edges = vec![("A", vec![("B", OrderedFloat(f64::NAN))])];
    let result = AdjacencyGraph::from_edges(edges);
    assert!(matches!(result, Err(Error::MalformedInput(_))));
}

#[test]
fn test_duplicate_edges_resolve_last_write_wins() {
    let edges = vec![
        ("A", vec![("B", OrderedFloat(50.0)), ("B", OrderedFloat(7.0))]),
        ("B", vec![]),
    ];
    let graph = AdjacencyGraph::from_edges(edges).unwrap();
    assert_eq!(graph.edge_weight(&"A", &"B"), Some(OrderedFloat(7.0)));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_negative_weights_are_accepted_unvalidated() {
    // Documented limitation: negative weights build fine and quietly break
    // the algorithm's guarantees instead of erroring
    let edges = vec![
        ("A", vec![("B", OrderedFloat(-3.0))]),
        ("B", vec![]),
    ];
    let graph = AdjacencyGraph::from_edges(edges).unwrap();
    assert_eq!(graph.edge_weight(&"A", &"B"), Some(OrderedFloat(-3.0)));
}

#[test]
fn test_returned_path_uses_existing_edges() {
    let engine = sample_engine();

    let path = engine.shortest_path(&"B", &"D").unwrap();
    assert!(!path.is_empty());
    let mut prev = "B";
    for node in &path {
        assert!(
            engine.graph().edge_weight(&prev, node).is_some(),
            "missing edge {:?} -> {:?}",
            prev,
            node
        );
        prev = *node;
    }
    assert_eq!(prev, "D");
}

fn grid_cost_and_hops<Q>(engine: &ShortestPathEngine<GridNode, Weight>, target: GridNode) -> (Weight, usize)
where
    Q: DecreaseKeyQueue<GridNode, Weight> + Default,
{
    let source = (1, 1);
    let path = engine.shortest_path_with::<Q>(&source, &target).unwrap();
    let cost = engine.path_cost(&source, &path).unwrap();
    (cost, path.len())
}

#[test]
fn test_grid_corner_to_corner_across_all_queues() {
    // On a unit-weight 8-connected grid, diagonal moves dominate: opposite
    // corners of a 50x50 grid are exactly 49 hops (and cost 49) apart
    let (width, height) = (50, 50);
    let graph = AdjacencyGraph::from_edges(generate_grid_edges(width, height)).unwrap();
    let engine = ShortestPathEngine::new(graph);
    let target = (width, height);
    let expected = OrderedFloat((width.max(height) - 1) as f64);

    let (heap_cost, heap_hops) = grid_cost_and_hops::<LazyMeldHeap<GridNode, Weight>>(&engine, target);
    assert_eq!(heap_cost, expected);
    assert_eq!(heap_hops, 49);

    let (list_cost, list_hops) =
        grid_cost_and_hops::<OrderedLinkedList<GridNode, Weight>>(&engine, target);
    assert_eq!(list_cost, expected);
    assert_eq!(list_hops, 49);

    let (rescan_cost, rescan_hops) =
        grid_cost_and_hops::<SortedRescan<GridNode, Weight>>(&engine, target);
    assert_eq!(rescan_cost, expected);
    assert_eq!(rescan_hops, 49);
}

#[test]
fn test_grid_boundary_cells_have_fewer_neighbors() {
    let graph = AdjacencyGraph::from_edges(generate_grid_edges(4, 3)).unwrap();

    assert_eq!(graph.neighbors(&(1, 1)).count(), 3);
    assert_eq!(graph.neighbors(&(4, 3)).count(), 3);
    assert_eq!(graph.neighbors(&(2, 1)).count(), 5);
    assert_eq!(graph.neighbors(&(2, 2)).count(), 8);
}
