use johnson_apsp::data_structures::BinaryHeapWrapper;
use johnson_apsp::graph::generators::generate_gnm;
use johnson_apsp::{
    bellman_ford, dijkstra, BinaryHeap, Dijkstra, DirectedGraph, Error, Graph, MutableGraph,
    PriorityQueue, ShortestPathAlgorithm,
};
use ordered_float::OrderedFloat;

const WEIGHT: &str = "weight";

fn s(name: &str) -> String {
    name.to_string()
}

fn named_graph(edges: &[(&str, &str, f64)]) -> DirectedGraph<String, f64> {
    DirectedGraph::from_weighted_edges(WEIGHT, edges.iter().map(|&(u, v, w)| (s(u), s(v), w)))
}

#[test]
fn test_single_edge() {
    let graph = named_graph(&[("A", "B", 5.0)]);
    let result = dijkstra(&graph, &s("A"), WEIGHT).unwrap();

    assert_eq!(result.distance(&s("A")), Some(0.0));
    assert_eq!(result.distance(&s("B")), Some(5.0));
    assert_eq!(result.predecessors[&s("A")], None);
    assert_eq!(result.predecessors[&s("B")], Some(s("A")));
}

#[test]
fn test_triangle_matches_bellman_ford() {
    let graph = named_graph(&[("A", "B", 1.0), ("B", "C", 1.0), ("A", "C", 5.0)]);
    let fast = dijkstra(&graph, &s("A"), WEIGHT).unwrap();
    let slow = bellman_ford(&graph, &s("A"), WEIGHT).unwrap();

    assert_eq!(fast.distance(&s("C")), Some(2.0));
    assert_eq!(fast.predecessor(&s("C")), Some(&s("B")));
    assert_eq!(fast, slow);

    let solver = Dijkstra::new(WEIGHT);
    let path = <Dijkstra as ShortestPathAlgorithm<String, f64, DirectedGraph<String, f64>>>::get_path(
        &solver,
        &fast,
        &s("C"),
    );
    assert_eq!(path, Some(vec![s("A"), s("B"), s("C")]));
}

#[test]
fn test_disconnected_nodes() {
    let mut graph: DirectedGraph<String, f64> = DirectedGraph::new();
    graph.add_node(s("A"));
    graph.add_node(s("B"));
    let result = dijkstra(&graph, &s("A"), WEIGHT).unwrap();

    assert_eq!(result.distance(&s("A")), Some(0.0));
    assert_eq!(result.distance(&s("B")), Some(f64::INFINITY));
    assert_eq!(result.predecessors[&s("B")], None);
}

#[test]
fn test_stale_entries_are_skipped() {
    // C is queued at 10 first, then improved through B
    let graph = named_graph(&[
        ("A", "C", 10.0),
        ("A", "B", 1.0),
        ("B", "C", 2.0),
        ("A", "D", 0.5),
        ("D", "B", 0.25),
        ("C", "E", 1.0),
    ]);
    let result = dijkstra(&graph, &s("A"), WEIGHT).unwrap();

    assert_eq!(result.distance(&s("B")), Some(0.75));
    assert_eq!(result.distance(&s("C")), Some(2.75));
    assert_eq!(result.distance(&s("E")), Some(3.75));
    assert_eq!(
        result.path_to(&s("E")),
        Some(vec![s("A"), s("D"), s("B"), s("C"), s("E")])
    );
}

#[test]
fn test_zero_weight_edges() {
    let graph = DirectedGraph::from_weighted_edges(
        WEIGHT,
        vec![(0usize, 1usize, 0.0), (1, 2, 0.0), (2, 0, 0.0), (2, 3, 4.0)],
    );
    let result = dijkstra(&graph, &0, WEIGHT).unwrap();
    assert_eq!(result.distance(&2), Some(0.0));
    assert_eq!(result.distance(&3), Some(4.0));
}

#[test]
fn test_undirected_random_graph_agrees_with_bellman_ford() {
    let directed = generate_gnm(200, 900, 0, WEIGHT);
    let mut graph: DirectedGraph<usize, f64> = DirectedGraph::new();
    for &v in directed.nodes() {
        graph.add_node(v);
    }
    for (u, v, attrs) in directed.edges() {
        graph.add_undirected_edge(*u, *v, WEIGHT, attrs[WEIGHT]);
    }

    let fast = dijkstra(&graph, &0, WEIGHT).unwrap();
    let slow = bellman_ford(&graph, &0, WEIGHT).unwrap();
    for v in graph.nodes() {
        assert_eq!(fast.distance(v), slow.distance(v), "distance to {}", v);
    }
}

#[test]
fn test_random_graphs_agree_with_bellman_ford() {
    for seed in 0..5 {
        let graph = generate_gnm(150, 1200, seed, WEIGHT);
        for source in [0usize, 17, 149] {
            let fast = dijkstra(&graph, &source, WEIGHT).unwrap();
            let slow = bellman_ford(&graph, &source, WEIGHT).unwrap();
            assert_eq!(fast.distances, slow.distances, "seed {} source {}", seed, source);
        }
    }
}

#[test]
fn test_any_queue_gives_same_distances() {
    let graph = generate_gnm(100, 600, 9, WEIGHT);
    let solver = Dijkstra::new(WEIGHT);

    let default = solver.compute_shortest_paths(&graph, &0).unwrap();
    let mut wrapper = BinaryHeapWrapper::new();
    let with_wrapper = solver.compute_with_queue(&graph, &0, &mut wrapper).unwrap();
    assert_eq!(default.distances, with_wrapper.distances);

    // Leftover entries in a reused queue are cleared first
    let mut reused: BinaryHeap<f64, usize> = BinaryHeap::min();
    reused.insert(-1.0, 42);
    let with_reused = solver.compute_with_queue(&graph, &0, &mut reused).unwrap();
    assert_eq!(default.distances, with_reused.distances);
}

#[test]
fn test_weight_check() {
    let graph = DirectedGraph::from_weighted_edges(WEIGHT, vec![(0usize, 1usize, 2.0), (1, 2, -1.0)]);

    let checked = Dijkstra::new(WEIGHT).with_weight_check(true);
    let err = checked.compute_shortest_paths(&graph, &0).unwrap_err();
    assert_eq!(
        err,
        Error::NegativeWeight {
            from: "1".to_string(),
            to: "2".to_string(),
            weight: -1.0,
        }
    );

    // Unchecked runs still return something; correctness is not promised
    assert!(Dijkstra::new(WEIGHT).compute_shortest_paths(&graph, &0).is_ok());
}

#[test]
fn test_ordered_float_weights() {
    let graph: DirectedGraph<usize, OrderedFloat<f64>> = DirectedGraph::from_weighted_edges(
        WEIGHT,
        vec![
            (0, 1, OrderedFloat(1.5)),
            (1, 2, OrderedFloat(1.5)),
            (0, 2, OrderedFloat(4.0)),
        ],
    );
    let result = dijkstra(&graph, &0, WEIGHT).unwrap();
    assert_eq!(result.distance(&2), Some(OrderedFloat(3.0)));
    assert_eq!(result.path_to(&2), Some(vec![0, 1, 2]));
}

#[test]
fn test_source_must_exist() {
    let graph = DirectedGraph::from_weighted_edges(WEIGHT, vec![(0usize, 1usize, 1.0)]);
    assert_eq!(
        dijkstra(&graph, &5, WEIGHT),
        Err(Error::InvalidNode("5".to_string()))
    );
}

#[test]
fn test_graph_is_not_mutated() {
    let graph = generate_gnm(60, 300, 4, WEIGHT);
    let snapshot = graph.clone();
    let first = dijkstra(&graph, &0, WEIGHT).unwrap();
    let second = dijkstra(&graph, &0, WEIGHT).unwrap();

    assert_eq!(first, second);
    assert_eq!(graph.node_count(), snapshot.node_count());
    for (u, v, attrs) in snapshot.edges() {
        assert_eq!(graph.edge_weight(u, v, WEIGHT), Some(attrs[WEIGHT]));
    }
    assert_eq!(graph.edge_count(), snapshot.edge_count());
}
