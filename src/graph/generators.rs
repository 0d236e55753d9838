use crate::graph::{DirectedGraph, Graph, MutableGraph};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a directed G(n, m) random graph: `n` nodes `0..n` and `m`
/// distinct edges without self-loops, with integer weights drawn from
/// `0..=99` and stored under `key`.
///
/// The same seed always produces the same graph. `m` is capped at
/// `n * (n - 1)`.
pub fn generate_gnm(n: usize, m: usize, seed: u64, key: &str) -> DirectedGraph<usize, f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = empty_graph(n);

    for_each_random_edge(&mut graph, m, &mut rng, |rng, _, _| rng.gen_range(0..=99) as f64, key);

    graph
}

/// Generates a directed G(n, m) random graph that has negative edges but
/// no negative cycle.
///
/// Each node gets a hidden potential `h` in `0..=50`; an edge `(u, v)` with
/// base weight `b >= 0` is stored as `b + h(v) - h(u)`. Potentials cancel
/// around any cycle, so every cycle keeps its non-negative base weight.
/// All weights are integers, so path sums are exact in `f64`.
pub fn generate_gnm_with_negative_edges(
    n: usize,
    m: usize,
    seed: u64,
    key: &str,
) -> DirectedGraph<usize, f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let potentials: Vec<i64> = (0..n).map(|_| rng.gen_range(0..=50)).collect();
    let mut graph = empty_graph(n);

    for_each_random_edge(
        &mut graph,
        m,
        &mut rng,
        |rng, u, v| (rng.gen_range(0..=99) + potentials[v] - potentials[u]) as f64,
        key,
    );

    graph
}

fn empty_graph(n: usize) -> DirectedGraph<usize, f64> {
    let mut graph = DirectedGraph::with_capacity(n);
    for v in 0..n {
        graph.add_node(v);
    }
    graph
}

fn for_each_random_edge<F>(
    graph: &mut DirectedGraph<usize, f64>,
    m: usize,
    rng: &mut StdRng,
    mut weight: F,
    key: &str,
) where
    F: FnMut(&mut StdRng, usize, usize) -> f64,
{
    let n = graph.node_count();
    if n < 2 {
        return;
    }
    let target = m.min(n * (n - 1));

    let mut added = 0;
    while added < target {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        // Avoid self-loops and duplicate edges
        if u != v && !graph.has_edge(&u, &v) {
            let w = weight(rng, u, v);
            graph.add_edge(u, v, key, w);
            added += 1;
        }
    }
}
