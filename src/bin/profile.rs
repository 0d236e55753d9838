use std::env;
use std::time::{Duration, Instant};

use log::info;
use serde::Serialize;

use johnson_apsp::graph::generators::{generate_gnm, generate_gnm_with_negative_edges};
use johnson_apsp::{BellmanFord, Dijkstra, DirectedGraph, Graph, Johnson, ShortestPathAlgorithm};

const WEIGHT: &str = "weight";

#[derive(Debug)]
struct Options {
    num_nodes: usize,
    num_edges: usize,
    seed: u64,
    negative: bool,
    parallel: bool,
    json: bool,
}

#[derive(Debug, Serialize)]
struct Timing {
    algorithm: String,
    millis: f64,
    reachable: usize,
}

#[derive(Debug, Serialize)]
struct Report {
    num_nodes: usize,
    num_edges: usize,
    seed: u64,
    negative_edges: bool,
    parallel: bool,
    timings: Vec<Timing>,
}

fn parse_args() -> Result<Options, String> {
    let mut positional = Vec::new();
    let mut options = Options {
        num_nodes: 1_000,
        num_edges: 10_000,
        seed: 0,
        negative: false,
        parallel: false,
        json: false,
    };

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--negative" => options.negative = true,
            "--parallel" => options.parallel = true,
            "--json" => options.json = true,
            other => positional.push(other.to_string()),
        }
    }

    if let Some(n) = positional.first() {
        options.num_nodes = n.parse().map_err(|e| format!("invalid node count {}: {}", n, e))?;
    }
    if let Some(m) = positional.get(1) {
        options.num_edges = m.parse().map_err(|e| format!("invalid edge count {}: {}", m, e))?;
    }
    if let Some(s) = positional.get(2) {
        options.seed = s.parse().map_err(|e| format!("invalid seed {}: {}", s, e))?;
    }
    Ok(options)
}

fn time<T, F>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

fn timing(algorithm: &str, duration: Duration, reachable: usize) -> Timing {
    info!("{} finished in {:?} ({} reachable)", algorithm, duration, reachable);
    Timing {
        algorithm: algorithm.to_string(),
        millis: duration.as_secs_f64() * 1000.0,
        reachable,
    }
}

fn run(options: &Options) -> johnson_apsp::Result<Report> {
    info!(
        "generating graph: {} nodes, {} edges, seed {}",
        options.num_nodes, options.num_edges, options.seed
    );
    let graph: DirectedGraph<usize, f64> = if options.negative {
        generate_gnm_with_negative_edges(options.num_nodes, options.num_edges, options.seed, WEIGHT)
    } else {
        generate_gnm(options.num_nodes, options.num_edges, options.seed, WEIGHT)
    };

    let mut timings = Vec::new();
    let source = 0usize;

    if graph.node_count() > 0 {
        let bellman_ford = BellmanFord::new(WEIGHT);
        let (result, duration) = time(|| bellman_ford.compute_shortest_paths(&graph, &source));
        let result = result?;
        let reachable = graph.nodes().filter(|v| result.is_reachable(v)).count();
        timings.push(timing("Bellman-Ford", duration, reachable));

        if !options.negative {
            let dijkstra = Dijkstra::new(WEIGHT);
            let (result, duration) = time(|| dijkstra.compute_shortest_paths(&graph, &source));
            let result = result?;
            let reachable = graph.nodes().filter(|v| result.is_reachable(v)).count();
            timings.push(timing("Dijkstra", duration, reachable));
        }
    }

    let johnson = Johnson::new(WEIGHT).with_parallel(options.parallel);
    let (result, duration) = time(|| johnson.compute_all_pairs(&graph));
    let result = result?;
    let reachable = result
        .distances
        .values()
        .map(|row| row.values().filter(|d| d.is_finite()).count())
        .sum();
    timings.push(timing("Johnson", duration, reachable));

    Ok(Report {
        num_nodes: graph.node_count(),
        num_edges: graph.edge_count(),
        seed: options.seed,
        negative_edges: options.negative,
        parallel: options.parallel,
        timings,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let options = parse_args()?;
    let report = run(&options)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("=====================================================");
    println!(
        "Graph: {} nodes, {} edges, seed {}{}",
        report.num_nodes,
        report.num_edges,
        report.seed,
        if report.negative_edges { " (negative edges)" } else { "" }
    );
    println!("=====================================================");
    println!("{:<15} | {:<12} | {:<10}", "Algorithm", "Time (ms)", "Reachable");
    println!("-----------------------------------------------------");
    for t in &report.timings {
        println!("{:<15} | {:<12.2} | {:<10}", t.algorithm, t.millis, t.reachable);
    }

    Ok(())
}
