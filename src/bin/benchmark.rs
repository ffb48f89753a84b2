use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::process;
use std::time::Duration;
use ordered_float::OrderedFloat;
use dense_apsp::algorithm::AllPairsShortestPaths;
use dense_apsp::graph::generators::random_graph;
use dense_apsp::{FloydWarshall, RelaxationMode};

type Apsp = FloydWarshall<usize, OrderedFloat<f64>>;

const USAGE: &str = "Usage: benchmark [--parallel] [--log <file>]";

/// Harness configuration
#[derive(Debug, Clone)]
struct BenchConfig {
    /// (vertices, edges) per run
    graphs: Vec<(usize, usize)>,
    /// Where the timing log goes
    log_file: String,
    /// Which run's time is written to the log
    logged_mode: RelaxationMode,
    seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            graphs: vec![(8, 10), (50, 100), (300, 1_000), (600, 6_000)],
            log_file: "log.txt".to_string(),
            logged_mode: RelaxationMode::Sequential,
            seed: 42,
        }
    }
}

impl BenchConfig {
    fn from_args<I: Iterator<Item = String>>(mut args: I) -> Result<Self, String> {
        let mut config = BenchConfig::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--parallel" => config.logged_mode = RelaxationMode::Parallel,
                "--log" => {
                    config.log_file = args.next().ok_or_else(|| "--log needs a file name".to_string())?;
                }
                other => return Err(format!("unknown argument {}", other)),
            }
        }

        Ok(config)
    }
}

// Builds the same graph twice and relaxes it in the given mode
fn benchmark_mode(vertices: usize, edges: usize, seed: u64, mode: RelaxationMode) -> dense_apsp::Result<(Apsp, Duration)> {
    let batch = random_graph(vertices, edges, 1.0..100.0, seed);
    let mut apsp = FloydWarshall::from_ingestor(batch)?.with_mode(mode);

    println!("Running {} ({:?}) on graph with {} vertices...", apsp.name(), mode, apsp.vertex_count());
    let stats = apsp.generate_distance_matrix();
    println!(
        "  - {} updates, {} reachable pairs in {:?}",
        stats.updates,
        apsp.distances().reachable_pairs(),
        stats.elapsed
    );

    Ok((apsp, stats.elapsed))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match BenchConfig::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("{}", USAGE);
            process::exit(1);
        }
    };

    println!("=====================================================");
    println!("Benchmark: Floyd-Warshall sequential vs parallel");
    println!("=====================================================");

    let mut log_file = BufWriter::new(File::create(&config.log_file)?);
    let mut results = Vec::new();

    for &(vertices, edges) in &config.graphs {
        println!("\nGenerating random graph with {} vertices and {} edges...", vertices, edges);

        let (sequential, sequential_time) = benchmark_mode(vertices, edges, config.seed, RelaxationMode::Sequential)?;
        let (parallel, parallel_time) = benchmark_mode(vertices, edges, config.seed, RelaxationMode::Parallel)?;

        // Same input, no negative weights: both modes must agree
        if sequential.distances() != parallel.distances() {
            return Err(format!("sequential and parallel results differ for {} vertices", vertices).into());
        }

        let logged_time = match config.logged_mode {
            RelaxationMode::Sequential => sequential_time,
            RelaxationMode::Parallel => parallel_time,
        };
        writeln!(log_file, "Time duration {} edges: {}ms", edges, logged_time.as_millis())?;
        results.push((vertices, edges, sequential_time, parallel_time));
    }
    log_file.flush()?;

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<10} | {:<15} | {:<15} | {:<10}",
             "Vertices", "Edges", "Sequential (ms)", "Parallel (ms)", "SpeedUp");
    println!("-----------------------------------------------------");

    for (vertices, edges, sequential_time, parallel_time) in &results {
        let speedup = sequential_time.as_secs_f64() / parallel_time.as_secs_f64().max(f64::EPSILON);
        println!("{:<10} | {:<10} | {:<15} | {:<15} | {:<10.2}",
                 vertices,
                 edges,
                 sequential_time.as_millis(),
                 parallel_time.as_millis(),
                 speedup);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<BenchConfig, String> {
        BenchConfig::from_args(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn test_defaults_log_sequential_times() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.log_file, "log.txt");
        assert_eq!(config.logged_mode, RelaxationMode::Sequential);
    }

    #[test]
    fn test_parallel_flag_is_not_a_log_path() {
        let config = parse(&["--parallel"]).unwrap();
        assert_eq!(config.logged_mode, RelaxationMode::Parallel);
        assert_eq!(config.log_file, "log.txt");
    }

    #[test]
    fn test_log_file_needs_explicit_flag() {
        let config = parse(&["--log", "timings.txt", "--parallel"]).unwrap();
        assert_eq!(config.log_file, "timings.txt");
        assert_eq!(config.logged_mode, RelaxationMode::Parallel);

        assert!(parse(&["--log"]).is_err());
        assert!(parse(&["timings.txt"]).is_err());
    }
}
