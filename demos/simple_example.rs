use colored::*;
use dense_apsp::{EdgeBatch, FloydWarshall, RelaxationMode};

fn main() {
    // A small road network between towns, one-way streets included
    let batch = EdgeBatch::new()
        .edge("harbor", "market", 4.0)
        .edge("market", "castle", 3.0)
        .edge("harbor", "castle", 9.0)
        .edge("castle", "mill", 2.0)
        .edge("mill", "harbor", 6.0)
        .edge("market", "mill", 7.0)
        .vertex("island");

    let mut apsp = FloydWarshall::from_ingestor(batch)
        .unwrap()
        .with_mode(RelaxationMode::Parallel);

    println!("{}", "--- Floyd-Warshall on a small town graph ---".bold());
    let stats = apsp.generate_distance_matrix();
    println!(
        "Relaxed {} towns with {} improvements in {:?}\n",
        apsp.vertex_index().size(),
        stats.updates,
        stats.elapsed
    );

    let towns: Vec<&str> = apsp.vertex_index().labels().copied().collect();
    for from in &towns {
        for to in &towns {
            if from == to {
                continue;
            }
            match apsp.path(from, to).unwrap() {
                Some(path) => {
                    let distance = apsp.distance(from, to).unwrap().unwrap();
                    println!(
                        "{} -> {}: {} via {}",
                        from.cyan(),
                        to.cyan(),
                        format!("{:.1}", distance).as_str().green(),
                        path.join(" -> ").as_str().yellow()
                    );
                }
                None => println!("{} -> {}: {}", from.cyan(), to.cyan(), "unreachable".red()),
            }
        }
    }
}
