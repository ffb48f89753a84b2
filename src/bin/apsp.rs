use dense_apsp::io::{DistanceReport, EdgeListReader, ReportWriter};
use dense_apsp::{EdgeIngestor, FloydWarshall, RelaxationMode};
use std::env;
use std::fmt::{Debug, Display};
use std::fs::File;
use std::hash::Hash;
use std::io::BufWriter;
use std::process;

const USAGE: &str = "Usage: apsp <input> <output> [--paths] [--json] [--dense-ids] [--parallel]";

/// Command line configuration
#[derive(Debug, Clone)]
struct CliConfig {
    input: String,
    output: String,
    paths: bool,
    json: bool,
    dense_ids: bool,
    mode: RelaxationMode,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            input: String::new(),
            output: String::new(),
            paths: false,
            json: false,
            dense_ids: false,
            mode: RelaxationMode::Sequential,
        }
    }
}

impl CliConfig {
    fn from_args<I: Iterator<Item = String>>(args: I) -> Result<Self, String> {
        let mut config = CliConfig::default();
        let mut positional = Vec::new();

        for arg in args {
            match arg.as_str() {
                "--paths" => config.paths = true,
                "--json" => config.json = true,
                "--dense-ids" => config.dense_ids = true,
                "--parallel" => config.mode = RelaxationMode::Parallel,
                flag if flag.starts_with("--") => return Err(format!("unknown flag {}", flag)),
                _ => positional.push(arg),
            }
        }

        if positional.len() != 2 {
            return Err(format!("expected 2 file names, got {}", positional.len()));
        }
        config.output = positional.pop().unwrap_or_default();
        config.input = positional.pop().unwrap_or_default();
        Ok(config)
    }
}

fn run<L, I>(ingestor: I, config: &CliConfig) -> dense_apsp::Result<()>
where
    L: Clone + Eq + Hash + Debug + Display,
    I: EdgeIngestor<L, f64>,
{
    let mut apsp = FloydWarshall::from_ingestor(ingestor)?.with_mode(config.mode);
    let stats = apsp.generate_distance_matrix();
    log::info!(
        "{} vertices, {} reachable pairs, relaxed in {:?}",
        apsp.vertex_index().size(),
        apsp.distances().reachable_pairs(),
        stats.elapsed
    );

    let mut out = BufWriter::new(File::create(&config.output)?);
    if config.json {
        DistanceReport::build(&apsp, config.paths)?.write_json(&mut out)
    } else {
        ReportWriter::new().with_paths(config.paths).write(&apsp, &mut out)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let config = match CliConfig::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("{}", USAGE);
            process::exit(1);
        }
    };

    let reader = EdgeListReader::open(&config.input)?;
    if config.dense_ids {
        run::<usize, _>(reader.into_dense(), &config)?;
    } else {
        run::<String, _>(reader, &config)?;
    }

    Ok(())
}
