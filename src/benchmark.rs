//! Benchmark runner for the phone book lookup strategies
//!
//! Prints the console report, or JSON with `--json`.

use std::path::PathBuf;

use clap::Parser;
use phonebook_search::data::{self, DataSpec};
use phonebook_search::loader::{load_queries, load_records};
use phonebook_search::orchestrator::DEFAULT_DEADLINE_FACTOR;
use phonebook_search::{Benchmark, BenchmarkConfig, Error, Record};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Phone book file, one "<phone> <name>" entry per line
    #[arg(long, requires = "find")]
    directory: Option<PathBuf>,

    /// Names to look up, one per line
    #[arg(long, requires = "directory")]
    find: Option<PathBuf>,

    /// Generate this many synthetic records instead of reading files
    #[arg(long, conflicts_with = "directory")]
    generate: Option<usize>,

    /// Number of synthetic queries
    #[arg(long, default_value_t = 500)]
    queries: usize,

    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Bubble sort deadline as a multiple of the linear search time
    #[arg(long, default_value_t = DEFAULT_DEADLINE_FACTOR)]
    deadline_factor: u64,

    /// Emit the report as JSON
    #[arg(long)]
    json: bool,
}

fn load(args: &Args) -> Result<(Vec<Record>, Vec<String>), Error> {
    match (&args.directory, &args.find, args.generate) {
        (Some(directory), Some(find), _) => Ok((load_records(directory)?, load_queries(find)?)),
        (_, _, Some(records)) => Ok(data::generate(&DataSpec {
            records,
            queries: args.queries,
            seed: args.seed,
            ..Default::default()
        })),
        _ => Err(Error::InvalidConfig(
            "pass --directory and --find, or --generate <N>".to_string(),
        )),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("phonebook_search=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let (records, queries) = load(&args)?;
    info!(records = records.len(), queries = queries.len(), "data ready");

    let bench = Benchmark::new(BenchmarkConfig {
        deadline_factor: args.deadline_factor,
    });
    let report = bench.run(&records, &queries);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}
