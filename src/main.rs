use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::PathBuf,
    process,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vmsim::{
    config::{IndexOptions, SimConfig, Strategy, DEFAULT_INDEX_BUCKETS, DEFAULT_INDEX_DEPTH},
    record::{RecordFormat, RecordReader},
    stats::{Report, PROG_NAME},
    Engine,
};

#[derive(Parser)]
#[command(name = "vmsim")]
#[command(about = "Replays a memory reference trace against a simulated page frame table")]
#[command(version)]
struct Cli {
    /// Page size in bytes, a power of two between 256 and 8192
    pagesize: usize,

    /// Simulated physical memory in bytes
    memsize: usize,

    /// Replacement strategy: none, mrand, lru or sec
    strategy: String,

    /// Trace record layout: narrow (4 byte records) or wide (8 byte records)
    #[arg(short, long, default_value = "narrow")]
    format: String,

    /// Random seed for mrand
    #[arg(long)]
    seed: Option<u64>,

    /// Buckets of the page index
    #[arg(long, default_value_t = DEFAULT_INDEX_BUCKETS)]
    buckets: usize,

    /// Entries per page index bucket
    #[arg(long, default_value_t = DEFAULT_INDEX_DEPTH)]
    depth: usize,

    /// Trace file to read instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("[{}] Error: {:#}", PROG_NAME, e);
        process::exit(1);
    }
}

fn build_config(cli: &Cli) -> Result<SimConfig> {
    let strategy: Strategy = cli.strategy.parse()?;
    let format: RecordFormat = cli.format.parse()?;
    let index = IndexOptions {
        buckets: cli.buckets,
        depth: cli.depth,
    };

    let config = SimConfig::build(cli.pagesize, cli.memsize, strategy, format, cli.seed, index)?;
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    // Nothing is read before the configuration is known to be good
    let config = build_config(&cli)?;

    println!(
        "{} [page= {}, mem= {}, {}, page num= {}]",
        PROG_NAME,
        config.page_size,
        config.effective_mem_size(),
        config.strategy,
        config.capacity
    );

    let input: Box<dyn Read> = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open trace {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin().lock())),
    };

    let format = config.format;
    let mut engine = Engine::new(config)?;

    let start = Instant::now();
    engine
        .run(RecordReader::new(input, format))
        .context("simulation aborted")?;
    let elapsed = start.elapsed();

    let report = Report {
        strategy: engine.strategy(),
        stats: engine.stats(),
        elapsed,
    };
    println!("{}", report);

    Ok(())
}
