use clap::Parser;
use forest_fire_core::{append_record, FireSimulation, RunRecord, SimulationConfig};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Forest fire cellular automaton benchmark
#[derive(Parser, Debug)]
#[command(name = "demo-headless")]
#[command(about = "Parallel forest fire spread benchmark", long_about = None)]
struct Args {
    /// Grid edge length (grid is size x size)
    #[arg(long, default_value_t = 1000)]
    size: usize,

    /// Number of simulation steps
    #[arg(long, default_value_t = 100)]
    steps: usize,

    /// Initial probability that a cell is a tree
    #[arg(long, default_value_t = 0.6)]
    density: f64,

    /// Append one CSV record to this file
    #[arg(long)]
    append_to: Option<PathBuf>,

    /// Row partitions per step (default: number of logical processors)
    #[arg(long)]
    workers: Option<usize>,

    /// Seed for tree placement (default: derived from the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Engine label written as the first CSV field
    #[arg(long, default_value = "Rust")]
    label: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(clock_seed);
    let config = SimulationConfig {
        width: args.size,
        height: args.size,
        density: args.density,
        steps: args.steps,
        workers: args.workers,
        seed: Some(seed),
    };
    config.validate()?;
    info!("Seeding tree placement with {}", seed);

    println!("Initializing Grid: {}x{}", args.size, args.size);
    let mut sim = FireSimulation::from_config(&config);

    let timing = sim.run(config.steps);
    println!("Simulation completed in: {:?}", timing.elapsed);
    println!("Time per step: {:?}", timing.per_step());

    if let Some(path) = args.append_to {
        let record = RunRecord {
            label: args.label,
            size: args.size,
            steps: args.steps,
            elapsed_secs: timing.elapsed_secs(),
        };
        append_record(&path, &record)?;
        info!("Appended run record to {}", path.display());
    }

    Ok(())
}

/// Seed from the wall clock, for runs that do not ask for reproducibility
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64)
}
