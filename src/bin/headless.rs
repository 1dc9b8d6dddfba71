use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use boids::{Flock, FlockStats, SimulationParams};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "boids-headless",
    version,
    about = "Run the boid flocking engine without a window and log flock statistics"
)]
struct Cli {
    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 100)]
    ticks: u64,

    /// Seed for the initial population; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with simulation parameters (missing fields keep their defaults).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the population size.
    #[arg(long)]
    boids: Option<usize>,

    /// Advance boids on the rayon thread pool.
    #[arg(long)]
    parallel: bool,

    /// Use the spatial grid for neighbour lookups.
    #[arg(long)]
    spatial_grid: bool,

    /// Log statistics every N ticks (0 logs only the final tick).
    #[arg(long, default_value_t = 10)]
    report_every: u64,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut params = match &cli.config {
        Some(path) => SimulationParams::from_json_file(path)
            .with_context(|| format!("failed to load parameters from {}", path.display()))?,
        None => SimulationParams::default(),
    };
    if let Some(boids) = cli.boids {
        params.population_size = boids;
    }
    params.enable_parallel |= cli.parallel;
    params.enable_spatial_grid |= cli.spatial_grid;

    let seed = cli.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut flock = Flock::new(params, &mut rng).context("invalid simulation parameters")?;
    info!(seed, ticks = cli.ticks, "starting headless run");

    let started = Instant::now();
    for _ in 0..cli.ticks {
        flock.advance();
        if cli.report_every > 0 && flock.tick() % cli.report_every == 0 {
            report(&flock);
        }
    }

    let already_reported = cli.report_every > 0 && cli.ticks > 0 && flock.tick() % cli.report_every == 0;
    if !already_reported {
        report(&flock);
    }
    info!(elapsed_ms = started.elapsed().as_millis() as u64, "run finished");
    Ok(())
}

fn report(flock: &Flock) {
    let stats = FlockStats::from_population(flock.population());
    info!(
        tick = flock.tick(),
        boids = stats.count,
        mean_speed = stats.mean_speed,
        max_speed = stats.max_speed,
        centroid_x = stats.centroid.0,
        centroid_y = stats.centroid.1,
        "flock statistics"
    );
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .try_init();
}
