use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use spacelab::{Scenario, Simulation, SimulationConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Run a spacelab scenario headless and report what happened
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Predefined scenario name
    #[arg(short, long, default_value = "earth_moon")]
    scenario: String,

    /// Load the scenario from a YAML file instead
    #[arg(long, conflicts_with = "scenario")]
    scenario_file: Option<PathBuf>,

    /// Simulation configuration YAML
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Frames to advance
    #[arg(short, long, default_value_t = 1000)]
    frames: u64,

    /// Time scale to run at (clamped to the configured range)
    #[arg(short, long)]
    time_scale: Option<f64>,

    /// Write the final snapshot as YAML to this path
    #[arg(long)]
    dump: Option<PathBuf>,

    /// List predefined scenarios and exit
    #[arg(long)]
    list: bool,
}

fn load(args: &Args) -> Result<(SimulationConfig, Scenario)> {
    let config = match &args.config {
        Some(path) => SimulationConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SimulationConfig::default(),
    };

    let scenario = match &args.scenario_file {
        Some(path) => Scenario::load(path)
            .with_context(|| format!("failed to load scenario {}", path.display()))?,
        None => Scenario::predefined(&args.scenario)?,
    };

    Ok((config, scenario))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if args.list {
        Scenario::available()
            .iter()
            .for_each(|name| println!("{}", name));
        return Ok(());
    }

    let (config, scenario) = load(&args)?;
    let mut sim = Simulation::new(config, scenario)?;
    if let Some(scale) = args.time_scale {
        sim.set_time_scale(scale);
    }

    let start = sim.diagnostics();
    let mut collisions = 0;
    for _ in 0..args.frames {
        collisions += sim.step().collisions.len();
    }
    let end = sim.diagnostics();

    let energy_drift = if start.total_energy != 0.0 {
        ((end.total_energy - start.total_energy) / start.total_energy).abs()
    } else {
        0.0
    };

    info!(
        frames = sim.frame(),
        elapsed_days = sim.elapsed() / 86_400.0,
        bodies = end.body_count,
        collisions,
        energy_drift,
        "Run complete"
    );

    for body in sim.snapshot().bodies {
        println!(
            "{:>4} {:<18} r=({:>14.1}, {:>14.1}) km  v=({:>8.3}, {:>8.3}) km/s",
            body.id.to_string(),
            body.name,
            body.position.x,
            body.position.y,
            body.velocity.x,
            body.velocity.y
        );
    }

    if let Some(path) = &args.dump {
        let yaml = serde_yaml::to_string(&sim.snapshot())?;
        std::fs::write(path, yaml)
            .with_context(|| format!("failed to write snapshot {}", path.display()))?;
        info!(path = %path.display(), "Snapshot written");
    }

    Ok(())
}
