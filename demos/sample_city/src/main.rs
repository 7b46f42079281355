//! sample_city — command-line front end for the rapid_dispatch engine.
//!
//! Runs against the bundled six-intersection sample city, or against a CSV
//! directory written by `sample_city seed --dir <DIR>` and edited by hand.
//! Set `RUST_LOG=debug` to see per-hospital evaluation.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use rd_core::DispatchConfig;
use rd_data::{CsvDirProvider, sample_city, seed_dir};
use rd_dispatch::{DataProvider, DispatchService};

#[derive(Parser)]
#[command(name = "sample_city")]
#[command(about = "Pick the hospital with the lowest expected response time")]
struct Cli {
    /// Directory holding nodes.csv, edges.csv, and hospitals.csv.
    /// Defaults to the built-in sample city.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// JSON file with a DispatchConfig; missing fields take their defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the sample city as CSV files into a directory.
    Seed {
        #[arg(long)]
        dir: PathBuf,
    },
    #[command(flatten)]
    Engine(EngineCommand),
}

/// Commands that run against a loaded dispatch service.
#[derive(Subcommand)]
enum EngineCommand {
    /// List valid start locations.
    Locations,
    /// Choose a hospital for an ambulance at LOCATION and print it as JSON.
    Dispatch { location: String },
    /// Set a hospital's current occupancy.
    Update { hospital: String, occupancy: i64 },
    /// Random occupancy changes interleaved with dispatches.
    Simulate {
        #[arg(long, default_value = "10")]
        rounds: u32,

        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Seed { dir } => {
            seed_dir(&dir).with_context(|| format!("seeding {}", dir.display()))?;
            println!("Wrote sample city to {}", dir.display());
            Ok(())
        }
        Command::Engine(command) => {
            let config = load_config(cli.config.as_deref())?;
            let provider: Arc<dyn DataProvider> = match &cli.data_dir {
                Some(dir) => Arc::new(
                    CsvDirProvider::open(dir)
                        .with_context(|| format!("opening {}", dir.display()))?,
                ),
                None => Arc::new(sample_city()),
            };
            let service = DispatchService::new(provider, config)?;
            run(&service, command)
        }
    }
}

fn run<P: DataProvider>(service: &DispatchService<P>, command: EngineCommand) -> Result<()> {
    match command {
        EngineCommand::Locations => {
            for location in service.list_locations() {
                println!("{location}");
            }
        }
        EngineCommand::Dispatch { location } => {
            let decision = service.find_optimal_hospital(&location)?;
            println!("{}", serde_json::to_string_pretty(&decision)?);
        }
        EngineCommand::Update { hospital, occupancy } => {
            if service.update_occupancy(&hospital, occupancy)? {
                let version = service.snapshot().version();
                println!("{hospital}: occupancy now {occupancy} (snapshot v{version})");
            } else {
                println!("{hospital}: no change");
            }
        }
        EngineCommand::Simulate { rounds, seed } => simulate(service, rounds, seed)?,
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<DispatchConfig> {
    let Some(path) = path else {
        return Ok(DispatchConfig::default());
    };
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: DispatchConfig =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

// ── simulate ──────────────────────────────────────────────────────────────────

fn simulate<P: DataProvider>(service: &DispatchService<P>, rounds: u32, seed: u64) -> Result<()> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let locations = service.list_locations();
    anyhow::ensure!(!locations.is_empty(), "network has no start locations");

    println!("=== sample_city — dispatch simulation ===");
    println!("Rounds: {rounds}  |  Seed: {seed}  |  Locations: {}", locations.len());
    println!();
    println!(
        "{:<6} {:<16} {:<8} {:<10} {:>8} {:>8} {:>8}",
        "Round", "Update", "From", "Hospital", "Travel", "Wait", "Total"
    );
    println!("{}", "-".repeat(70));

    let t0 = Instant::now();
    for round in 1..=rounds {
        // Move one hospital's occupancy somewhere between empty and full.
        let snapshot = service.snapshot();
        let hospitals: Vec<_> = snapshot.hospitals().values().collect();
        let update = if hospitals.is_empty() {
            String::from("-")
        } else {
            let h = hospitals[rng.gen_range(0..hospitals.len())];
            let occupancy = rng.gen_range(0..=h.capacity()) as i64;
            service.update_occupancy(h.id(), occupancy)?;
            format!("{}={}/{}", h.id(), occupancy, h.capacity())
        };

        let from = &locations[rng.gen_range(0..locations.len())];
        match service.find_optimal_hospital(from) {
            Ok(r) => println!(
                "{:<6} {:<16} {:<8} {:<10} {:>8.2} {:>8.2} {:>8.2}",
                round,
                update,
                from,
                r.hospital.id,
                r.metrics.travel_time_mins,
                r.metrics.waiting_time_mins,
                r.metrics.total_response_time_mins,
            ),
            Err(e) => println!("{:<6} {:<16} {:<8} {e}", round, update, from),
        }
    }

    println!();
    println!(
        "Simulation complete in {:.3} s, final snapshot v{}",
        t0.elapsed().as_secs_f64(),
        service.snapshot().version()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Command, EngineCommand};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn seed_and_engine_commands_parse_apart() {
        let cli = Cli::try_parse_from(["sample_city", "seed", "--dir", "out"]).unwrap();
        assert!(matches!(cli.command, Command::Seed { .. }));

        let cli = Cli::try_parse_from(["sample_city", "dispatch", "A", "--data-dir", "d"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Engine(EngineCommand::Dispatch { ref location }) if location == "A"
        ));
        assert!(cli.data_dir.is_some());

        let cli = Cli::try_parse_from(["sample_city", "simulate"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Engine(EngineCommand::Simulate { rounds: 10, seed: 42 })
        ));
    }
}
