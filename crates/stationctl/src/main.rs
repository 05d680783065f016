//! stationctl - inspect and publish station presence records.
//!
//! The reader side of the registry: `list` enumerates the shared run
//! directory and shows each station with its liveness, so an operator can
//! find a station's control endpoint. `publish` writes a record, for wrapper
//! scripts registering a station they just launched. The run directory is
//! resolved here and passed down explicitly; the registry library never
//! reads configuration on its own.

use anyhow::Result;
use clap::{Parser, Subcommand};
use station_registry::{enumerate_run_directory, RegistryConfig, StationRecord};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "stationctl")]
#[command(about = "Inspect and publish station presence records")]
struct Args {
    /// Shared run directory holding one presence file per station
    #[arg(long, default_value = RegistryConfig::DEFAULT_RUN_DIR)]
    run_dir: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every station record in the run directory with its liveness
    List {
        /// Print records as JSON instead of a summary line per station
        #[arg(long)]
        json: bool,
    },
    /// Publish a presence record for a station process
    Publish {
        /// Unique station identifier, also the filename written
        #[arg(long)]
        station_id: String,

        /// Name of the test script the station is running
        #[arg(long)]
        script_name: String,

        /// TCP port of the station's control endpoint
        #[arg(long)]
        http_port: u16,

        /// Process id of the station (defaults to this process)
        #[arg(long)]
        pid: Option<u32>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    match args.command {
        Command::List { json } => list_stations(&args.run_dir, json),
        Command::Publish {
            station_id,
            script_name,
            http_port,
            pid,
        } => publish_station(&args.run_dir, station_id, script_name, http_port, pid),
    }
}

fn list_stations(run_dir: &Path, json: bool) -> Result<()> {
    let stations = enumerate_run_directory(run_dir)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stations)?);
        return Ok(());
    }

    if stations.is_empty() {
        info!("No station records in {}", run_dir.display());
        return Ok(());
    }

    for station in stations {
        let state = if station.is_alive() { "alive" } else { "dead" };
        println!(
            "{}\t{}\t{}:{}\tpid {}\t{}",
            station.station_id,
            station.script_name,
            station.http_host,
            station.http_port,
            station.pid,
            state,
        );
    }

    Ok(())
}

fn publish_station(
    run_dir: &Path,
    station_id: String,
    script_name: String,
    http_port: u16,
    pid: Option<u32>,
) -> Result<()> {
    let record = StationRecord::new(
        station_id,
        script_name,
        RegistryConfig::LOOPBACK_HOST,
        http_port,
        pid.unwrap_or_else(std::process::id),
    );

    let path = record.save_to_file(run_dir)?;
    println!("{}", path.display());

    Ok(())
}
