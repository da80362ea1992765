//! netatmo-sensors CLI
//!
//! Builds the sensor platform from stored Netatmo responses and prints the
//! resulting entity states.

#![allow(clippy::print_stdout)]

use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::Context;
use application::SensorPlatformService;
use clap::{Parser, Subcommand, ValueEnum};
use domain::{SensorState, classifiers};
use infrastructure::{AppConfig, InMemoryDeviceRegistry, SnapshotDataHandler, init_tracing};
use tracing::{info, warn};

/// netatmo-sensors CLI
#[derive(Parser)]
#[command(name = "netatmo-sensors")]
#[command(author, version, about = "Netatmo weather sensors", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./netatmo-sensors.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Discover all sensors and print their current state
    List {
        /// Print JSON instead of one line per sensor
        #[arg(long)]
        json: bool,
    },

    /// Poll stored snapshots and print sensors as they change
    ///
    /// Runs until interrupted with Ctrl-C.
    Watch {
        /// Seconds between two polls
        #[arg(short, long, default_value_t = 30)]
        interval: u64,
    },

    /// Classify a raw reading the way the sensors do
    ///
    /// Example: netatmo-sensors classify battery 5200 --model NAModule1
    #[command(allow_negative_numbers = true)]
    Classify {
        /// Classifier to apply
        kind: ClassifierKind,

        /// Raw reading
        value: i64,

        /// Module model code, required for battery
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Print the effective configuration as TOML
    ShowConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ClassifierKind {
    Angle,
    Battery,
    Rf,
    Wifi,
    Health,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn classify(kind: ClassifierKind, value: i64, model: Option<&str>) -> anyhow::Result<String> {
    let label = match kind {
        ClassifierKind::Angle => {
            let angle = u16::try_from(value).context("angle must be between 0 and 65535")?;
            classifiers::classify_angle(angle)
        },
        ClassifierKind::Battery => {
            let model = model.context("--model is required for battery")?;
            classifiers::classify_battery(value, model)?.to_string()
        },
        ClassifierKind::Rf => classifiers::classify_rf(value).to_string(),
        ClassifierKind::Wifi => classifiers::classify_wifi(value).to_string(),
        ClassifierKind::Health => classifiers::classify_health(value)?.to_string(),
    };
    Ok(label)
}

/// One line per sensor, e.g. `Netatmo MyStation Temperature: 22.7 °C`
fn format_state(state: &SensorState) -> String {
    match (&state.value, state.available) {
        (Some(value), true) => match state.unit {
            Some(unit) => format!("{}: {value} {unit}", state.name),
            None => format!("{}: {value}", state.name),
        },
        _ => format!("{}: unavailable", state.name),
    }
}

async fn build_platform(
    config: &AppConfig,
) -> anyhow::Result<(Arc<SnapshotDataHandler>, SensorPlatformService)> {
    let areas = config.weather_areas()?;
    let handler = Arc::new(SnapshotDataHandler::from_dir(&config.netatmo.snapshot_dir));
    let devices = Arc::new(InMemoryDeviceRegistry::new());

    let mut platform = SensorPlatformService::new(handler.clone(), devices);
    platform
        .setup(&areas)
        .await
        .context("Failed to set up sensors")?;
    Ok((handler, platform))
}

async fn watch(
    handler: &SnapshotDataHandler,
    platform: &mut SensorPlatformService,
    interval: Duration,
) {
    let mut ticker = tokio::time::interval(interval);
    loop {
        tokio::select! {
            _ = ticker.tick() => {},
            _ = tokio::signal::ctrl_c() => break,
        }

        for entry_name in handler.poll_due(std::time::Instant::now()).await {
            let summary = platform.handle_data_update(&entry_name);
            info!(entry = %entry_name, refreshed = summary.refreshed, "Snapshot changed");
            if summary.failed > 0 {
                warn!(
                    entry = %entry_name,
                    failed = summary.failed,
                    "Some sensors failed to refresh"
                );
            }
            for state in platform.states_for(&entry_name) {
                println!("{}", format_state(&state));
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Classify { kind, value, model } = &cli.command {
        println!("{}", classify(*kind, *value, model.as_deref())?);
        return Ok(());
    }

    let config = AppConfig::load_from(cli.config.as_deref()).context("Failed to load config")?;

    // -v flags win over the configured filter
    let filter = (cli.verbose > 0).then(|| log_filter_from_verbosity(cli.verbose));
    init_tracing(&config.telemetry, filter)?;

    match cli.command {
        Commands::List { json } => {
            let (_, mut platform) = build_platform(&config).await?;
            let states = platform.states();

            if json {
                println!("{}", serde_json::to_string_pretty(&states)?);
            } else {
                println!("📡 {} sensors:", states.len());
                for state in &states {
                    println!("   {}", format_state(state));
                }
            }
            platform.remove_all().await;
        },

        Commands::Watch { interval } => {
            let (handler, mut platform) = build_platform(&config).await?;
            println!("👀 Watching {} data classes", platform.entry_names().len());
            watch(&handler, &mut platform, Duration::from_secs(interval.max(1))).await;
            platform.remove_all().await;
        },

        Commands::ShowConfig => {
            print!("{}", config.to_toml()?);
        },

        Commands::Classify { .. } => {},
    }

    Ok(())
}
