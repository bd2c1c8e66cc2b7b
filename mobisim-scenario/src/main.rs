//! mobisim - NR handover simulator
//!
//! Runs a two-gNB handover scenario: a single UE drives along a corridor
//! between the gNBs while the decision engine evaluates measurement
//! reports and hands the UE over. Trace files are collected into the
//! results directory at the end of the run.
//!
//! # Usage
//!
//! ```bash
//! mobisim --scenario UMa --speed 15
//! mobisim -c config/scenario.yaml
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use mobisim_common::{load_scenario_config, DeploymentScenario, ScenarioConfig};
use mobisim_scenario::run_scenario;

/// mobisim - NR handover simulator
#[derive(Parser, Debug)]
#[command(name = "mobisim")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the scenario configuration file (YAML)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config_file: Option<PathBuf>,

    /// The deployment scenario. Choose among 'RMa', 'UMa',
    /// 'UMi-StreetCanyon', 'InH-OfficeMixed', 'InH-OfficeOpen'.
    #[arg(long)]
    scenario: Option<String>,

    /// The central carrier frequency in Hz
    #[arg(long)]
    frequency: Option<f64>,

    /// Enable UE mobility (true) or static UEs (false)
    #[arg(long)]
    mobility: Option<bool>,

    /// UE speed in m/s
    #[arg(long)]
    speed: Option<f64>,

    /// Total simulated duration in milliseconds
    #[arg(long)]
    duration_ms: Option<u64>,

    /// Directory trace files are collected into
    #[arg(short = 'o', long)]
    output_dir: Option<PathBuf>,

    /// Log filter, e.g. 'info' or 'info,mobisim_handover=debug'
    #[arg(long, default_value = "info")]
    log: String,
}

/// Builds the effective configuration from the file (if any) and CLI
/// overrides.
fn build_config(args: &Args) -> Result<ScenarioConfig> {
    let mut config = match &args.config_file {
        Some(path) => load_scenario_config(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => ScenarioConfig::default(),
    };

    if let Some(scenario) = &args.scenario {
        config.scenario = scenario
            .parse::<DeploymentScenario>()
            .context("invalid scenario")?;
    }
    if let Some(frequency) = args.frequency {
        config.radio.frequency_hz = frequency;
    }
    if let Some(mobility) = args.mobility {
        config.mobility.enabled = mobility;
    }
    if let Some(speed) = args.speed {
        config.mobility.speed_mps = speed;
    }
    if let Some(duration_ms) = args.duration_ms {
        config.sim_duration_ms = duration_ms;
    }
    if let Some(output_dir) = &args.output_dir {
        config.output_dir = output_dir.clone();
    }

    config.validate()?;
    Ok(config)
}

fn main() -> ExitCode {
    let args = Args::parse();
    mobisim_common::init_logging_with_filter(&args.log);

    println!("mobisim - NR handover simulator");
    println!("===============================");

    match run(&args) {
        Ok(()) => {
            info!("run exited successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("run failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = build_config(args)?;

    info!(
        "scenario {}: {} gNB heights, UE at {} m/s, {} ms",
        config.scenario,
        config.scenario.gnb_height_m(),
        config.mobility.speed_mps,
        config.sim_duration_ms
    );

    let summary = run_scenario(&config, Path::new("."))?;

    println!("reports:     {}", summary.reports);
    println!("decisions:   {}", summary.decisions);
    println!("completed:   {}", summary.completed);
    println!("failed:      {}", summary.failed);
    println!("packets:     {}", summary.packets_delivered);
    if let Some(serving) = summary.final_serving {
        println!("final cell:  {serving}");
    }
    println!("traces in:   {}", config.output_dir.display());

    Ok(())
}
