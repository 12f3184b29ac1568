//! Balance simulator CLI.
//!
//! Run Monte Carlo simulations of autoplayed sessions to analyze the economy.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # Default: 200 runs of one month
//!   cargo run --bin simulate -- -n 50 -t 10000    # 50 runs of 10k ticks
//!   cargo run --bin simulate -- --seed 42         # Reproducible run

use cashflow::simulator::{run_simulation, SimConfig};
use cashflow::EngineConfig;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "simulate", about = "Cashflow balance simulator")]
struct Args {
    /// Number of simulated sessions
    #[arg(short = 'n', long, default_value_t = 200)]
    runs: u32,

    /// Max ticks (simulated minutes) per session
    #[arg(short = 't', long, default_value_t = 43_200)]
    ticks: u64,

    /// Random seed for reproducibility
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// Never finance purchases
    #[arg(long)]
    cash_only: bool,

    /// Engine config JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Save a JSON report next to the text report
    #[arg(long)]
    json: bool,

    /// Print one line per run
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let engine = match &args.config {
        Some(path) => match EngineConfig::load(path) {
            Ok(engine) => engine,
            Err(err) => {
                eprintln!("Failed to load config {}: {}", path.display(), err);
                return ExitCode::FAILURE;
            }
        },
        None => EngineConfig::default(),
    };

    let mut config = SimConfig {
        num_runs: args.runs,
        seed: args.seed,
        max_ticks_per_run: args.ticks,
        verbosity: if args.verbose { 2 } else { 1 },
        engine,
        ..Default::default()
    };
    if args.cash_only {
        config = config.cash_only();
    }

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              CASHFLOW BALANCE SIMULATOR                       ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Max Ticks:      {}", config.max_ticks_per_run);
    println!("  Use Credit:     {}", config.use_credit);
    println!("  Start Balance:  ${:.2}", config.engine.initial_balance);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if args.json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        if let Err(err) = std::fs::write(&filename, report.to_json()) {
            eprintln!("Failed to write JSON report: {}", err);
            return ExitCode::FAILURE;
        }
        println!("JSON report saved to: {}", filename);
    }

    ExitCode::SUCCESS
}
