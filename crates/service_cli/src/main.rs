//! csgreeks - Finite-Difference vs Complex-Step Greeks
//!
//! Command-line entry point for the step-size sweep.
//!
//! # Commands
//!
//! - `csgreeks sweep` - Sweep the relative step and write one error table per scenario
//! - `csgreeks greeks` - Evaluate every estimator once for an ad-hoc scenario
//! - `csgreeks check` - Validate configuration and cross-check analytic Delta
//!
//! # Architecture
//!
//! As the service layer, this crate only orchestrates: pricing lives in
//! `pricer_models`, the estimators and the sweep in `pricer_risk`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod report;

pub use error::{CliError, Result};

use commands::greeks::GreeksArgs;
use commands::sweep::SweepArgs;
use config::{AppConfig, LogLevel};

/// Finite-difference vs complex-step Black-Scholes Greeks
#[derive(Parser)]
#[command(name = "csgreeks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (default: ./csgreeks.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sweep the relative step size and write error tables
    Sweep(SweepArgs),

    /// Evaluate Delta and Gamma at one step size
    Greeks(GreeksArgs),

    /// Validate configuration and cross-check analytic Delta
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::resolve(cli.config.as_deref())?.with_env_override()?;

    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        config.log_level
    };
    init_tracing(level);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Sweep(args) => commands::sweep::run(&config, &args),
        Commands::Greeks(args) => commands::greeks::run(&args),
        Commands::Check => commands::check::run(&config),
    }
}

/// Initialise tracing on stderr; `RUST_LOG` wins over the configured level
fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
