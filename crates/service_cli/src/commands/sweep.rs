//! Sweep command implementation
//!
//! Runs the step-size sweep for each selected scenario, writes one table
//! per scenario and prints the best-accuracy summary.

use std::path::{Path, PathBuf};

use clap::Args;
use pricer_risk::sweep::{run_sweep, StepGrid, SweepSummary};
use tracing::{info, warn};

use crate::config::{AppConfig, OutputFormat, ScenarioConfig};
use crate::report;
use crate::{CliError, Result};

/// Arguments of `csgreeks sweep`
#[derive(Args, Debug, Default)]
pub struct SweepArgs {
    /// Scenario to run (configured name or preset); repeatable, default all
    #[arg(short, long = "scenario")]
    pub scenarios: Vec<String>,

    /// Output directory for sweep tables
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Number of grid points
    #[arg(long)]
    pub points: Option<usize>,

    /// log10 of the smallest relative step
    #[arg(long, allow_negative_numbers = true)]
    pub log10_min: Option<f64>,

    /// log10 of the largest relative step
    #[arg(long, allow_negative_numbers = true)]
    pub log10_max: Option<f64>,
}

/// Run the sweep command
pub fn run(config: &AppConfig, args: &SweepArgs) -> Result<()> {
    let grid = resolve_grid(config, args)?;
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| config.output_dir.clone());
    let format = args.format.unwrap_or(config.format);
    let entries = select_scenarios(config, &args.scenarios)?;

    info!("Starting sweep...");
    info!("  Scenarios: {}", entries.len());
    info!(
        "  Grid: {} points, 1e{} to 1e{}",
        grid.points(),
        grid.log10_min(),
        grid.log10_max()
    );
    info!("  Output: {} ({:?})", output_dir.display(), format);

    for entry in &entries {
        run_scenario(entry, &grid, format, &output_dir)?;
    }

    info!("Sweep complete");
    Ok(())
}

fn run_scenario(
    entry: &ScenarioConfig,
    grid: &StepGrid,
    format: OutputFormat,
    output_dir: &Path,
) -> Result<()> {
    let scenario = entry.scenario();
    scenario
        .validate()
        .map_err(|e| CliError::InvalidArgument(format!("scenario '{}': {}", entry.name, e)))?;

    if scenario.is_degenerate() {
        warn!(
            scenario = %entry.name,
            vol_sqrt_t = scenario.vol_sqrt_t(),
            "Degenerate scenario: analytic Greeks take their expiry limit"
        );
    }

    let rows = run_sweep(&scenario, grid)?;
    let path = report::write_to_dir(&rows, format, output_dir, entry.file_stem())?;

    if let Some(first) = rows.first() {
        info!(
            scenario = %entry.name,
            delta = first.analytic.delta,
            gamma = first.analytic.gamma,
            path = %path.display(),
            "Scenario swept"
        );
    }

    if let Some(summary) = SweepSummary::from_rows(&rows) {
        report::print_summary(&entry.name, &summary);
    }

    Ok(())
}

/// Configured grid with command-line overrides applied
fn resolve_grid(config: &AppConfig, args: &SweepArgs) -> Result<StepGrid> {
    let mut grid = config.grid;
    if let Some(points) = args.points {
        grid.points = points;
    }
    if let Some(log10_min) = args.log10_min {
        grid.log10_min = log10_min;
    }
    if let Some(log10_max) = args.log10_max {
        grid.log10_max = log10_max;
    }
    Ok(grid.to_step_grid()?)
}

/// Configured scenarios, or the named subset in the order given
fn select_scenarios(config: &AppConfig, names: &[String]) -> Result<Vec<ScenarioConfig>> {
    if names.is_empty() {
        return Ok(config.scenarios.clone());
    }
    names
        .iter()
        .map(|name| {
            config
                .find_scenario(name)
                .ok_or_else(|| CliError::UnknownScenario(name.clone()))
        })
        .collect()
}
