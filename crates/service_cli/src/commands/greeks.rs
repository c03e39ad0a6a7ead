//! Greeks command implementation
//!
//! Evaluates every estimator once, at a single relative step, for an
//! ad-hoc scenario given on the command line.

use std::io;

use clap::Args;
use pricer_models::analytical::compute_analytic;
use pricer_models::scenario::Scenario;
use pricer_risk::greeks::{compute_cs, compute_fd};
use pricer_risk::sweep::{SweepError, SweepErrors, SweepRow};
use tracing::info;

use crate::config::OutputFormat;
use crate::report;
use crate::{CliError, Result};

/// Arguments of `csgreeks greeks`
#[derive(Args, Debug)]
pub struct GreeksArgs {
    /// Spot price S
    #[arg(long)]
    pub spot: f64,

    /// Strike price K
    #[arg(long)]
    pub strike: f64,

    /// Risk-free rate r
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub rate: f64,

    /// Dividend/carry yield q
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub dividend_yield: f64,

    /// Volatility σ
    #[arg(long)]
    pub volatility: f64,

    /// Time to maturity T in years
    #[arg(long)]
    pub expiry: f64,

    /// Relative step size; the absolute step is h_rel·S
    #[arg(long, default_value_t = 1e-8)]
    pub h_rel: f64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl GreeksArgs {
    fn scenario(&self) -> Scenario {
        Scenario::new(
            self.spot,
            self.strike,
            self.rate,
            self.dividend_yield,
            self.volatility,
            self.expiry,
        )
    }
}

/// Run the greeks command
pub fn run(args: &GreeksArgs) -> Result<()> {
    let scenario = args.scenario();
    scenario
        .validate()
        .map_err(|e| CliError::InvalidArgument(e.to_string()))?;

    let row = evaluate(&scenario, args.h_rel)?;
    info!(%scenario, h_rel = row.h_rel, h = row.h, "Evaluated Greeks");

    report::write_rows(&[row], args.format, io::stdout().lock())?;

    if args.format == OutputFormat::Table {
        print_ad_delta(&scenario);
    }

    Ok(())
}

#[cfg(feature = "num-dual-mode")]
fn print_ad_delta(scenario: &Scenario) {
    println!(
        "AD Delta (dual numbers): {:.17e}",
        pricer_risk::greeks::ad_delta(scenario)
    );
}

#[cfg(not(feature = "num-dual-mode"))]
fn print_ad_delta(_scenario: &Scenario) {}

/// One sweep row at `h_rel`
fn evaluate(scenario: &Scenario, h_rel: f64) -> Result<SweepRow> {
    let h = h_rel * scenario.spot();
    let analytic = compute_analytic(scenario);
    let fd = compute_fd(scenario, h).map_err(SweepError::from)?;
    let cs = compute_cs(scenario, h).map_err(SweepError::from)?;

    Ok(SweepRow {
        h_rel,
        h,
        analytic,
        fd,
        cs,
        errors: SweepErrors::measure(&analytic, &fd, &cs),
    })
}
