//! Check command implementation
//!
//! Validates the configuration and cross-checks the closed-form Delta of
//! every configured scenario.

use pricer_models::analytical::compute_analytic;
use pricer_models::scenario::Scenario;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::{CliError, Result};

/// Largest accepted |Δ_AD − Δ_analytic|.
pub const AD_DELTA_TOLERANCE: f64 = 1e-10;

/// Run the check command
pub fn run(config: &AppConfig) -> Result<()> {
    info!("Checking configuration...");
    config.validate()?;

    let grid = config.grid.to_step_grid()?;
    println!(
        "Configuration OK: {} scenario(s), {} grid points from 1e{} to 1e{}",
        config.scenarios.len(),
        grid.points(),
        grid.log10_min(),
        grid.log10_max()
    );

    let mut failures = Vec::new();
    for entry in &config.scenarios {
        let scenario = entry.scenario();
        let analytic = compute_analytic(&scenario);
        debug!(scenario = %entry.name, "{}", scenario);

        match ad_cross_check(&scenario, analytic.delta) {
            Some(diff) => {
                println!(
                    "  {:<24} Δ = {:.15}  Γ = {:.15}  |Δ_AD − Δ| = {:.2e}",
                    entry.name, analytic.delta, analytic.gamma, diff
                );
                if diff > AD_DELTA_TOLERANCE {
                    failures.push(format!(
                        "{}: AD Delta differs from analytic by {:.3e}",
                        entry.name, diff
                    ));
                }
            }
            None => println!(
                "  {:<24} Δ = {:.15}  Γ = {:.15}",
                entry.name, analytic.delta, analytic.gamma
            ),
        }
    }

    if failures.is_empty() {
        info!("Check complete");
        Ok(())
    } else {
        Err(CliError::CheckFailed(failures.join("; ")))
    }
}

/// |Δ_AD − Δ_analytic|, or `None` without dual-number support.
#[cfg(feature = "num-dual-mode")]
fn ad_cross_check(scenario: &Scenario, analytic_delta: f64) -> Option<f64> {
    if scenario.is_degenerate() {
        return None;
    }
    Some((pricer_risk::greeks::ad_delta(scenario) - analytic_delta).abs())
}

#[cfg(not(feature = "num-dual-mode"))]
fn ad_cross_check(_scenario: &Scenario, _analytic_delta: f64) -> Option<f64> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn test_default_config_passes() {
        assert!(run(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_invalid_config_fails() {
        let mut config = AppConfig::default();
        config.scenarios.clear();
        assert!(matches!(
            run(&config),
            Err(CliError::Config(ConfigError::Validation(_)))
        ));
    }

    #[cfg(feature = "num-dual-mode")]
    #[test]
    fn test_ad_cross_check_agrees() {
        let scenario = Scenario::new(100.0, 110.0, 0.03, 0.02, 0.25, 0.5);
        let diff = ad_cross_check(&scenario, compute_analytic(&scenario).delta).unwrap();
        assert!(diff < AD_DELTA_TOLERANCE);
    }
}
