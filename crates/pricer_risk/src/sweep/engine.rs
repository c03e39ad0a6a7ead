//! Sweep execution.

use pricer_models::analytical::compute_analytic;
use pricer_models::scenario::Scenario;

use super::error::SweepError;
use super::grid::StepGrid;
use super::row::{SweepErrors, SweepRow};
use crate::greeks::{compute_cs, compute_fd};

/// Runs every strategy at every grid point for one scenario.
///
/// The analytic Greeks are computed once and shared by all rows. Rows are
/// returned in ascending h_rel order with the absolute step h = h_rel·S.
/// Large errors at either end of the grid are reported as-is.
///
/// # Errors
/// - [`SweepError::InvalidGrid`] if the grid fails validation
/// - [`SweepError::Greeks`] if some h_rel·S is not a positive finite step,
///   e.g. for a non-positive spot
///
/// # Examples
/// ```
/// use pricer_models::scenario::Scenario;
/// use pricer_risk::sweep::{run_sweep, StepGrid};
///
/// let scenario = Scenario::new(100.0, 100.0, 0.0, 0.0, 0.2, 1.0);
/// let grid = StepGrid::new(5, -12.0, -4.0).unwrap();
/// let rows = run_sweep(&scenario, &grid).unwrap();
/// assert_eq!(rows.len(), 5);
/// assert!(rows.windows(2).all(|w| w[0].h_rel < w[1].h_rel));
/// ```
pub fn run_sweep(scenario: &Scenario, grid: &StepGrid) -> Result<Vec<SweepRow>, SweepError> {
    grid.validate()?;

    let analytic = compute_analytic(scenario);

    grid.h_rel_values()
        .into_iter()
        .map(|h_rel| {
            let h = h_rel * scenario.spot();
            let fd = compute_fd(scenario, h)?;
            let cs = compute_cs(scenario, h)?;
            Ok(SweepRow {
                h_rel,
                h,
                analytic,
                fd,
                cs,
                errors: SweepErrors::measure(&analytic, &fd, &cs),
            })
        })
        .collect()
}
