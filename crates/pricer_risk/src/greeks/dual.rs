//! Forward-mode AD Delta on the dual-number pricer.
//!
//! Seeding the spot with a unit dual part propagates ∂/∂S through the
//! generic pricer exactly. The result needs no step size and serves as an
//! independent check on the analytic Delta.

use pricer_core::types::dual::DualNumber;
use pricer_models::scenario::Scenario;

/// Computes Delta as the dual part of C(S + ε).
///
/// # Examples
/// ```
/// use pricer_models::scenario::PresetScenario;
/// use pricer_risk::greeks::ad_delta;
///
/// let delta = ad_delta(&PresetScenario::AtmReference.scenario());
/// assert!((delta - 0.539827837277029).abs() < 1e-13);
/// ```
pub fn ad_delta(scenario: &Scenario) -> f64 {
    let spot = DualNumber::from(scenario.spot()).derivative();
    scenario.lift_with_spot(spot).price().eps
}
