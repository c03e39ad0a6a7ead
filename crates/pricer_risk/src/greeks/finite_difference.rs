//! Bump-and-revalue Greeks on the real pricer.
//!
//! - Delta = (C(S+h) − C(S)) / h, O(h) truncation
//! - Gamma = (C(S+2h) − 2C(S+h) + C(S)) / h², a second difference centred on S+h
//!
//! Below roughly √ε (Delta) or ∛ε (Gamma) relative step, cancellation
//! dominates. That is the behaviour the sweep measures, so nothing here
//! clamps or filters it.

use pricer_models::scenario::Scenario;

use super::error::{validate_step, GreeksError};
use super::result::FdGreeks;

/// Computes finite-difference Delta and Gamma with absolute step `h`.
///
/// Three real pricer evaluations: C(S), C(S+h), C(S+2h).
///
/// # Errors
/// [`GreeksError::InvalidStepSize`] when `h` is not positive and finite.
///
/// # Examples
/// ```
/// use pricer_models::scenario::PresetScenario;
/// use pricer_risk::greeks::compute_fd;
///
/// let scenario = PresetScenario::AtmReference.scenario();
/// let fd = compute_fd(&scenario, 1e-3).unwrap();
/// assert!((fd.delta - 0.5398).abs() < 1e-4);
/// ```
pub fn compute_fd(scenario: &Scenario, h: f64) -> Result<FdGreeks, GreeksError> {
    validate_step(h)?;

    let spot = scenario.spot();
    let price_at = |s: f64| scenario.lift_with_spot(s).price();

    let c0 = price_at(spot);
    let c1 = price_at(spot + h);
    let c2 = price_at(spot + 2.0 * h);

    Ok(FdGreeks {
        delta: (c1 - c0) / h,
        gamma: (c2 - 2.0 * c1 + c0) / (h * h),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_models::analytical::compute_analytic;
    use pricer_models::scenario::PresetScenario;

    #[test]
    fn test_fd_close_to_analytic_at_moderate_step() {
        let s = PresetScenario::AtmReference.scenario();
        let analytic = compute_analytic(&s);
        let fd = compute_fd(&s, 1e-3).unwrap();
        // O(h) truncation with h = 1e-3
        assert_relative_eq!(fd.delta, analytic.delta, epsilon = 2e-5);
        assert_relative_eq!(fd.gamma, analytic.gamma, epsilon = 1e-5);
    }

    #[test]
    fn test_fd_forward_bias_sign() {
        // Convex price: forward difference overestimates Delta
        let s = PresetScenario::AtmReference.scenario();
        let analytic = compute_analytic(&s);
        let fd = compute_fd(&s, 0.5).unwrap();
        assert!(fd.delta > analytic.delta);
    }

    #[test]
    fn test_fd_rejects_bad_steps() {
        let s = PresetScenario::AtmReference.scenario();
        assert_eq!(
            compute_fd(&s, 0.0),
            Err(GreeksError::InvalidStepSize { step: 0.0 })
        );
        assert!(compute_fd(&s, -1e-4).is_err());
        assert!(compute_fd(&s, f64::NAN).is_err());
    }

    #[test]
    fn test_fd_tiny_step_reports_cancellation() {
        // h_rel = 1e-16: C(S+h) == C(S) in f64, so Delta collapses. Not an error.
        let s = PresetScenario::AtmReference.scenario();
        let fd = compute_fd(&s, 1e-14).unwrap();
        assert!(fd.delta.is_finite());
        assert!((fd.delta - 0.5398).abs() > 1e-3);
    }
}
