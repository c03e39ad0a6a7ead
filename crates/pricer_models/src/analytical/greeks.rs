//! Closed-form Black-Scholes Delta and Gamma.
//!
//! These are the ground truth every numerical estimator is scored against,
//! so they are computed in plain `f64` with care for the two regimes where
//! the textbook formula loses precision:
//!
//! - Near the money, ln(F/K) is replaced by `ln_1p((F − K)/K)`.
//! - Deep in the tails, φ(d₁) is built from its log-density so the
//!   numerator does not flush to zero before the division by S·σ·√T.
//!
//! When σ·√T is effectively zero the Greeks take their expiry limit: Delta
//! is a step function of moneyness and Gamma is zero.

use pricer_core::math::distributions::{norm_cdf, norm_log_pdf};

use crate::scenario::Scenario;

/// Relative moneyness below which d₁ switches to the `ln_1p` form.
pub const LOG1P_MONEYNESS_THRESHOLD: f64 = 1e-12;

/// Exact Delta and Gamma of a European call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyticGreeks {
    /// ∂C/∂S
    pub delta: f64,
    /// ∂²C/∂S²
    pub gamma: f64,
}

/// Computes closed-form Delta and Gamma for `scenario`.
///
/// Pure function of the scenario; never fails. Degenerate scenarios
/// (see [`Scenario::is_degenerate`]) return the discontinuous limit.
///
/// # Examples
/// ```
/// use pricer_models::analytical::compute_analytic;
/// use pricer_models::scenario::Scenario;
///
/// let greeks = compute_analytic(&Scenario::new(100.0, 100.0, 0.0, 0.0, 0.2, 1.0));
/// assert!((greeks.delta - 0.539827837277029).abs() < 1e-14);
/// assert!((greeks.gamma - 0.01984762737385059).abs() < 1e-15);
/// ```
pub fn compute_analytic(scenario: &Scenario) -> AnalyticGreeks {
    let carry = scenario.dividend_discount();
    let forward = scenario.forward();
    let strike = scenario.strike();

    if scenario.is_degenerate() {
        let delta = if forward > strike { carry } else { 0.0 };
        return AnalyticGreeks { delta, gamma: 0.0 };
    }

    let vol_sqrt_t = scenario.vol_sqrt_t();
    let d1 = (log_moneyness(forward, strike) + 0.5 * vol_sqrt_t * vol_sqrt_t) / vol_sqrt_t;

    let delta = carry * norm_cdf(d1);
    // φ(d₁) via its log-density
    let gamma = carry * norm_log_pdf(d1).exp() / (scenario.spot() * vol_sqrt_t);

    AnalyticGreeks { delta, gamma }
}

/// ln(F/K), switching to `ln_1p` when F is within a relative 1e-12 of K.
fn log_moneyness(forward: f64, strike: f64) -> f64 {
    if strike > 0.0 {
        let relative = (forward - strike) / strike;
        if relative.abs() <= LOG1P_MONEYNESS_THRESHOLD {
            return relative.ln_1p();
        }
    }
    (forward / strike).ln()
}
