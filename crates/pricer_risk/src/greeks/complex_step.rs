//! Complex-step Greeks on the complex pricer.
//!
//! For an analytic pricing function C and a real step h:
//!
//! - Delta = Im C(S + ih) / h, O(h²) truncation with no subtraction
//! - Gamma (real part) = −2(Re C(S + ih) − C(S)) / h², still subtracts
//!   two near-equal reals and is kept for comparison only
//! - Gamma (45°) = Im[C(S + hω) + C(S − hω)] / h² with ω = (1 + i)/√2,
//!   O(h⁴) truncation and subtraction-free
//!
//! Only the spot carries an imaginary part; every other input is lifted
//! with zero perturbation.

use std::f64::consts::FRAC_1_SQRT_2;

use num_complex::Complex64;
use pricer_models::scenario::Scenario;

use super::error::{validate_step, GreeksError};
use super::result::CsGreeks;

/// Unit rotation by 45°, (1 + i)/√2.
const OMEGA: Complex64 = Complex64::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2);

/// Computes complex-step Delta and both Gamma variants with absolute step `h`.
///
/// One real and three complex pricer evaluations.
///
/// # Errors
/// [`GreeksError::InvalidStepSize`] when `h` is not positive and finite.
///
/// # Examples
/// ```
/// use pricer_models::scenario::PresetScenario;
/// use pricer_risk::greeks::compute_cs;
///
/// let scenario = PresetScenario::AtmReference.scenario();
/// let cs = compute_cs(&scenario, 1e-6).unwrap();
/// assert!((cs.delta - 0.539827837277029).abs() < 1e-13);
/// assert!((cs.gamma_45 - 0.01984762737385059).abs() < 1e-6);
/// ```
pub fn compute_cs(scenario: &Scenario, h: f64) -> Result<CsGreeks, GreeksError> {
    validate_step(h)?;

    let spot = Complex64::new(scenario.spot(), 0.0);
    let price_at = |s: Complex64| scenario.lift_with_spot(s).price();

    let base = scenario.lift::<f64>().price();
    let axial = price_at(spot + Complex64::new(0.0, h));
    let rotated_up = price_at(spot + OMEGA * h);
    let rotated_down = price_at(spot - OMEGA * h);

    let h2 = h * h;
    Ok(CsGreeks {
        delta: axial.im / h,
        gamma_real: -2.0 * (axial.re - base) / h2,
        gamma_45: (rotated_up + rotated_down).im / h2,
    })
}
