//! Cross-domain consistency tests for the generic pricer.
//!
//! The real, complex and dual instantiations of the same formula must agree
//! on the price, and the perturbation channels must carry the analytic Delta.

use approx::assert_relative_eq;
use num_complex::Complex64;
use pricer_models::analytical::compute_analytic;
use pricer_models::scenario::{PresetScenario, Scenario};

/// Scenarios covering the presets plus carry and moneyness.
fn scenarios() -> Vec<Scenario> {
    vec![
        PresetScenario::AtmReference.scenario(),
        PresetScenario::NearExpiryLowVol.scenario(),
        Scenario::new(100.0, 110.0, 0.03, 0.02, 0.25, 0.5),
        Scenario::new(80.0, 100.0, 0.05, 0.0, 0.4, 2.0),
        Scenario::new(120.0, 100.0, -0.01, 0.03, 0.15, 0.25),
    ]
}

#[test]
fn test_lift_prices_agree_across_domains() {
    for s in scenarios() {
        let real = s.lift::<f64>().price();
        let complex = s.lift::<Complex64>().price();
        assert_relative_eq!(complex.re, real, max_relative = 1e-12);
        assert_eq!(complex.im, 0.0);
    }
}

#[test]
fn test_complex_step_delta_matches_analytic() {
    let h = 1e-30;
    for s in scenarios() {
        let price = s.lift_with_spot(Complex64::new(s.spot(), h)).price();
        let analytic = compute_analytic(&s);
        assert_relative_eq!(price.im / h, analytic.delta, epsilon = 1e-12);
    }
}

#[cfg(feature = "num-dual-mode")]
#[test]
fn test_dual_delta_matches_analytic() {
    use pricer_core::types::dual::DualNumber;

    for s in scenarios() {
        let price = s
            .lift_with_spot(DualNumber::from(s.spot()).derivative())
            .price();
        let analytic = compute_analytic(&s);
        assert_relative_eq!(price.re, s.lift::<f64>().price(), max_relative = 1e-12);
        assert_relative_eq!(price.eps, analytic.delta, epsilon = 1e-12);
    }
}

#[test]
fn test_presets_validate() {
    for preset in PresetScenario::all() {
        assert!(preset.scenario().validate().is_ok(), "{}", preset);
    }
}
