//! Integration tests for the dual number domain.
//!
//! A generic formula written against `PricingScalar` must produce the same
//! value in every domain and the exact first derivative in the dual domain.

#![cfg(feature = "num-dual-mode")]

use approx::assert_relative_eq;
use pricer_core::math::distributions::{norm_cdf, norm_pdf};
use pricer_core::traits::PricingScalar;
use pricer_core::types::dual::DualNumber;
use pricer_core::types::ComplexNumber;

/// Lognormal-style kernel exercising every trait operation.
fn kernel<T: PricingScalar>(x: T) -> T {
    let half = T::from_real(0.5);
    let z = (x.ln() + half) / x.sqrt();
    x.exp() * z.norm_cdf_t()
}

fn kernel_derivative(x: f64) -> f64 {
    let z = (x.ln() + 0.5) / x.sqrt();
    let dz = (1.0 / x) / x.sqrt() - 0.5 * (x.ln() + 0.5) / x.powf(1.5);
    x.exp() * norm_cdf(z) + x.exp() * norm_pdf(z) * dz
}

#[test]
fn test_value_identical_across_domains() {
    let x = 1.7_f64;
    let real = kernel(x);
    let complex = kernel(ComplexNumber::new(x, 0.0));
    let dual = kernel(DualNumber::from(x));

    assert_relative_eq!(complex.re, real, max_relative = 1e-14);
    assert_eq!(complex.im, 0.0);
    assert_relative_eq!(dual.re, real, max_relative = 1e-15);
    assert_eq!(dual.eps, 0.0);
}

#[test]
fn test_dual_derivative_matches_closed_form() {
    for x in [0.5_f64, 1.0, 2.5] {
        let result = kernel(DualNumber::from(x).derivative());
        assert_relative_eq!(result.eps, kernel_derivative(x), max_relative = 1e-13);
    }
}

#[test]
fn test_complex_step_matches_dual_derivative() {
    let h = 1e-30;
    for x in [0.5_f64, 1.0, 2.5] {
        let cs = kernel(ComplexNumber::new(x, h)).im / h;
        let ad = kernel(DualNumber::from(x).derivative()).eps;
        assert_relative_eq!(cs, ad, max_relative = 1e-13);
    }
}
