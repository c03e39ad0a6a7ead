//! Numeric-domain capability for generic pricing formulas.
//!
//! A pricing formula bounded on [`PricingScalar`] is instantiated once per
//! domain:
//!
//! | Domain | Type | `Φ_t(z)` |
//! |--------|------|----------|
//! | Real | `f64` | `Φ(z)` |
//! | Complex | `Complex64` | `Φ(z_r) + i·z_i·φ(z_r)` |
//! | Dual (`num-dual-mode`) | `Dual64` | `Φ(a) + ε·b·φ(a)` |
//!
//! The complex rule is the first-order Taylor expansion of Φ around the real
//! part, accurate to O(z_i²). Complex arguments only ever carry a
//! differentiation-step-sized imaginary part, so no full complex error
//! function is needed. For first-order duals the same rule is exact.

use std::ops::Neg;

use num_complex::Complex64;
use num_traits::Num;

use crate::math::distributions::{norm_cdf, norm_pdf};

/// Scalar domain over which the generic pricer is evaluated.
///
/// Provides the four arithmetic operators (via [`num_traits::Num`]),
/// negation, the elementary functions the Black-Scholes formula needs, and
/// the domain-specific normal CDF [`norm_cdf_t`](PricingScalar::norm_cdf_t).
///
/// # Examples
/// ```
/// use pricer_core::traits::PricingScalar;
///
/// fn discount<T: PricingScalar>(rate: T, time: T) -> T {
///     (-rate * time).exp()
/// }
///
/// let df: f64 = discount(0.05, 1.0);
/// assert!((df - 0.951229424500714).abs() < 1e-15);
/// ```
pub trait PricingScalar: Copy + Num + Neg<Output = Self> {
    /// Lifts a real constant into the domain with zero perturbation.
    fn from_real(value: f64) -> Self;

    /// Real part of the value.
    fn real(self) -> f64;

    /// Exponential function.
    fn exp(self) -> Self;

    /// Natural logarithm (principal branch in the complex domain).
    fn ln(self) -> Self;

    /// Square root (principal branch in the complex domain).
    fn sqrt(self) -> Self;

    /// Domain-dispatched standard normal CDF, `Φ_t`.
    fn norm_cdf_t(self) -> Self;
}

impl PricingScalar for f64 {
    #[inline]
    fn from_real(value: f64) -> Self {
        value
    }

    #[inline]
    fn real(self) -> f64 {
        self
    }

    #[inline]
    fn exp(self) -> Self {
        f64::exp(self)
    }

    #[inline]
    fn ln(self) -> Self {
        f64::ln(self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }

    #[inline]
    fn norm_cdf_t(self) -> Self {
        norm_cdf(self)
    }
}

impl PricingScalar for Complex64 {
    #[inline]
    fn from_real(value: f64) -> Self {
        Complex64::new(value, 0.0)
    }

    #[inline]
    fn real(self) -> f64 {
        self.re
    }

    #[inline]
    fn exp(self) -> Self {
        Complex64::exp(self)
    }

    #[inline]
    fn ln(self) -> Self {
        Complex64::ln(self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        Complex64::sqrt(self)
    }

    /// Φ(z_r + i·z_i) ≈ Φ(z_r) + i·z_i·φ(z_r)
    #[inline]
    fn norm_cdf_t(self) -> Self {
        Complex64::new(norm_cdf(self.re), self.im * norm_pdf(self.re))
    }
}

#[cfg(feature = "num-dual-mode")]
impl PricingScalar for crate::types::dual::DualNumber {
    #[inline]
    fn from_real(value: f64) -> Self {
        Self::from(value)
    }

    #[inline]
    fn real(self) -> f64 {
        self.re
    }

    #[inline]
    fn exp(self) -> Self {
        num_dual::DualNum::exp(&self)
    }

    #[inline]
    fn ln(self) -> Self {
        num_dual::DualNum::ln(&self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        num_dual::DualNum::sqrt(&self)
    }

    #[inline]
    fn norm_cdf_t(self) -> Self {
        Self::new(norm_cdf(self.re), self.eps * norm_pdf(self.re))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn generic_quadratic<T: PricingScalar>(x: T) -> T {
        let two = T::from_real(2.0);
        two * x * x + T::from_real(3.0) * x + T::one()
    }

    // ==========================================================
    // Real domain
    // ==========================================================

    #[test]
    fn test_real_domain_is_plain_cdf() {
        for z in [-3.0_f64, -0.5, 0.0, 0.5, 3.0] {
            assert_eq!(z.norm_cdf_t(), norm_cdf(z));
        }
    }

    #[test]
    fn test_real_elementary_functions() {
        assert_eq!(PricingScalar::exp(0.0_f64), 1.0);
        assert_eq!(PricingScalar::ln(1.0_f64), 0.0);
        assert_eq!(PricingScalar::sqrt(4.0_f64), 2.0);
        assert_eq!(generic_quadratic(5.0_f64), 66.0);
    }

    // ==========================================================
    // Complex domain
    // ==========================================================

    #[test]
    fn test_complex_cdf_first_order_expansion() {
        let z = Complex64::new(0.4, 1e-12);
        let result = z.norm_cdf_t();
        assert_eq!(result.re, norm_cdf(0.4));
        assert_eq!(result.im, 1e-12 * norm_pdf(0.4));
    }

    #[test]
    fn test_complex_cdf_with_zero_imaginary_matches_real() {
        for z in [-2.0_f64, 0.0, 1.3] {
            let result = Complex64::from_real(z).norm_cdf_t();
            assert_eq!(result.re, z.norm_cdf_t());
            assert_eq!(result.im, 0.0);
        }
    }

    #[test]
    fn test_complex_step_recovers_derivative() {
        // Im[f(x + ih)] / h = f'(x) for analytic f
        let h = 1e-20;
        let x = 1.5;
        let f = generic_quadratic(Complex64::new(x, h));
        assert_relative_eq!(f.im / h, 4.0 * x + 3.0, epsilon = 1e-14);
        assert_relative_eq!(f.re, generic_quadratic(x), epsilon = 1e-14);
    }

    #[test]
    fn test_complex_step_through_cdf() {
        let h = 1e-20;
        let x = -0.7;
        let result = Complex64::new(x, h).norm_cdf_t();
        assert_relative_eq!(result.im / h, norm_pdf(x), max_relative = 1e-15);
    }

    #[test]
    fn test_complex_real_part_accessor() {
        assert_eq!(Complex64::new(2.5, -1.0).real(), 2.5);
        assert_eq!(3.25_f64.real(), 3.25);
    }

    // ==========================================================
    // Dual domain
    // ==========================================================

    #[cfg(feature = "num-dual-mode")]
    mod dual_tests {
        use super::*;
        use crate::types::dual::DualNumber;

        #[test]
        fn test_dual_cdf_exact_derivative() {
            let x = DualNumber::new(0.3, 1.0);
            let result = x.norm_cdf_t();
            assert_eq!(result.re, norm_cdf(0.3));
            assert_relative_eq!(result.eps, norm_pdf(0.3), epsilon = 1e-16);
        }

        #[test]
        fn test_dual_quadratic_derivative() {
            let x = DualNumber::new(1.5, 1.0);
            let f = generic_quadratic(x);
            assert_relative_eq!(f.re, 10.0, epsilon = 1e-14);
            assert_relative_eq!(f.eps, 9.0, epsilon = 1e-14);
        }

        #[test]
        fn test_dual_elementary_functions() {
            let x = DualNumber::new(4.0, 1.0);
            let s = PricingScalar::sqrt(x);
            assert_relative_eq!(s.re, 2.0);
            assert_relative_eq!(s.eps, 0.25);

            let l = PricingScalar::ln(x);
            assert_relative_eq!(l.eps, 0.25);

            let e = PricingScalar::exp(DualNumber::new(0.0, 1.0));
            assert_relative_eq!(e.re, 1.0);
            assert_relative_eq!(e.eps, 1.0);
        }
    }
}
