//! Standard normal distribution functions.
//!
//! This module provides real-argument implementations of:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//! - `norm_log_pdf`: Natural logarithm of the PDF
//!
//! These are the building blocks of the domain-dispatched `Φ_t` in
//! [`crate::traits::scalar`]. The complex and dual extensions only ever
//! evaluate them at the real part of their argument.

use statrs::function::erf::erfc;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// ln(sqrt(2 * pi)) = 0.5 * ln(2 * pi)
const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_8;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1) using the complementary error function.
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * erfc(-x / sqrt(2))
///
/// Evaluating through `erfc` rather than `1 + erf` keeps full relative
/// precision in the lower tail, where Φ(x) is far smaller than 1.
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The probability P(X <= x) for standard normal X, in range [0, 1].
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_cdf;
///
/// let cdf_0 = norm_cdf(0.0);
/// assert!((cdf_0 - 0.5).abs() < 1e-15);
///
/// // Deep lower tail keeps relative precision
/// let tail = norm_cdf(-30.0);
/// assert!(tail > 0.0 && tail < 1e-190);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal probability density function.
///
/// # Mathematical Definition
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Returns
/// The density value φ(x), in range [0, 1/sqrt(2π)].
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_pdf;
///
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((norm_pdf(0.0) - 0.3989422804014327).abs() < 1e-15);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Natural logarithm of the standard normal density.
///
/// ln φ(x) = -x²/2 - 0.5·ln(2π)
///
/// Finite for every finite `x`, so callers can combine it with other
/// logarithmic factors before exponentiating.
#[inline]
pub fn norm_log_pdf(x: f64) -> f64 {
    -0.5 * x * x - LN_SQRT_2PI
}
