//! Dual number type integration for automatic differentiation.
//!
//! This module provides a type alias for num-dual's Dual64 type, enabling
//! forward-mode automatic differentiation of the generic pricer. AD results
//! serve as an independent cross-check of the analytic Greeks; they are not
//! one of the estimators under comparison.
//!
//! ## Usage
//!
//! ```
//! use pricer_core::traits::PricingScalar;
//! use pricer_core::types::dual::DualNumber;
//!
//! // Seed dx/dx = 1
//! let x = DualNumber::from(0.25).derivative();
//!
//! // Φ_t propagates the derivative exactly: dΦ/dx = φ(x)
//! let y = x.norm_cdf_t();
//! let expected = pricer_core::math::distributions::norm_pdf(0.25);
//! assert!((y.eps - expected).abs() < 1e-16);
//! ```

/// Type alias for num-dual's Dual64 (f64-based dual numbers).
///
/// This type supports first-order automatic differentiation with:
/// - `re`: Real part (function value)
/// - `eps`: Dual part (derivative/gradient)
///
/// `DualNumber` implements [`PricingScalar`](crate::traits::PricingScalar),
/// so any generic pricing formula can be differentiated by seeding one
/// input with `derivative()`.
pub type DualNumber = num_dual::Dual64;
