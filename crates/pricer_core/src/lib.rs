//! # pricer_core: Numeric Foundation for Greeks Validation
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the workspace, providing:
//! - Standard normal distribution primitives (`math::distributions`)
//! - The numeric-domain capability trait `PricingScalar` (`traits::scalar`)
//! - Dual number type integration (`types::dual`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - num-complex: Complex scalar domain used by complex-step differentiation
//! - num-dual: Dual number types and automatic differentiation (optional)
//! - statrs: Double-precision complementary error function
//!
//! ## Usage Examples
//!
//! ```rust
//! use num_complex::Complex64;
//! use pricer_core::math::distributions::{norm_cdf, norm_pdf};
//! use pricer_core::traits::PricingScalar;
//!
//! // Real domain: Φ_t is the ordinary CDF
//! assert!((0.0_f64.norm_cdf_t() - 0.5).abs() < 1e-15);
//!
//! // Complex domain: first-order expansion around the real part
//! let z = Complex64::new(0.3, 1e-20);
//! let phi_t = z.norm_cdf_t();
//! assert_eq!(phi_t.re, norm_cdf(0.3));
//! assert_eq!(phi_t.im, 1e-20 * norm_pdf(0.3));
//! ```
//!
//! ## Feature Flags
//!
//! - `num-dual-mode` (default): Implement `PricingScalar` for `num_dual::Dual64`
//!   so the generic pricer can be verified with forward-mode AD

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
