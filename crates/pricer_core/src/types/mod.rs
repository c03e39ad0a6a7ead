//! Core numeric types.
//!
//! This module provides:
//! - `dual`: Dual number type integration with num-dual for automatic differentiation (when `num-dual-mode` feature is enabled)
//!
//! # Re-exports
//!
//! - [`ComplexNumber`] from `num_complex`

#[cfg(feature = "num-dual-mode")]
pub mod dual;

/// Complex scalar used by complex-step differentiation.
pub type ComplexNumber = num_complex::Complex64;
