//! Core traits for generic pricing formulas.
//!
//! This module defines the numeric-domain abstraction that lets a pricing
//! formula be written once and evaluated over real, complex and dual
//! scalars:
//! - `PricingScalar`: arithmetic, `exp`/`ln`/`sqrt` and the domain-dispatched
//!   normal CDF `Φ_t`
//!
//! All dispatch is static (monomorphised generics). There is no runtime
//! branching on the domain inside a formula.

pub mod scalar;

pub use scalar::PricingScalar;
