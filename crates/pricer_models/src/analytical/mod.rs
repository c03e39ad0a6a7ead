//! Black-Scholes pricing and closed-form Greeks.
//!
//! This module provides:
//! - [`BlackScholesCall`]: call pricer generic over the scalar domain
//! - [`compute_analytic`]: exact Delta and Gamma in `f64`
//! - [`AnalyticalError`]: scenario validation failures
//!
//! ## Design Principles
//!
//! - **Generic over `T: PricingScalar`**: one formula for real, complex and dual
//! - **Branch-free pricer**: every domain traces the same arithmetic
//! - **Careful ground truth**: the analytic Greeks guard the ATM log and the
//!   tail density

pub mod black_scholes;
pub mod error;
pub mod greeks;

pub use black_scholes::{call_price, BlackScholesCall};
pub use error::AnalyticalError;
pub use greeks::{compute_analytic, AnalyticGreeks};
