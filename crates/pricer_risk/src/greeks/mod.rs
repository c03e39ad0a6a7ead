//! Numerical Greek-extraction strategies.
//!
//! This module provides:
//! - [`compute_fd`]: bump-and-revalue on the real pricer
//! - [`compute_cs`]: complex-step on the complex pricer
//! - `ad_delta`: forward-mode AD on the dual pricer (feature `num-dual-mode`)
//!
//! Every strategy evaluates the same generic
//! [`BlackScholesCall`](pricer_models::analytical::BlackScholesCall), only the
//! scalar domain and the perturbed spot differ. Steps are absolute and must
//! be strictly positive and finite.

mod complex_step;
#[cfg(feature = "num-dual-mode")]
mod dual;
mod error;
mod finite_difference;
mod result;

pub use complex_step::compute_cs;
#[cfg(feature = "num-dual-mode")]
pub use dual::ad_delta;
pub use error::{validate_step, GreeksError};
pub use finite_difference::compute_fd;
pub use result::{CsGreeks, FdGreeks};
