//! Step-size sweep and error measurement.
//!
//! This module provides:
//! - [`StepGrid`]: logarithmic grid of relative step sizes
//! - [`run_sweep`]: evaluates every strategy at every grid point
//! - [`SweepRow`]: one grid point's estimates and absolute errors
//! - [`SweepSummary`]: best achievable error per [`Estimator`]
//!
//! ## Architecture
//!
//! ```text
//! StepGrid ──► h_rel ──► h = h_rel·S ──┬──► compute_fd ──┐
//!                                      └──► compute_cs ──┼──► SweepRow
//! Scenario ──► compute_analytic (once) ──────────────────┘
//! ```

mod engine;
mod error;
mod grid;
mod row;
mod summary;

pub use engine::run_sweep;
pub use error::SweepError;
pub use grid::{StepGrid, DEFAULT_LOG10_MAX, DEFAULT_LOG10_MIN, DEFAULT_POINTS};
pub use row::{SweepErrors, SweepRecord, SweepRow, COLUMNS};
pub use summary::{BestStep, Estimator, SweepSummary};
