//! # Pricer Risk (L3: Sensitivities)
//!
//! Numerical Greek-extraction strategies and the step-size error harness
//! that scores them against the closed-form ground truth.
//!
//! This crate provides:
//! - [`greeks::compute_fd`]: forward-difference Delta and second-difference Gamma
//! - [`greeks::compute_cs`]: complex-step Delta and the two complex-step Gammas
//! - `greeks::ad_delta`: forward-mode AD Delta (feature `num-dual-mode`)
//! - [`sweep::run_sweep`]: one row per step size over a logarithmic grid
//! - [`sweep::SweepSummary`]: best achievable error per estimator
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L3)             │
//! ├─────────────────────────────────────────┤
//! │  greeks/  - FD, complex-step, dual AD   │
//! │  sweep/   - StepGrid, SweepRow, summary │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           pricer_models (L2)            │
//! │  Scenario, generic pricer, analytic     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The crate is synchronous and holds no state between calls. Identical
//! inputs give bit-identical outputs.
//!
//! ## Example
//!
//! ```
//! use pricer_models::scenario::PresetScenario;
//! use pricer_risk::sweep::{run_sweep, StepGrid, SweepSummary, Estimator};
//!
//! let scenario = PresetScenario::AtmReference.scenario();
//! let rows = run_sweep(&scenario, &StepGrid::default()).unwrap();
//! assert_eq!(rows.len(), 25);
//!
//! let summary = SweepSummary::from_rows(&rows).unwrap();
//! assert!(summary.best(Estimator::DeltaCs).error < 1e-14);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod greeks;
pub mod sweep;

// Re-export commonly used types
pub use greeks::{compute_cs, compute_fd, CsGreeks, FdGreeks, GreeksError};
pub use sweep::{run_sweep, Estimator, StepGrid, SweepError, SweepRow, SweepSummary};
