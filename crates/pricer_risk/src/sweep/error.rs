//! Sweep error types.

use thiserror::Error;

use crate::greeks::GreeksError;

/// Errors that can occur while running a sweep.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SweepError {
    /// Grid parameters are unusable.
    #[error("Invalid step grid: {0}")]
    InvalidGrid(String),

    /// A grid point produced an invalid absolute step.
    #[error(transparent)]
    Greeks(#[from] GreeksError),
}
