//! Greeks error types.

use thiserror::Error;

/// Errors from the numerical Greek strategies.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GreeksError {
    /// Step size is zero, negative or not finite.
    #[error("Invalid step size: h = {step} (must be positive and finite)")]
    InvalidStepSize {
        /// The rejected step.
        step: f64,
    },
}

/// Rejects steps that would divide by zero or feed NaN into a result.
///
/// # Examples
/// ```
/// use pricer_risk::greeks::validate_step;
///
/// assert!(validate_step(1e-6).is_ok());
/// assert!(validate_step(0.0).is_err());
/// assert!(validate_step(f64::NAN).is_err());
/// ```
#[inline]
pub fn validate_step(step: f64) -> Result<(), GreeksError> {
    if step > 0.0 && step.is_finite() {
        Ok(())
    } else {
        Err(GreeksError::InvalidStepSize { step })
    }
}
