//! Error types for scenario validation.
//!
//! This module provides:
//! - `AnalyticalError`: Ill-posed scenario parameters and unknown presets

use thiserror::Error;

/// Scenario validation errors.
///
/// The numeric core never raises these. They come from the opt-in
/// [`Scenario::validate`](crate::scenario::Scenario::validate) and from
/// parsing preset names.
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Non-positive or non-finite spot price.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Non-positive or non-finite strike price.
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Non-positive or non-finite volatility.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Non-positive or non-finite time to maturity.
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Non-finite rate or yield.
    #[error("Non-finite {name}: {value}")]
    NonFiniteRate {
        /// Parameter name (`rate` or `dividend_yield`)
        name: &'static str,
        /// The offending value
        value: f64,
    },

    /// Preset scenario name not in the table.
    #[error("Unknown scenario: {name}")]
    UnknownScenario {
        /// The name that failed to resolve
        name: String,
    },
}
