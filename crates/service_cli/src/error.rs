//! Error types for the csgreeks CLI.

use thiserror::Error;

use crate::config::ConfigError;
use pricer_risk::sweep::SweepError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Filesystem error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialisation error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialisation error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Sweep or step-size error from the risk layer
    #[error("Sweep error: {0}")]
    Sweep(#[from] SweepError),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Scenario name not found in configuration or presets
    #[error("Unknown scenario: {0}")]
    UnknownScenario(String),

    /// `check` found a disagreement
    #[error("Check failed: {0}")]
    CheckFailed(String),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
