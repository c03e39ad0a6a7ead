//! Mathematical primitives shared by every pricing layer.
//!
//! This module provides:
//! - `distributions`: Standard normal CDF, PDF and log-PDF for real arguments

pub mod distributions;
