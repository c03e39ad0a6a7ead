//! # Pricer Models (L2: Business Logic)
//!
//! Scenario definitions, the generic Black-Scholes call pricer and the
//! closed-form Greeks that serve as ground truth.
//!
//! This crate provides:
//! - [`scenario::Scenario`]: the immutable six-parameter market scenario,
//!   plus the preset scenario table
//! - [`analytical::BlackScholesCall`]: one pricing formula evaluated
//!   identically over every [`PricingScalar`](pricer_core::traits::PricingScalar)
//!   domain
//! - [`analytical::compute_analytic`]: underflow-safe analytic Delta and Gamma
//!
//! ## Design Principles
//!
//! - **Generic over `T: PricingScalar`**: the same formula prices in the
//!   real, complex and dual domains
//! - **No validation in the hot path**: the core assumes well-posed inputs;
//!   [`scenario::Scenario::validate`] is an opt-in check for callers

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod scenario;
