//! Sweep output rows.
//!
//! A [`SweepRow`] keeps the strategy results grouped; [`SweepRecord`] is the
//! flat view in the published column order ([`COLUMNS`]) used by writers.

#[cfg(feature = "serde")]
use serde::Serialize;

use pricer_models::analytical::AnalyticGreeks;

use crate::greeks::{CsGreeks, FdGreeks};

/// Column names of a sweep table, in output order.
pub const COLUMNS: [&str; 14] = [
    "h_rel",
    "h",
    "Delta_analytic",
    "Delta_fd",
    "Delta_cs",
    "err_D_fd",
    "err_D_cs",
    "Gamma_analytic",
    "Gamma_fd",
    "Gamma_cs_real",
    "Gamma_cs_45",
    "err_G_fd",
    "err_G_cs_real",
    "err_G_cs_45",
];

/// Absolute errors of the five estimators against the analytic Greeks.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SweepErrors {
    /// |Delta_fd − Delta_analytic|
    pub delta_fd: f64,
    /// |Delta_cs − Delta_analytic|
    pub delta_cs: f64,
    /// |Gamma_fd − Gamma_analytic|
    pub gamma_fd: f64,
    /// |Gamma_cs_real − Gamma_analytic|
    pub gamma_cs_real: f64,
    /// |Gamma_cs_45 − Gamma_analytic|
    pub gamma_cs_45: f64,
}

impl SweepErrors {
    /// Scores both strategies against the analytic values.
    pub fn measure(analytic: &AnalyticGreeks, fd: &FdGreeks, cs: &CsGreeks) -> Self {
        Self {
            delta_fd: (fd.delta - analytic.delta).abs(),
            delta_cs: (cs.delta - analytic.delta).abs(),
            gamma_fd: (fd.gamma - analytic.gamma).abs(),
            gamma_cs_real: (cs.gamma_real - analytic.gamma).abs(),
            gamma_cs_45: (cs.gamma_45 - analytic.gamma).abs(),
        }
    }
}

/// Results at one grid point. Never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRow {
    /// Relative step size.
    pub h_rel: f64,
    /// Absolute step size, h_rel·S.
    pub h: f64,
    /// Ground truth, identical on every row of one sweep.
    pub analytic: AnalyticGreeks,
    /// Finite-difference estimates.
    pub fd: FdGreeks,
    /// Complex-step estimates.
    pub cs: CsGreeks,
    /// Absolute errors.
    pub errors: SweepErrors,
}

impl SweepRow {
    /// Flattens the row into the published column order.
    pub fn to_record(&self) -> SweepRecord {
        SweepRecord {
            h_rel: self.h_rel,
            h: self.h,
            delta_analytic: self.analytic.delta,
            delta_fd: self.fd.delta,
            delta_cs: self.cs.delta,
            err_d_fd: self.errors.delta_fd,
            err_d_cs: self.errors.delta_cs,
            gamma_analytic: self.analytic.gamma,
            gamma_fd: self.fd.gamma,
            gamma_cs_real: self.cs.gamma_real,
            gamma_cs_45: self.cs.gamma_45,
            err_g_fd: self.errors.gamma_fd,
            err_g_cs_real: self.errors.gamma_cs_real,
            err_g_cs_45: self.errors.gamma_cs_45,
        }
    }
}

/// Flat sweep row; field order and serialised names follow [`COLUMNS`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[allow(missing_docs)]
pub struct SweepRecord {
    pub h_rel: f64,
    pub h: f64,
    #[cfg_attr(feature = "serde", serde(rename = "Delta_analytic"))]
    pub delta_analytic: f64,
    #[cfg_attr(feature = "serde", serde(rename = "Delta_fd"))]
    pub delta_fd: f64,
    #[cfg_attr(feature = "serde", serde(rename = "Delta_cs"))]
    pub delta_cs: f64,
    #[cfg_attr(feature = "serde", serde(rename = "err_D_fd"))]
    pub err_d_fd: f64,
    #[cfg_attr(feature = "serde", serde(rename = "err_D_cs"))]
    pub err_d_cs: f64,
    #[cfg_attr(feature = "serde", serde(rename = "Gamma_analytic"))]
    pub gamma_analytic: f64,
    #[cfg_attr(feature = "serde", serde(rename = "Gamma_fd"))]
    pub gamma_fd: f64,
    #[cfg_attr(feature = "serde", serde(rename = "Gamma_cs_real"))]
    pub gamma_cs_real: f64,
    #[cfg_attr(feature = "serde", serde(rename = "Gamma_cs_45"))]
    pub gamma_cs_45: f64,
    #[cfg_attr(feature = "serde", serde(rename = "err_G_fd"))]
    pub err_g_fd: f64,
    #[cfg_attr(feature = "serde", serde(rename = "err_G_cs_real"))]
    pub err_g_cs_real: f64,
    #[cfg_attr(feature = "serde", serde(rename = "err_G_cs_45"))]
    pub err_g_cs_45: f64,
}

impl SweepRecord {
    /// Values in [`COLUMNS`] order.
    pub fn values(&self) -> [f64; 14] {
        [
            self.h_rel,
            self.h,
            self.delta_analytic,
            self.delta_fd,
            self.delta_cs,
            self.err_d_fd,
            self.err_d_cs,
            self.gamma_analytic,
            self.gamma_fd,
            self.gamma_cs_real,
            self.gamma_cs_45,
            self.err_g_fd,
            self.err_g_cs_real,
            self.err_g_cs_45,
        ]
    }
}
