//! Best achievable accuracy per estimator.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use super::row::SweepRow;

/// The five numerical estimators scored by a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Estimator {
    /// Forward-difference Delta.
    DeltaFd,
    /// Complex-step Delta.
    DeltaCs,
    /// Second-difference Gamma.
    GammaFd,
    /// Complex-step real-part Gamma.
    GammaCsReal,
    /// Complex-step 45° Gamma.
    GammaCs45,
}

impl Estimator {
    /// All estimators in column order.
    pub const ALL: [Estimator; 5] = [
        Estimator::DeltaFd,
        Estimator::DeltaCs,
        Estimator::GammaFd,
        Estimator::GammaCsReal,
        Estimator::GammaCs45,
    ];

    /// Name of the error column this estimator is scored in.
    pub fn error_column(&self) -> &'static str {
        match self {
            Estimator::DeltaFd => "err_D_fd",
            Estimator::DeltaCs => "err_D_cs",
            Estimator::GammaFd => "err_G_fd",
            Estimator::GammaCsReal => "err_G_cs_real",
            Estimator::GammaCs45 => "err_G_cs_45",
        }
    }

    /// Absolute error of this estimator on `row`.
    #[inline]
    pub fn error(&self, row: &SweepRow) -> f64 {
        match self {
            Estimator::DeltaFd => row.errors.delta_fd,
            Estimator::DeltaCs => row.errors.delta_cs,
            Estimator::GammaFd => row.errors.gamma_fd,
            Estimator::GammaCsReal => row.errors.gamma_cs_real,
            Estimator::GammaCs45 => row.errors.gamma_cs_45,
        }
    }

    fn index(&self) -> usize {
        match self {
            Estimator::DeltaFd => 0,
            Estimator::DeltaCs => 1,
            Estimator::GammaFd => 2,
            Estimator::GammaCsReal => 3,
            Estimator::GammaCs45 => 4,
        }
    }
}

impl fmt::Display for Estimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Estimator::DeltaFd => "Delta FD",
            Estimator::DeltaCs => "Delta CS",
            Estimator::GammaFd => "Gamma FD",
            Estimator::GammaCsReal => "Gamma CS (real)",
            Estimator::GammaCs45 => "Gamma CS (45°)",
        };
        f.write_str(label)
    }
}

/// Smallest error of one estimator and where it occurred.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BestStep {
    /// Row index in the sweep table.
    pub index: usize,
    /// Relative step at the minimum.
    pub h_rel: f64,
    /// Minimum absolute error.
    pub error: f64,
}

/// Per-estimator minimum error over a sweep table.
///
/// Ties resolve to the first (smallest h_rel) row. NaN errors never win
/// against a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepSummary {
    best: [BestStep; 5],
}

impl SweepSummary {
    /// Summarises `rows`. Returns `None` for an empty table.
    pub fn from_rows(rows: &[SweepRow]) -> Option<Self> {
        let first = rows.first()?;
        let mut best = Estimator::ALL.map(|estimator| BestStep {
            index: 0,
            h_rel: first.h_rel,
            error: estimator.error(first),
        });

        for (index, row) in rows.iter().enumerate().skip(1) {
            for estimator in Estimator::ALL {
                let slot = &mut best[estimator.index()];
                let error = estimator.error(row);
                if error < slot.error || (slot.error.is_nan() && !error.is_nan()) {
                    *slot = BestStep {
                        index,
                        h_rel: row.h_rel,
                        error,
                    };
                }
            }
        }

        Some(Self { best })
    }

    /// Best step for `estimator`.
    #[inline]
    pub fn best(&self, estimator: Estimator) -> BestStep {
        self.best[estimator.index()]
    }

    /// `(estimator, best step)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (Estimator, BestStep)> + '_ {
        Estimator::ALL.into_iter().map(move |e| (e, self.best(e)))
    }
}
