//! Logarithmic grid of relative step sizes.

use super::error::SweepError;

/// Default number of grid points.
pub const DEFAULT_POINTS: usize = 25;
/// Default log₁₀ of the smallest relative step.
pub const DEFAULT_LOG10_MIN: f64 = -16.0;
/// Default log₁₀ of the largest relative step.
pub const DEFAULT_LOG10_MAX: f64 = -4.0;

/// Equal-ratio grid of relative step sizes over a closed range.
///
/// Point `i` is `10^(log10_min + i·(log10_max − log10_min)/(points − 1))`,
/// so both ends are included and values ascend.
///
/// # Examples
/// ```
/// use pricer_risk::sweep::StepGrid;
///
/// let grid = StepGrid::default();
/// let h_rel = grid.h_rel_values();
/// assert_eq!(h_rel.len(), 25);
/// assert!((h_rel[0] - 1e-16).abs() < 1e-30);
/// assert!((h_rel[24] - 1e-4).abs() < 1e-18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepGrid {
    points: usize,
    log10_min: f64,
    log10_max: f64,
}

impl Default for StepGrid {
    fn default() -> Self {
        Self {
            points: DEFAULT_POINTS,
            log10_min: DEFAULT_LOG10_MIN,
            log10_max: DEFAULT_LOG10_MAX,
        }
    }
}

impl StepGrid {
    /// Creates a validated grid.
    ///
    /// # Errors
    /// [`SweepError::InvalidGrid`] when fewer than two points are requested,
    /// a bound is not finite, or `log10_min >= log10_max`.
    pub fn new(points: usize, log10_min: f64, log10_max: f64) -> Result<Self, SweepError> {
        let grid = Self {
            points,
            log10_min,
            log10_max,
        };
        grid.validate()?;
        Ok(grid)
    }

    /// Number of grid points.
    #[inline]
    pub fn points(&self) -> usize {
        self.points
    }

    /// log₁₀ of the smallest relative step.
    #[inline]
    pub fn log10_min(&self) -> f64 {
        self.log10_min
    }

    /// log₁₀ of the largest relative step.
    #[inline]
    pub fn log10_max(&self) -> f64 {
        self.log10_max
    }

    /// Checks the grid parameters.
    ///
    /// # Errors
    /// See [`StepGrid::new`].
    pub fn validate(&self) -> Result<(), SweepError> {
        if self.points < 2 {
            return Err(SweepError::InvalidGrid(format!(
                "need at least 2 points, got {}",
                self.points
            )));
        }
        if !self.log10_min.is_finite() || !self.log10_max.is_finite() {
            return Err(SweepError::InvalidGrid(format!(
                "bounds must be finite, got [{}, {}]",
                self.log10_min, self.log10_max
            )));
        }
        if self.log10_min >= self.log10_max {
            return Err(SweepError::InvalidGrid(format!(
                "log10_min ({}) must be below log10_max ({})",
                self.log10_min, self.log10_max
            )));
        }
        Ok(())
    }

    /// Relative step sizes in ascending order.
    pub fn h_rel_values(&self) -> Vec<f64> {
        let last = self.points.saturating_sub(1).max(1) as f64;
        let span = self.log10_max - self.log10_min;
        (0..self.points)
            .map(|i| 10f64.powf(self.log10_min + i as f64 * span / last))
            .collect()
    }
}
