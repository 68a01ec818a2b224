//! Shared configuration for root-finding algorithms.
//!
//! Provides [`SolveCfg`], accepted by every solver:
//! - `tol`      : convergence tolerance, applied to both the residual
//!                `|f(x)|` and the method's error estimate
//! - `max_iter` : iteration cap
//!
//! Unset fields fall back to [`SolveCfg::DEFAULT_TOL`] and
//! [`SolveCfg::DEFAULT_MAX_ITER`]. Validation happens inside each solver via
//! [`SolveCfg::validate`] before the first iteration runs.
//!
//! Modified secant carries an extra perturbation fraction and therefore has
//! its own config ([`super::modified_secant::ModifiedSecantCfg`]) embedding
//! this one.

use super::errors::RootFindingError;

#[derive(Debug, Copy, Clone, Default)]
pub struct SolveCfg {
    tol:      Option<f64>,
    max_iter: Option<usize>,
}

impl SolveCfg {
    pub const DEFAULT_TOL: f64 = 1e-6;
    pub const DEFAULT_MAX_ITER: usize = 100;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn with_tol(mut self, v: f64) -> Self { self.tol = Some(v); self }
    pub fn with_max_iter(mut self, v: usize) -> Self { self.max_iter = Some(v); self }

    #[inline] #[must_use] pub fn tol(&self) -> f64 { self.tol.unwrap_or(Self::DEFAULT_TOL) }
    #[inline] #[must_use] pub fn max_iter(&self) -> usize { self.max_iter.unwrap_or(Self::DEFAULT_MAX_ITER) }

    /// Checks tolerances and the iteration cap, returning the effective
    /// `(tol, max_iter)` pair with defaults applied.
    ///
    /// # Errors
    /// - [`RootFindingError::InvalidTolerance`] - `tol` <= 0 or not finite
    /// - [`RootFindingError::InvalidMaxIter`]   - `max_iter` == 0
    pub fn validate(&self) -> Result<(f64, usize), RootFindingError> {
        let tol = self.tol();
        if !(tol.is_finite() && tol > 0.0) {
            return Err(RootFindingError::InvalidTolerance { got: tol });
        }

        let max_iter = self.max_iter();
        if max_iter == 0 {
            return Err(RootFindingError::InvalidMaxIter { got: max_iter });
        }

        Ok((tol, max_iter))
    }
}
