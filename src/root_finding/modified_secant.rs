use super::algorithms::Algorithm;
use super::config::SolveCfg;
use super::derivative::central_difference_checked;
use super::errors::RootFindingError;
use super::report::{IterationRecord, SolveReport, Termination};
use log::{debug, trace};
use thiserror::Error;

const ALGORITHM: &str = Algorithm::ModifiedSecant.algorithm_name();

#[derive(Debug, Error)]
pub enum ModifiedSecantError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },

    #[error("invalid delta: must be finite and nonzero. got delta={got}")]
    InvalidDelta { got: f64 },

    #[error("zero derivative approximation at x={x}")]
    ZeroDerivativeApproximation { x: f64 },
}

/// Modified secant configuration.
///
/// # Fields
/// - `common` : [`SolveCfg`] with tolerance and iteration cap
/// - `delta`  : perturbation fraction for the one-sided derivative
///              approximation (default [`ModifiedSecantCfg::DEFAULT_DELTA`])
///
/// # Construction
/// Use [`ModifiedSecantCfg::new`] then optional setters.
#[derive(Debug, Copy, Clone, Default)]
pub struct ModifiedSecantCfg {
    common: SolveCfg,
    delta:  Option<f64>,
}

impl ModifiedSecantCfg {
    pub const DEFAULT_DELTA: f64 = 1e-3;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn with_tol(mut self, v: f64) -> Self { self.common = self.common.with_tol(v); self }
    pub fn with_max_iter(mut self, v: usize) -> Self { self.common = self.common.with_max_iter(v); self }
    pub fn with_delta(mut self, v: f64) -> Self { self.delta = Some(v); self }

    #[inline] #[must_use] pub fn tol(&self) -> f64 { self.common.tol() }
    #[inline] #[must_use] pub fn max_iter(&self) -> usize { self.common.max_iter() }
    #[inline] #[must_use] pub fn delta(&self) -> f64 { self.delta.unwrap_or(Self::DEFAULT_DELTA) }

    /// Effective `(tol, max_iter, delta)` with defaults applied.
    ///
    /// # Errors
    /// - [`ModifiedSecantError::InvalidDelta`] : `delta` is zero or not finite
    /// - tolerance/cap errors propagated from [`SolveCfg::validate`]
    pub fn validate(&self) -> Result<(f64, usize, f64), ModifiedSecantError> {
        let (tol, max_iter) = self.common.validate()?;
        let delta = self.delta();
        if !delta.is_finite() || delta == 0.0 {
            return Err(ModifiedSecantError::InvalidDelta { got: delta });
        }
        Ok((tol, max_iter, delta))
    }
}

/// Finds a root of a function using the modified secant method: Newton's
/// update with the derivative approximated by a single perturbed evaluation,
/// `(f(x + delta*x) - f(x)) / (delta*x)`.
///
/// When `x == 0` the perturbation `delta*x` vanishes, so the approximation
/// falls back to the central difference of [`super::derivative`] for that
/// pass.
///
/// # Arguments
/// - `func` : function whose root is sought
/// - `x0`   : initial estimate, finite
/// - `cfg`  : [`ModifiedSecantCfg`] (tolerance, iteration cap, delta)
///
/// # Returns
/// [`SolveReport`] with one [`IterationRecord::WithResidual`] per pass. The
/// update and error estimate are identical in form to
/// [`super::newton::newton`].
///
/// # Errors
/// - [`ModifiedSecantError::InvalidGuess`] : `x0` is NaN/inf
/// - [`ModifiedSecantError::InvalidDelta`] : `delta` is zero or not finite
/// - [`ModifiedSecantError::ZeroDerivativeApproximation`] : the
///   finite-difference derivative is exactly zero (exact floating equality,
///   matching the documented method contract)
///
/// Propagated via [`ModifiedSecantError::Common`]:
/// - [`RootFindingError::NonFiniteEvaluation`] : `func(x)` produced NaN/inf
/// - [`RootFindingError::InvalidTolerance`]    : `tol` <= 0 or not finite
/// - [`RootFindingError::InvalidMaxIter`]      : `max_iter` == 0
pub fn modified_secant<F>(
    mut func: F,
    x0: f64,
    cfg: ModifiedSecantCfg,
) -> Result<SolveReport, ModifiedSecantError>
where
    F: FnMut(f64) -> f64,
{
    if !x0.is_finite() {
        return Err(ModifiedSecantError::InvalidGuess { x0 });
    }
    let (tol, max_iter, delta) = cfg.validate()?;

    let mut evals = 0;
    let mut eval = |x: f64| -> Result<f64, ModifiedSecantError> {
        let fx = { evals += 1; func(x) };
        if !fx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
        }
        Ok(fx)
    };

    let mut rows = Vec::new();

    let mut x   = x0;
    let mut err = f64::INFINITY;
    for iter in 1..=max_iter {
        let fx = eval(x)?;
        let dfx = if x != 0.0 {
            (eval(x + delta * x)? - fx) / (delta * x)
        } else {
            central_difference_checked(&mut eval, x)?
        };
        if dfx == 0.0 {
            return Err(ModifiedSecantError::ZeroDerivativeApproximation { x });
        }

        let x_new = x - fx / dfx;
        err = (x_new - x).abs();
        let f_new = eval(x_new)?;
        rows.push(IterationRecord::WithResidual { iteration: iter, x: x_new, fx: f_new, error: err });
        trace!("modified_secant iter {iter}: x={x_new}, f(x)={f_new}, err={err}");

        if f_new.abs() < tol || err < tol {
            debug!("modified_secant converged to {x_new} after {iter} iterations");
            return Ok(SolveReport {
                root        : x_new,
                error       : err,
                iterations  : iter,
                evaluations : evals,
                termination : Termination::ToleranceReached,
                trace       : rows,
                algorithm   : ALGORITHM,
            });
        }

        x = x_new;
    }

    debug!("modified_secant hit the iteration cap ({max_iter}) at x={x}");
    Ok(SolveReport {
        root        : x,
        error       : err,
        iterations  : max_iter,
        evaluations : evals,
        termination : Termination::IterationLimit,
        trace       : rows,
        algorithm   : ALGORITHM,
    })
}
