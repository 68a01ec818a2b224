//! Newton-Raphson method with a numerical derivative.

use super::algorithms::Algorithm;
use super::config::SolveCfg;
use super::derivative::central_difference_checked;
use super::errors::RootFindingError;
use super::report::{IterationRecord, SolveReport, Termination};
use log::{debug, trace};
use thiserror::Error;

const ALGORITHM: &str = Algorithm::Newton.algorithm_name();

#[derive(Debug, Error)]
pub enum NewtonError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },

    #[error("zero derivative encountered at x={x}")]
    ZeroDerivative { x: f64 },
}

/// Finds a root of a function using the
/// [Newton-Raphson method](https://en.wikipedia.org/wiki/Newton%27s_method).
///
/// No symbolic derivative is supplied: `f'(x)` is approximated on every pass
/// by the central difference of [`super::derivative`] with fixed step
/// `h = 1e-6`.
///
/// # Arguments
/// - `func` : function whose root is sought
/// - `x0`   : initial estimate, finite
/// - `cfg`  : [`SolveCfg`] (tolerance, iteration cap)
///
/// # Returns
/// [`SolveReport`] with one [`IterationRecord::WithResidual`] per pass. Each
/// pass applies `x_new = x - f(x)/f'(x)` with error `|x_new - x|`.
///
/// # Errors
/// - [`NewtonError::InvalidGuess`]   : `x0` is NaN/inf
/// - [`NewtonError::ZeroDerivative`] : the approximated derivative is exactly
///   zero (exact floating equality, matching the documented method contract)
///
/// Propagated via [`NewtonError::Common`]:
/// - [`RootFindingError::NonFiniteEvaluation`] : `func(x)` produced NaN/inf
/// - [`RootFindingError::InvalidTolerance`]    : `tol` <= 0 or not finite
/// - [`RootFindingError::InvalidMaxIter`]      : `max_iter` == 0
///
/// # Notes
/// - Quadratic convergence requires a good initial guess and smooth `f`.
///   For guaranteed convergence on a known bracket, prefer
///   [`super::bisection::bisection`].
pub fn newton<F>(mut func: F, x0: f64, cfg: SolveCfg) -> Result<SolveReport, NewtonError>
where
    F: FnMut(f64) -> f64,
{
    if !x0.is_finite() {
        return Err(NewtonError::InvalidGuess { x0 });
    }
    let (tol, max_iter) = cfg.validate()?;

    let mut evals = 0;
    let mut eval = |x: f64| -> Result<f64, NewtonError> {
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
        let fx  = eval(x)?;
        let dfx = central_difference_checked(&mut eval, x)?;
        if dfx == 0.0 {
            return Err(NewtonError::ZeroDerivative { x });
        }

        let x_new = x - fx / dfx;
        err = (x_new - x).abs();
        let f_new = eval(x_new)?;
        rows.push(IterationRecord::WithResidual { iteration: iter, x: x_new, fx: f_new, error: err });
        trace!("newton iter {iter}: x={x_new}, f(x)={f_new}, err={err}");

        if f_new.abs() < tol || err < tol {
            debug!("newton converged to {x_new} after {iter} iterations");
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

    debug!("newton hit the iteration cap ({max_iter}) at x={x}");
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
