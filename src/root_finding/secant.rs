use super::algorithms::Algorithm;
use super::config::SolveCfg;
use super::errors::RootFindingError;
use super::report::{IterationRecord, SolveReport, Termination};
use log::{debug, trace};
use thiserror::Error;

const ALGORITHM: &str = Algorithm::Secant.algorithm_name();

#[derive(Debug, Error)]
pub enum SecantError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error("invalid initial guesses: x0 and x1 must be finite. got x0={x0}, x1={x1}")]
    InvalidGuess { x0: f64, x1: f64 },

    #[error("zero denominator in secant step: f(x0)={fx0}, f(x1)={fx1}")]
    ZeroDenominator { fx0: f64, fx1: f64 },
}

/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func` : function whose root is sought
/// - `x0`   : first initial estimate, finite
/// - `x1`   : second initial estimate, finite
/// - `cfg`  : [`SolveCfg`] (tolerance, iteration cap)
///
/// # Returns
/// [`SolveReport`] with one [`IterationRecord::WithResidual`] per pass. Each
/// pass computes `x2 = x1 - f(x1)*(x1-x0)/(f(x1)-f(x0))` with error
/// `|x2 - x1|`, then rolls the pair forward to `(x1, x2)`.
///
/// # Errors
/// - [`SecantError::InvalidGuess`]    : `x0` or `x1` is NaN/inf
/// - [`SecantError::ZeroDenominator`] : `f(x1) - f(x0)` is exactly zero.
///   Identical seeds trip this on the first pass. The check uses exact
///   floating equality, matching the documented method contract.
///
/// Propagated via [`SecantError::Common`]:
/// - [`RootFindingError::NonFiniteEvaluation`] : `func(x)` produced NaN/inf
/// - [`RootFindingError::InvalidTolerance`]    : `tol` <= 0 or not finite
/// - [`RootFindingError::InvalidMaxIter`]      : `max_iter` == 0
///
/// # Notes
/// - Convergence is superlinear (~1.618) near simple roots but is not
///   guaranteed; poor seeds can diverge to the iteration cap.
pub fn secant<F>(
    mut func: F,
    x0: f64,
    x1: f64,
    cfg: SolveCfg,
) -> Result<SolveReport, SecantError>
where
    F: FnMut(f64) -> f64,
{
    if !(x0.is_finite() && x1.is_finite()) {
        return Err(SecantError::InvalidGuess { x0, x1 });
    }
    let (tol, max_iter) = cfg.validate()?;

    let mut evals = 0;
    let mut eval = |x: f64| -> Result<f64, SecantError> {
        let fx = { evals += 1; func(x) };
        if !fx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
        }
        Ok(fx)
    };

    let mut rows = Vec::new();

    let (mut x0, mut x1) = (x0, x1);

    // overwritten on the first pass
    let mut x2  = x1;
    let mut err = f64::INFINITY;
    for iter in 1..=max_iter {
        let f0 = eval(x0)?;
        let f1 = eval(x1)?;
        if f1 - f0 == 0.0 {
            return Err(SecantError::ZeroDenominator { fx0: f0, fx1: f1 });
        }

        x2  = x1 - f1 * (x1 - x0) / (f1 - f0);
        err = (x2 - x1).abs();
        let f2 = eval(x2)?;
        rows.push(IterationRecord::WithResidual { iteration: iter, x: x2, fx: f2, error: err });
        trace!("secant iter {iter}: x={x2}, f(x)={f2}, err={err}");

        if f2.abs() < tol || err < tol {
            debug!("secant converged to {x2} after {iter} iterations");
            return Ok(SolveReport {
                root        : x2,
                error       : err,
                iterations  : iter,
                evaluations : evals,
                termination : Termination::ToleranceReached,
                trace       : rows,
                algorithm   : ALGORITHM,
            });
        }

        x0 = x1;
        x1 = x2;
    }

    debug!("secant hit the iteration cap ({max_iter}) at x={x2}");
    Ok(SolveReport {
        root        : x2,
        error       : err,
        iterations  : max_iter,
        evaluations : evals,
        termination : Termination::IterationLimit,
        trace       : rows,
        algorithm   : ALGORITHM,
    })
}
