use super::algorithms::Algorithm;
use super::config::SolveCfg;
use super::errors::RootFindingError;
use super::report::{IterationRecord, SolveReport, Termination};
use log::{debug, trace};
use thiserror::Error;

const ALGORITHM: &str = Algorithm::FixedPoint.algorithm_name();

#[derive(Debug, Error)]
pub enum FixedPointError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },
}

/// Finds a fixed point of a transform using
/// [fixed-point iteration](https://en.wikipedia.org/wiki/Fixed-point_iteration),
/// i.e. a solution of `x = g(x)`.
///
/// The caller supplies the transform `g` directly; to find a root of `f`,
/// rearrange `f(x) = 0` into an equivalent `x = g(x)` first.
///
/// # Arguments
/// - `transform` : the map `g` iterated as `x_new = g(x)`
/// - `x0`        : initial estimate, finite
/// - `cfg`       : [`SolveCfg`] (tolerance, iteration cap)
///
/// # Returns
/// [`SolveReport`] with one [`IterationRecord::ResidualFree`] per pass: no
/// residual is ever computed because `f` is never evaluated. Convergence
/// checks ONLY the error estimate `|x_new - x|`; there is no residual target.
///
/// # Errors
/// - [`FixedPointError::InvalidGuess`] : `x0` is NaN/inf
///
/// Propagated via [`FixedPointError::Common`]:
/// - [`RootFindingError::NonFiniteEvaluation`] : `g(x)` produced NaN/inf
/// - [`RootFindingError::InvalidTolerance`]    : `tol` <= 0 or not finite
/// - [`RootFindingError::InvalidMaxIter`]      : `max_iter` == 0
///
/// # Notes
/// - No contraction-mapping precondition is enforced. If `g` is not a
///   contraction near the fixed point, the iteration diverges and runs to
///   the cap with a growing error estimate; that is a normal
///   [`Termination::IterationLimit`] outcome, not an error.
pub fn fixed_point<G>(
    mut transform: G,
    x0: f64,
    cfg: SolveCfg,
) -> Result<SolveReport, FixedPointError>
where
    G: FnMut(f64) -> f64,
{
    if !x0.is_finite() {
        return Err(FixedPointError::InvalidGuess { x0 });
    }
    let (tol, max_iter) = cfg.validate()?;

    let mut evals = 0;
    let mut eval = |x: f64| -> Result<f64, FixedPointError> {
        let gx = { evals += 1; transform(x) };
        if !gx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx: gx }.into());
        }
        Ok(gx)
    };

    let mut rows = Vec::new();

    let mut x   = x0;
    let mut err = f64::INFINITY;
    for iter in 1..=max_iter {
        let x_new = eval(x)?;
        err = (x_new - x).abs();
        rows.push(IterationRecord::ResidualFree { iteration: iter, x: x_new, error: err });
        trace!("fixed_point iter {iter}: x={x_new}, err={err}");

        if err < tol {
            debug!("fixed_point converged to {x_new} after {iter} iterations");
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

    debug!("fixed_point hit the iteration cap ({max_iter}) at x={x}");
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
