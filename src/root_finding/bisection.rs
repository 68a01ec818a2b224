use super::algorithms::Algorithm;
use super::config::SolveCfg;
use super::errors::RootFindingError;
use super::report::{IterationRecord, SolveReport, Termination};
use log::{debug, trace};
use thiserror::Error;

const ALGORITHM: &str = Algorithm::Bisection.algorithm_name();

#[derive(Debug, Error)]
pub enum BisectionError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error("no sign change on [{a}, {b}]: f(a) * f(b) > 0")]
    NoSignChange { a: f64, b: f64 },

    #[error("invalid bounds: a and b must be finite. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },
}

/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// Assumes `func` is continuous on `[a, b]` and that `func(a)` and `func(b)`
/// do not share a sign, guaranteeing a root inside the bracket. A product of
/// exactly zero is accepted: one endpoint may already be a root.
///
/// # Arguments
/// - `func` : function whose root is sought
/// - `a`    : left bracket endpoint, finite
/// - `b`    : right bracket endpoint, finite
/// - `cfg`  : [`SolveCfg`] (tolerance, iteration cap)
///
/// # Returns
/// [`SolveReport`] with one [`IterationRecord::WithResidual`] per pass. The
/// error estimate is half the bracket width, computed before narrowing, so it
/// strictly halves each iteration.
///
/// # Errors
/// - [`BisectionError::InvalidBounds`] : `a` or `b` is NaN/inf
/// - [`BisectionError::NoSignChange`]  : `f(a) * f(b) > 0`
///
/// Propagated via [`BisectionError::Common`]:
/// - [`RootFindingError::NonFiniteEvaluation`] : `func(x)` produced NaN/inf
/// - [`RootFindingError::InvalidTolerance`]    : `tol` <= 0 or not finite
/// - [`RootFindingError::InvalidMaxIter`]      : `max_iter` == 0
///
/// # Notes
/// - Convergence is linear and guaranteed for a valid bracket; the only
///   early exits are the tolerance checks and the iteration cap.
pub fn bisection<F>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: SolveCfg,
) -> Result<SolveReport, BisectionError>
where
    F: FnMut(f64) -> f64,
{
    if !(a.is_finite() && b.is_finite()) {
        return Err(BisectionError::InvalidBounds { a, b });
    }
    let (tol, max_iter) = cfg.validate()?;

    let mut evals = 0;

    // wraps func, increments evals, enforces finiteness
    let mut eval = |x: f64| -> Result<f64, BisectionError> {
        let fx = { evals += 1; func(x) };
        if !fx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
        }
        Ok(fx)
    };

    let mut fa = eval(a)?;
    let fb = eval(b)?;
    if fa * fb > 0.0 {
        return Err(BisectionError::NoSignChange { a, b });
    }

    let mut rows = Vec::new();

    // overwritten on the first pass
    let mut c   = a;
    let mut err = f64::INFINITY;
    for iter in 1..=max_iter {
        c   = 0.5 * (a + b);
        err = 0.5 * (b - a).abs();
        let fc = eval(c)?;
        rows.push(IterationRecord::WithResidual { iteration: iter, x: c, fx: fc, error: err });
        trace!("bisection iter {iter}: x={c}, f(x)={fc}, err={err}");

        if fc.abs() < tol || err < tol {
            debug!("bisection converged to {c} after {iter} iterations");
            return Ok(SolveReport {
                root        : c,
                error       : err,
                iterations  : iter,
                evaluations : evals,
                termination : Termination::ToleranceReached,
                trace       : rows,
                algorithm   : ALGORITHM,
            });
        }

        // shrink the bracket around the sign change
        if fa * fc < 0.0 {
            b = c;
        } else {
            a = c;
            fa = fc;
        }
    }

    debug!("bisection hit the iteration cap ({max_iter}) at x={c}");
    Ok(SolveReport {
        root        : c,
        error       : err,
        iterations  : max_iter,
        evaluations : evals,
        termination : Termination::IterationLimit,
        trace       : rows,
        algorithm   : ALGORITHM,
    })
}
