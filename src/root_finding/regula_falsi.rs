use super::algorithms::Algorithm;
use super::config::SolveCfg;
use super::errors::RootFindingError;
use super::report::{IterationRecord, SolveReport, Termination};
use log::{debug, trace};
use thiserror::Error;

const ALGORITHM: &str = Algorithm::RegulaFalsi.algorithm_name();

#[derive(Debug, Error)]
pub enum RegulaFalsiError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error("no sign change on [{a}, {b}]: f(a) * f(b) > 0")]
    NoSignChange { a: f64, b: f64 },

    #[error("invalid bounds: a and b must be finite. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },
}

/// Finds a root of a function using the classical
/// [false position method](https://en.wikipedia.org/wiki/Regula_falsi).
///
/// Same sign precondition as [`super::bisection::bisection`]; the iterate is
/// the x-intercept of the secant line through the bracket endpoints,
/// `c = (a*fb - b*fa) / (fb - fa)`.
///
/// # Arguments
/// - `func` : function whose root is sought
/// - `a`    : left bracket endpoint, finite
/// - `b`    : right bracket endpoint, finite
/// - `cfg`  : [`SolveCfg`] (tolerance, iteration cap)
///
/// # Returns
/// [`SolveReport`] with one [`IterationRecord::WithResidual`] per pass. The
/// error estimate is `|c - c_prev|`; no previous estimate exists on the first
/// pass, so the first record carries an infinite error.
///
/// # Errors
/// - [`RegulaFalsiError::InvalidBounds`] : `a` or `b` is NaN/inf
/// - [`RegulaFalsiError::NoSignChange`]  : `f(a) * f(b) > 0`
///
/// Propagated via [`RegulaFalsiError::Common`]:
/// - [`RootFindingError::NonFiniteEvaluation`] : `func(x)` produced NaN/inf
/// - [`RootFindingError::InvalidTolerance`]    : `tol` <= 0 or not finite
/// - [`RootFindingError::InvalidMaxIter`]      : `max_iter` == 0
///
/// # Warning
/// - The classical method can stagnate: on convex or concave functions one
///   bracket endpoint may never update, slowing convergence well below
///   bisection. This is a documented characteristic of the algorithm and is
///   deliberately not compensated for here.
pub fn regula_falsi<F>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: SolveCfg,
) -> Result<SolveReport, RegulaFalsiError>
where
    F: FnMut(f64) -> f64,
{
    if !(a.is_finite() && b.is_finite()) {
        return Err(RegulaFalsiError::InvalidBounds { a, b });
    }
    let (tol, max_iter) = cfg.validate()?;

    let mut evals = 0;
    let mut eval = |x: f64| -> Result<f64, RegulaFalsiError> {
        let fx = { evals += 1; func(x) };
        if !fx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
        }
        Ok(fx)
    };

    let mut fa = eval(a)?;
    let mut fb = eval(b)?;
    if fa * fb > 0.0 {
        return Err(RegulaFalsiError::NoSignChange { a, b });
    }

    let mut rows = Vec::new();

    // overwritten on the first pass
    let mut c   = a;
    let mut err = f64::INFINITY;
    for iter in 1..=max_iter {
        let c_prev = c;
        c = (a * fb - b * fa) / (fb - fa);
        let fc = eval(c)?;
        err = if iter > 1 { (c - c_prev).abs() } else { f64::INFINITY };
        rows.push(IterationRecord::WithResidual { iteration: iter, x: c, fx: fc, error: err });
        trace!("regula_falsi iter {iter}: x={c}, f(x)={fc}, err={err}");

        if fc.abs() < tol || err < tol {
            debug!("regula_falsi converged to {c} after {iter} iterations");
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

        if fa * fc < 0.0 {
            b = c;
            fb = fc;
        } else {
            a = c;
            fa = fc;
        }
    }

    debug!("regula_falsi hit the iteration cap ({max_iter}) at x={c}");
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
