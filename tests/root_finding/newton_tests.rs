//! tests for the newton-raphson root finding algorithm
use approx::assert_relative_eq;
use zof::root_finding::config::SolveCfg;
use zof::root_finding::errors::RootFindingError;
use zof::root_finding::newton::{newton, NewtonError};
use zof::root_finding::report::Termination;

type TestResult = Result<(), NewtonError>;

#[test]
fn finds_sqrt_2_quadratically() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = SolveCfg::new().with_tol(1e-10);
    let res = newton(f, 1.0, cfg)?;

    assert_eq!(res.termination, Termination::ToleranceReached);
    assert_relative_eq!(res.root, 1.4142135623730951, max_relative = 1e-9);
    assert!(res.iterations <= 6);
    assert_eq!(res.algorithm, "newton");
    Ok(())
}

#[test]
fn error_roughly_squares_each_iteration() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = SolveCfg::new().with_tol(1e-12);
    let res = newton(f, 1.0, cfg)?;

    // quadratic convergence: once the error is below ~0.1 the next error is
    // far smaller than linear shrinkage would give
    for pair in res.trace.windows(2) {
        if pair[0].error() < 0.1 && pair[1].error() > 0.0 {
            assert!(pair[1].error() < pair[0].error() * pair[0].error() * 10.0);
        }
    }
    Ok(())
}

#[test]
fn zero_derivative_at_stationary_point() -> TestResult {
    // f'(0) == 0 and the central difference of x^2 at 0 is exactly zero
    let f   = |x: f64| x * x;
    let err = newton(f, 0.0, SolveCfg::new()).unwrap_err();

    assert!(matches!(err, NewtonError::ZeroDerivative { x } if x == 0.0));
    Ok(())
}

#[test]
fn detects_non_finite_guess() -> TestResult {
    let f   = |x: f64| x;
    let err = newton(f, f64::NAN, SolveCfg::new()).unwrap_err();

    assert!(matches!(err, NewtonError::InvalidGuess { .. }));
    Ok(())
}

#[test]
fn non_finite_eval_propagates() -> TestResult {
    let f   = |x: f64| x.ln();
    let err = newton(f, -1.0, SolveCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        NewtonError::Common(RootFindingError::NonFiniteEvaluation { .. })));
    Ok(())
}

#[test]
fn cap_exhaustion_is_not_an_error() -> TestResult {
    // newton cycles on x^3 - 2x + 2 from x0 = 0 (the classic 0 -> 1 -> 0 trap)
    let f   = |x: f64| x * x * x - 2.0 * x + 2.0;
    let cfg = SolveCfg::new().with_tol(1e-12).with_max_iter(20);
    let res = newton(f, 0.0, cfg)?;

    assert_eq!(res.termination, Termination::IterationLimit);
    assert_eq!(res.iterations, 20);
    assert!(!res.converged());
    Ok(())
}

#[test]
fn reruns_are_deterministic() -> TestResult {
    let cfg = SolveCfg::new().with_tol(1e-10);
    let res1 = newton(|x: f64| x * x - 2.0, 1.0, cfg)?;
    let res2 = newton(|x: f64| x * x - 2.0, 1.0, cfg)?;

    assert_eq!(res1, res2);
    Ok(())
}
