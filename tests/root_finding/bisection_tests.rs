//! tests for the bisection root finding algorithm
use approx::assert_relative_eq;
use zof::root_finding::bisection::{bisection, BisectionError};
use zof::root_finding::config::SolveCfg;
use zof::root_finding::errors::RootFindingError;
use zof::root_finding::report::Termination;

type TestResult = Result<(), BisectionError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let tol = 1e-8;

    let cfg = SolveCfg::new().with_tol(tol);
    let res = bisection(f, 0.0, 2.0, cfg)?;

    assert_eq!(res.termination, Termination::ToleranceReached);
    assert!((res.root - 2.0_f64.sqrt()).abs() <= tol);
    // error halves from 1.0, so ~28 passes reach 1e-8
    assert!(res.iterations <= 28);
    assert_eq!(res.algorithm, "bisection");
    Ok(())
}

#[test]
fn error_estimate_halves_each_iteration() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = SolveCfg::new().with_tol(1e-10);
    let res = bisection(f, 0.0, 2.0, cfg)?;

    for pair in res.trace.windows(2) {
        assert_relative_eq!(pair[1].error(), pair[0].error() / 2.0, max_relative = 1e-12);
    }
    Ok(())
}

#[test]
fn trace_is_one_indexed_and_chronological() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let res = bisection(f, 0.0, 2.0, SolveCfg::new())?;

    for (k, row) in res.trace.iter().enumerate() {
        assert_eq!(row.iteration(), k + 1);
        assert!(row.residual().is_some());
        assert!(row.error() >= 0.0);
    }
    assert_eq!(res.trace.len(), res.iterations);
    Ok(())
}

#[test]
fn no_sign_change() -> TestResult {
    // f(2) = 2, f(3) = 7: same sign at both ends
    let f   = |x: f64| x * x - 2.0;
    let err = bisection(f, 2.0, 3.0, SolveCfg::new()).unwrap_err();

    assert!(matches!(err, BisectionError::NoSignChange { a, b } if a == 2.0 && b == 3.0));
    Ok(())
}

#[test]
fn endpoint_root_product_zero_is_accepted() -> TestResult {
    // f(a) == 0 makes the product exactly zero; the bracket is still valid
    let f   = |x: f64| x;
    let res = bisection(f, 0.0, 2.0, SolveCfg::new());

    assert!(res.is_ok());
    Ok(())
}

#[test]
fn cap_exhaustion_is_not_an_error() -> TestResult {
    let f     = |x: f64| x;
    let niter = 10;

    let cfg = SolveCfg::new().with_tol(1e-300).with_max_iter(niter);
    let res = bisection(f, -3.0, 2.0, cfg)?;

    assert_eq!(res.termination, Termination::IterationLimit);
    assert_eq!(res.iterations, niter);
    assert_eq!(res.trace.len(), niter);
    assert!(!res.converged());
    assert!(res.error > 1e-300);
    Ok(())
}

#[test]
fn non_finite_eval_propagates() -> TestResult {
    // f(0) is infinite; the bracket [-1, 1] walks straight into it
    let f   = |x: f64| 1.0 / x;
    let err = bisection(f, -1.0, 1.0, SolveCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        BisectionError::Common(RootFindingError::NonFiniteEvaluation { x, fx })
        if x == 0.0 && fx.is_infinite()));
    Ok(())
}

#[test]
fn detects_non_finite_bounds() -> TestResult {
    let f   = |x: f64| x;
    let err = bisection(f, f64::NAN, 1.0, SolveCfg::new()).unwrap_err();

    assert!(matches!(err, BisectionError::InvalidBounds { .. }));
    Ok(())
}

#[test]
fn rejects_zero_tolerance() -> TestResult {
    let f   = |x: f64| x;
    let err = bisection(f, -1.0, 1.0, SolveCfg::new().with_tol(0.0)).unwrap_err();

    assert!(matches!(
        err,
        BisectionError::Common(RootFindingError::InvalidTolerance { got }) if got == 0.0));
    Ok(())
}

#[test]
fn rejects_zero_max_iter() -> TestResult {
    let f   = |x: f64| x;
    let err = bisection(f, -1.0, 1.0, SolveCfg::new().with_max_iter(0)).unwrap_err();

    assert!(matches!(
        err,
        BisectionError::Common(RootFindingError::InvalidMaxIter { got: 0 })));
    Ok(())
}

#[test]
fn reruns_are_deterministic() -> TestResult {
    let cfg = SolveCfg::new().with_tol(1e-10);
    let res1 = bisection(|x: f64| x * x - 2.0, 0.0, 2.0, cfg)?;
    let res2 = bisection(|x: f64| x * x - 2.0, 0.0, 2.0, cfg)?;

    assert_eq!(res1, res2);
    Ok(())
}
