//! tests for the secant root finding algorithm
use approx::assert_relative_eq;
use zof::root_finding::config::SolveCfg;
use zof::root_finding::report::Termination;
use zof::root_finding::secant::{secant, SecantError};

type TestResult = Result<(), SecantError>;

#[test]
fn finds_dottie_number() -> TestResult {
    // cos(x) = x at ~0.7390851332
    let f   = |x: f64| x.cos() - x;
    let cfg = SolveCfg::new().with_tol(1e-10);
    let res = secant(f, 0.0, 1.0, cfg)?;

    assert_eq!(res.termination, Termination::ToleranceReached);
    assert_relative_eq!(res.root, 0.7390851332151607, max_relative = 1e-8);
    assert_eq!(res.algorithm, "secant");
    Ok(())
}

#[test]
fn zero_denominator_for_identical_seeds() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let err = secant(f, 1.0, 1.0, SolveCfg::new()).unwrap_err();

    assert!(matches!(err, SecantError::ZeroDenominator { fx0, fx1 } if fx0 == fx1));
    Ok(())
}

#[test]
fn zero_denominator_for_flat_function() -> TestResult {
    let f   = |_x: f64| 1.0;
    let err = secant(f, 0.0, 1.0, SolveCfg::new()).unwrap_err();

    assert!(matches!(err, SecantError::ZeroDenominator { .. }));
    Ok(())
}

#[test]
fn error_is_successive_iterate_difference() -> TestResult {
    let f   = |x: f64| x.cos() - x;
    let res = secant(f, 0.0, 1.0, SolveCfg::new().with_tol(1e-10))?;

    // x values of consecutive records differ by exactly the recorded error
    for pair in res.trace.windows(2) {
        assert_relative_eq!(
            (pair[1].x() - pair[0].x()).abs(),
            pair[1].error(),
            max_relative = 1e-12
        );
    }
    Ok(())
}

#[test]
fn detects_non_finite_guess() -> TestResult {
    let f   = |x: f64| x;
    let err = secant(f, f64::INFINITY, 1.0, SolveCfg::new()).unwrap_err();

    assert!(matches!(err, SecantError::InvalidGuess { .. }));
    Ok(())
}

#[test]
fn cap_exhaustion_is_not_an_error() -> TestResult {
    let f   = |x: f64| x.cos() - x;
    let cfg = SolveCfg::new().with_tol(1e-15).with_max_iter(2);
    let res = secant(f, 0.0, 1.0, cfg)?;

    assert_eq!(res.termination, Termination::IterationLimit);
    assert_eq!(res.iterations, 2);
    Ok(())
}

#[test]
fn reruns_are_deterministic() -> TestResult {
    let cfg = SolveCfg::new().with_tol(1e-10);
    let res1 = secant(|x: f64| x.cos() - x, 0.0, 1.0, cfg)?;
    let res2 = secant(|x: f64| x.cos() - x, 0.0, 1.0, cfg)?;

    assert_eq!(res1, res2);
    Ok(())
}
