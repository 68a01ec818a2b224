//! Numerical derivative helper shared by the open methods.

/// Fixed finite-difference step used by [`central_difference`].
pub const FD_STEP: f64 = 1e-6;

/// Central-difference approximation of `f'(x)` with fixed step `h = 1e-6`:
/// `(f(x + h) - f(x - h)) / (2h)`.
pub fn central_difference<F>(mut f: F, x: f64) -> f64
where
    F: FnMut(f64) -> f64,
{
    (f(x + FD_STEP) - f(x - FD_STEP)) / (2.0 * FD_STEP)
}

/// Same approximation routed through a solver's checked eval closure so that
/// non-finite evaluations propagate as errors.
pub(crate) fn central_difference_checked<E, Err>(eval: &mut E, x: f64) -> Result<f64, Err>
where
    E: FnMut(f64) -> Result<f64, Err>,
{
    Ok((eval(x + FD_STEP)? - eval(x - FD_STEP)?) / (2.0 * FD_STEP))
}
