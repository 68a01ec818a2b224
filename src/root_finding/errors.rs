//! Shared root-finding error types.
//!
//! [`RootFindingError`] covers the runtime errors every solver can raise:
//! - non-finite function evaluation
//! - invalid global parameters (`tol`, `max_iter`)
//!
//! Each algorithm wraps these in its own error enum (e.g.
//! [`super::bisection::BisectionError`]) via `#[error(transparent)]` and adds
//! its method-specific failure variants there.

use thiserror::Error;

/// Root-finding runtime errors common to all solvers.
#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("invalid tolerance: must be finite and > 0. got tol={got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },
}
