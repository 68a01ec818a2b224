//! Defines the [`SolveReport`] struct returned by all root-finding
//! algorithms, along with the per-iteration trace it carries.

/// Reasons a root-finding algorithm may terminate.
///
/// Hitting the iteration cap is a normal terminal outcome, not an error;
/// callers distinguish it from converged success through this field (or by
/// checking `iterations == max_iter` against their configuration).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    ToleranceReached,
    IterationLimit,
}

/// One completed iteration of a solver.
///
/// - [`IterationRecord::WithResidual`]
///     - bisection, regula falsi, secant, newton, modified secant
///     - carries the residual `f(x)` evaluated at the iterate
/// - [`IterationRecord::ResidualFree`]
///     - fixed-point iteration
///     - no residual exists: the method never evaluates `f`, only the
///       transform `g`, so there is no value to read by mistake
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IterationRecord {
    WithResidual { iteration: usize, x: f64, fx: f64, error: f64 },
    ResidualFree { iteration: usize, x: f64, error: f64 },
}

impl IterationRecord {
    /// 1-indexed iteration count.
    pub fn iteration(&self) -> usize {
        match self {
            IterationRecord::WithResidual { iteration, .. } => *iteration,
            IterationRecord::ResidualFree { iteration, .. } => *iteration,
        }
    }

    /// Iterate produced by this pass.
    pub fn x(&self) -> f64 {
        match self {
            IterationRecord::WithResidual { x, .. } => *x,
            IterationRecord::ResidualFree { x, .. } => *x,
        }
    }

    /// Residual `f(x)` at the iterate, `None` for residual-free methods.
    pub fn residual(&self) -> Option<f64> {
        match self {
            IterationRecord::WithResidual { fx, .. } => Some(*fx),
            IterationRecord::ResidualFree { .. }     => None,
        }
    }

    /// Method-specific error estimate (bracket half-width, successive-iterate
    /// difference, ...). Nonnegative; infinite on regula falsi's first pass.
    pub fn error(&self) -> f64 {
        match self {
            IterationRecord::WithResidual { error, .. } => *error,
            IterationRecord::ResidualFree { error, .. } => *error,
        }
    }
}

/// Final report returned by all root-finding algorithms.
///
/// - `root`        : best root estimate
/// - `error`       : final error estimate (method-specific semantics)
/// - `iterations`  : total iterations performed
/// - `evaluations` : total function/transform evaluations
/// - `termination` : why the solver stopped ([`Termination`])
/// - `trace`       : chronological [`IterationRecord`]s, one per pass
/// - `algorithm`   : algorithm name (e.g. `"bisection"`)
///
/// Constructed once at the end of a solve call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveReport {
    pub root:        f64,
    pub error:       f64,
    pub iterations:  usize,
    pub evaluations: usize,
    pub termination: Termination,
    pub trace:       Vec<IterationRecord>,
    pub algorithm:   &'static str,
}

impl SolveReport {
    /// `true` when the solver stopped on tolerance rather than the cap.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.termination == Termination::ToleranceReached
    }
}
