//! Classical one-dimensional root finding with per-iteration traces.
//!
//! Six iterative methods are provided, each as a free function under
//! [`root_finding`]:
//!
//! - [`root_finding::bisection`]
//! - [`root_finding::regula_falsi`]
//! - [`root_finding::secant`]
//! - [`root_finding::newton`]
//! - [`root_finding::fixed_point`]
//! - [`root_finding::modified_secant`]
//!
//! Every solver records one [`root_finding::report::IterationRecord`] per
//! pass and returns a [`root_finding::report::SolveReport`] with the final
//! estimate, its error, the iteration count, and the full trace.
//!
//! The [`expression`] module compiles a textual formula over `x` into a
//! callable via a whitelisted parser, and [`render`] formats a report as a
//! plain-text iteration table.
//!
//! ```
//! use zof::root_finding::bisection::bisection;
//! use zof::root_finding::config::SolveCfg;
//!
//! let report = bisection(|x: f64| x * x - 2.0, 0.0, 2.0, SolveCfg::new()).unwrap();
//! assert!((report.root - 2.0_f64.sqrt()).abs() < 1e-5);
//! ```

pub mod expression;
pub mod render;
pub mod root_finding;
