//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods
//! and maps each to the name reported in [`super::report::SolveReport`].

/// Root-finding algorithm variants.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Bisection,
    RegulaFalsi,
    Secant,
    Newton,
    FixedPoint,
    ModifiedSecant,
}

impl Algorithm {
    /// Algorithm names for the [`super::report::SolveReport::algorithm`] field.
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bisection      => "bisection",
            Algorithm::RegulaFalsi    => "regula_falsi",
            Algorithm::Secant         => "secant",
            Algorithm::Newton         => "newton",
            Algorithm::FixedPoint     => "fixed_point",
            Algorithm::ModifiedSecant => "modified_secant",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
