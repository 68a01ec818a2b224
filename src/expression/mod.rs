//! Restricted expression compiler.
//!
//! Turns a textual formula over a variable named `x` into a callable
//! real-to-real function. The pipeline is tokenizer -> recursive-descent
//! parser -> AST; every name is resolved at parse time against a fixed
//! whitelist (the standard `f64` math functions and constants plus `abs`,
//! `min`, `max`), so evaluation is infallible and there is no dynamic code
//! execution surface.
//!
//! ```
//! use zof::expression::Formula;
//!
//! let f = Formula::parse("x**2 - 2").unwrap();
//! assert_eq!(f.eval(2.0), 2.0);
//! ```

pub mod errors;
pub(crate) mod expr;
pub(crate) mod parser;
pub(crate) mod tokenizer;

pub use errors::ExpressionError;

use expr::Expr;

/// A compiled formula over the variable `x`.
#[derive(Debug, Clone)]
pub struct Formula {
    expr: Expr,
}

impl Formula {
    /// Tokenizes and parses `src`, resolving all names against the
    /// whitelist.
    ///
    /// # Errors
    /// Any [`ExpressionError`]: malformed tokens, grammar violations,
    /// unknown names/functions, wrong arity, or trailing input.
    pub fn parse(src: &str) -> Result<Self, ExpressionError> {
        let tokens = tokenizer::tokenize(src)?;
        let expr = parser::parse(tokens)?;
        Ok(Self { expr })
    }

    /// Evaluates the formula at `x`. Total: domain violations surface as
    /// NaN or infinity, exactly as the underlying `f64` operations do.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.expr.eval(x)
    }
}
