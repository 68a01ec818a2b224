//! Expression compilation error types.

use thiserror::Error;

/// Errors raised while tokenizing or parsing a formula.
#[derive(Debug, Error, PartialEq)]
pub enum ExpressionError {
    #[error("unexpected character '{ch}' at byte {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("malformed number literal '{lit}'")]
    MalformedNumber { lit: String },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unexpected token '{found}'")]
    UnexpectedToken { found: String },

    #[error("unknown name '{name}'")]
    UnknownName { name: String },

    #[error("unknown function '{name}'")]
    UnknownFunction { name: String },

    #[error("wrong number of arguments to '{name}': got {got}")]
    WrongArity { name: String, got: usize },

    #[error("trailing input after expression: '{found}'")]
    TrailingInput { found: String },
}
