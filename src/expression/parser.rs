//! Recursive-descent formula parser.
//!
//! Grammar, loosest to tightest binding:
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := unary (('*' | '/') unary)*
//! unary  := ('-' | '+') unary | power
//! power  := atom ('^' unary)?          right-associative
//! atom   := Number
//!         | Ident
//!         | Ident '(' expr (',' expr)* ')'
//!         | '(' expr ')'
//! ```
//!
//! Unary minus binds looser than the power operator, so `-x^2` parses as
//! `-(x^2)` and `2^-3` is accepted.

use super::errors::ExpressionError;
use super::expr::{binary_fn, constant, known_function, unary_fn, Expr};
use super::tokenizer::Token;

pub(crate) fn parse(tokens: Vec<Token>) -> Result<Expr, ExpressionError> {
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.expr()?;
    if let Some(tok) = parser.peek() {
        return Err(ExpressionError::TrailingInput { found: tok.describe() });
    }
    Ok(expr)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Result<Token, ExpressionError> {
        let tok = self.tokens.get(self.pos).cloned().ok_or(ExpressionError::UnexpectedEnd)?;
        self.pos += 1;
        Ok(tok)
    }

    fn expect(&mut self, want: &Token) -> Result<(), ExpressionError> {
        let tok = self.next()?;
        if &tok == want {
            Ok(())
        } else {
            Err(ExpressionError::UnexpectedToken { found: tok.describe() })
        }
    }

    fn expr(&mut self) -> Result<Expr, ExpressionError> {
        let mut lhs = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.pos += 1;
                    let rhs = self.term()?;
                    lhs = Expr::Add(Box::new(lhs), Box::new(rhs));
                }
                Some(Token::Minus) => {
                    self.pos += 1;
                    let rhs = self.term()?;
                    lhs = Expr::Sub(Box::new(lhs), Box::new(rhs));
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn term(&mut self) -> Result<Expr, ExpressionError> {
        let mut lhs = self.unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.pos += 1;
                    let rhs = self.unary()?;
                    lhs = Expr::Mul(Box::new(lhs), Box::new(rhs));
                }
                Some(Token::Slash) => {
                    self.pos += 1;
                    let rhs = self.unary()?;
                    lhs = Expr::Div(Box::new(lhs), Box::new(rhs));
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn unary(&mut self) -> Result<Expr, ExpressionError> {
        match self.peek() {
            Some(Token::Minus) => {
                self.pos += 1;
                Ok(Expr::Neg(Box::new(self.unary()?)))
            }
            Some(Token::Plus) => {
                self.pos += 1;
                self.unary()
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<Expr, ExpressionError> {
        let base = self.atom()?;
        if self.peek() == Some(&Token::Caret) {
            self.pos += 1;
            // right-associative; the rhs re-enters at unary so negative
            // exponents parse
            let exponent = self.unary()?;
            return Ok(Expr::Pow(Box::new(base), Box::new(exponent)));
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<Expr, ExpressionError> {
        match self.next()? {
            Token::Number(v) => Ok(Expr::Num(v)),
            Token::LParen => {
                let inner = self.expr()?;
                self.expect(&Token::RParen)?;
                Ok(inner)
            }
            Token::Ident(name) => {
                if self.peek() == Some(&Token::LParen) {
                    self.pos += 1;
                    self.call(name)
                } else {
                    self.name(name)
                }
            }
            tok => Err(ExpressionError::UnexpectedToken { found: tok.describe() }),
        }
    }

    /// Function call; the opening parenthesis is already consumed.
    fn call(&mut self, name: String) -> Result<Expr, ExpressionError> {
        let mut args = vec![self.expr()?];
        while self.peek() == Some(&Token::Comma) {
            self.pos += 1;
            args.push(self.expr()?);
        }
        self.expect(&Token::RParen)?;

        match args.len() {
            1 => {
                if let Some(f) = unary_fn(&name) {
                    if let Some(arg) = args.pop() {
                        return Ok(Expr::Call1(f, Box::new(arg)));
                    }
                }
            }
            2 => {
                if let Some(f) = binary_fn(&name) {
                    if let (Some(b), Some(a)) = (args.pop(), args.pop()) {
                        return Ok(Expr::Call2(f, Box::new(a), Box::new(b)));
                    }
                }
            }
            _ => {}
        }

        if known_function(&name) {
            Err(ExpressionError::WrongArity { name, got: args.len() })
        } else {
            Err(ExpressionError::UnknownFunction { name })
        }
    }

    /// Bare identifier: the variable or a whitelisted constant.
    fn name(&mut self, name: String) -> Result<Expr, ExpressionError> {
        if name == "x" {
            return Ok(Expr::Var);
        }
        match constant(&name) {
            Some(v) => Ok(Expr::Num(v)),
            None => Err(ExpressionError::UnknownName { name }),
        }
    }
}
