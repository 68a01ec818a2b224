//! Formula tokenizer.
//!
//! Produces a flat token stream; `**` is folded into [`Token::Caret`] so the
//! parser sees a single power operator.

use super::errors::ExpressionError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
    Comma,
}

impl Token {
    /// Rendering used in error messages.
    pub(crate) fn describe(&self) -> String {
        match self {
            Token::Number(v) => v.to_string(),
            Token::Ident(s)  => s.clone(),
            Token::Plus      => "+".into(),
            Token::Minus     => "-".into(),
            Token::Star      => "*".into(),
            Token::Slash     => "/".into(),
            Token::Caret     => "^".into(),
            Token::LParen    => "(".into(),
            Token::RParen    => ")".into(),
            Token::Comma     => ",".into(),
        }
    }
}

pub(crate) fn tokenize(src: &str) -> Result<Vec<Token>, ExpressionError> {
    let chars: Vec<char> = src.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            ' ' | '\t' | '\n' | '\r' => i += 1,
            '+' => { tokens.push(Token::Plus); i += 1; }
            '-' => { tokens.push(Token::Minus); i += 1; }
            '*' => {
                if chars.get(i + 1) == Some(&'*') {
                    tokens.push(Token::Caret);
                    i += 2;
                } else {
                    tokens.push(Token::Star);
                    i += 1;
                }
            }
            '/' => { tokens.push(Token::Slash); i += 1; }
            '^' => { tokens.push(Token::Caret); i += 1; }
            '(' => { tokens.push(Token::LParen); i += 1; }
            ')' => { tokens.push(Token::RParen); i += 1; }
            ',' => { tokens.push(Token::Comma); i += 1; }
            '0'..='9' | '.' => {
                let (token, next) = scan_number(&chars, i)?;
                tokens.push(token);
                i = next;
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                tokens.push(Token::Ident(chars[start..i].iter().collect()));
            }
            _ => return Err(ExpressionError::UnexpectedChar { ch: c, pos: i }),
        }
    }

    Ok(tokens)
}

/// Scans a numeric literal starting at `start`, including an optional
/// exponent part. The exponent marker is consumed only when digits follow,
/// so `2e3` is one number while `2*e` leaves `e` as an identifier.
fn scan_number(chars: &[char], start: usize) -> Result<(Token, usize), ExpressionError> {
    let mut i = start;
    while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
        i += 1;
    }

    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        let mut j = i + 1;
        if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
            j += 1;
        }
        if j < chars.len() && chars[j].is_ascii_digit() {
            i = j;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
        }
    }

    let lit: String = chars[start..i].iter().collect();
    match lit.parse::<f64>() {
        Ok(v) => Ok((Token::Number(v), i)),
        Err(_) => Err(ExpressionError::MalformedNumber { lit }),
    }
}
