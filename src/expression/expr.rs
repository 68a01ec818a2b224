//! Expression AST and the whitelisted math vocabulary.
//!
//! Function and constant names are resolved while parsing; the AST stores
//! plain `fn` pointers, so [`Expr::eval`] is total and allocation-free.

/// Parsed expression tree over the variable `x`.
#[derive(Debug, Clone)]
pub(crate) enum Expr {
    Num(f64),
    Var,
    Neg(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
    Call1(fn(f64) -> f64, Box<Expr>),
    Call2(fn(f64, f64) -> f64, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub(crate) fn eval(&self, x: f64) -> f64 {
        match self {
            Expr::Num(v)          => *v,
            Expr::Var             => x,
            Expr::Neg(e)          => -e.eval(x),
            Expr::Add(l, r)       => l.eval(x) + r.eval(x),
            Expr::Sub(l, r)       => l.eval(x) - r.eval(x),
            Expr::Mul(l, r)       => l.eval(x) * r.eval(x),
            Expr::Div(l, r)       => l.eval(x) / r.eval(x),
            Expr::Pow(l, r)       => l.eval(x).powf(r.eval(x)),
            Expr::Call1(f, a)     => f(a.eval(x)),
            Expr::Call2(f, a, b)  => f(a.eval(x), b.eval(x)),
        }
    }
}

/// One-argument whitelist: the real-valued `f64` functions plus `abs`.
pub(crate) fn unary_fn(name: &str) -> Option<fn(f64) -> f64> {
    Some(match name {
        "sin"     => f64::sin,
        "cos"     => f64::cos,
        "tan"     => f64::tan,
        "asin"    => f64::asin,
        "acos"    => f64::acos,
        "atan"    => f64::atan,
        "sinh"    => f64::sinh,
        "cosh"    => f64::cosh,
        "tanh"    => f64::tanh,
        "asinh"   => f64::asinh,
        "acosh"   => f64::acosh,
        "atanh"   => f64::atanh,
        "exp"     => f64::exp,
        "exp2"    => f64::exp2,
        "expm1"   => f64::exp_m1,
        "ln"      => f64::ln,
        "log"     => f64::ln,
        "log2"    => f64::log2,
        "log10"   => f64::log10,
        "log1p"   => f64::ln_1p,
        "sqrt"    => f64::sqrt,
        "cbrt"    => f64::cbrt,
        "floor"   => f64::floor,
        "ceil"    => f64::ceil,
        "round"   => f64::round,
        "trunc"   => f64::trunc,
        "abs"     => f64::abs,
        "fabs"    => f64::abs,
        "signum"  => f64::signum,
        "degrees" => f64::to_degrees,
        "radians" => f64::to_radians,
        _ => return None,
    })
}

/// Two-argument whitelist, `min`/`max` included. `log` with two arguments is
/// log of the first in the base of the second.
pub(crate) fn binary_fn(name: &str) -> Option<fn(f64, f64) -> f64> {
    Some(match name {
        "atan2"    => f64::atan2,
        "pow"      => f64::powf,
        "hypot"    => f64::hypot,
        "log"      => f64::log,
        "copysign" => f64::copysign,
        "min"      => f64::min,
        "max"      => f64::max,
        _ => return None,
    })
}

/// Named constants.
pub(crate) fn constant(name: &str) -> Option<f64> {
    Some(match name {
        "pi"  => std::f64::consts::PI,
        "e"   => std::f64::consts::E,
        "tau" => std::f64::consts::TAU,
        "inf" => f64::INFINITY,
        "nan" => f64::NAN,
        _ => return None,
    })
}

/// `true` if `name` exists in either function table (used to tell a wrong
/// arity apart from an unknown function).
pub(crate) fn known_function(name: &str) -> bool {
    unary_fn(name).is_some() || binary_fn(name).is_some()
}
