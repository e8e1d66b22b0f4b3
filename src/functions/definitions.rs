//! Built-in function definitions for the function registry
//!
//! Each `derivative` returns `f'(u)`; the engine applies the chain rule.

use super::registry::FunctionDefinition;
use crate::core::constants::{HALF, ONE};
use crate::{Expr, div, neg};

static ALL: [&FunctionDefinition; 6] = [&LN, &EXP, &SQRT, &SIN, &COS, &TAN];

/// Return all built-in definitions for populating the registry
pub(crate) fn all_definitions() -> &'static [&'static FunctionDefinition] {
    &ALL
}

/// Natural logarithm. d/du ln(u) = 1/u
pub static LN: FunctionDefinition = FunctionDefinition {
    name: "ln",
    eval: f64::ln,
    derivative: ln_derivative,
};

/// Exponential. d/du exp(u) = exp(u)
pub static EXP: FunctionDefinition = FunctionDefinition {
    name: "exp",
    eval: f64::exp,
    derivative: exp_derivative,
};

/// Square root. d/du √u = ½ / √u
pub static SQRT: FunctionDefinition = FunctionDefinition {
    name: "sqrt",
    eval: f64::sqrt,
    derivative: sqrt_derivative,
};

/// Sine. d/du sin(u) = cos(u)
pub static SIN: FunctionDefinition = FunctionDefinition {
    name: "sin",
    eval: f64::sin,
    derivative: sin_derivative,
};

/// Cosine. d/du cos(u) = -sin(u)
pub static COS: FunctionDefinition = FunctionDefinition {
    name: "cos",
    eval: f64::cos,
    derivative: cos_derivative,
};

/// Tangent. d/du tan(u) = 1 / cos²(u)
pub static TAN: FunctionDefinition = FunctionDefinition {
    name: "tan",
    eval: f64::tan,
    derivative: tan_derivative,
};

fn ln_derivative(u: &Expr) -> Expr {
    div(&*ONE, u)
}

fn exp_derivative(u: &Expr) -> Expr {
    Expr::apply(&EXP, u)
}

fn sqrt_derivative(u: &Expr) -> Expr {
    div(&*HALF, Expr::apply(&SQRT, u))
}

fn sin_derivative(u: &Expr) -> Expr {
    Expr::apply(&COS, u)
}

fn cos_derivative(u: &Expr) -> Expr {
    neg(Expr::apply(&SIN, u))
}

fn tan_derivative(u: &Expr) -> Expr {
    let cos_u = Expr::apply(&COS, u);
    div(&*ONE, &cos_u * &cos_u)
}
