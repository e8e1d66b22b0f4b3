//! Unary function registry
//!
//! Built-in functions (`ln`, `exp`, `sqrt`, `sin`, `cos`, `tan`) are described
//! by [`FunctionDefinition`] values. Applying one builds a unary node whose
//! derivative follows the chain rule `f'(u) · du`, collapsing to ZERO when
//! `du` is ZERO.
//!
//! Additional functions can be defined outside the crate as `static`
//! definitions and applied with [`Expr::apply`](crate::Expr::apply). Their
//! `derivative` must return the ZERO/ONE singletons whenever the result is
//! statically known to be zero or one.

use crate::Expr;

pub(crate) mod definitions;
mod registry;

pub use definitions::{COS, EXP, LN, SIN, SQRT, TAN};
pub use registry::{FunctionDefinition, Registry};

/// Natural logarithm
#[must_use]
pub fn ln(operand: impl Into<Expr>) -> Expr {
    Expr::apply(&LN, operand)
}

/// Exponential
#[must_use]
pub fn exp(operand: impl Into<Expr>) -> Expr {
    Expr::apply(&EXP, operand)
}

/// Square root
#[must_use]
pub fn sqrt(operand: impl Into<Expr>) -> Expr {
    Expr::apply(&SQRT, operand)
}

/// Sine
#[must_use]
pub fn sin(operand: impl Into<Expr>) -> Expr {
    Expr::apply(&SIN, operand)
}

/// Cosine
#[must_use]
pub fn cos(operand: impl Into<Expr>) -> Expr {
    Expr::apply(&COS, operand)
}

/// Tangent
#[must_use]
pub fn tan(operand: impl Into<Expr>) -> Expr {
    Expr::apply(&TAN, operand)
}

// ===== Macro for generating math function methods =====

macro_rules! impl_math_functions {
    ($($fn_name:ident => $def:ident),* $(,)?) => {
        impl Expr {
            $(
                #[doc = concat!("Apply `", stringify!($fn_name), "` to this expression")]
                #[must_use]
                pub fn $fn_name(&self) -> Expr {
                    Expr::apply(&$def, self)
                }
            )*
        }
    };
}

impl_math_functions!(
    ln => LN,
    exp => EXP,
    sqrt => SQRT,
    sin => SIN,
    cos => COS,
    tan => TAN,
);
