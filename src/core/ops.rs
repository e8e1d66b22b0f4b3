//! Operator constructors and the operator-overloading surface.
//!
//! Every operator has a single node shape (expression ∘ expression). Bare
//! numbers are coerced through `From<f64>`, which hands out the singleton for
//! exact 0, 1, −1 and ½ and a fresh constant leaf otherwise.
//!
//! Construction-time rewrites return an existing handle instead of building a
//! node:
//!
//! | constructor | rewrite |
//! |---|---|
//! | `sub(a, b)` | `a` and `b` are the same node → ZERO; `a` is ZERO → `-b`; `b` is ZERO → `a` |
//! | `div(a, b)` | `a` is ZERO → ZERO; `b` is ONE → `a` |
//! | `pow(a, b)` | `b` is ZERO → ONE (also for `a` = 0); `a` is ZERO → ZERO; `b` is ONE → `a` |
//! | `neg(a)`    | `a` is ZERO → ZERO |
//!
//! `add` and `mul` never rewrite. All tests are reference identity against the
//! singletons, never value comparisons.

use std::ops::{Add, Div, Mul, Neg, Sub};

use super::constants::{ONE, ZERO, singleton_for};
use super::expr::{BinaryOp, Expr, UnaryOp};

// ===== Conversions =====

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        singleton_for(value).map_or_else(|| Self::constant(value), Self::clone)
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Self::from(f64::from(value))
    }
}

impl From<&Expr> for Expr {
    fn from(expr: &Expr) -> Self {
        expr.clone()
    }
}

// ===== Constructors =====

/// `left + right`
#[must_use]
pub fn add(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    Expr::binary(BinaryOp::Add, left.into(), right.into())
}

/// `left - right`
#[must_use]
pub fn sub(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    let (left, right) = (left.into(), right.into());
    if Expr::ptr_eq(&left, &right) {
        return ZERO.clone();
    }
    if left.is_zero() {
        return neg(right);
    }
    if right.is_zero() {
        return left;
    }
    Expr::binary(BinaryOp::Sub, left, right)
}

/// `left * right`
#[must_use]
pub fn mul(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    Expr::binary(BinaryOp::Mul, left.into(), right.into())
}

/// `numerator / denominator`
#[must_use]
pub fn div(numerator: impl Into<Expr>, denominator: impl Into<Expr>) -> Expr {
    let (numerator, denominator) = (numerator.into(), denominator.into());
    if numerator.is_zero() {
        return ZERO.clone();
    }
    if denominator.is_one() {
        return numerator;
    }
    Expr::binary(BinaryOp::Div, numerator, denominator)
}

/// `base ^ exponent`
///
/// A ZERO exponent yields ONE whatever the base, including a zero base: the
/// indeterminate `0^0` is defined as 1 here, matching `f64::powf`.
#[must_use]
pub fn pow(base: impl Into<Expr>, exponent: impl Into<Expr>) -> Expr {
    let (base, exponent) = (base.into(), exponent.into());
    if exponent.is_zero() {
        return ONE.clone();
    }
    if base.is_zero() {
        return ZERO.clone();
    }
    if exponent.is_one() {
        return base;
    }
    Expr::binary(BinaryOp::Pow, base, exponent)
}

/// `-operand`
#[must_use]
pub fn neg(operand: impl Into<Expr>) -> Expr {
    let operand = operand.into();
    if operand.is_zero() {
        return ZERO.clone();
    }
    Expr::unary(UnaryOp::Neg, operand)
}

// ===== Derivative-time helpers =====

/// Multiply, dropping ZERO and ONE factors
pub(crate) fn mul_opt(a: Expr, b: Expr) -> Expr {
    if a.is_zero() || b.is_zero() {
        ZERO.clone()
    } else if a.is_one() {
        b
    } else if b.is_one() {
        a
    } else {
        mul(a, b)
    }
}

/// Add, dropping ZERO terms
pub(crate) fn add_opt(a: Expr, b: Expr) -> Expr {
    if a.is_zero() {
        b
    } else if b.is_zero() {
        a
    } else {
        add(a, b)
    }
}

// ===== Macro for generating operator implementations =====

macro_rules! impl_binary_ops {
    ([$($lt:lifetime),*] $lhs:ty, $rhs:ty) => {
        impl<$($lt),*> Add<$rhs> for $lhs {
            type Output = Expr;
            fn add(self, rhs: $rhs) -> Expr {
                add(self, rhs)
            }
        }
        impl<$($lt),*> Sub<$rhs> for $lhs {
            type Output = Expr;
            fn sub(self, rhs: $rhs) -> Expr {
                sub(self, rhs)
            }
        }
        impl<$($lt),*> Mul<$rhs> for $lhs {
            type Output = Expr;
            fn mul(self, rhs: $rhs) -> Expr {
                mul(self, rhs)
            }
        }
        impl<$($lt),*> Div<$rhs> for $lhs {
            type Output = Expr;
            fn div(self, rhs: $rhs) -> Expr {
                div(self, rhs)
            }
        }
    };
}

impl_binary_ops!([] Expr, Expr);
impl_binary_ops!(['a] Expr, &'a Expr);
impl_binary_ops!(['a] &'a Expr, Expr);
impl_binary_ops!(['a, 'b] &'a Expr, &'b Expr);
impl_binary_ops!([] Expr, f64);
impl_binary_ops!(['a] &'a Expr, f64);
impl_binary_ops!([] f64, Expr);
impl_binary_ops!(['a] f64, &'a Expr);

impl Neg for Expr {
    type Output = Expr;
    fn neg(self) -> Expr {
        neg(self)
    }
}

impl Neg for &Expr {
    type Output = Expr;
    fn neg(self) -> Expr {
        neg(self)
    }
}

impl Expr {
    /// Raise to a power (since Rust `^` is XOR, not power)
    #[inline]
    #[must_use]
    pub fn pow(&self, exponent: impl Into<Self>) -> Self {
        pow(self, exponent)
    }
}
