//! Differentiation engine - applies calculus rules node by node
//!
//! # Design Note: statically-zero operands
//!
//! A derivative of a subtree that does not contain the variable always
//! collapses to the ZERO singleton (leaf rule), and so does every rule below
//! whose inputs are all ZERO. Each operator rule checks its operands'
//! derivatives against ZERO (and, through `mul_opt`, ONE) *before* combining
//! them, and returns the reduced form instead of building `x*0` or `0+y`
//! subtrees. This keeps derivative trees from exploding under repeated
//! differentiation.

use crate::core::constants::{ONE, ZERO};
use crate::core::expr::walk::fold;
use crate::core::expr::{BinaryOp, Leaf, Node, UnaryOp, VarId};
use crate::core::ops::{add_opt, mul_opt};
use crate::{Expr, add, div, mul, neg, pow, sub};

impl Expr {
    /// Differentiate with respect to the variable `wrt`.
    ///
    /// If `wrt` is not a variable handle the result is the ZERO singleton: the
    /// derivative with respect to a non-variable is defined as zero, not an
    /// error (see [`Diff::strict`](crate::Diff::strict) for a checked form).
    ///
    /// # Example
    /// ```
    /// use sad::Expr;
    ///
    /// let x = Expr::variable(3.0);
    /// let y = Expr::variable(5.0);
    /// let f = &x * &y;
    /// assert_eq!(f.derivative(&x).evaluate(), 5.0);
    /// assert_eq!(f.derivative(&y).evaluate(), 3.0);
    /// assert!(f.derivative(&Expr::constant(1.0)).is_zero());
    /// ```
    #[must_use]
    pub fn derivative(&self, wrt: &Self) -> Self {
        if !wrt.is_variable() {
            return ZERO.clone();
        }
        self.derivative_by_id(wrt.identity())
    }

    /// Differentiate `order` times with respect to `wrt`.
    ///
    /// Order 0 returns this handle unchanged.
    #[must_use]
    pub fn nth_derivative(&self, wrt: &Self, order: usize) -> Self {
        let mut result = self.clone();
        for _ in 0..order {
            if result.is_zero() {
                break;
            }
            result = result.derivative(wrt);
        }
        result
    }

    /// Differentiate with respect to a variable identity.
    ///
    /// The result is never a variable handle, even when a rule passes an
    /// operand through unchanged (`d(x*y)/dx` shares `y`'s node).
    pub(crate) fn derivative_by_id(&self, wrt: VarId) -> Self {
        fold(self, |expr, derivatives: &[Expr]| match &*expr.node {
            Node::Leaf(leaf) => leaf_rule(leaf, wrt),
            Node::Binary(op, [left, right]) => {
                binary_rule(*op, left, right, &derivatives[0], &derivatives[1])
            }
            Node::Unary(op, operand) => unary_rule(*op, operand, &derivatives[0]),
        })
        .into_expression()
    }
}

/// d(leaf)/d(wrt) is ONE for the matching variable, ZERO otherwise
fn leaf_rule(leaf: &Leaf, wrt: VarId) -> Expr {
    if leaf.is_variable() && leaf.id() == wrt {
        ONE.clone()
    } else {
        ZERO.clone()
    }
}

fn binary_rule(op: BinaryOp, left: &Expr, right: &Expr, d_left: &Expr, d_right: &Expr) -> Expr {
    if d_left.is_zero() && d_right.is_zero() {
        return ZERO.clone();
    }

    match op {
        // (L + R)' = L' + R'
        BinaryOp::Add => add_opt(d_left.clone(), d_right.clone()),

        // (L - R)' = L' - R'  (sub itself handles ZERO operands)
        BinaryOp::Sub => sub(d_left, d_right),

        // (L * R)' = L'R + LR'
        BinaryOp::Mul => add_opt(
            mul_opt(d_left.clone(), right.clone()),
            mul_opt(left.clone(), d_right.clone()),
        ),

        // (L / R)' = L'/R - L·R'/R²
        BinaryOp::Div => {
            if d_right.is_zero() {
                return div(d_left, right);
            }
            let cross = div(mul_opt(left.clone(), d_right.clone()), mul(right, right));
            if d_left.is_zero() {
                neg(cross)
            } else {
                sub(div(d_left, right), cross)
            }
        }

        // (L ^ R)' = L^(R-1) · (R·L' + L·ln(L)·R')
        BinaryOp::Pow => {
            let reduced = pow(left, sub(right, &*ONE));
            let base_term = || mul_opt(right.clone(), d_left.clone());
            let exponent_term = || mul_opt(mul(left, left.ln()), d_right.clone());

            let inner = if d_right.is_zero() {
                base_term()
            } else if d_left.is_zero() {
                exponent_term()
            } else {
                add(base_term(), exponent_term())
            };
            mul_opt(reduced, inner)
        }
    }
}

fn unary_rule(op: UnaryOp, operand: &Expr, d_operand: &Expr) -> Expr {
    if d_operand.is_zero() {
        return ZERO.clone();
    }
    match op {
        UnaryOp::Neg => neg(d_operand),
        // Chain rule: f(u)' = f'(u) · u'
        UnaryOp::Func(def) => mul_opt((def.derivative)(operand), d_operand.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_leaf_rule() {
        let x = Expr::variable(2.0);
        let y = Expr::variable(2.0);
        assert!(x.derivative(&x).is_one());
        assert!(x.derivative(&y).is_zero());
        assert!(Expr::constant(2.0).derivative(&x).is_zero());
    }

    #[test]
    fn test_non_variable_wrt_is_zero() {
        let x = Expr::variable(2.0);
        let f = &x * &x;
        assert!(f.derivative(&f).is_zero());
        assert!(f.derivative(&ZERO).is_zero());
    }

    #[test]
    fn test_alias_differentiates_like_its_variable() {
        let x = Expr::variable(2.0);
        let alias = x.clone();
        let f = &x * &x;
        assert_close(f.derivative(&alias).evaluate(), 4.0);
    }

    #[test]
    fn test_add_drops_zero_side() {
        let x = Expr::variable(1.0);
        let f = &x + 7.0;
        assert!(f.derivative(&x).is_one());
    }

    #[test]
    fn test_product_rule_returns_other_factor() {
        let x = Expr::variable(3.0);
        let y = Expr::variable(5.0);
        let f = &x * &y;
        assert!(Expr::ptr_eq(&f.derivative(&x), &y));
        assert!(Expr::ptr_eq(&f.derivative(&y), &x));
    }

    #[test]
    fn test_passed_through_operand_is_not_a_variable() {
        let x = Expr::variable(3.0);
        let mut y = Expr::variable(5.0);
        let f = &x * &y;

        let mut d = f.derivative(&x);
        assert!(Expr::ptr_eq(&d, &y));
        assert!(!d.is_variable());
        assert_eq!(d.identity(), 0);

        // Differentiating against a derivative result follows the non-variable policy.
        assert!((&f * &y).derivative(&d).is_zero());

        // Assigning to the derivative rebinds it; `y` keeps its value.
        d.assign_value(100.0);
        assert_eq!(y.evaluate(), 5.0);
        assert!(d.identity() != y.identity());

        // `y` still drives the shared node.
        let d2 = f.derivative(&x);
        y.assign_value(7.0);
        assert_eq!(d2.evaluate(), 7.0);
    }

    #[test]
    fn test_derivative_of_variable_is_not_a_variable() {
        let x = Expr::variable(1.0);
        let g = &x + 2.0;
        let y = Expr::variable(1.0);
        // d(g + y)/dy is ONE; d(x * y)/dy passes x through
        assert!(!(&g + &y).derivative(&y).is_variable());
        assert!(!(&x * &y).derivative(&y).is_variable());
        assert!(!x.nth_derivative(&x, 1).is_variable());
    }

    #[test]
    fn test_sub_rule() {
        let x = Expr::variable(1.0);
        let y = Expr::variable(1.0);
        let f = &x - &y;
        assert!(f.derivative(&x).is_one());
        assert_close(f.derivative(&y).evaluate(), -1.0);
    }

    #[test]
    fn test_quotient_rule_shapes() {
        let x = Expr::variable(2.0);
        let c = Expr::constant(8.0);

        // x / c: only the numerator depends on x
        assert_close((&x / &c).derivative(&x).evaluate(), 1.0 / 8.0);
        // c / x: only the denominator depends on x
        assert_close((&c / &x).derivative(&x).evaluate(), -8.0 / 4.0);
        // x / (x + 1): full rule
        let f = &x / (&x + 1.0);
        assert_close(f.derivative(&x).evaluate(), 1.0 / 9.0);
    }

    #[test]
    fn test_power_rule_shapes() {
        let x = Expr::variable(2.0);

        // variable base, constant exponent
        assert_close(x.pow(3.0).derivative(&x).evaluate(), 12.0);
        // constant base, variable exponent
        let two_pow_x = Expr::constant(2.0).pow(&x);
        assert_close(two_pow_x.derivative(&x).evaluate(), 4.0 * 2.0_f64.ln());
        // x^x: both depend on x
        let x_pow_x = x.pow(&x);
        assert_close(x_pow_x.derivative(&x).evaluate(), 4.0 * (1.0 + 2.0_f64.ln()));
    }

    #[test]
    fn test_power_with_negative_base_and_constant_exponent() {
        // No ln(L) term is built when the exponent is constant.
        let x = Expr::variable(-3.0);
        let d = x.pow(2.0).derivative(&x);
        assert_close(d.evaluate(), -6.0);
    }

    #[test]
    fn test_unary_rules() {
        let x = Expr::variable(0.5);
        assert_close((-&x).derivative(&x).evaluate(), -1.0);
        assert_close(x.ln().derivative(&x).evaluate(), 2.0);
        assert_close(x.sin().derivative(&x).evaluate(), 0.5_f64.cos());
        // chain rule through an inner expression
        let inner = &x * 3.0;
        assert_close(inner.exp().derivative(&x).evaluate(), 3.0 * 1.5_f64.exp());
        // constant argument collapses to ZERO
        assert!(Expr::constant(2.0).sqrt().derivative(&x).is_zero());
    }

    #[test]
    fn test_nth_derivative() {
        let x = Expr::variable(2.0);
        let cube = x.pow(3.0);
        assert!(Expr::ptr_eq(&cube.nth_derivative(&x, 0), &cube));
        assert_close(cube.nth_derivative(&x, 1).evaluate(), 12.0);
        assert_close(cube.nth_derivative(&x, 2).evaluate(), 12.0);
        assert_close(cube.nth_derivative(&x, 3).evaluate(), 6.0);
        assert_close(cube.nth_derivative(&x, 5).evaluate(), 0.0);
    }

    #[test]
    fn test_derivative_tracks_leaf_updates() {
        let mut x = Expr::variable(1.0);
        let d = (&x * &x).derivative(&x);
        assert_close(d.evaluate(), 2.0);
        x.assign_value(10.0);
        assert_close(d.evaluate(), 20.0);
    }

    #[test]
    fn test_deep_chain_derivative_does_not_overflow() {
        let x = Expr::variable(1.0);
        let mut deep = x.clone();
        for _ in 0..50_000 {
            deep = &deep + &x;
        }
        assert_close(deep.derivative(&x).evaluate(), 50_001.0);
    }
}
