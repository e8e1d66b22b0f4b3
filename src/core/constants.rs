//! Preallocated singleton constants.
//!
//! Each singleton is created once per process and shared by every consumer.
//! Besides being cheap return values, ZERO and ONE act as sentinels: the
//! operator constructors test *reference identity* with them (see
//! [`Expr::is_zero`]) to decide whether to skip building a node.

use std::f64::consts;
use std::sync::LazyLock;

use crate::Expr;

/// The additive identity; also the result of every statically-zero derivative
pub static ZERO: LazyLock<Expr> = LazyLock::new(|| Expr::constant(0.0));

/// The multiplicative identity; derivative of a variable with respect to itself
pub static ONE: LazyLock<Expr> = LazyLock::new(|| Expr::constant(1.0));

/// −1
pub static MINUS_ONE: LazyLock<Expr> = LazyLock::new(|| Expr::constant(-1.0));

/// ½
pub static HALF: LazyLock<Expr> = LazyLock::new(|| Expr::constant(0.5));

/// π
pub static PI: LazyLock<Expr> = LazyLock::new(|| Expr::constant(consts::PI));

/// π²
pub static PI_SQUARED: LazyLock<Expr> =
    LazyLock::new(|| Expr::constant(consts::PI * consts::PI));

/// √π
pub static SQRT_PI: LazyLock<Expr> = LazyLock::new(|| Expr::constant(consts::PI.sqrt()));

/// Singleton standing for an exact literal, if one exists.
///
/// Used when coercing bare numbers into handles so that literal `0.0` and
/// `1.0` take part in the same rewrites as the singletons themselves.
pub(crate) fn singleton_for(value: f64) -> Option<&'static Expr> {
    // Only +0.0: a literal -0.0 keeps its sign through division and products.
    if value.to_bits() == 0.0_f64.to_bits() {
        Some(&*ZERO)
    } else if value == 1.0 {
        Some(&*ONE)
    } else if value == -1.0 {
        Some(&*MINUS_ONE)
    } else if value == 0.5 {
        Some(&*HALF)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values() {
        assert_eq!(ZERO.evaluate(), 0.0);
        assert_eq!(ONE.evaluate(), 1.0);
        assert_eq!(MINUS_ONE.evaluate(), -1.0);
        assert_eq!(HALF.evaluate(), 0.5);
        assert_eq!(PI.evaluate(), consts::PI);
        assert_eq!(PI_SQUARED.evaluate(), consts::PI * consts::PI);
        assert_eq!(SQRT_PI.evaluate(), consts::PI.sqrt());
    }

    #[test]
    fn test_singletons_are_shared() {
        let a = ZERO.clone();
        let b = ZERO.clone();
        assert!(Expr::ptr_eq(&a, &b));
        assert!(!ZERO.is_variable());
    }

    #[test]
    fn test_singleton_for_literals() {
        assert!(singleton_for(0.0).is_some_and(Expr::is_zero));
        assert!(singleton_for(-0.0).is_none());
        assert!(singleton_for(1.0).is_some_and(Expr::is_one));
        assert!(singleton_for(-1.0).is_some_and(|e| Expr::ptr_eq(e, &MINUS_ONE)));
        assert!(singleton_for(0.5).is_some_and(|e| Expr::ptr_eq(e, &HALF)));
        assert!(singleton_for(2.0).is_none());
        assert!(singleton_for(f64::NAN).is_none());
    }
}
