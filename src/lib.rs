//! Symbolic Automatic Differentiation
//!
//! A small Rust library that builds expression trees out of shared nodes,
//! evaluates them against the current values of their variables, and produces
//! exact derivative trees that stay valid when those values change.
//!
//! # Features
//! - **One handle type**: [`Expr`] is both the expression and the variable
//! - Operator overloading for `+ - * /` and negation, plus [`Expr::pow`]
//! - Construction-time ZERO/ONE shortcuts, so derivative trees stay small
//! - Built-in functions (ln, exp, sqrt, sin, cos, tan) through a registry
//! - Iterative walks: deep expressions never overflow the native stack
//! - **Builder pattern API** ([`Diff`]) for checked differentiation
//!
//! # Usage Example
//! ```
//! use sad::Expr;
//!
//! let mut x = Expr::variable(3.0);
//! let y = Expr::variable(5.0);
//!
//! let f = &x * &y + x.sin();
//! let df_dx = f.derivative(&x);
//!
//! assert_eq!(df_dx.evaluate(), 5.0 + 3.0_f64.cos());
//!
//! // Reassigning a variable is visible to every tree built from it.
//! x.assign_value(0.0);
//! assert_eq!(df_dx.evaluate(), 6.0);
//! ```

mod builder;
mod core;
mod diff;
pub mod functions;
mod helpers;


// Re-export key types for easier usage
pub use builder::Diff;
pub use crate::core::{
    CONSTANT_ID, DiffError, Expr, ExprTree, FLOAT_TOLERANCE, HALF, MINUS_ONE, ONE, PI,
    PI_SQUARED, SQRT_PI, VarId, ZERO, add, div, mul, neg, pow, sub, total_variables_created,
};
pub use helpers::{dense_gradient, gradient, gradient_values, hessian, jacobian};

/// Default maximum expression depth accepted by [`Diff`]
pub const DEFAULT_MAX_DEPTH: usize = 10_000;
/// Default maximum distinct node count accepted by [`Diff`]
pub const DEFAULT_MAX_NODES: usize = 1_000_000;
