//! Core types for automatic differentiation
//!
//! This module contains the fundamental types:
//! - `Expr` - the expression handle (and variable type), plus its nodes
//! - Singleton constants (ZERO, ONE, PI, ...)
//! - Operator constructors with construction-time rewrites
//! - The process-wide variable identity counter
//! - `DiffError` - Error types
//! - Display formatting (value, and structure via `tree()`)

pub(crate) mod constants;
mod display; // Display implementations for Expr
pub(crate) mod error;
pub(crate) mod expr;
pub(crate) mod identity;
pub(crate) mod ops;
pub(crate) mod traits;

// Public re-exports (for external API)
pub use constants::{HALF, MINUS_ONE, ONE, PI, PI_SQUARED, SQRT_PI, ZERO};
pub use display::ExprTree;
pub use error::DiffError;
pub use expr::{CONSTANT_ID, Expr, VarId};
pub use identity::total_variables_created;
pub use ops::{add, div, mul, neg, pow, sub};
pub use traits::FLOAT_TOLERANCE;
