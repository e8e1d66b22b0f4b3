//! Symbolic differentiation
//!
//! The engine builds a new expression tree for ∂expr/∂variable through the same
//! operator constructors client code uses, so every construction-time rewrite
//! applies to derivative trees as well.

mod engine;
