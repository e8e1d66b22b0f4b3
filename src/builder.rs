//! Builder pattern API for checked differentiation
//!
//! Provides a fluent interface for configuring size limits and strict variable
//! checks on top of [`Expr::derivative`], which itself never fails.
//!
//! # Example
//! ```
//! use sad::{Diff, DiffError, Expr};
//!
//! let x = Expr::variable(2.0);
//! let f = x.pow(3.0);
//!
//! let derivative = Diff::new().max_depth(64).differentiate(&f, &x)?;
//! assert_eq!(derivative.evaluate(), 12.0);
//! # Ok::<(), DiffError>(())
//! ```

use tracing::{debug, warn};

use crate::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_NODES, DiffError, Expr};

/// Builder for differentiation operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diff {
    strict: bool,
    max_depth: Option<usize>,
    max_nodes: Option<usize>,
}

impl Default for Diff {
    fn default() -> Self {
        Self {
            strict: false,
            max_depth: Some(DEFAULT_MAX_DEPTH),
            max_nodes: Some(DEFAULT_MAX_NODES),
        }
    }
}

impl Diff {
    /// Create a new differentiation builder with default limits
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a non-variable `wrt` as [`DiffError::NotAVariable`] instead of
    /// returning ZERO
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set maximum expression depth
    #[must_use]
    pub const fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Set maximum distinct node count
    #[must_use]
    pub const fn max_nodes(mut self, nodes: usize) -> Self {
        self.max_nodes = Some(nodes);
        self
    }

    /// Disable both the depth and the node count checks
    #[must_use]
    pub const fn without_limits(mut self) -> Self {
        self.max_depth = None;
        self.max_nodes = None;
        self
    }

    /// Differentiate an expression with respect to a variable.
    ///
    /// Limits are checked on the input and on the produced derivative.
    ///
    /// # Errors
    /// - [`DiffError::NotAVariable`] in strict mode when `wrt` is not a variable
    /// - [`DiffError::MaxDepthExceeded`] / [`DiffError::MaxNodesExceeded`] when
    ///   either tree is over a configured limit
    pub fn differentiate(&self, expr: &Expr, wrt: &Expr) -> Result<Expr, DiffError> {
        if self.strict && !wrt.is_variable() {
            warn!("rejected differentiation with respect to a non-variable");
            return Err(DiffError::NotAVariable);
        }
        self.check_limits(expr)?;

        let derivative = expr.derivative(wrt);
        self.check_limits(&derivative)?;

        debug!(
            wrt = wrt.identity(),
            input_nodes = expr.node_count(),
            output_nodes = derivative.node_count(),
            "differentiated expression"
        );
        Ok(derivative)
    }

    /// Differentiate `order` times, checking limits after every step.
    ///
    /// # Errors
    /// Same as [`Diff::differentiate`], reported for the first failing step.
    pub fn nth(&self, expr: &Expr, wrt: &Expr, order: usize) -> Result<Expr, DiffError> {
        let mut result = expr.clone();
        for _ in 0..order {
            result = self.differentiate(&result, wrt)?;
        }
        Ok(result)
    }

    fn check_limits(&self, expr: &Expr) -> Result<(), DiffError> {
        if let Some(limit) = self.max_depth {
            let depth = expr.depth();
            if depth > limit {
                warn!(depth, limit, "expression exceeds maximum depth");
                return Err(DiffError::MaxDepthExceeded { depth, limit });
            }
        }
        if let Some(limit) = self.max_nodes {
            let count = expr.node_count();
            if count > limit {
                warn!(count, limit, "expression exceeds maximum node count");
                return Err(DiffError::MaxNodesExceeded { count, limit });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ZERO;

    #[test]
    fn test_diff_builder_basic() {
        let x = Expr::variable(3.0);
        let result = Diff::new().differentiate(&(&x * &x), &x).unwrap();
        assert_eq!(result.evaluate(), 6.0);
    }

    #[test]
    fn test_default_limits() {
        let diff = Diff::new();
        assert_eq!(diff.max_depth, Some(DEFAULT_MAX_DEPTH));
        assert_eq!(diff.max_nodes, Some(DEFAULT_MAX_NODES));
        assert!(!diff.strict);
    }

    #[test]
    fn test_non_variable_is_zero_unless_strict() {
        let x = Expr::variable(3.0);
        let c = Expr::constant(3.0);
        let f = &x * &c;

        let lenient = Diff::new().differentiate(&f, &c).unwrap();
        assert!(Expr::ptr_eq(&lenient, &ZERO));

        let strict = Diff::new().strict(true).differentiate(&f, &c);
        assert_eq!(strict.unwrap_err(), DiffError::NotAVariable);
    }

    #[test]
    fn test_max_depth_on_input() {
        let x = Expr::variable(1.0);
        let f = ((&x + 1.0) * 2.0) - 3.0;
        let err = Diff::new().max_depth(3).differentiate(&f, &x).unwrap_err();
        assert_eq!(err, DiffError::MaxDepthExceeded { depth: 4, limit: 3 });
        assert!(Diff::new().max_depth(4).differentiate(&f, &x).is_ok());
    }

    #[test]
    fn test_max_nodes_on_output() {
        let x = Expr::variable(2.0);
        let f = x.sin() * x.cos();
        // input: sin, cos, mul, x => 4 nodes; derivative is larger
        let result = Diff::new().max_nodes(4).differentiate(&f, &x);
        assert!(matches!(
            result,
            Err(DiffError::MaxNodesExceeded { limit: 4, .. })
        ));
    }

    #[test]
    fn test_limits_can_be_disabled() {
        let x = Expr::variable(1.0);
        let mut deep = x.clone();
        for _ in 0..20_000 {
            deep = &deep + &x;
        }
        assert!(Diff::new().differentiate(&deep, &x).is_err());
        let d = Diff::new()
            .without_limits()
            .differentiate(&deep, &x)
            .unwrap();
        assert_eq!(d.evaluate(), 20_001.0);
    }

    #[test]
    fn test_nth() {
        let x = Expr::variable(2.0);
        let f = x.pow(4.0);
        assert_eq!(Diff::new().nth(&f, &x, 2).unwrap().evaluate(), 48.0);
        assert!(Expr::ptr_eq(&Diff::new().nth(&f, &x, 0).unwrap(), &f));
        let err = Diff::new().max_nodes(8).nth(&f, &x, 3).unwrap_err();
        assert!(matches!(err, DiffError::MaxNodesExceeded { .. }));
    }
}
