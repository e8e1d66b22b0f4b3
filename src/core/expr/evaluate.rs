//! Numerical evaluation of expression trees.

use rustc_hash::FxHashMap;

use super::walk::fold;
use super::{Expr, Leaf, Node, VarId};

impl Expr {
    /// Evaluate the expression against the current leaf values.
    ///
    /// Nothing is cached between calls: evaluating again after reassigning a
    /// leaf always reflects the new value. Domain problems (division by zero,
    /// `ln` of a negative number) propagate as IEEE infinities and NaNs.
    #[must_use]
    pub fn evaluate(&self) -> f64 {
        evaluate_with(self, None)
    }

    /// Evaluate with per-variable overrides.
    ///
    /// Variables whose identity appears in `overrides` take that value for
    /// this evaluation only; stored leaf values are left untouched.
    ///
    /// # Example
    /// ```
    /// use rustc_hash::FxHashMap;
    /// use sad::Expr;
    ///
    /// let x = Expr::variable(1.0);
    /// let f = &x * &x;
    ///
    /// let mut at = FxHashMap::default();
    /// at.insert(x.identity(), 3.0);
    /// assert_eq!(f.evaluate_at(&at), 9.0);
    /// assert_eq!(f.evaluate(), 1.0);
    /// ```
    #[must_use]
    pub fn evaluate_at(&self, overrides: &FxHashMap<VarId, f64>) -> f64 {
        evaluate_with(self, Some(overrides))
    }
}

fn leaf_value(leaf: &Leaf, overrides: Option<&FxHashMap<VarId, f64>>) -> f64 {
    overrides
        .filter(|_| leaf.is_variable())
        .and_then(|values| values.get(&leaf.id()).copied())
        .unwrap_or_else(|| leaf.value())
}

fn evaluate_with(root: &Expr, overrides: Option<&FxHashMap<VarId, f64>>) -> f64 {
    fold(root, |expr, args: &[f64]| match &*expr.node {
        Node::Leaf(leaf) => leaf_value(leaf, overrides),
        Node::Binary(op, _) => op.apply(args[0], args[1]),
        Node::Unary(op, _) => op.apply(args[0]),
    })
}
