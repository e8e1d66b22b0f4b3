//! Structural queries over expression trees.

use rustc_hash::FxHashSet;

use super::walk::fold;
use super::{Expr, Node, VarId};

impl Expr {
    /// Number of distinct nodes reachable from this handle
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        fold(self, |_, _: &[()]| count += 1);
        count
    }

    /// Length of the longest root-to-leaf path (a lone leaf has depth 1)
    #[must_use]
    pub fn depth(&self) -> usize {
        fold(self, |_, children: &[usize]| {
            1 + children.iter().copied().max().unwrap_or(0)
        })
    }

    /// Sorted identities of every variable leaf in the tree
    #[must_use]
    pub fn variables(&self) -> Vec<VarId> {
        let mut found = FxHashSet::default();
        fold(self, |expr, _: &[()]| {
            if let Node::Leaf(leaf) = &*expr.node
                && leaf.is_variable()
            {
                found.insert(leaf.id());
            }
        });
        let mut ids: Vec<VarId> = found.into_iter().collect();
        ids.sort_unstable();
        ids
    }

    /// Whether the tree references the variable `wrt`.
    ///
    /// Always false when `wrt` is not a variable.
    #[must_use]
    pub fn contains_variable(&self, wrt: &Self) -> bool {
        wrt.is_variable()
            && fold(self, |expr, children: &[bool]| match &*expr.node {
                Node::Leaf(leaf) => leaf.id() == wrt.identity(),
                _ => children.iter().any(|&hit| hit),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_count() {
        let x = Expr::variable(1.0);
        assert_eq!(x.node_count(), 1);

        let x_plus_2 = &x + 2.0;
        assert_eq!(x_plus_2.node_count(), 3);

        // Shared subtrees are counted once.
        let doubled = &x_plus_2 * &x_plus_2;
        assert_eq!(doubled.node_count(), 4);
    }

    #[test]
    fn test_depth() {
        let x = Expr::variable(1.0);
        assert_eq!(x.depth(), 1);
        let nested = (&x * 3.0) + 1.0;
        assert_eq!(nested.depth(), 3);
    }

    #[test]
    fn test_variables() {
        let x = Expr::variable(1.0);
        let y = Expr::variable(1.0);
        let f = (&y * 2.0) + &x - &y;
        assert_eq!(f.variables(), vec![x.identity(), y.identity()]);
        assert!(Expr::constant(3.0).variables().is_empty());
    }

    #[test]
    fn test_contains_variable() {
        let x = Expr::variable(1.0);
        let y = Expr::variable(1.0);
        let f = &x * 2.0;
        assert!(f.contains_variable(&x));
        assert!(!f.contains_variable(&y));
        assert!(!f.contains_variable(&Expr::constant(1.0)));
    }
}
