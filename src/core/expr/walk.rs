//! Iterative post-order traversal shared by every tree walk.
//!
//! Each distinct node is visited exactly once per walk: results are keyed by
//! node address, so a subtree referenced from several places (common in
//! derivative trees) is not recomputed. Nothing is kept between walks.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::{Expr, Node};

/// Fold the tree rooted at `root` bottom-up.
///
/// `visit` receives each distinct node's handle together with the results of
/// its operands, in operand order, and returns that node's result.
///
/// # Panics
/// Panics only if internal invariants are violated (never in normal use).
pub(crate) fn fold<'e, T, F>(root: &'e Expr, mut visit: F) -> T
where
    T: Clone,
    F: FnMut(&'e Expr, &[T]) -> T,
{
    let mut finished: FxHashMap<*const Node, T> = FxHashMap::default();
    let mut results: Vec<T> = Vec::new();
    let mut pending: Vec<(&'e Expr, bool)> = vec![(root, false)];

    while let Some((expr, expanded)) = pending.pop() {
        let key = Arc::as_ptr(&expr.node);

        if !expanded {
            if let Some(done) = finished.get(&key) {
                results.push(done.clone());
                continue;
            }
            pending.push((expr, true));
            // Reverse so the leftmost operand is finished first.
            pending.extend(expr.node.operands().iter().rev().map(|op| (op, false)));
            continue;
        }

        let split = results.len() - expr.node.operands().len();
        let value = visit(expr, &results[split..]);
        results.truncate(split);
        finished.insert(key, value.clone());
        results.push(value);
    }

    results
        .pop()
        .expect("post-order walk always yields a result for the root")
}
