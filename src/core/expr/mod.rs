//! Expression handles and the nodes they share.
//!
//! This module defines:
//! - `Expr` - the handle client code manipulates (also the variable type)
//! - `Node` - the immutable operator/leaf units handles point at
//! - `BinaryOp` / `UnaryOp` - the operator tags carried by nodes
//!
//! # Architecture
//!
//! ## Shared nodes
//! Every `Expr` owns an `Arc<Node>`. Cloning a handle aliases the node, so a
//! tree built once can be re-evaluated after any of its leaves is reassigned.
//! Operator nodes are never mutated after construction; leaves store their
//! value as an `AtomicU64` bit pattern so reassignment goes through `&self`.
//!
//! ## Variable identity
//! A leaf carries a [`VarId`]. `0` marks a constant; any other value names one
//! independent variable and is minted from a process-wide counter that never
//! reuses an identity. Derivative walks match leaves by identity value.
//!
//! ## Iterative walks
//! Evaluation, differentiation, analysis and drop all traverse the tree with an
//! explicit stack (see [`walk`]), so deep expressions never grow the native
//! call stack.

mod analysis;
mod constructors;
mod evaluate;
pub(crate) mod walk;

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock};

use crate::functions::FunctionDefinition;

/// Identity of an independent variable.
///
/// Identities are dense and start at 1; [`CONSTANT_ID`] marks constants.
pub type VarId = u64;

/// Identity carried by every constant leaf and reported by non-variable handles
pub const CONSTANT_ID: VarId = 0;

/// Placeholder node swapped into emptied operand slots while dropping
static DETACHED: LazyLock<Arc<Node>> =
    LazyLock::new(|| Arc::new(Node::Leaf(Leaf::new(0.0, CONSTANT_ID))));

// =============================================================================
// EXPR - the handle type
// =============================================================================

/// A shared, value-semantic reference to an expression node.
///
/// `Expr` is both the public expression type and the representation of an
/// independent variable. Cloning is cheap and aliases the same node; a clone
/// of a variable is the *same* variable (same identity), not a new one.
///
/// # Example
/// ```
/// use sad::Expr;
///
/// let mut x = Expr::variable(3.0);
/// let y = Expr::variable(5.0);
/// let f = &x * &y;
///
/// assert_eq!(f.evaluate(), 15.0);
/// assert_eq!(f.derivative(&x).evaluate(), 5.0);
///
/// x.assign_value(4.0);
/// assert_eq!(f.evaluate(), 20.0);
/// ```
#[derive(Clone)]
pub struct Expr {
    /// The node this handle points at
    pub(crate) node: Arc<Node>,
    /// Whether this handle denotes an independent variable
    pub(crate) variable: bool,
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expr")
            .field("identity", &self.identity())
            .field("tree", &format_args!("{}", self.tree()))
            .finish()
    }
}

// =============================================================================
// NODE - the shared, immutable units
// =============================================================================

/// Leaf node: a numeric value plus a variable identity.
pub(crate) struct Leaf {
    bits: AtomicU64,
    id: VarId,
}

impl Leaf {
    pub(crate) fn new(value: f64, id: VarId) -> Self {
        Self {
            bits: AtomicU64::new(value.to_bits()),
            id,
        }
    }

    #[inline]
    pub(crate) fn value(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }

    /// Overwrite the stored value. Every handle sharing this leaf observes it.
    #[inline]
    pub(crate) fn set_value(&self, value: f64) {
        self.bits.store(value.to_bits(), Ordering::Relaxed);
    }

    #[inline]
    pub(crate) const fn id(&self) -> VarId {
        self.id
    }

    #[inline]
    pub(crate) const fn is_variable(&self) -> bool {
        self.id != CONSTANT_ID
    }
}

impl fmt::Debug for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Leaf")
            .field("value", &self.value())
            .field("id", &self.id)
            .finish()
    }
}

/// Binary operators. Each has exactly one node shape: expression ∘ expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    /// Apply the operator to already-evaluated operands
    #[inline]
    pub(crate) fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Pow => left.powf(right),
        }
    }

    pub(crate) const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }
}

/// Unary operators: negation, or a function taken from the registry.
#[derive(Debug, Clone, Copy)]
pub(crate) enum UnaryOp {
    Neg,
    Func(&'static FunctionDefinition),
}

impl UnaryOp {
    #[inline]
    pub(crate) fn apply(self, operand: f64) -> f64 {
        match self {
            Self::Neg => -operand,
            Self::Func(def) => (def.eval)(operand),
        }
    }
}

/// An immutable expression node.
#[derive(Debug)]
pub(crate) enum Node {
    Leaf(Leaf),
    Binary(BinaryOp, [Expr; 2]),
    Unary(UnaryOp, Expr),
}

impl Node {
    /// Child handles in evaluation order (empty for leaves)
    #[inline]
    pub(crate) fn operands(&self) -> &[Expr] {
        match self {
            Self::Leaf(_) => &[],
            Self::Binary(_, operands) => operands,
            Self::Unary(_, operand) => std::slice::from_ref(operand),
        }
    }
}

// =============================================================================
// DROP IMPLEMENTATION - Iterative drop to prevent stack overflow
// =============================================================================

impl Drop for Node {
    fn drop(&mut self) {
        fn detach_children(node: &mut Node, queue: &mut Vec<Arc<Node>>) {
            match node {
                Node::Leaf(_) => {}
                Node::Binary(_, operands) => {
                    for operand in operands.iter_mut() {
                        queue.push(std::mem::replace(&mut operand.node, Arc::clone(&DETACHED)));
                    }
                }
                Node::Unary(_, operand) => {
                    queue.push(std::mem::replace(&mut operand.node, Arc::clone(&DETACHED)));
                }
            }
        }

        let mut work_queue = Vec::new();
        detach_children(self, &mut work_queue);

        while let Some(child) = work_queue.pop() {
            // Only the last owner tears a child down; shared children stay alive.
            if let Ok(mut child_node) = Arc::try_unwrap(child) {
                detach_children(&mut child_node, &mut work_queue);
            }
        }
    }
}
