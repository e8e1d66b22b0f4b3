//! Handle constructors, assignment and identity queries.

use std::sync::Arc;

use super::{BinaryOp, CONSTANT_ID, Expr, Leaf, Node, UnaryOp, VarId};
use crate::core::constants::{ONE, ZERO};
use crate::core::identity;
use crate::core::traits::approx_eq;
use crate::functions::FunctionDefinition;

impl Expr {
    /// Create a fresh leaf holding `value`.
    ///
    /// With `as_variable` the leaf is minted the next variable identity;
    /// otherwise it is a constant with identity [`CONSTANT_ID`].
    #[must_use]
    pub fn new(value: f64, as_variable: bool) -> Self {
        if as_variable {
            Self::variable(value)
        } else {
            Self::constant(value)
        }
    }

    /// Create a new independent variable with a fresh identity
    #[must_use]
    pub fn variable(value: f64) -> Self {
        let id = identity::next_variable_id();
        Self {
            node: Arc::new(Node::Leaf(Leaf::new(value, id))),
            variable: true,
        }
    }

    /// Create a new constant leaf (never a variable, identity 0)
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Self::from_node(Node::Leaf(Leaf::new(value, CONSTANT_ID)))
    }

    /// Wrap a freshly built node. The result is never a variable.
    pub(crate) fn from_node(node: Node) -> Self {
        Self {
            node: Arc::new(node),
            variable: false,
        }
    }

    /// The same node viewed as an expression rather than a variable
    pub(crate) fn into_expression(mut self) -> Self {
        self.variable = false;
        self
    }

    pub(crate) fn binary(op: BinaryOp, left: Self, right: Self) -> Self {
        Self::from_node(Node::Binary(op, [left, right]))
    }

    pub(crate) fn unary(op: UnaryOp, operand: Self) -> Self {
        Self::from_node(Node::Unary(op, operand))
    }

    /// Apply a registered (or user-defined) unary function to `operand`
    ///
    /// # Example
    /// ```
    /// use sad::{Expr, functions::LN};
    ///
    /// let x = Expr::variable(1.0);
    /// assert_eq!(Expr::apply(&LN, &x).evaluate(), 0.0);
    /// ```
    #[must_use]
    pub fn apply(def: &'static FunctionDefinition, operand: impl Into<Self>) -> Self {
        Self::unary(UnaryOp::Func(def), operand.into())
    }

    // -------------------------------------------------------------------------
    // Identity queries
    // -------------------------------------------------------------------------

    /// Whether this handle denotes an independent variable
    #[inline]
    #[must_use]
    pub const fn is_variable(&self) -> bool {
        self.variable
    }

    /// The variable identity, or [`CONSTANT_ID`] for any non-variable handle
    #[must_use]
    pub fn identity(&self) -> VarId {
        match (&*self.node, self.variable) {
            (Node::Leaf(leaf), true) => leaf.id(),
            _ => CONSTANT_ID,
        }
    }

    /// Number of variables ever created in this process
    #[inline]
    #[must_use]
    pub fn total_variables_created() -> u64 {
        identity::total_variables_created()
    }

    /// The stored value if this handle points directly at a leaf
    #[must_use]
    pub fn leaf_value(&self) -> Option<f64> {
        match &*self.node {
            Node::Leaf(leaf) => Some(leaf.value()),
            _ => None,
        }
    }

    // -------------------------------------------------------------------------
    // Assignment
    // -------------------------------------------------------------------------

    /// Assign a number to this handle.
    ///
    /// A variable keeps its identity and its leaf is updated in place, so every
    /// alias and every expression built from it sees the new value on the next
    /// evaluation. Any other handle is rebound to a brand-new variable.
    pub fn assign_value(&mut self, value: f64) {
        if self.variable
            && let Node::Leaf(leaf) = &*self.node
        {
            leaf.set_value(value);
            return;
        }
        *self = Self::variable(value);
    }

    /// Rebind this handle to `other`'s node.
    ///
    /// The previous node is released if nothing else references it. If `other`
    /// is a variable this handle becomes an alias sharing its identity.
    pub fn assign(&mut self, other: &Self) {
        self.clone_from(other);
    }

    // -------------------------------------------------------------------------
    // Comparison
    // -------------------------------------------------------------------------

    /// Reference identity: both handles point at the same node.
    ///
    /// This is the comparison used by construction-time rewrites.
    #[inline]
    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.node, &b.node)
    }

    /// Numeric comparison of the current values (within `FLOAT_TOLERANCE`).
    ///
    /// Evaluates both sides. Two different trees may compare equal now and
    /// differ after a leaf is reassigned.
    #[must_use]
    pub fn value_eq(a: &Self, b: &Self) -> bool {
        approx_eq(a.evaluate(), b.evaluate())
    }

    /// Whether this handle is the ZERO singleton (not merely a zero value)
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        Self::ptr_eq(self, &ZERO)
    }

    /// Whether this handle is the ONE singleton (not merely a value of one)
    #[inline]
    #[must_use]
    pub fn is_one(&self) -> bool {
        Self::ptr_eq(self, &ONE)
    }
}
