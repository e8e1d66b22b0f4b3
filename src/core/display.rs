//! Display implementations for expressions.
//!
//! ## Value Display (`to_string()` / `{}`)
//! Formatting an `Expr` prints its *current value*, exactly as `f64` would:
//! - `x * y` with x = 3, y = 5 prints `15`
//! - format specs are honoured (`{:.3}` → `3.142` for PI)
//!
//! ## Structure Display (`tree()`)
//! [`Expr::tree`] returns a wrapper that renders the operator structure:
//! - binary nodes are fully parenthesised: `(x1 + 2)`
//! - negation and functions prefix their operand: `-x1`, `sin(x1)`
//! - variables print as `x<identity>`, constants by value
//!
//! Both renderings walk the tree with an explicit stack.

use std::fmt;

use crate::Expr;
use crate::core::expr::{BinaryOp, Node, UnaryOp};

// =============================================================================
// VALUE DISPLAY
// =============================================================================

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.evaluate(), f)
    }
}

// =============================================================================
// STRUCTURE DISPLAY
// =============================================================================

/// Borrowed view of an expression that formats its structure.
///
/// Created by [`Expr::tree`].
#[derive(Clone, Copy)]
pub struct ExprTree<'a>(&'a Expr);

impl Expr {
    /// Render the operator structure instead of the value.
    ///
    /// # Example
    /// ```
    /// use sad::Expr;
    ///
    /// let c = Expr::constant(2.0);
    /// let f = (&c + 1.5) * -&c;
    /// assert_eq!(f.tree().to_string(), "((2 + 1.5) * -2)");
    /// assert_eq!(f.to_string(), "-7");
    /// ```
    #[must_use]
    pub const fn tree(&self) -> ExprTree<'_> {
        ExprTree(self)
    }
}

/// Pending output while rendering
enum Piece<'a> {
    Node(&'a Expr),
    Separator(BinaryOp),
    Close,
}

impl fmt::Display for ExprTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Pieces are pushed in reverse so they pop in output order.
        let mut stack = vec![Piece::Node(self.0)];

        while let Some(piece) = stack.pop() {
            let expr = match piece {
                Piece::Separator(op) => {
                    write!(f, " {} ", op.symbol())?;
                    continue;
                }
                Piece::Close => {
                    f.write_str(")")?;
                    continue;
                }
                Piece::Node(expr) => expr,
            };

            match &*expr.node {
                Node::Leaf(leaf) => {
                    if leaf.is_variable() {
                        write!(f, "x{}", leaf.id())?;
                    } else {
                        write!(f, "{}", leaf.value())?;
                    }
                }
                Node::Binary(op, [left, right]) => {
                    f.write_str("(")?;
                    stack.push(Piece::Close);
                    stack.push(Piece::Node(right));
                    stack.push(Piece::Separator(*op));
                    stack.push(Piece::Node(left));
                }
                Node::Unary(UnaryOp::Neg, operand) => {
                    f.write_str("-")?;
                    stack.push(Piece::Node(operand));
                }
                Node::Unary(UnaryOp::Func(def), operand) => {
                    write!(f, "{}(", def.name)?;
                    stack.push(Piece::Close);
                    stack.push(Piece::Node(operand));
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ExprTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
