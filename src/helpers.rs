//! Multi-variable differentiation helpers
//!
//! Provides gradient, hessian, and jacobian computation over variable handles,
//! plus a dense gradient indexed by variable identity.

use crate::{Expr, ZERO, total_variables_created};

// ===== Symbolic =====

/// Compute the gradient of an expression with respect to multiple variables
/// Returns a vector of partial derivatives [∂f/∂x₁, ∂f/∂x₂, ...]
///
/// # Example
/// ```
/// use sad::{Expr, gradient};
///
/// let x = Expr::variable(1.0);
/// let y = Expr::variable(2.0);
/// let f = x.pow(2.0) + y.pow(2.0);
/// let grad = gradient(&f, &[&x, &y]);
/// assert_eq!(grad[0].evaluate(), 2.0);
/// assert_eq!(grad[1].evaluate(), 4.0);
/// ```
#[must_use]
pub fn gradient(expr: &Expr, vars: &[&Expr]) -> Vec<Expr> {
    vars.iter().map(|var| expr.derivative(var)).collect()
}

/// Compute the Hessian matrix of an expression
/// Returns a 2D vector of second partial derivatives
/// H[i][j] = ∂²f/∂xᵢ∂xⱼ
#[must_use]
pub fn hessian(expr: &Expr, vars: &[&Expr]) -> Vec<Vec<Expr>> {
    gradient(expr, vars)
        .iter()
        .map(|partial| gradient(partial, vars))
        .collect()
}

/// Compute the Jacobian matrix of a vector of expressions
/// Returns a 2D vector where J[i][j] = ∂fᵢ/∂xⱼ
#[must_use]
pub fn jacobian(exprs: &[Expr], vars: &[&Expr]) -> Vec<Vec<Expr>> {
    exprs.iter().map(|expr| gradient(expr, vars)).collect()
}

// ===== Numeric =====

/// Gradient evaluated at the variables' current values
#[must_use]
pub fn gradient_values(expr: &Expr, vars: &[&Expr]) -> Vec<f64> {
    vars.iter()
        .map(|var| expr.derivative(var).evaluate())
        .collect()
}

/// Partial derivatives with respect to every variable ever created.
///
/// The result has [`total_variables_created`] entries; index `i` holds
/// ∂expr/∂(variable with identity `i + 1`). Variables the expression does not
/// reference get the ZERO singleton.
///
/// # Example
/// ```
/// use sad::{Expr, dense_gradient};
///
/// let x = Expr::variable(3.0);
/// let y = Expr::variable(5.0);
/// let grad = dense_gradient(&(&x * &y));
/// let slot = |v: &Expr| usize::try_from(v.identity() - 1).unwrap();
/// assert_eq!(grad[slot(&x)].evaluate(), 5.0);
/// assert_eq!(grad[slot(&y)].evaluate(), 3.0);
/// ```
#[must_use]
pub fn dense_gradient(expr: &Expr) -> Vec<Expr> {
    let total = total_variables_created();
    let mut grad: Vec<Expr> = (0..total).map(|_| ZERO.clone()).collect();
    for id in expr.variables() {
        // Identities are minted before the counter is read, so every id fits.
        if let Some(slot) = usize::try_from(id - 1).ok().and_then(|i| grad.get_mut(i)) {
            *slot = expr.derivative_by_id(id);
        }
    }
    grad
}
