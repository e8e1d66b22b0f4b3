use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::Expr;

/// Definition of a unary function: its evaluation and differentiation logic
pub struct FunctionDefinition {
    /// Canonical name of the function (e.g., "sin", "ln")
    pub name: &'static str,

    /// Numerical evaluation
    pub eval: fn(f64) -> f64,

    /// Symbolic derivative `f'(u)` with respect to the function's own argument.
    /// The engine multiplies it by `du` (chain rule).
    pub derivative: fn(&Expr) -> Expr,
}

impl fmt::Debug for FunctionDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionDefinition")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Static registry storing the built-in definitions by name
static REGISTRY: OnceLock<FxHashMap<&'static str, &'static FunctionDefinition>> = OnceLock::new();

fn init_registry() -> FxHashMap<&'static str, &'static FunctionDefinition> {
    crate::functions::definitions::all_definitions()
        .iter()
        .map(|def| (def.name, *def))
        .collect()
}

/// Central registry for looking up built-in function definitions
pub struct Registry;

impl Registry {
    /// Get a built-in definition by name - O(1) lookup
    #[must_use]
    pub fn get(name: &str) -> Option<&'static FunctionDefinition> {
        REGISTRY.get_or_init(init_registry).get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let ln = Registry::get("ln").expect("ln is built in");
        assert_eq!(ln.name, "ln");
        assert_eq!((ln.eval)(1.0), 0.0);
        assert!(Registry::get("besselj").is_none());
    }

    #[test]
    fn test_every_builtin_registered() {
        for name in ["ln", "exp", "sqrt", "sin", "cos", "tan"] {
            assert!(Registry::get(name).is_some(), "{name} missing");
        }
    }
}
