use std::fmt;

/// Errors reported by the checked differentiation entry points ([`crate::Diff`]).
///
/// The plain [`Expr::derivative`](crate::Expr::derivative) never fails; these
/// errors only arise when a caller opts into limits or strict variable checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// Strict mode: the handle to differentiate against is not a variable
    NotAVariable,
    /// The input (or an intermediate derivative) is nested deeper than allowed
    MaxDepthExceeded { depth: usize, limit: usize },
    /// The input (or an intermediate derivative) has more distinct nodes than allowed
    MaxNodesExceeded { count: usize, limit: usize },
}

impl fmt::Display for DiffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAVariable => {
                write!(f, "Cannot differentiate with respect to a non-variable expression")
            }
            Self::MaxDepthExceeded { depth, limit } => {
                write!(
                    f,
                    "Expression nesting depth {depth} exceeds maximum limit {limit}"
                )
            }
            Self::MaxNodesExceeded { count, limit } => {
                write!(
                    f,
                    "Expression size of {count} nodes exceeds maximum node count limit {limit}"
                )
            }
        }
    }
}

impl std::error::Error for DiffError {}
