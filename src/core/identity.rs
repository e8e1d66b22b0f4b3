//! Process-wide variable identity counter.
//!
//! Identities are dense, start at 1 and are never reused, even after every
//! handle to a variable is gone. Consumers that want a partial-derivative
//! slot per variable can size their storage with [`total_variables_created`].

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::trace;

use super::expr::VarId;

static VARIABLE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Mint the next variable identity
pub(crate) fn next_variable_id() -> VarId {
    let id = VARIABLE_COUNTER.fetch_add(1, Ordering::Relaxed) + 1;
    trace!(id, "minted variable identity");
    id
}

/// Number of variables ever created in this process (monotonic)
#[must_use]
pub fn total_variables_created() -> u64 {
    VARIABLE_COUNTER.load(Ordering::Relaxed)
}
