//! Solver error types.

use gridfill_core::ConflictError;

/// Errors reported by [`BacktrackSolver`](crate::BacktrackSolver).
///
/// An unsolvable puzzle is *not* an error: search that exhausts the fringe
/// returns `Ok(None)`. Errors cover malformed input and violated contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolverError {
    /// The puzzle's clues already violate a uniqueness constraint, so no
    /// completion can exist. Detected before search begins.
    #[display("invalid puzzle: {_0}")]
    InvalidPuzzle(ConflictError),

    /// Cell selection was requested on a board with no empty cell. The
    /// search driver checks completeness before expanding, so hitting this
    /// indicates a caller bug; it fails loudly instead of returning a
    /// meaningless coordinate.
    #[display("cell selection requested on a complete board")]
    NoEmptyCell,

    /// The configured exploration budget ran out before the search finished.
    #[display("explored {explored} states, exceeding the limit of {limit}")]
    LimitExceeded {
        /// The configured node budget.
        limit: usize,
        /// States explored when the budget ran out.
        explored: usize,
    },
}

impl From<ConflictError> for SolverError {
    fn from(err: ConflictError) -> Self {
        Self::InvalidPuzzle(err)
    }
}
