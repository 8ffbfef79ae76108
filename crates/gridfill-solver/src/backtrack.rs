//! The depth-first search driver and its policies.

use gridfill_core::{Board, Position};
use tinyvec::ArrayVec;

use crate::SolverError;

/// Policy for choosing which empty cell to fill next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellSelection {
    /// The first empty cell in row-major scan order.
    ///
    /// Correct but slow; kept as a reference policy for testing and
    /// comparison.
    FirstEmpty,
    /// The empty cell with the fewest remaining candidate digits (minimum
    /// remaining values). Committing early to tightly constrained cells
    /// prunes bad branches sooner.
    #[default]
    MostConstrained,
}

/// Policy for filtering successor boards before they join the fringe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuccessorPolicy {
    /// Keep every candidate child.
    Unchecked,
    /// Keep only children that pass the forward check: placing the digit
    /// must not strand another empty cell with zero candidates.
    #[default]
    ForwardChecked,
}

/// Statistics collected during a search.
///
/// # Examples
///
/// ```
/// use gridfill_core::Board;
/// use gridfill_solver::{BacktrackSolver, SearchStats};
///
/// let solver = BacktrackSolver::default();
/// let mut stats = SearchStats::new();
/// let _ = solver.solve_with_stats(&Board::EMPTY, &mut stats)?;
/// assert!(stats.explored() >= 1);
/// # Ok::<(), gridfill_solver::SolverError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    explored: usize,
}

impl SearchStats {
    /// Creates empty statistics.
    #[must_use]
    pub const fn new() -> Self {
        Self { explored: 0 }
    }

    /// Returns the number of states popped from the fringe, including the
    /// final state when one was found.
    #[must_use]
    pub const fn explored(&self) -> usize {
        self.explored
    }
}

/// Successor boards from one expansion: at most one child per digit.
type Successors = ArrayVec<[Board; 9]>;

/// A depth-first backtracking sudoku solver.
///
/// The solver keeps an explicit stack of boards (the fringe). Each iteration
/// pops the most recently pushed board, returns it if it is complete, and
/// otherwise pushes its successors. Boards are immutable values, so branches
/// never interfere with each other.
///
/// # Examples
///
/// ```
/// use gridfill_core::Board;
/// use gridfill_solver::{BacktrackSolver, CellSelection, SuccessorPolicy};
///
/// // The default policies: minimum remaining values plus forward checking.
/// let solver = BacktrackSolver::default();
///
/// // The naive reference configuration.
/// let naive = BacktrackSolver::new(CellSelection::FirstEmpty, SuccessorPolicy::Unchecked);
///
/// let solution = solver.solve(&Board::EMPTY)?.expect("empty grid is solvable");
/// assert!(solution.is_solved());
/// # Ok::<(), gridfill_solver::SolverError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktrackSolver {
    selection: CellSelection,
    successors: SuccessorPolicy,
    node_limit: Option<usize>,
}

impl BacktrackSolver {
    /// Creates a solver with the given policies and no exploration limit.
    #[must_use]
    pub const fn new(selection: CellSelection, successors: SuccessorPolicy) -> Self {
        Self {
            selection,
            successors,
            node_limit: None,
        }
    }

    /// Caps the number of states the search may explore.
    ///
    /// The fringe of a depth-first search can otherwise grow without bound on
    /// adversarial inputs. Exceeding the limit aborts the search with
    /// [`SolverError::LimitExceeded`].
    #[must_use]
    pub const fn with_node_limit(mut self, limit: usize) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Returns the configured cell-selection policy.
    #[must_use]
    pub const fn selection(&self) -> CellSelection {
        self.selection
    }

    /// Returns the configured successor policy.
    #[must_use]
    pub const fn successor_policy(&self) -> SuccessorPolicy {
        self.successors
    }

    /// Solves a puzzle, discarding search statistics.
    ///
    /// Returns `Ok(Some(board))` with the first complete board found, or
    /// `Ok(None)` when the puzzle has no solution.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidPuzzle`] if the clues already conflict,
    /// or [`SolverError::LimitExceeded`] if a node limit is configured and
    /// runs out.
    pub fn solve(&self, puzzle: &Board) -> Result<Option<Board>, SolverError> {
        let mut stats = SearchStats::new();
        self.solve_with_stats(puzzle, &mut stats)
    }

    /// Solves a puzzle, recording how many states were explored.
    ///
    /// The puzzle's clues are validated before search begins; search then
    /// proceeds depth-first until a complete board is found or the fringe
    /// empties. An exhausted fringe is the expected "no solution" outcome,
    /// reported as `Ok(None)` rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidPuzzle`] if the clues already conflict,
    /// or [`SolverError::LimitExceeded`] if a node limit is configured and
    /// runs out.
    pub fn solve_with_stats(
        &self,
        puzzle: &Board,
        stats: &mut SearchStats,
    ) -> Result<Option<Board>, SolverError> {
        puzzle.validate()?;

        let mut fringe = vec![*puzzle];
        while let Some(board) = fringe.pop() {
            stats.explored += 1;
            if let Some(limit) = self.node_limit
                && stats.explored > limit
            {
                return Err(SolverError::LimitExceeded {
                    limit,
                    explored: stats.explored,
                });
            }
            if board.is_complete() {
                log::debug!(
                    "solution found after exploring {} states (fringe held {})",
                    stats.explored,
                    fringe.len()
                );
                return Ok(Some(board));
            }
            fringe.extend(self.expand(&board)?);
        }
        log::debug!("fringe exhausted after {} states: no solution", stats.explored);
        Ok(None)
    }

    /// Selects the empty cell to fill according to the active policy.
    fn select_cell(&self, board: &Board) -> Result<Position, SolverError> {
        let selected = match self.selection {
            CellSelection::FirstEmpty => board.first_empty(),
            CellSelection::MostConstrained => board.most_constrained_empty(),
        };
        selected.ok_or(SolverError::NoEmptyCell)
    }

    /// Expands a board into its successor states.
    ///
    /// One child per candidate digit of the selected cell; a cell with no
    /// candidates yields no children, marking a dead end. Under
    /// [`SuccessorPolicy::ForwardChecked`], children that strand another
    /// empty cell are dropped as well.
    fn expand(&self, board: &Board) -> Result<Successors, SolverError> {
        let target = self.select_cell(board)?;
        let mut children = Successors::new();
        for digit in board.candidates(target) {
            let child = board.with_digit(target, digit);
            if self.successors == SuccessorPolicy::ForwardChecked && !child.is_locally_consistent()
            {
                continue;
            }
            children.push(child);
        }
        Ok(children)
    }
}
