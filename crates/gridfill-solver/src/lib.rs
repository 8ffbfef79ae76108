//! Depth-first backtracking search for 9×9 sudoku.
//!
//! The solver treats a puzzle as a constraint satisfaction problem: each
//! search state is an immutable [`Board`](gridfill_core::Board), and expanding
//! a state fills one empty cell with each digit its row, column, and box still
//! allow. An explicit stack of boards drives the search; the first complete
//! board found is the solution.
//!
//! Two policies shape the search and can be combined freely:
//!
//! - [`CellSelection`]: which empty cell to fill next.
//! - [`SuccessorPolicy`]: whether to forward-check children before pushing
//!   them onto the stack.
//!
//! # Examples
//!
//! ```
//! use gridfill_core::Board;
//! use gridfill_solver::BacktrackSolver;
//!
//! let puzzle: Board = "
//!     ___ __8 9_2
//!     6_4 3__ ___
//!     ___ 59_ ___
//!     __5 7_3 __9
//!     7__ _4_ ___
//!     __9 ___ 3_5
//!     _8_ __4 ___
//!     _41 ___ _3_
//!     2__ 15_ ___
//! "
//! .parse()?;
//!
//! let solver = BacktrackSolver::default();
//! let solution = solver.solve(&puzzle)?.expect("puzzle is solvable");
//! assert!(solution.is_solved());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{backtrack::*, error::*};

mod backtrack;
mod error;
