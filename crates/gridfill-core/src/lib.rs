//! Board state for 9×9 sudoku solving.
//!
//! This crate models a sudoku grid as an immutable value type and derives the
//! constraint information a backtracking search needs:
//!
//! - [`digit`]: type-safe digits 1-9
//! - [`digit_set`]: sets of digits, backed by a 9-bit mask
//! - [`position`]: (x, y) cell coordinates and the row-major scan order
//! - [`house`]: the 27 constraint groups (rows, columns, 3×3 boxes)
//! - [`board`]: the grid itself, candidate derivation, and clue validation
//!
//! A [`Board`] is never mutated in place. Filling a cell produces a new board
//! with [`Board::with_digit`], so search states derived from a common parent
//! never alias each other.
//!
//! # Examples
//!
//! ```
//! use gridfill_core::{Board, Digit, Position};
//!
//! let board: Board = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()?;
//!
//! let pos = Position::new(2, 0);
//! assert_eq!(board.get(pos), None);
//! assert!(board.candidates(pos).contains(Digit::D4));
//! # Ok::<(), gridfill_core::ParseBoardError>(())
//! ```

pub use self::{
    board::{Board, ConflictError, ParseBoardError},
    digit::Digit,
    digit_set::DigitSet,
    house::House,
    position::Position,
};

pub mod board;
pub mod digit;
pub mod digit_set;
pub mod house;
pub mod position;
