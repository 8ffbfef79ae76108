//! Board position (x, y) coordinates.

use std::fmt::{self, Display};

/// A cell coordinate on the 9×9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). Both components are validated at construction time.
///
/// # Examples
///
/// ```
/// use gridfill_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 7);
/// assert_eq!(pos.box_index(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the index (0-8) of the 3×3 box containing this position.
    ///
    /// Boxes are numbered left to right, top to bottom, so the grid partitions
    /// into nine non-overlapping tiles.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }

    /// Creates the position of cell `i` (0-8) within box `box_index` (0-8).
    ///
    /// Cells within a box are numbered in the same left-to-right,
    /// top-to-bottom order as boxes within the grid.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` or `i` is not in the range 0-8.
    #[must_use]
    pub const fn from_box(box_index: u8, i: u8) -> Self {
        assert!(box_index < 9 && i < 9);
        Self::new((box_index % 3) * 3 + i % 3, (box_index / 3) * 3 + i / 3)
    }

    /// Returns an iterator over all 81 positions in row-major scan order:
    /// rows 0..9, and within each row columns 0..9.
    ///
    /// This is the scan order used for "first empty cell" selection and for
    /// tie-breaking in "most constrained cell" selection.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..9).flat_map(|y| (0..9).map(move |x| Self::new(x, y)))
    }

    /// Returns the row-major cell index (0-80) of this position.
    #[must_use]
    pub const fn cell_index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
