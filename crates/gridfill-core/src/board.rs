//! The 9×9 board value type and its constraint queries.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{digit::Digit, digit_set::DigitSet, house::House, position::Position};

/// Error parsing a board from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// The text contains a character that is not a digit, an empty-cell
    /// marker, or whitespace.
    #[display("invalid character {c:?} in grid text")]
    InvalidCharacter {
        /// The offending character.
        c: char,
    },
    /// The text does not describe exactly 81 cells.
    #[display("expected 81 cells, found {found}")]
    WrongCellCount {
        /// Number of cells found in the text.
        found: usize,
    },
}

/// Error describing a duplicated digit within a house.
///
/// Returned by [`Board::validate`] when the same digit appears twice in a
/// row, column, or box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("digit {digit} appears more than once in {house}")]
pub struct ConflictError {
    /// The duplicated digit.
    pub digit: Digit,
    /// The house containing the duplicate.
    pub house: House,
}

/// A 9×9 grid of optional digits, stored row-major.
///
/// A board is a value type: it is `Copy`, and no operation mutates a board
/// in place. Derived boards are produced by [`with_digit`], which fills one
/// previously empty cell in a fresh copy, so a parent search state is never
/// observed to change.
///
/// Candidate information ([`candidates`]) is derived on every call from the
/// current cell contents; it is never cached.
///
/// [`with_digit`]: Board::with_digit
/// [`candidates`]: Board::candidates
///
/// # Examples
///
/// ```
/// use gridfill_core::{Board, Digit, Position};
///
/// let parent = Board::EMPTY;
/// let child = parent.with_digit(Position::new(0, 0), Digit::D5);
///
/// // The parent is untouched
/// assert_eq!(parent.get(Position::new(0, 0)), None);
/// assert_eq!(child.get(Position::new(0, 0)), Some(Digit::D5));
///
/// // The placement constrains the rest of the row, column, and box
/// assert!(!child.candidates(Position::new(8, 0)).contains(Digit::D5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Digit>; 81],
}

impl Board {
    /// The board with all 81 cells empty.
    pub const EMPTY: Self = Self { cells: [None; 81] };

    /// Returns the digit at `pos`, or `None` for an empty cell.
    #[must_use]
    pub const fn get(self, pos: Position) -> Option<Digit> {
        self.cells[pos.cell_index()]
    }

    /// Returns a copy of this board with `digit` placed at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if the cell at `pos` is already filled. Derived boards fill
    /// exactly one previously empty cell; overwriting is never meaningful
    /// during search.
    #[must_use]
    pub fn with_digit(self, pos: Position, digit: Digit) -> Self {
        assert!(
            self.get(pos).is_none(),
            "cell {pos} is already filled with {:?}",
            self.get(pos)
        );
        let mut child = self;
        child.cells[pos.cell_index()] = Some(digit);
        child
    }

    /// Returns `true` if no cell is empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the first empty cell in row-major scan order, or `None` when
    /// the board is complete.
    ///
    /// This is the baseline cell-selection policy: correct, but it ignores
    /// how constrained each cell is.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        Position::all().find(|&pos| self.get(pos).is_none())
    }

    /// Returns the empty cell with the fewest candidate digits, or `None`
    /// when the board is complete.
    ///
    /// A cell with exactly one candidate wins immediately. Other ties break
    /// by scan order: a later cell replaces the current best only when its
    /// candidate set is strictly smaller. A cell with zero candidates also
    /// wins immediately; expanding it yields no successors, which lets the
    /// search driver abandon the dead end without extra work.
    #[must_use]
    pub fn most_constrained_empty(&self) -> Option<Position> {
        let mut best: Option<(Position, usize)> = None;
        for pos in Position::all() {
            if self.get(pos).is_some() {
                continue;
            }
            let count = self.candidates(pos).len();
            if count <= 1 {
                return Some(pos);
            }
            if best.is_none_or(|(_, min)| count < min) {
                best = Some((pos, count));
            }
        }
        best.map(|(pos, _)| pos)
    }

    /// Returns the digits that can be placed at `pos` without duplicating a
    /// digit already present in its row, column, or box.
    ///
    /// Empty cells in those houses contribute nothing to the exclusion; only
    /// filled cells constrain. The set is recomputed from the board on every
    /// call.
    #[must_use]
    pub fn candidates(&self, pos: Position) -> DigitSet {
        let mut candidates = DigitSet::FULL;
        for house in House::containing(pos) {
            for peer in house.positions() {
                if let Some(digit) = self.get(peer) {
                    candidates.remove(digit);
                }
            }
        }
        candidates
    }

    /// Forward check: returns `true` if every empty cell has at least one
    /// candidate digit.
    ///
    /// A complete board trivially satisfies this. A `false` result means the
    /// board cannot be extended to a solution, no matter which cell is filled
    /// next.
    #[must_use]
    pub fn is_locally_consistent(&self) -> bool {
        Position::all()
            .filter(|&pos| self.get(pos).is_none())
            .all(|pos| !self.candidates(pos).is_empty())
    }

    /// Checks that no digit appears twice in any row, column, or box.
    ///
    /// Intended for validating externally supplied puzzles before search
    /// begins; boards derived through [`Board::with_digit`] with candidate
    /// digits never introduce conflicts.
    ///
    /// # Errors
    ///
    /// Returns a [`ConflictError`] naming the duplicated digit and the house
    /// containing it.
    pub fn validate(&self) -> Result<(), ConflictError> {
        for house in House::ALL {
            let mut seen = DigitSet::new();
            for pos in house.positions() {
                if let Some(digit) = self.get(pos) {
                    if seen.contains(digit) {
                        return Err(ConflictError { digit, house });
                    }
                    seen.insert(digit);
                }
            }
        }
        Ok(())
    }

    /// Returns `true` if the board is complete and conflict-free, i.e. every
    /// house holds each digit exactly once.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_complete() && self.validate().is_ok()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses a board from text: digits 1-9 for clues, `.`, `_`, or `0` for
    /// empty cells. Whitespace is ignored. Exactly 81 cells are required.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; 81];
        let mut count = 0;
        for c in s.chars() {
            if c.is_whitespace() {
                continue;
            }
            let cell = match c {
                '.' | '_' | '0' => None,
                '1'..='9' => u8::try_from(u32::from(c) - u32::from('0'))
                    .ok()
                    .and_then(Digit::from_value),
                _ => return Err(ParseBoardError::InvalidCharacter { c }),
            };
            if count >= 81 {
                // Keep counting so the error reports the full size.
                count += 1;
                continue;
            }
            cells[count] = cell;
            count += 1;
        }
        if count != 81 {
            return Err(ParseBoardError::WrongCellCount { found: count });
        }
        Ok(Self { cells })
    }
}

impl Display for Board {
    /// Renders nine rows of nine cells, `_` for empties, with a space after
    /// every third column. The output parses back via [`FromStr`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            for x in 0..9 {
                if x > 0 && x % 3 == 0 {
                    write!(f, " ")?;
                }
                match self.get(Position::new(x, y)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, "_")?,
                }
            }
            if y < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const PARTIAL: &str = "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_
        8__ _6_ __3
        4__ 8_3 __1
        7__ _2_ __6
        _6_ ___ 28_
        ___ 419 __5
        ___ _8_ _79
    ";

    const SOLVED: &str = "
        534 678 912
        672 195 348
        198 342 567
        859 761 423
        426 853 791
        713 924 856
        961 537 284
        287 419 635
        345 286 179
    ";

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_accepts_all_empty_markers() {
        let dots: Board = ".".repeat(81).parse().unwrap();
        let scores: Board = "_".repeat(81).parse().unwrap();
        let zeros: Board = "0".repeat(81).parse().unwrap();
        assert_eq!(dots, Board::EMPTY);
        assert_eq!(scores, Board::EMPTY);
        assert_eq!(zeros, Board::EMPTY);
    }

    #[test]
    fn test_parse_rejects_bad_character() {
        let mut text = ".".repeat(80);
        text.push('x');
        let err = text.parse::<Board>().unwrap_err();
        assert_eq!(err, ParseBoardError::InvalidCharacter { c: 'x' });
    }

    #[test]
    fn test_parse_rejects_wrong_cell_count() {
        let err = ".".repeat(80).parse::<Board>().unwrap_err();
        assert_eq!(err, ParseBoardError::WrongCellCount { found: 80 });

        let err = ".".repeat(82).parse::<Board>().unwrap_err();
        assert_eq!(err, ParseBoardError::WrongCellCount { found: 82 });
    }

    #[test]
    fn test_display_round_trips() {
        let original = board(PARTIAL);
        let reparsed: Board = original.to_string().parse().unwrap();
        assert_eq!(original, reparsed);
    }

    #[test]
    fn test_get_reads_row_major() {
        let b = board(PARTIAL);
        assert_eq!(b.get(Position::new(0, 0)), Some(Digit::D5));
        assert_eq!(b.get(Position::new(1, 0)), Some(Digit::D3));
        assert_eq!(b.get(Position::new(2, 0)), None);
        assert_eq!(b.get(Position::new(0, 1)), Some(Digit::D6));
        assert_eq!(b.get(Position::new(8, 8)), Some(Digit::D9));
    }

    #[test]
    fn test_with_digit_leaves_parent_untouched() {
        let parent = board(PARTIAL);
        let pos = Position::new(2, 0);
        let child = parent.with_digit(pos, Digit::D4);

        assert_eq!(parent.get(pos), None);
        assert_eq!(child.get(pos), Some(Digit::D4));

        // Every other cell is identical
        for other in Position::all().filter(|&p| p != pos) {
            assert_eq!(parent.get(other), child.get(other));
        }
    }

    #[test]
    #[should_panic(expected = "already filled")]
    fn test_with_digit_rejects_filled_cell() {
        let b = board(PARTIAL);
        let _ = b.with_digit(Position::new(0, 0), Digit::D1);
    }

    #[test]
    fn test_is_complete() {
        assert!(!Board::EMPTY.is_complete());
        assert!(!board(PARTIAL).is_complete());
        assert!(board(SOLVED).is_complete());
    }

    #[test]
    fn test_first_empty_scan_order() {
        assert_eq!(Board::EMPTY.first_empty(), Some(Position::new(0, 0)));
        assert_eq!(board(PARTIAL).first_empty(), Some(Position::new(2, 0)));
        assert_eq!(board(SOLVED).first_empty(), None);
    }

    #[test]
    fn test_candidates_excludes_row_column_box() {
        let b = board(PARTIAL);
        let candidates = b.candidates(Position::new(2, 0));

        // Row 0 holds 5, 3, 7; column 2 holds 8; box 0 holds 5, 3, 6, 9, 8.
        for digit in [Digit::D5, Digit::D3, Digit::D7, Digit::D9, Digit::D8, Digit::D6] {
            assert!(!candidates.contains(digit), "{digit} should be excluded");
        }
        for digit in [Digit::D1, Digit::D2, Digit::D4] {
            assert!(candidates.contains(digit), "{digit} should remain");
        }
    }

    #[test]
    fn test_candidates_on_empty_board_is_full() {
        for pos in Position::all() {
            assert_eq!(Board::EMPTY.candidates(pos), DigitSet::FULL);
        }
    }

    #[test]
    fn test_candidates_is_idempotent() {
        let b = board(PARTIAL);
        for pos in Position::all() {
            assert_eq!(b.candidates(pos), b.candidates(pos));
        }
    }

    #[test]
    fn test_candidate_placement_never_conflicts() {
        let b = board(PARTIAL);
        for pos in Position::all().filter(|&p| b.get(p).is_none()) {
            for digit in b.candidates(pos) {
                let child = b.with_digit(pos, digit);
                assert!(child.validate().is_ok());
            }
        }
    }

    #[test]
    fn test_most_constrained_prefers_smaller_candidate_set() {
        // Fill row 0 with 1-8, leaving only (8, 0) open in that row: one
        // candidate there, nine everywhere else.
        let mut b = Board::EMPTY;
        for (x, digit) in (0..).zip([
            Digit::D1,
            Digit::D2,
            Digit::D3,
            Digit::D4,
            Digit::D5,
            Digit::D6,
            Digit::D7,
            Digit::D8,
        ]) {
            b = b.with_digit(Position::new(x, 0), digit);
        }
        assert_eq!(b.most_constrained_empty(), Some(Position::new(8, 0)));
    }

    #[test]
    fn test_most_constrained_ties_break_by_scan_order() {
        // All empty cells on an empty board have nine candidates; the first
        // in scan order wins.
        assert_eq!(
            Board::EMPTY.most_constrained_empty(),
            Some(Position::new(0, 0))
        );
    }

    #[test]
    fn test_most_constrained_on_complete_board_is_none() {
        assert_eq!(board(SOLVED).most_constrained_empty(), None);
    }

    #[test]
    fn test_is_locally_consistent() {
        assert!(Board::EMPTY.is_locally_consistent());
        assert!(board(PARTIAL).is_locally_consistent());
        assert!(board(SOLVED).is_locally_consistent());

        // Strand (8, 0): its row holds 1-8 and its column holds 9.
        let mut b = Board::EMPTY;
        for (x, digit) in (0..).zip([
            Digit::D1,
            Digit::D2,
            Digit::D3,
            Digit::D4,
            Digit::D5,
            Digit::D6,
            Digit::D7,
            Digit::D8,
        ]) {
            b = b.with_digit(Position::new(x, 0), digit);
        }
        let b = b.with_digit(Position::new(8, 5), Digit::D9);
        assert!(b.validate().is_ok());
        assert!(b.candidates(Position::new(8, 0)).is_empty());
        assert!(!b.is_locally_consistent());
    }

    #[test]
    fn test_validate_accepts_clean_boards() {
        assert!(Board::EMPTY.validate().is_ok());
        assert!(board(PARTIAL).validate().is_ok());
        assert!(board(SOLVED).validate().is_ok());
    }

    #[test]
    fn test_validate_detects_row_duplicate() {
        let b = Board::EMPTY
            .with_digit(Position::new(0, 4), Digit::D5)
            .with_digit(Position::new(7, 4), Digit::D5);
        let err = b.validate().unwrap_err();
        assert_eq!(err.digit, Digit::D5);
        assert_eq!(err.house, House::Row { y: 4 });
    }

    #[test]
    fn test_validate_detects_column_and_box_duplicates() {
        let column = Board::EMPTY
            .with_digit(Position::new(3, 0), Digit::D2)
            .with_digit(Position::new(3, 8), Digit::D2);
        assert_eq!(
            column.validate().unwrap_err().house,
            House::Column { x: 3 }
        );

        let boxed = Board::EMPTY
            .with_digit(Position::new(0, 0), Digit::D7)
            .with_digit(Position::new(1, 1), Digit::D7);
        assert_eq!(boxed.validate().unwrap_err().digit, Digit::D7);
    }

    #[test]
    fn test_is_solved() {
        assert!(board(SOLVED).is_solved());
        assert!(!board(PARTIAL).is_solved());
        assert!(!Board::EMPTY.is_solved());
    }

    #[test]
    fn test_conflict_error_display() {
        let err = ConflictError {
            digit: Digit::D5,
            house: House::Row { y: 4 },
        };
        assert_eq!(
            err.to_string(),
            "digit 5 appears more than once in row 4"
        );
    }

    proptest! {
        #[test]
        fn prop_parse_display_round_trips(values in proptest::collection::vec(0u8..=9, 81)) {
            let text = values
                .iter()
                .map(|&v| if v == 0 { '.' } else { char::from(b'0' + v) })
                .collect::<String>();
            let parsed: Board = text.parse().unwrap();
            let reparsed: Board = parsed.to_string().parse().unwrap();
            prop_assert_eq!(parsed, reparsed);
        }
    }
}
