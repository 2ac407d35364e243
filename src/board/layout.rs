//! The board: which number sits in which cell.

use serde::{Deserialize, Serialize};

use crate::core::{BoardError, CellIndex, RandomSource, DRAW_RANGE, MAX_DRAW_NUMBER, TOTAL_CELLS};

/// A permutation of `1..=36` laid out row-major over the 36 cells.
///
/// Keeps the inverse mapping (number → cell) alongside, so resolving a
/// draw is a single lookup.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Board {
    numbers: [u8; TOTAL_CELLS],
    /// `cells[n]` is the index holding number `n`; slot 0 is unused.
    cells: [u8; TOTAL_CELLS + 1],
}

impl Board {
    /// Generate a board in uniformly random order.
    ///
    /// Consumes randomness from `rng` and nothing else.
    pub fn generate<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let mut numbers = [0u8; TOTAL_CELLS];
        for (slot, n) in numbers.iter_mut().zip(DRAW_RANGE) {
            *slot = n;
        }
        rng.shuffle(&mut numbers);

        Self::index(numbers)
    }

    /// Build a board from an explicit number sequence.
    ///
    /// The sequence must contain every number of `1..=36` exactly once.
    ///
    /// ```
    /// use rust_bingo::board::Board;
    ///
    /// let board = Board::from_numbers(&(1..=36).rev().collect::<Vec<u8>>()).unwrap();
    /// assert_eq!(board.cell_of(36).map(|c| c.raw()), Some(0));
    ///
    /// assert!(Board::from_numbers(&[1, 2, 3]).is_err());
    /// ```
    pub fn from_numbers(numbers: &[u8]) -> Result<Self, BoardError> {
        if numbers.len() != TOTAL_CELLS {
            return Err(BoardError::WrongLength {
                expected: TOTAL_CELLS,
                actual: numbers.len(),
            });
        }

        let mut seen = [false; TOTAL_CELLS + 1];
        let mut layout = [0u8; TOTAL_CELLS];
        for (slot, &n) in layout.iter_mut().zip(numbers) {
            if !DRAW_RANGE.contains(&n) {
                return Err(BoardError::OutOfRange(n));
            }
            if seen[n as usize] {
                return Err(BoardError::Duplicate(n));
            }
            seen[n as usize] = true;
            *slot = n;
        }

        Ok(Self::index(layout))
    }

    fn index(numbers: [u8; TOTAL_CELLS]) -> Self {
        let mut cells = [0u8; TOTAL_CELLS + 1];
        for (cell, &n) in numbers.iter().enumerate() {
            cells[n as usize] = cell as u8;
        }
        Self { numbers, cells }
    }

    /// Number shown in a cell.
    #[must_use]
    pub fn number_at(&self, cell: CellIndex) -> u8 {
        self.numbers[cell.raw()]
    }

    /// Cell holding `number`, or `None` if it is not a board number.
    #[must_use]
    pub fn cell_of(&self, number: u8) -> Option<CellIndex> {
        if number == 0 || number > MAX_DRAW_NUMBER {
            return None;
        }
        CellIndex::new(self.cells[number as usize] as usize)
    }

    /// Numbers in row-major cell order.
    #[must_use]
    pub fn numbers(&self) -> &[u8] {
        &self.numbers
    }

    /// Iterate over `(cell, number)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, u8)> + '_ {
        CellIndex::all().zip(self.numbers.iter().copied())
    }
}

impl TryFrom<Vec<u8>> for Board {
    type Error = BoardError;

    fn try_from(numbers: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_numbers(&numbers)
    }
}

impl From<Board> for Vec<u8> {
    fn from(board: Board) -> Self {
        board.numbers.to_vec()
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Board").field(&self.numbers.as_slice()).finish()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.numbers.chunks(crate::core::GRID_SIZE).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, n) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>2}", n)?;
            }
        }
        Ok(())
    }
}
