//! Cell identification on the board.
//!
//! Every cell of the 6×6 grid has a `CellIndex` in `0..TOTAL_CELLS`.
//!
//! ## Layout
//!
//! Indices are row-major: `index = row * GRID_SIZE + col`.
//!
//! ```
//! use rust_bingo::core::CellIndex;
//!
//! let cell = CellIndex::from_row_col(2, 3).unwrap();
//! assert_eq!(cell.raw(), 15);
//! assert_eq!(cell.row(), 2);
//! assert_eq!(cell.col(), 3);
//!
//! // Off-board positions are rejected
//! assert!(CellIndex::new(36).is_none());
//! ```

use serde::{Deserialize, Serialize};

use super::config::{GRID_SIZE, TOTAL_CELLS};

/// Index of a single board cell.
///
/// Always in `0..TOTAL_CELLS`; the only ways to build one check the range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CellIndex(u8);

impl CellIndex {
    /// Create a cell index, returning `None` when off the board.
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < TOTAL_CELLS {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Create a cell index from grid coordinates.
    ///
    /// ```
    /// use rust_bingo::core::CellIndex;
    ///
    /// assert_eq!(CellIndex::from_row_col(0, 5).map(|c| c.raw()), Some(5));
    /// assert_eq!(CellIndex::from_row_col(5, 5).map(|c| c.raw()), Some(35));
    /// assert!(CellIndex::from_row_col(6, 0).is_none());
    /// ```
    #[must_use]
    pub const fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Some(Self((row * GRID_SIZE + col) as u8))
        } else {
            None
        }
    }

    pub(crate) const fn from_raw(index: usize) -> Self {
        debug_assert!(index < TOTAL_CELLS);
        Self(index as u8)
    }

    /// Iterate over every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..TOTAL_CELLS as u8).map(Self)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.0 as usize / GRID_SIZE
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.0 as usize % GRID_SIZE
    }

    /// Is this cell on the top-left to bottom-right diagonal?
    #[must_use]
    pub const fn on_main_diagonal(self) -> bool {
        self.row() == self.col()
    }

    /// Is this cell on the top-right to bottom-left diagonal?
    #[must_use]
    pub const fn on_anti_diagonal(self) -> bool {
        self.row() + self.col() == GRID_SIZE - 1
    }
}

impl TryFrom<u8> for CellIndex {
    type Error = String;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::new(raw as usize).ok_or_else(|| format!("cell index {} is off the board", raw))
    }
}

impl From<CellIndex> for u8 {
    fn from(cell: CellIndex) -> Self {
        cell.0
    }
}

impl std::fmt::Display for CellIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({}, {})", self.row(), self.col())
    }
}
