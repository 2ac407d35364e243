//! Opened cells.
//!
//! Within one game the set only grows; `reset` swaps in an empty one.
//! Backed by `im::OrdSet` so game snapshots share it instead of copying.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use crate::core::{CellIndex, TOTAL_CELLS};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RevealSet {
    cells: OrdSet<CellIndex>,
}

impl RevealSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a cell.
    ///
    /// Returns true if the cell was newly opened, false if it already was.
    pub fn reveal(&mut self, cell: CellIndex) -> bool {
        self.cells.insert(cell).is_none()
    }

    #[must_use]
    pub fn contains(&self, cell: CellIndex) -> bool {
        self.cells.contains(&cell)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells not yet opened.
    #[must_use]
    pub fn unrevealed_count(&self) -> usize {
        TOTAL_CELLS - self.cells.len()
    }

    /// Every cell is open.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.len() == TOTAL_CELLS
    }

    /// Opened cells in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.cells.iter().copied()
    }

    /// Unopened cells in ascending index order.
    pub fn unrevealed(&self) -> impl Iterator<Item = CellIndex> + '_ {
        CellIndex::all().filter(move |cell| !self.contains(*cell))
    }
}

impl FromIterator<CellIndex> for RevealSet {
    fn from_iter<I: IntoIterator<Item = CellIndex>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
