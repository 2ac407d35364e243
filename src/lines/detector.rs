//! Bingo line definitions and detection.
//!
//! Lines are always evaluated in the same order:
//! rows top to bottom, columns left to right, main diagonal, anti-diagonal.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::RevealSet;
use crate::core::{CellIndex, GRID_SIZE};

/// Number of distinct lines on the board (6 rows, 6 columns, 2 diagonals).
pub const LINE_COUNT: usize = 2 * GRID_SIZE + 2;

/// Completed lines, in evaluation order. Never spills to the heap.
pub type BingoLines = SmallVec<[Line; LINE_COUNT]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    Row(u8),
    Column(u8),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

/// One row, column, or diagonal: six cells in board order.
///
/// Only the 14 board lines exist. Deserializing anything else fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLine")]
pub struct Line {
    pub kind: LineKind,
    pub cells: [CellIndex; GRID_SIZE],
}

#[derive(Deserialize)]
struct RawLine {
    kind: LineKind,
    cells: [CellIndex; GRID_SIZE],
}

impl TryFrom<RawLine> for Line {
    type Error = String;

    fn try_from(raw: RawLine) -> Result<Self, Self::Error> {
        match Line::of_kind(raw.kind) {
            Some(line) if line.cells == raw.cells => Ok(line),
            Some(_) => Err(format!("cells do not match {:?}", raw.kind)),
            None => Err(format!("{:?} is off the board", raw.kind)),
        }
    }
}

impl Line {
    // `at(i)` must be on the board for every i < GRID_SIZE.
    fn build(kind: LineKind, at: impl Fn(usize) -> usize) -> Self {
        Self {
            kind,
            cells: std::array::from_fn(|i| CellIndex::from_raw(at(i))),
        }
    }

    // Callers guarantee `row < GRID_SIZE`.
    fn nth_row(row: usize) -> Self {
        Self::build(LineKind::Row(row as u8), |i| row * GRID_SIZE + i)
    }

    // Callers guarantee `col < GRID_SIZE`.
    fn nth_column(col: usize) -> Self {
        Self::build(LineKind::Column(col as u8), |i| i * GRID_SIZE + col)
    }

    /// The `row`-th row, left to right. None if `row` is off the board.
    #[must_use]
    pub fn row(row: usize) -> Option<Self> {
        (row < GRID_SIZE).then(|| Self::nth_row(row))
    }

    /// The `col`-th column, top to bottom. None if `col` is off the board.
    #[must_use]
    pub fn column(col: usize) -> Option<Self> {
        (col < GRID_SIZE).then(|| Self::nth_column(col))
    }

    /// The line a `LineKind` names, if it is on the board.
    #[must_use]
    pub fn of_kind(kind: LineKind) -> Option<Self> {
        match kind {
            LineKind::Row(row) => Self::row(usize::from(row)),
            LineKind::Column(col) => Self::column(usize::from(col)),
            LineKind::MainDiagonal => Some(Self::main_diagonal()),
            LineKind::AntiDiagonal => Some(Self::anti_diagonal()),
        }
    }

    #[must_use]
    pub fn main_diagonal() -> Self {
        Self::build(LineKind::MainDiagonal, |i| i * GRID_SIZE + i)
    }

    #[must_use]
    pub fn anti_diagonal() -> Self {
        Self::build(LineKind::AntiDiagonal, |i| i * GRID_SIZE + (GRID_SIZE - 1 - i))
    }

    /// Every line in evaluation order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..GRID_SIZE)
            .map(Self::nth_row)
            .chain((0..GRID_SIZE).map(Self::nth_column))
            .chain([Self::main_diagonal(), Self::anti_diagonal()])
    }

    /// Raw cell indices in line order.
    #[must_use]
    pub fn indices(&self) -> [usize; GRID_SIZE] {
        self.cells.map(CellIndex::raw)
    }

    #[must_use]
    pub fn contains(&self, cell: CellIndex) -> bool {
        self.cells.contains(&cell)
    }

    /// Every cell of the line is open.
    #[must_use]
    pub fn is_complete(&self, revealed: &RevealSet) -> bool {
        self.cells.iter().all(|&cell| revealed.contains(cell))
    }
}

/// Find every completed line.
///
/// ```
/// use rust_bingo::board::RevealSet;
/// use rust_bingo::core::CellIndex;
/// use rust_bingo::lines::detect_lines;
///
/// let revealed: RevealSet = (12..18).filter_map(CellIndex::new).collect();
/// let lines = detect_lines(&revealed);
///
/// assert_eq!(lines.len(), 1);
/// assert_eq!(lines[0].indices(), [12, 13, 14, 15, 16, 17]);
/// ```
#[must_use]
pub fn detect_lines(revealed: &RevealSet) -> BingoLines {
    // Fewer than six open cells cannot complete anything.
    if revealed.len() < GRID_SIZE {
        return BingoLines::new();
    }
    Line::all().filter(|line| line.is_complete(revealed)).collect()
}

/// Lines that pass through `cell`, in evaluation order.
///
/// A cell sits on its row and its column, plus at most one diagonal
/// (the grid has an even side, so the diagonals never cross).
#[must_use]
pub fn lines_through(cell: CellIndex) -> SmallVec<[Line; 3]> {
    let mut lines = SmallVec::new();
    lines.push(Line::nth_row(cell.row()));
    lines.push(Line::nth_column(cell.col()));
    if cell.on_main_diagonal() {
        lines.push(Line::main_diagonal());
    } else if cell.on_anti_diagonal() {
        lines.push(Line::anti_diagonal());
    }
    lines
}

/// Completed lines that include `cell`.
///
/// After opening `cell`, these are exactly the lines that opening completed.
#[must_use]
pub fn completed_through(revealed: &RevealSet, cell: CellIndex) -> SmallVec<[Line; 3]> {
    lines_through(cell)
        .into_iter()
        .filter(|line| line.is_complete(revealed))
        .collect()
}
