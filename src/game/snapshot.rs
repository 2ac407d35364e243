//! Read-only view of a game for the presentation layer.

use serde::{Deserialize, Serialize};

use crate::board::{Board, RevealSet};
use crate::core::CellIndex;
use crate::lines::BingoLines;

/// Everything a renderer needs after an intent.
///
/// Derived fields are computed when the snapshot is taken. Cloning is cheap:
/// the reveal set is a persistent structure shared with the live game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub revealed_indices: RevealSet,
    pub points: u32,
    pub last_drawn_number: Option<u8>,
    pub draw_count: u32,
    pub manual_select_mode: bool,
    pub bingo_lines: BingoLines,
    pub is_all_cells_opened: bool,
    pub can_complete_with_points: bool,
}

impl GameSnapshot {
    #[must_use]
    pub fn is_revealed(&self, cell: CellIndex) -> bool {
        self.revealed_indices.contains(cell)
    }

    /// Is `cell` part of any completed line? Used to highlight bingo cells.
    #[must_use]
    pub fn in_bingo_line(&self, cell: CellIndex) -> bool {
        self.bingo_lines.iter().any(|line| line.contains(cell))
    }
}
