//! Results of game intents and the turn history.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::CellIndex;
use crate::lines::Line;

/// Lines completed by opening a single cell (at most row, column, one diagonal).
pub type CompletedLines = SmallVec<[Line; 3]>;

/// What a `random_draw` did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawOutcome {
    /// The drawn number's cell was closed and is now open.
    Revealed {
        number: u8,
        cell: CellIndex,
        /// Lines this reveal completed.
        completed: CompletedLines,
    },
    /// The drawn number's cell was already open; `POINT_REWARD` was credited.
    Rewarded {
        number: u8,
        /// Balance after the reward.
        points: u32,
    },
    /// Every cell was already open. Nothing was drawn, nothing changed.
    BoardComplete,
}

impl DrawOutcome {
    /// The drawn number, unless the draw was refused.
    #[must_use]
    pub fn number(&self) -> Option<u8> {
        match self {
            DrawOutcome::Revealed { number, .. } | DrawOutcome::Rewarded { number, .. } => Some(*number),
            DrawOutcome::BoardComplete => None,
        }
    }

    #[must_use]
    pub fn revealed_cell(&self) -> Option<CellIndex> {
        match self {
            DrawOutcome::Revealed { cell, .. } => Some(*cell),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_reveal(&self) -> bool {
        matches!(self, DrawOutcome::Revealed { .. })
    }

    #[must_use]
    pub fn is_reward(&self) -> bool {
        matches!(self, DrawOutcome::Rewarded { .. })
    }
}

/// A successful `manual_select`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOutcome {
    pub cell: CellIndex,
    /// Number shown in the opened cell.
    pub number: u8,
    /// Balance after paying `POINT_COST`.
    pub points: u32,
    /// Lines this reveal completed.
    pub completed: CompletedLines,
}

/// One state-changing intent, as recorded in the game history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnAction {
    /// Random draw that opened `cell`.
    Reveal { number: u8, cell: CellIndex },
    /// Random draw that hit an open cell and earned points.
    Reward { number: u8 },
    /// Points spent to open `cell`.
    ManualSelect { cell: CellIndex, number: u8 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Draw count after this action (starts at 1).
    pub turn: u32,
    pub action: TurnAction,
}

impl TurnRecord {
    /// Cell this action opened, if any.
    #[must_use]
    pub fn opened(&self) -> Option<CellIndex> {
        match self.action {
            TurnAction::Reveal { cell, .. } | TurnAction::ManualSelect { cell, .. } => Some(cell),
            TurnAction::Reward { .. } => None,
        }
    }
}
