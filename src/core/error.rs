//! Rejection signals.
//!
//! None of these are fatal: an `Err` means the intent was refused and the
//! game state is exactly as it was before the call.

use super::cell::CellIndex;

/// Why a manual select was refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("cell index {0} is off the board")]
    OutOfRange(usize),

    #[error("{0} is already open")]
    AlreadyRevealed(CellIndex),

    #[error("need {cost} points to open a cell, have {points}")]
    InsufficientPoints { points: u32, cost: u32 },
}

/// Why a number sequence is not a valid board.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board needs {expected} numbers, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("number {0} is outside the draw range")]
    OutOfRange(u8),

    #[error("number {0} appears more than once")]
    Duplicate(u8),
}
