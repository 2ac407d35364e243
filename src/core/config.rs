//! Game constants and engine configuration.
//!
//! The board shape, draw range, and point values are fixed. `EngineConfig`
//! only controls how a game is seeded and whether it keeps a turn history.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Cells per row and per column.
pub const GRID_SIZE: usize = 6;

/// Cells on the board.
pub const TOTAL_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Points awarded when a draw hits an already opened cell.
pub const POINT_REWARD: u32 = 10;

/// Points spent to open a cell directly.
pub const POINT_COST: u32 = 100;

/// Highest number on the board and in a draw.
pub const MAX_DRAW_NUMBER: u8 = TOTAL_CELLS as u8;

/// Numbers a random draw can produce (inclusive, with replacement).
pub const DRAW_RANGE: RangeInclusive<u8> = 1..=MAX_DRAW_NUMBER;

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed for the game RNG.
    /// `None` seeds from OS entropy; `Some` makes every board and draw reproducible.
    pub seed: Option<u64>,

    /// Keep a `TurnRecord` for each draw and manual select.
    pub record_history: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            record_history: true,
        }
    }
}

impl EngineConfig {
    /// Create a new config with a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config that does not record turn history.
    #[must_use]
    pub fn without_history(mut self) -> Self {
        self.record_history = false;
        self
    }
}
