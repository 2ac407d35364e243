//! # rust-bingo
//!
//! A game-state engine for a 6×6 number bingo with a point economy.
//!
//! ## Rules
//!
//! 1. **Board**: the numbers 1–36 in uniformly random order, one per cell.
//!
//! 2. **Draw**: a number from 1–36, with replacement. If its cell is closed
//!    the cell opens; if it is already open the player earns 10 points.
//!
//! 3. **Manual select**: spend 100 points to open any closed cell.
//!
//! 4. **Bingo**: a row, column, or diagonal with all six cells open.
//!
//! ## Architecture
//!
//! - **Pure engine**: no I/O, no timers. Rendering and input live in a
//!   presentation layer that reads `GameSnapshot` and calls intents.
//!
//! - **Derived on read**: bingo lines and completion predicates are
//!   recomputed from the open cells, never stored.
//!
//! - **Deterministic**: all randomness flows through `RandomSource`; a seeded
//!   `GameRng` replays boards and draws exactly.
//!
//! ## Modules
//!
//! - `core`: Cell indices, constants, configuration, RNG, errors
//! - `board`: Board layout and the set of open cells
//! - `lines`: Bingo line definitions and detection
//! - `economy`: Points and draw count
//! - `game`: The engine, its outcomes, and snapshots
//! - `session`: Per-game locking for shared use

pub mod board;
pub mod core;
pub mod economy;
pub mod game;
pub mod lines;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    BoardError, CellIndex, EngineConfig, GameRng, GameRngState, RandomSource, SelectError,
    DRAW_RANGE, GRID_SIZE, MAX_DRAW_NUMBER, POINT_COST, POINT_REWARD, TOTAL_CELLS,
};

pub use crate::board::{Board, RevealSet};

pub use crate::lines::{detect_lines, BingoLines, Line, LineKind};

pub use crate::economy::{can_complete_with_points, Economy};

pub use crate::game::{BingoGame, DrawOutcome, GameSnapshot, SelectOutcome, TurnAction, TurnRecord};

pub use crate::session::{GameTable, SessionError, SessionId, SharedGame};
