//! Core engine types: cells, constants, configuration, RNG, errors.
//!
//! Everything else in the crate builds on these. None of them hold game
//! state on their own.

pub mod cell;
pub mod config;
pub mod error;
pub mod rng;

pub use cell::CellIndex;
pub use config::{EngineConfig, DRAW_RANGE, GRID_SIZE, MAX_DRAW_NUMBER, POINT_COST, POINT_REWARD, TOTAL_CELLS};
pub use error::{BoardError, SelectError};
pub use rng::{GameRng, GameRngState, RandomSource};
