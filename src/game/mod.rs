//! Game engine: state, intents, and the snapshot handed to renderers.
//!
//! ## Intents
//!
//! - `random_draw`: draw `1..=36` with replacement; open the cell or earn points
//! - `manual_select`: spend points to open a chosen cell
//! - `set_manual_select_mode` / `toggle_manual_select_mode`
//! - `reset`: new board, everything else zeroed
//!
//! After each intent, `snapshot()` gives the renderer a consistent view with
//! the derived values (bingo lines, completion predicates) already computed.

mod engine;
mod outcome;
mod snapshot;

pub use engine::BingoGame;
pub use outcome::{CompletedLines, DrawOutcome, SelectOutcome, TurnAction, TurnRecord};
pub use snapshot::GameSnapshot;
