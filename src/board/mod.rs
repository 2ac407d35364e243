//! Board layout and opened cells.
//!
//! - `Board`: the fixed permutation of `1..=36`, created at game start and
//!   on every reset
//! - `RevealSet`: which cells are currently open

mod layout;
mod reveal;

pub use layout::Board;
pub use reveal::RevealSet;
