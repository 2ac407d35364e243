//! Serialized access to games shared across threads.
//!
//! Each intent reads then writes one game's state, so intents on the same
//! game must not interleave. `GameTable` gives every game its own lock;
//! there is no ordering between different games.

mod table;

pub use table::{GameTable, SessionError, SessionId, SharedGame};
