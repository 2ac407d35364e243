//! Point economy.
//!
//! Duplicate draws earn `POINT_REWARD`; opening a cell directly costs
//! `POINT_COST`. Every draw and every successful select bumps the draw count.

mod ledger;

pub use ledger::{can_complete_with_points, Economy};
