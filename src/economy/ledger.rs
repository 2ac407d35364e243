//! Points balance and draw counter.

use serde::{Deserialize, Serialize};

use crate::core::{SelectError, POINT_COST, POINT_REWARD};

/// Points and draw count for one game.
///
/// Only the two reveal operations touch this: a random draw always counts
/// and may reward, a manual select counts and spends.
///
/// Each draw adds exactly 1 to `draw_count` and each reward exactly
/// `POINT_REWARD` to `points`, up to `u32::MAX`. Both counters saturate
/// there instead of wrapping, so past that point the totals stop growing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Economy {
    points: u32,
    draw_count: u32,
}

impl Economy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Random draws plus manual selects since the last reset.
    #[must_use]
    pub fn draw_count(&self) -> u32 {
        self.draw_count
    }

    /// Count one draw or select. Returns the new count.
    pub fn record_draw(&mut self) -> u32 {
        self.draw_count = self.draw_count.saturating_add(1);
        self.draw_count
    }

    /// Credit `POINT_REWARD` for a duplicate draw. Returns the new balance.
    pub fn reward(&mut self) -> u32 {
        self.points = self.points.saturating_add(POINT_REWARD);
        self.points
    }

    #[must_use]
    pub fn can_afford_select(&self) -> bool {
        self.points >= POINT_COST
    }

    /// Check that a manual select is affordable without spending.
    pub fn check_select(&self) -> Result<(), SelectError> {
        if self.can_afford_select() {
            Ok(())
        } else {
            Err(SelectError::InsufficientPoints {
                points: self.points,
                cost: POINT_COST,
            })
        }
    }

    /// Debit `POINT_COST`. Returns the remaining balance.
    ///
    /// The balance is left untouched on `Err`.
    pub fn spend_select(&mut self) -> Result<u32, SelectError> {
        self.check_select()?;
        self.points -= POINT_COST;
        Ok(self.points)
    }
}

/// Can the player open every remaining cell with points alone?
///
/// False once nothing is left to open.
///
/// ```
/// use rust_bingo::economy::can_complete_with_points;
///
/// assert!(can_complete_with_points(2, 300));
/// assert!(!can_complete_with_points(4, 300));
/// assert!(!can_complete_with_points(0, 300));
/// ```
#[must_use]
pub fn can_complete_with_points(unrevealed: usize, points: u32) -> bool {
    unrevealed > 0 && (unrevealed as u64) * u64::from(POINT_COST) <= u64::from(points)
}
