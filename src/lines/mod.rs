//! Bingo line detection.
//!
//! Lines are derived from the `RevealSet`, never stored. A line counts
//! once all six of its cells are open; several can be complete at once.

mod detector;

pub use detector::{completed_through, detect_lines, lines_through, BingoLines, Line, LineKind, LINE_COUNT};
