//! The bingo game engine.

use im::Vector;
use log::{debug, info, trace};

use super::outcome::{CompletedLines, DrawOutcome, SelectOutcome, TurnAction, TurnRecord};
use super::snapshot::GameSnapshot;
use crate::board::{Board, RevealSet};
use crate::core::{CellIndex, EngineConfig, GameRng, GameRngState, RandomSource, SelectError, DRAW_RANGE};
use crate::economy::{can_complete_with_points, Economy};
use crate::lines::{completed_through, detect_lines, BingoLines};

/// One game: board, opened cells, point economy, and the random source.
///
/// Every intent computes the full next state before returning. A failed
/// intent leaves the state exactly as it was.
///
/// ## Example
///
/// ```
/// use rust_bingo::{BingoGame, EngineConfig};
///
/// let mut game = BingoGame::new(EngineConfig::default().with_seed(42));
///
/// let outcome = game.random_draw();
/// assert!(outcome.is_reveal()); // the first draw always hits a closed cell
/// assert_eq!(game.draw_count(), 1);
///
/// // Not enough points yet
/// assert!(game.manual_select(0).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct BingoGame<R = GameRng> {
    config: EngineConfig,
    rng: R,
    board: Board,
    revealed: RevealSet,
    economy: Economy,
    last_drawn: Option<u8>,
    manual_select_mode: bool,
    history: Vector<TurnRecord>,
}

impl BingoGame<GameRng> {
    /// Create a game seeded from `config`, or from OS entropy if it has no seed.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_source(rng, config)
    }

    /// Create a reproducible game with default settings.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(EngineConfig::default().with_seed(seed))
    }

    /// Current RNG position, for replaying from this point.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl Default for BingoGame<GameRng> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<R: RandomSource> BingoGame<R> {
    /// Create a game drawing from a custom random source.
    pub fn with_source(mut rng: R, config: EngineConfig) -> Self {
        let board = Board::generate(&mut rng);
        debug!("new board\n{}", board);
        Self {
            config,
            rng,
            board,
            revealed: RevealSet::new(),
            economy: Economy::new(),
            last_drawn: None,
            manual_select_mode: false,
            history: Vector::new(),
        }
    }

    // === Intents ===

    /// Draw a number and resolve it against the board.
    ///
    /// Opens the number's cell if it is closed, otherwise credits
    /// `POINT_REWARD`. Once every cell is open the draw is refused:
    /// `DrawOutcome::BoardComplete` is returned and nothing changes,
    /// not even the draw count.
    pub fn random_draw(&mut self) -> DrawOutcome {
        if self.revealed.is_full() {
            trace!("draw ignored: board complete");
            return DrawOutcome::BoardComplete;
        }

        let turn = self.economy.record_draw();
        let number = self.rng.draw_in(DRAW_RANGE);
        self.last_drawn = Some(number);

        // A source outside DRAW_RANGE finds no cell and falls through to the reward.
        match self.board.cell_of(number) {
            Some(cell) if !self.revealed.contains(cell) => {
                let completed = self.open(cell);
                debug!("draw #{}: {} opened {}", turn, number, cell);
                self.record(turn, TurnAction::Reveal { number, cell });
                DrawOutcome::Revealed { number, cell, completed }
            }
            _ => {
                let points = self.economy.reward();
                debug!("draw #{}: {} already open, points now {}", turn, number, points);
                self.record(turn, TurnAction::Reward { number });
                DrawOutcome::Rewarded { number, points }
            }
        }
    }

    /// Spend `POINT_COST` to open the cell at `index`.
    ///
    /// Fails without changing anything if `index` is off the board, the cell
    /// is already open, or the balance is below `POINT_COST` (checked in that
    /// order). Does not require manual select mode; turns it off on success.
    pub fn manual_select(&mut self, index: usize) -> Result<SelectOutcome, SelectError> {
        let cell = self.check_select(index).map_err(|err| {
            trace!("select {} rejected: {}", index, err);
            err
        })?;

        let points = self.economy.spend_select()?;
        let turn = self.economy.record_draw();
        let completed = self.open(cell);
        self.manual_select_mode = false;

        let number = self.board.number_at(cell);
        debug!("select #{}: opened {} ({}), points now {}", turn, cell, number, points);
        self.record(turn, TurnAction::ManualSelect { cell, number });

        Ok(SelectOutcome {
            cell,
            number,
            points,
            completed,
        })
    }

    /// Would `manual_select(index)` succeed right now?
    pub fn check_select(&self, index: usize) -> Result<CellIndex, SelectError> {
        let cell = CellIndex::new(index).ok_or(SelectError::OutOfRange(index))?;
        if self.revealed.contains(cell) {
            return Err(SelectError::AlreadyRevealed(cell));
        }
        self.economy.check_select()?;
        Ok(cell)
    }

    pub fn set_manual_select_mode(&mut self, enabled: bool) {
        self.manual_select_mode = enabled;
    }

    /// Flip manual select mode. Returns the new value.
    pub fn toggle_manual_select_mode(&mut self) -> bool {
        self.manual_select_mode = !self.manual_select_mode;
        self.manual_select_mode
    }

    /// Start over: new board, nothing open, zero points and draws.
    ///
    /// The random source keeps running, so a seeded game's next board is
    /// still reproducible.
    pub fn reset(&mut self) {
        self.board = Board::generate(&mut self.rng);
        self.revealed = RevealSet::new();
        self.economy = Economy::new();
        self.last_drawn = None;
        self.manual_select_mode = false;
        self.history = Vector::new();
        info!("game reset");
        debug!("new board\n{}", self.board);
    }

    fn open(&mut self, cell: CellIndex) -> CompletedLines {
        self.revealed.reveal(cell);

        let completed = completed_through(&self.revealed, cell);
        if !completed.is_empty() {
            let kinds: Vec<_> = completed.iter().map(|line| line.kind).collect();
            info!("bingo: {} completed {:?}", cell, kinds);
        }
        if self.revealed.is_full() {
            info!("all cells open after {} draws", self.economy.draw_count());
        }
        completed
    }

    fn record(&mut self, turn: u32, action: TurnAction) {
        if self.config.record_history {
            self.history.push_back(TurnRecord { turn, action });
        }
    }

    // === State ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn revealed(&self) -> &RevealSet {
        &self.revealed
    }

    #[must_use]
    pub fn economy(&self) -> Economy {
        self.economy
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.economy.points()
    }

    #[must_use]
    pub fn draw_count(&self) -> u32 {
        self.economy.draw_count()
    }

    #[must_use]
    pub fn last_drawn_number(&self) -> Option<u8> {
        self.last_drawn
    }

    #[must_use]
    pub fn manual_select_mode(&self) -> bool {
        self.manual_select_mode
    }

    /// Turn records since the last reset, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn source(&self) -> &R {
        &self.rng
    }

    // === Derived ===

    /// Completed lines in evaluation order.
    #[must_use]
    pub fn bingo_lines(&self) -> BingoLines {
        detect_lines(&self.revealed)
    }

    #[must_use]
    pub fn is_all_cells_opened(&self) -> bool {
        self.revealed.is_full()
    }

    #[must_use]
    pub fn can_complete_with_points(&self) -> bool {
        can_complete_with_points(self.revealed.unrevealed_count(), self.economy.points())
    }

    /// Cells a manual select could open right now (empty if points are short).
    pub fn selectable_cells(&self) -> impl Iterator<Item = CellIndex> + '_ {
        let affordable = self.economy.can_afford_select();
        self.revealed.unrevealed().filter(move |_| affordable)
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            revealed_indices: self.revealed.clone(),
            points: self.economy.points(),
            last_drawn_number: self.last_drawn,
            draw_count: self.economy.draw_count(),
            manual_select_mode: self.manual_select_mode,
            bingo_lines: self.bingo_lines(),
            is_all_cells_opened: self.is_all_cells_opened(),
            can_complete_with_points: self.can_complete_with_points(),
        }
    }
}
