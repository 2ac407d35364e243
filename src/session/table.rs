//! Registry of independent games, one lock per game.

use std::sync::Arc;

use log::{debug, info};
use parking_lot::{Mutex, RwLock};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{EngineConfig, GameRng};
use crate::game::BingoGame;

/// Identifier of one game in a `GameTable`. Allocated from 1 upward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

/// Why a table operation found no game.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no game open for {0}")]
    UnknownSession(SessionId),
}

/// A game behind its own lock. Holding the lock serializes intents.
pub type SharedGame = Arc<Mutex<BingoGame>>;

struct Allocator {
    next_id: u64,
    /// Present when the table config is seeded; each session gets a fork.
    seeds: Option<GameRng>,
}

/// Open games keyed by `SessionId`.
///
/// The table lock is only held to look up, insert, or remove an entry;
/// intents run under the per-game lock, so different sessions never
/// block each other.
pub struct GameTable {
    config: EngineConfig,
    allocator: Mutex<Allocator>,
    games: RwLock<FxHashMap<SessionId, SharedGame>>,
}

impl GameTable {
    /// Create an empty table. New games inherit `config`.
    ///
    /// With a seeded config, the n-th opened session always gets the same
    /// seed, derived by forking a table-level RNG.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let seeds = config.seed.map(GameRng::new);
        Self {
            config,
            allocator: Mutex::new(Allocator { next_id: 1, seeds }),
            games: RwLock::new(FxHashMap::default()),
        }
    }

    /// Start a new game and return its id.
    pub fn open(&self) -> SessionId {
        let (id, config) = {
            let mut alloc = self.allocator.lock();
            let id = SessionId(alloc.next_id);
            alloc.next_id += 1;

            let mut config = self.config.clone();
            if let Some(seeds) = alloc.seeds.as_mut() {
                config.seed = Some(seeds.fork().seed());
            }
            (id, config)
        };

        let game = Arc::new(Mutex::new(BingoGame::new(config)));
        self.games.write().insert(id, game);
        info!("opened {}", id);
        id
    }

    /// Handle to a game, for callers that manage the lock themselves.
    #[must_use]
    pub fn get(&self, id: SessionId) -> Option<SharedGame> {
        self.games.read().get(&id).cloned()
    }

    /// Run `f` with exclusive access to one game.
    pub fn with_game<T>(&self, id: SessionId, f: impl FnOnce(&mut BingoGame) -> T) -> Result<T, SessionError> {
        // Release the table lock before taking the game lock.
        let game = self.get(id).ok_or(SessionError::UnknownSession(id))?;
        let mut guard = game.lock();
        Ok(f(&mut *guard))
    }

    /// Drop a game. Returns false if it was not open.
    pub fn close(&self, id: SessionId) -> bool {
        let removed = self.games.write().remove(&id).is_some();
        if removed {
            debug!("closed {}", id);
        }
        removed
    }

    /// Open session ids in ascending order.
    #[must_use]
    pub fn ids(&self) -> Vec<SessionId> {
        let mut ids: Vec<_> = self.games.read().keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.read().is_empty()
    }
}

impl Default for GameTable {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
