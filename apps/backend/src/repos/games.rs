//! Game records and the store that persists them.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tracing::debug;
use uuid::Uuid;

use crate::domain::state::GameState;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};

/// Opaque game identifier, a random UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(Uuid);

impl GameId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for GameId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(GameId).map_err(|_| {
            DomainError::validation(ValidationKind::InvalidGameId, format!("invalid game id: {s:?}"))
        })
    }
}

/// Stored game: rules state plus bookkeeping.
///
/// `lock_version` starts at 1 and increases by one on every successful save.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: GameId,
    pub state: GameState,
    pub lock_version: i32,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub expires_at: OffsetDateTime,
}

impl Game {
    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        now >= self.expires_at
    }
}

#[async_trait]
pub trait GameStore: Send + Sync {
    /// Fetch a live game. Missing and expired games are both `NotFound`.
    async fn load(&self, id: GameId) -> Result<Game, DomainError>;

    /// Store a fresh game at lock version 1.
    async fn insert(&self, id: GameId, state: GameState) -> Result<Game, DomainError>;

    /// Replace the stored state if the stored lock version still equals
    /// `expected_lock_version`. Refreshes the expiry.
    async fn save(
        &self,
        id: GameId,
        state: GameState,
        expected_lock_version: i32,
    ) -> Result<Game, DomainError>;
}

fn game_not_found(id: GameId) -> DomainError {
    DomainError::not_found(NotFoundKind::Game, format!("Game {id} not found"))
}

/// In-process store keyed by game id. Entries expire `ttl` after their last write.
#[derive(Debug)]
pub struct MemoryGameStore {
    games: DashMap<GameId, Game>,
    ttl: Duration,
}

impl MemoryGameStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            games: DashMap::new(),
            ttl,
        }
    }

    /// Drop every entry expired at `now`, returning how many were removed.
    pub fn purge_expired(&self, now: OffsetDateTime) -> usize {
        let mut purged = 0usize;
        self.games.retain(|_, game| {
            let keep = !game.is_expired(now);
            if !keep {
                purged += 1;
            }
            keep
        });
        if purged > 0 {
            debug!(purged, "Purged expired games");
        }
        purged
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[async_trait]
impl GameStore for MemoryGameStore {
    async fn load(&self, id: GameId) -> Result<Game, DomainError> {
        let now = OffsetDateTime::now_utc();
        match self.games.get(&id) {
            Some(game) if !game.is_expired(now) => Ok(game.clone()),
            _ => Err(game_not_found(id)),
        }
    }

    async fn insert(&self, id: GameId, state: GameState) -> Result<Game, DomainError> {
        let now = OffsetDateTime::now_utc();
        let game = Game {
            id,
            state,
            lock_version: 1,
            created_at: now,
            updated_at: now,
            expires_at: now + self.ttl,
        };

        match self.games.entry(id) {
            Entry::Occupied(mut slot) => {
                if !slot.get().is_expired(now) {
                    return Err(DomainError::conflict(
                        ConflictKind::DuplicateGame,
                        format!("Game {id} already exists"),
                    ));
                }
                slot.insert(game.clone());
            }
            Entry::Vacant(slot) => {
                slot.insert(game.clone());
            }
        }
        Ok(game)
    }

    async fn save(
        &self,
        id: GameId,
        state: GameState,
        expected_lock_version: i32,
    ) -> Result<Game, DomainError> {
        let now = OffsetDateTime::now_utc();
        let mut slot = match self.games.get_mut(&id) {
            Some(slot) if !slot.is_expired(now) => slot,
            _ => return Err(game_not_found(id)),
        };

        if slot.lock_version != expected_lock_version {
            return Err(DomainError::conflict(
                ConflictKind::OptimisticLock,
                format!(
                    "Game lock version mismatch: expected {}, but game has version {}",
                    expected_lock_version, slot.lock_version
                ),
            ));
        }

        slot.state = state;
        slot.lock_version += 1;
        slot.updated_at = now;
        slot.expires_at = now + self.ttl;
        Ok(slot.clone())
    }
}
