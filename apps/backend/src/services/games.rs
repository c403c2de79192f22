//! Request-level game operations: resolve the caller, load, run the rules,
//! save conditionally, then notify.

use tracing::{debug, info, warn};

use crate::domain::board::{Cell, Side};
use crate::domain::game_transition::{derive_game_transitions, GameLifecycleView, GameTransition};
use crate::domain::player_view::{legal_moves, PlayerView};
use crate::domain::state::{GameState, PlayerId};
use crate::domain::turns::{self, MoveApplied};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};
use crate::errors::ErrorCode;
use crate::protocol::messages::MoveMessage;
use crate::protocol::requests::{GameIdResponse, MoveRequest, StartingPositions};
use crate::repos::games::{Game, GameId, GameStore};
use crate::services::identity::{IdentityResolver, RequestContext};
use crate::services::notifier::Notifier;

/// A move that has been validated, applied, and saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub applied: MoveApplied,
    /// Lock version after the save; pass it back as the next expectation.
    pub lock_version: i32,
}

/// One player's redacted view together with the version it was read at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    pub id: GameId,
    pub lock_version: i32,
    pub view: PlayerView,
}

pub struct GameService<S, I, N> {
    store: S,
    identity: I,
    notifier: N,
}

fn lifecycle(game: &Game) -> GameLifecycleView {
    GameLifecycleView {
        version: game.lock_version,
        status: game.state.status,
    }
}

fn log_transitions(id: GameId, transitions: &[GameTransition]) {
    for transition in transitions {
        match transition {
            GameTransition::GameStarted => info!(game_id = %id, "Game started"),
            GameTransition::TurnBecame { side } => {
                debug!(game_id = %id, side = %side, "Turn passed")
            }
            GameTransition::GameEnded => info!(game_id = %id, "Game ended"),
        }
    }
}

fn require_side(state: &GameState, player: &PlayerId) -> Result<Side, DomainError> {
    state.role_of(player).ok_or_else(|| {
        DomainError::validation(
            ValidationKind::NotAPlayer,
            "user is not a player of this game",
        )
    })
}

impl<S, I, N> GameService<S, I, N>
where
    S: GameStore,
    I: IdentityResolver,
    N: Notifier,
{
    pub fn new(store: S, identity: I, notifier: N) -> Self {
        Self {
            store,
            identity,
            notifier,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Validate the caller's army and open a new game in `Setup`.
    pub async fn create_game(
        &self,
        ctx: &RequestContext,
        request: &StartingPositions,
    ) -> Result<GameIdResponse, AppError> {
        let host = self.identity.resolve(ctx)?;
        let state = turns::create_game(host.clone(), &request.starting_positions)?;

        let id = GameId::new();
        self.store.insert(id, state).await?;
        info!(game_id = %id, host = %host, "Game created");

        Ok(GameIdResponse { id })
    }

    /// Seat the caller as guest, place their army, and publish `started`.
    pub async fn join_game(
        &self,
        ctx: &RequestContext,
        id: GameId,
        request: &StartingPositions,
    ) -> Result<GameId, AppError> {
        let guest = self.identity.resolve(ctx)?;
        debug!(game_id = %id, guest = %guest, "Joining game");

        let game = self.store.load(id).await?;
        let before = lifecycle(&game);

        let mut state = game.state;
        turns::join_game(&mut state, guest, &request.starting_positions)?;

        let saved = self.save(id, state, game.lock_version).await?;
        log_transitions(id, &derive_game_transitions(&before, &lifecycle(&saved)));

        self.notify(id, &MoveMessage::Started).await;
        Ok(id)
    }

    /// Validate and apply one move.
    ///
    /// With `expected_lock_version` set, the move is refused with
    /// `OPTIMISTIC_LOCK` unless the game is still at that version.
    pub async fn submit_move(
        &self,
        ctx: &RequestContext,
        id: GameId,
        request: MoveRequest,
        expected_lock_version: Option<i32>,
    ) -> Result<MoveOutcome, AppError> {
        let player = self.identity.resolve(ctx)?;
        debug!(game_id = %id, from = request.from, to = request.to, "Submitting move");

        let game = self.store.load(id).await?;
        if let Some(expected) = expected_lock_version {
            if expected != game.lock_version {
                warn!(
                    game_id = %id,
                    expected,
                    actual = game.lock_version,
                    "Rejected move against stale version"
                );
                return Err(AppError::conflict(
                    ErrorCode::OptimisticLock,
                    format!(
                        "Game lock version mismatch: expected {}, but game has version {}",
                        expected, game.lock_version
                    ),
                ));
            }
        }
        let before = lifecycle(&game);

        let mut state = game.state;
        let applied = turns::apply_move(&mut state, &player, request.from, request.to)?;

        let saved = self.save(id, state, game.lock_version).await?;
        info!(
            game_id = %id,
            side = %applied.side,
            from = %applied.from,
            to = %applied.to,
            result = applied.result.as_str(),
            "Move applied"
        );
        log_transitions(id, &derive_game_transitions(&before, &lifecycle(&saved)));

        self.notify(id, &MoveMessage::from(&applied)).await;
        Ok(MoveOutcome {
            applied,
            lock_version: saved.lock_version,
        })
    }

    /// The caller's redacted view of the game.
    pub async fn player_view(&self, ctx: &RequestContext, id: GameId) -> Result<GameView, AppError> {
        let player = self.identity.resolve(ctx)?;
        let game = self.store.load(id).await?;
        let side = require_side(&game.state, &player)?;

        Ok(GameView {
            id,
            lock_version: game.lock_version,
            view: PlayerView::for_side(&game.state, side),
        })
    }

    /// Destinations the caller may move the piece at `from` to right now.
    pub async fn legal_moves(
        &self,
        ctx: &RequestContext,
        id: GameId,
        from: i64,
    ) -> Result<Vec<Cell>, AppError> {
        let player = self.identity.resolve(ctx)?;
        let game = self.store.load(id).await?;
        let side = require_side(&game.state, &player)?;
        let from = Cell::try_from(from)?;

        Ok(legal_moves(&game.state, side, from))
    }

    async fn save(
        &self,
        id: GameId,
        state: GameState,
        expected_lock_version: i32,
    ) -> Result<Game, AppError> {
        match self.store.save(id, state, expected_lock_version).await {
            Ok(game) => Ok(game),
            Err(e) => {
                if matches!(e, DomainError::Conflict(ConflictKind::OptimisticLock, _)) {
                    warn!(game_id = %id, expected_lock_version, "Concurrent write detected");
                }
                Err(e.into())
            }
        }
    }

    async fn notify(&self, id: GameId, message: &MoveMessage) {
        if let Err(e) = self.notifier.publish(id, message).await {
            warn!(game_id = %id, message = %message, error = %e, "Notification failed");
        }
    }
}
