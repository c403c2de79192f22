//! Game lifecycle: creation, join, and turn-ordered moves.

use crate::domain::board::{Board, Cell, Side};
use crate::domain::movement::{validate_move, MoveResult};
use crate::domain::setup::{validate_army, Layout};
use crate::domain::state::{require_host, GameState, PlayerId, Status};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of a move that has been applied to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveApplied {
    pub side: Side,
    pub from: Cell,
    pub to: Cell,
    pub result: MoveResult,
    pub status_after: Status,
}

/// Start a game in `Setup` with only the host's half populated.
pub fn create_game(host: PlayerId, layout: &Layout) -> Result<GameState, DomainError> {
    let army = validate_army(layout, Side::Host)?;
    let mut board = Board::empty();
    army.place_on(&mut board);

    Ok(GameState {
        board,
        host: Some(host),
        guest: None,
        status: Status::Setup,
    })
}

/// Seat the guest, place their army, and hand the first move to the host.
pub fn join_game(
    state: &mut GameState,
    guest: PlayerId,
    layout: &Layout,
) -> Result<(), DomainError> {
    if state.status != Status::Setup || state.guest.is_some() {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "game has already started",
        ));
    }
    if require_host(state, "join_game")? == &guest {
        return Err(DomainError::validation(
            ValidationKind::AlreadyJoined,
            "host can not join their own game",
        ));
    }

    let army = validate_army(layout, Side::Guest)?;
    army.place_on(&mut state.board);
    state.guest = Some(guest);
    state.status = Status::HostMove;
    Ok(())
}

/// Validate and apply one move by `player`.
///
/// Nothing in `state` changes unless every check passes.
pub fn apply_move(
    state: &mut GameState,
    player: &PlayerId,
    from: i64,
    to: i64,
) -> Result<MoveApplied, DomainError> {
    if state.status.is_over() {
        return Err(DomainError::validation(
            ValidationKind::GameAlreadyOver,
            "game is already over",
        ));
    }
    let Some(turn) = state.status.turn().filter(|_| state.both_seated()) else {
        return Err(DomainError::validation(
            ValidationKind::GameNotStarted,
            "game has not started",
        ));
    };

    let Some(side) = state.role_of(player) else {
        return Err(DomainError::validation(
            ValidationKind::NotAPlayer,
            "user is not a player of this game",
        ));
    };
    if side != turn {
        return Err(DomainError::validation(
            ValidationKind::NotYourTurn,
            format!("it is not the {side}'s turn"),
        ));
    }

    let checked = validate_move(&state.board, from, to, side)?;
    let (from, to) = (checked.from, checked.to);

    match checked.result {
        MoveResult::Moves | MoveResult::Attacks => {
            let mover = *state.board.get(from);
            state.board.set(to, mover);
            state.board.clear(from);
        }
        MoveResult::Defends => {
            state.board.clear(from);
        }
        MoveResult::Reveals(_) => {
            state.board.clear(from);
            let mut defender = *state.board.get(to);
            defender.revealed = true;
            state.board.set(to, defender);
        }
        MoveResult::Wins => {}
    }

    state.status = match checked.result {
        MoveResult::Wins => Status::Done,
        _ => Status::for_turn(side.opponent()),
    };

    Ok(MoveApplied {
        side,
        from,
        to,
        result: checked.result,
        status_after: state.status,
    })
}
