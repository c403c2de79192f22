//! Test-only builders for boards and game states.

use crate::domain::board::{Board, Cell, PieceData, Side};
use crate::domain::ranks::Rank;
use crate::domain::setup::standard_layout;
use crate::domain::state::{GameState, PlayerId, Status};
use crate::domain::turns::{create_game, join_game};

pub const HOST: &str = "host-player";
pub const GUEST: &str = "guest-player";

pub fn pid(id: &str) -> PlayerId {
    PlayerId::new(id).unwrap()
}

pub fn cell(i: u8) -> Cell {
    Cell::new(i64::from(i)).unwrap()
}

/// Board holding only the listed pieces.
pub fn board_with(pieces: &[(u8, Rank, Side)]) -> Board {
    let mut board = Board::empty();
    for &(i, rank, side) in pieces {
        board.set(cell(i), PieceData::new(rank, side));
    }
    board
}

/// Both players seated on `board` with the given status.
pub fn state_with(board: Board, status: Status) -> GameState {
    GameState {
        board,
        host: Some(pid(HOST)),
        guest: Some(pid(GUEST)),
        status,
    }
}

/// A joined game with both standard layouts, host to move.
pub fn started_game() -> GameState {
    let mut state = create_game(pid(HOST), &standard_layout(Side::Host)).unwrap();
    join_game(&mut state, pid(GUEST), &standard_layout(Side::Guest)).unwrap();
    state
}
