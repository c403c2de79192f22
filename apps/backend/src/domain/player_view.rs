//! Player view of game state - what information is visible to one side.
//!
//! Own pieces are always shown with their rank. Opponent pieces show only
//! their position and owner until a failed Scout attack reveals them.

use serde::Serialize;

use crate::domain::board::{Cell, Owner, Side};
use crate::domain::movement::legal_destinations;
use crate::domain::ranks::Rank;
use crate::domain::state::{GameState, Status};

/// One cell as seen by a player. `piece` is `None` for a hidden enemy piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisiblePiece {
    pub piece: Option<Rank>,
    pub player: Owner,
    pub revealed: bool,
}

/// Information visible to a player, including whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    pub side: Side,
    pub status: Status,
    pub your_turn: bool,
    pub board: Vec<VisiblePiece>,
}

impl PlayerView {
    pub fn for_side(state: &GameState, side: Side) -> Self {
        let board = state
            .board
            .iter()
            .map(|(_, p)| {
                let visible = p.is_empty() || p.belongs_to(side) || p.revealed;
                VisiblePiece {
                    piece: visible.then_some(p.rank),
                    player: p.owner,
                    revealed: p.revealed,
                }
            })
            .collect();

        Self {
            side,
            status: state.status,
            your_turn: state.status.turn() == Some(side),
            board,
        }
    }

    pub fn piece_at(&self, cell: Cell) -> &VisiblePiece {
        &self.board[cell.index()]
    }
}

/// Legal destinations for the piece at `from`, or empty when it is not
/// `side`'s turn.
pub fn legal_moves(state: &GameState, side: Side, from: Cell) -> Vec<Cell> {
    if state.status.turn() != Some(side) {
        return Vec::new();
    }
    legal_destinations(&state.board, from, side)
}
