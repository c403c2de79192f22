//! Move geometry validation.

use crate::domain::board::{Board, Cell, Owner, Side};
use crate::domain::combat::{resolve_combat, CombatOutcome};
use crate::domain::ranks::{is_movable, Rank};
use crate::errors::domain::{DomainError, ValidationKind};

/// Classification of a legal move.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MoveResult {
    Moves,
    Attacks,
    Defends,
    /// Failed Scout attack; carries the defender's rank.
    Reveals(Rank),
    Wins,
}

impl MoveResult {
    fn from_combat(outcome: CombatOutcome, defender: Rank) -> Self {
        match outcome {
            CombatOutcome::Attacks => MoveResult::Attacks,
            CombatOutcome::Defends => MoveResult::Defends,
            CombatOutcome::Reveals => MoveResult::Reveals(defender),
            CombatOutcome::Wins => MoveResult::Wins,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            MoveResult::Moves => "moves",
            MoveResult::Attacks => "attacks",
            MoveResult::Defends => "defends",
            MoveResult::Reveals(_) => "reveals",
            MoveResult::Wins => "wins",
        }
    }
}

/// A move that passed every geometric rule, with its classification.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CheckedMove {
    pub from: Cell,
    pub to: Cell,
    pub mover: Rank,
    pub result: MoveResult,
}

fn reject(kind: ValidationKind, detail: impl Into<String>) -> DomainError {
    DomainError::validation(kind, detail)
}

/// Cells from `from` to `to` inclusive, ascending. Steps by row when the
/// column is shared, by column otherwise.
pub fn path_between(from: Cell, to: Cell) -> Vec<Cell> {
    let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
    if lo.col() == hi.col() {
        (lo.row()..=hi.row())
            .map(|row| Cell::from_row_col(row, lo.col()))
            .collect()
    } else {
        (lo.col()..=hi.col())
            .map(|col| Cell::from_row_col(lo.row(), col))
            .collect()
    }
}

/// Decide whether `side` may move the piece at `from` to `to` on `board`.
///
/// Rules are checked in a fixed order and the first failure is returned.
/// The board is never mutated.
pub fn validate_move(
    board: &Board,
    from: i64,
    to: i64,
    side: Side,
) -> Result<CheckedMove, DomainError> {
    let from = Cell::try_from(from)?;
    let to = Cell::try_from(to)?;

    let piece = board.get(from);
    if piece.is_empty() {
        return Err(reject(
            ValidationKind::NoPiece,
            format!("there is no piece on cell {from}"),
        ));
    }
    if !is_movable(piece.rank) {
        return Err(reject(
            ValidationKind::ImmovablePiece,
            format!("{} can not move", piece.rank),
        ));
    }
    if !piece.belongs_to(side) {
        return Err(reject(
            ValidationKind::NotOwner,
            format!("piece is not the {side}'s"),
        ));
    }
    if from == to {
        return Err(reject(
            ValidationKind::MustMove,
            format!("{} must move", piece.rank),
        ));
    }

    let vertical = from.row() != to.row();
    let horizontal = from.col() != to.col();
    if vertical && horizontal {
        return Err(reject(
            ValidationKind::IllegalDiagonal,
            "piece can not move diagonally",
        ));
    }

    let path = path_between(from, to);
    if path.len() > 2 && piece.rank != Rank::Scout {
        return Err(reject(
            ValidationKind::TooFar,
            format!("{} can not move more than one space", piece.rank),
        ));
    }
    if let Some(lake) = path.iter().find(|c| c.is_water()) {
        return Err(reject(
            ValidationKind::BlockedByWater,
            format!("piece can not move through water at {lake}"),
        ));
    }
    let interior = &path[1..path.len() - 1];
    if let Some(blocker) = interior.iter().find(|&&c| !board.get(c).is_empty()) {
        return Err(reject(
            ValidationKind::BlockedByPiece,
            format!("piece can not move through other piece at {blocker}"),
        ));
    }

    let target = board.get(to);
    let result = match target.owner {
        Owner::None => MoveResult::Moves,
        owner if owner == Owner::from(side) => {
            return Err(reject(
                ValidationKind::DestinationOccupiedBySelf,
                format!("piece can not end on another piece owned by the {side}"),
            ));
        }
        _ => MoveResult::from_combat(resolve_combat(piece.rank, target.rank), target.rank),
    };

    Ok(CheckedMove {
        from,
        to,
        mover: piece.rank,
        result,
    })
}

/// Every destination `side` could legally move the piece at `from` to, ascending.
pub fn legal_destinations(board: &Board, from: Cell, side: Side) -> Vec<Cell> {
    let origin = i64::from(from.value());
    Cell::all()
        .filter(|to| to.row() == from.row() || to.col() == from.col())
        .filter(|to| validate_move(board, origin, i64::from(to.value()), side).is_ok())
        .collect()
}
