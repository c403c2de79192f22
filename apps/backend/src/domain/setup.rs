//! Army setup validation and starting layouts.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::board::{Board, Cell, PieceData, Side};
use crate::domain::ranks::{
    is_valid_rank, Rank, RankCounts, ARMY_COMPOSITION, ARMY_SIZE, NAMED_RANKS,
};
use crate::errors::domain::{DomainError, ValidationKind};

/// One submitted cell: a rank name that parsed, or the raw token that did not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankEntry {
    Known(Rank),
    Unknown(String),
}

impl RankEntry {
    pub fn parse(token: &str) -> Self {
        token
            .parse::<Rank>()
            .map_or_else(|_| RankEntry::Unknown(token.to_string()), RankEntry::Known)
    }

    pub fn as_str(&self) -> &str {
        match self {
            RankEntry::Known(rank) => rank.as_str(),
            RankEntry::Unknown(token) => token,
        }
    }

    /// The placeable rank, if this entry names one.
    fn placeable(&self) -> Option<Rank> {
        match self {
            RankEntry::Known(rank) if is_valid_rank(*rank) => Some(*rank),
            _ => None,
        }
    }
}

impl From<Rank> for RankEntry {
    fn from(rank: Rank) -> Self {
        RankEntry::Known(rank)
    }
}

/// Submitted starting positions: cell index → rank entry.
pub type Layout = BTreeMap<u8, RankEntry>;

/// A side's army after validation. Only `validate_army` builds one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Army {
    side: Side,
    ranks: [Rank; ARMY_SIZE],
}

impl Army {
    pub fn side(&self) -> Side {
        self.side
    }

    pub fn cells(&self) -> impl Iterator<Item = (Cell, Rank)> + '_ {
        self.side.home_cells().zip(self.ranks.iter().copied())
    }

    /// Write this army onto its home cells, leaving every other cell as is.
    pub fn place_on(&self, board: &mut Board) {
        for (cell, rank) in self.cells() {
            board.set(cell, PieceData::new(rank, self.side));
        }
    }
}

/// Validate one side's starting positions.
///
/// Walks the side's 40 home cells in order and fails on the first cell that is
/// missing or carries a non-placeable rank, then checks the per-rank totals.
/// Entries outside the home cells are not inspected.
pub fn validate_army(layout: &Layout, side: Side) -> Result<Army, DomainError> {
    let mut ranks = [Rank::Empty; ARMY_SIZE];
    let mut counts = RankCounts::default();

    for (slot, cell) in side.home_cells().enumerate() {
        let Some(entry) = layout.get(&cell.value()) else {
            return Err(DomainError::validation(
                ValidationKind::MissingPiece(cell.value()),
                format!("piece {cell} is missing"),
            ));
        };
        let Some(rank) = entry.placeable() else {
            let token = entry.as_str();
            return Err(DomainError::validation(
                ValidationKind::InvalidRank(token.to_string()),
                format!("piece {token} is not valid"),
            ));
        };
        counts.add(rank);
        ranks[slot] = rank;
    }

    if !counts.is_standard_army() {
        return Err(DomainError::validation(
            ValidationKind::InvalidArmyComposition(counts),
            format!("number of pieces ({counts}) is not valid"),
        ));
    }

    Ok(Army { side, ranks })
}

/// Every rank in table order, repeated per `ARMY_COMPOSITION`.
pub fn army_ranks() -> Vec<Rank> {
    NAMED_RANKS
        .iter()
        .zip(ARMY_COMPOSITION.iter())
        .flat_map(|(&rank, &n)| std::iter::repeat(rank).take(n as usize))
        .collect()
}

/// Fills the side's home cells in rank-table order: spy first, flag last.
pub fn standard_layout(side: Side) -> Layout {
    side.home_cells()
        .map(Cell::value)
        .zip(army_ranks().into_iter().map(RankEntry::from))
        .collect()
}

/// A valid layout shuffled deterministically from `seed`.
pub fn shuffled_layout(side: Side, seed: u64) -> Layout {
    let mut ranks = army_ranks();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    ranks.shuffle(&mut rng);
    side.home_cells()
        .map(Cell::value)
        .zip(ranks.into_iter().map(RankEntry::from))
        .collect()
}
