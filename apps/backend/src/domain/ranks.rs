//! Piece ranks, the fixed army composition, and the dominance table.

use std::fmt;
use std::str::FromStr;

use crate::errors::domain::{DomainError, ValidationKind};

/// Piece rank. `Empty` is the board-internal "no piece" sentinel and is
/// never a legal input rank.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Empty,
    Spy,
    Scout,
    Miner,
    Sergeant,
    Lieutenant,
    Captain,
    Major,
    Colonel,
    General,
    Marshal,
    Bomb,
    Flag,
}

pub const RANK_COUNT: usize = 12;

/// Pieces per side.
pub const ARMY_SIZE: usize = 40;

/// The twelve placeable ranks in table order.
pub const NAMED_RANKS: [Rank; RANK_COUNT] = [
    Rank::Spy,
    Rank::Scout,
    Rank::Miner,
    Rank::Sergeant,
    Rank::Lieutenant,
    Rank::Captain,
    Rank::Major,
    Rank::Colonel,
    Rank::General,
    Rank::Marshal,
    Rank::Bomb,
    Rank::Flag,
];

/// Required pieces per rank, indexed like `NAMED_RANKS`.
pub const ARMY_COMPOSITION: [u8; RANK_COUNT] = [1, 8, 5, 4, 4, 4, 3, 2, 1, 1, 6, 1];

// Beats-sets, indexed like `NAMED_RANKS`. Bomb and Flag never attack.
const BEATS: [&[Rank]; RANK_COUNT] = [
    &[Rank::Marshal, Rank::Flag],
    &[Rank::Spy, Rank::Flag],
    &[Rank::Scout, Rank::Spy, Rank::Bomb, Rank::Flag],
    &[Rank::Miner, Rank::Scout, Rank::Spy, Rank::Flag],
    &[Rank::Sergeant, Rank::Miner, Rank::Scout, Rank::Spy, Rank::Flag],
    &[
        Rank::Lieutenant,
        Rank::Sergeant,
        Rank::Miner,
        Rank::Scout,
        Rank::Spy,
        Rank::Flag,
    ],
    &[
        Rank::Captain,
        Rank::Lieutenant,
        Rank::Sergeant,
        Rank::Miner,
        Rank::Scout,
        Rank::Spy,
        Rank::Flag,
    ],
    &[
        Rank::Major,
        Rank::Captain,
        Rank::Lieutenant,
        Rank::Sergeant,
        Rank::Miner,
        Rank::Scout,
        Rank::Spy,
        Rank::Flag,
    ],
    &[
        Rank::Colonel,
        Rank::Major,
        Rank::Captain,
        Rank::Lieutenant,
        Rank::Sergeant,
        Rank::Miner,
        Rank::Scout,
        Rank::Spy,
        Rank::Flag,
    ],
    &[
        Rank::General,
        Rank::Colonel,
        Rank::Major,
        Rank::Captain,
        Rank::Lieutenant,
        Rank::Sergeant,
        Rank::Miner,
        Rank::Scout,
        Rank::Spy,
        Rank::Flag,
    ],
    &[],
    &[],
];

impl Rank {
    /// Position in `NAMED_RANKS`, or `None` for `Empty`.
    pub const fn table_index(self) -> Option<usize> {
        match self {
            Rank::Empty => None,
            Rank::Spy => Some(0),
            Rank::Scout => Some(1),
            Rank::Miner => Some(2),
            Rank::Sergeant => Some(3),
            Rank::Lieutenant => Some(4),
            Rank::Captain => Some(5),
            Rank::Major => Some(6),
            Rank::Colonel => Some(7),
            Rank::General => Some(8),
            Rank::Marshal => Some(9),
            Rank::Bomb => Some(10),
            Rank::Flag => Some(11),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Rank::Empty => "empty",
            Rank::Spy => "spy",
            Rank::Scout => "scout",
            Rank::Miner => "miner",
            Rank::Sergeant => "sergeant",
            Rank::Lieutenant => "lieutenant",
            Rank::Captain => "captain",
            Rank::Major => "major",
            Rank::Colonel => "colonel",
            Rank::General => "general",
            Rank::Marshal => "marshal",
            Rank::Bomb => "bomb",
            Rank::Flag => "flag",
        }
    }

    /// Pieces of this rank each side fields (0 for `Empty`).
    pub fn required_count(self) -> u8 {
        self.table_index().map_or(0, |i| ARMY_COMPOSITION[i])
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rank {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "empty" => Ok(Rank::Empty),
            "spy" => Ok(Rank::Spy),
            "scout" => Ok(Rank::Scout),
            "miner" => Ok(Rank::Miner),
            "sergeant" => Ok(Rank::Sergeant),
            "lieutenant" => Ok(Rank::Lieutenant),
            "captain" => Ok(Rank::Captain),
            "major" => Ok(Rank::Major),
            "colonel" => Ok(Rank::Colonel),
            "general" => Ok(Rank::General),
            "marshal" => Ok(Rank::Marshal),
            "bomb" => Ok(Rank::Bomb),
            "flag" => Ok(Rank::Flag),
            _ => Err(DomainError::validation(
                ValidationKind::ParseRank,
                format!("unknown rank: {s}"),
            )),
        }
    }
}

/// True for the twelve named ranks, false for `Empty`.
pub fn is_valid_rank(rank: Rank) -> bool {
    rank != Rank::Empty
}

/// False for Bomb and Flag (and `Empty`), true for every other rank.
pub fn is_movable(rank: Rank) -> bool {
    !matches!(rank, Rank::Empty | Rank::Bomb | Rank::Flag)
}

/// Ranks `attacker` defeats in combat.
pub fn beats_set(attacker: Rank) -> &'static [Rank] {
    match attacker.table_index() {
        Some(i) => BEATS[i],
        None => &[],
    }
}

pub fn beats(attacker: Rank, defender: Rank) -> bool {
    beats_set(attacker).contains(&defender)
}

/// Per-rank piece tally for one side.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct RankCounts([u8; RANK_COUNT]);

impl RankCounts {
    /// Record one piece. `Empty` is not counted.
    pub fn add(&mut self, rank: Rank) {
        if let Some(i) = rank.table_index() {
            self.0[i] = self.0[i].saturating_add(1);
        }
    }

    pub fn get(&self, rank: Rank) -> u8 {
        rank.table_index().map_or(0, |i| self.0[i])
    }

    pub fn total(&self) -> usize {
        self.0.iter().map(|&n| n as usize).sum()
    }

    /// Counts match `ARMY_COMPOSITION` exactly.
    pub fn is_standard_army(&self) -> bool {
        self.0 == ARMY_COMPOSITION
    }
}

impl FromIterator<Rank> for RankCounts {
    fn from_iter<I: IntoIterator<Item = Rank>>(iter: I) -> Self {
        let mut counts = RankCounts::default();
        for rank in iter {
            counts.add(rank);
        }
        counts
    }
}

impl fmt::Display for RankCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (rank, n) in NAMED_RANKS.iter().zip(self.0.iter()) {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{rank}={n}")?;
            first = false;
        }
        Ok(())
    }
}
