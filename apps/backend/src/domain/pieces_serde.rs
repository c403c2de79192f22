//! Serialization and deserialization for ranks, owners, sides, and boards

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::board::{Board, Cell, Owner, PieceData, Side, BOARD_CELLS};
use super::ranks::Rank;
use super::setup::RankEntry;

// Rank serde (lowercase names, "empty" for the sentinel)
impl Serialize for Rank {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Rank {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Rank>()
            .map_err(|_| D::Error::custom(format!("Invalid rank: {s}")))
    }
}

// Submitted rank entries keep unknown tokens for setup validation
impl Serialize for RankEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RankEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(RankEntry::parse(&s))
    }
}

// Owner serde
impl Serialize for Owner {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Owner {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "none" => Ok(Owner::None),
            "host" => Ok(Owner::Host),
            "guest" => Ok(Owner::Guest),
            _ => Err(D::Error::custom(format!("Invalid player: {s}"))),
        }
    }
}

// Side serde
impl Serialize for Side {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Side {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "host" => Ok(Side::Host),
            "guest" => Ok(Side::Guest),
            _ => Err(D::Error::custom(format!("Invalid side: {s}"))),
        }
    }
}

// PieceData serde ({"piece", "player", "revealed"})
#[derive(Serialize, Deserialize)]
struct PieceDataRepr {
    piece: Rank,
    player: Owner,
    #[serde(default)]
    revealed: bool,
}

impl Serialize for PieceData {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        PieceDataRepr {
            piece: self.rank,
            player: self.owner,
            revealed: self.revealed,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PieceData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = PieceDataRepr::deserialize(deserializer)?;
        if (repr.piece == Rank::Empty) != (repr.player == Owner::None) {
            return Err(D::Error::custom(format!(
                "piece {} cannot belong to {}",
                repr.piece,
                repr.player.as_str()
            )));
        }
        Ok(PieceData {
            rank: repr.piece,
            owner: repr.player,
            revealed: repr.revealed,
        })
    }
}

// Board serde: object keyed by cell index, all 100 cells required
impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(BOARD_CELLS))?;
        for (cell, piece) in self.iter() {
            map.serialize_entry(&cell.value(), piece)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<u8, PieceData>::deserialize(deserializer)?;
        if let Some(stray) = raw.keys().find(|&&k| k as usize >= BOARD_CELLS) {
            return Err(D::Error::custom(format!("cell {stray} is not on the board")));
        }

        let mut board = Board::empty();
        for cell in Cell::all() {
            let piece = raw
                .get(&cell.value())
                .ok_or_else(|| D::Error::custom(format!("board is missing cell {cell}")))?;
            board.set(cell, *piece);
        }
        Ok(board)
    }
}
