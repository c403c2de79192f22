//! 10×10 board model: cells, sides, piece data, and terrain.

use std::fmt;
use std::ops::{Index, Range};

use crate::domain::ranks::Rank;
use crate::errors::domain::{DomainError, ValidationKind};

pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_CELLS: usize = 100;

/// Permanently impassable lake cells.
pub const WATER_CELLS: [u8; 8] = [42, 43, 46, 47, 52, 53, 56, 57];

/// A cell index in `0..=99`, row-major.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Cell(u8);

impl Cell {
    /// Returns `None` when `index` is off the board.
    pub fn new(index: i64) -> Option<Self> {
        u8::try_from(index)
            .ok()
            .filter(|&i| (i as usize) < BOARD_CELLS)
            .map(Cell)
    }

    pub const fn from_row_col(row: u8, col: u8) -> Self {
        Cell(row * BOARD_WIDTH + col)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn row(self) -> u8 {
        self.0 / BOARD_WIDTH
    }

    pub const fn col(self) -> u8 {
        self.0 % BOARD_WIDTH
    }

    pub fn is_water(self) -> bool {
        WATER_CELLS.contains(&self.0)
    }

    /// Every cell in index order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..BOARD_CELLS as u8).map(Cell)
    }
}

impl TryFrom<i64> for Cell {
    type Error = DomainError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        Cell::new(index).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::OutOfBounds,
                format!("cell {index} is not on the board"),
            )
        })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two playing roles.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    Host,
    Guest,
}

impl Side {
    pub const fn opponent(self) -> Side {
        match self {
            Side::Host => Side::Guest,
            Side::Guest => Side::Host,
        }
    }

    /// Cell indices this side sets up in: 0..40 for Host, 60..100 for Guest.
    pub const fn home_range(self) -> Range<u8> {
        match self {
            Side::Host => 0..40,
            Side::Guest => 60..100,
        }
    }

    pub fn home_cells(self) -> impl Iterator<Item = Cell> {
        self.home_range().map(Cell)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Side::Host => "host",
            Side::Guest => "guest",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who controls a cell's piece. Empty cells are always `Owner::None`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Owner {
    None,
    Host,
    Guest,
}

impl From<Side> for Owner {
    fn from(side: Side) -> Self {
        match side {
            Side::Host => Owner::Host,
            Side::Guest => Owner::Guest,
        }
    }
}

impl Owner {
    pub const fn side(self) -> Option<Side> {
        match self {
            Owner::None => None,
            Owner::Host => Some(Side::Host),
            Owner::Guest => Some(Side::Guest),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Owner::None => "none",
            Owner::Host => "host",
            Owner::Guest => "guest",
        }
    }
}

/// Contents of one cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PieceData {
    pub rank: Rank,
    pub owner: Owner,
    pub revealed: bool,
}

impl PieceData {
    pub const EMPTY: PieceData = PieceData {
        rank: Rank::Empty,
        owner: Owner::None,
        revealed: false,
    };

    /// A fresh, unrevealed piece.
    pub fn new(rank: Rank, side: Side) -> Self {
        Self {
            rank,
            owner: side.into(),
            revealed: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rank == Rank::Empty
    }

    pub fn belongs_to(&self, side: Side) -> bool {
        self.owner == Owner::from(side)
    }
}

impl Default for PieceData {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Total mapping from every cell to its contents.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [PieceData; BOARD_CELLS],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [PieceData::EMPTY; BOARD_CELLS],
        }
    }

    pub fn get(&self, cell: Cell) -> &PieceData {
        &self.cells[cell.index()]
    }

    pub fn set(&mut self, cell: Cell, piece: PieceData) {
        self.cells[cell.index()] = piece;
    }

    pub fn clear(&mut self, cell: Cell) {
        self.set(cell, PieceData::EMPTY);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, &PieceData)> {
        Cell::all().zip(self.cells.iter())
    }

    /// Pieces currently on the board for `side`.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Cell, &PieceData)> {
        self.iter().filter(move |(_, p)| p.belongs_to(side))
    }

    /// True when every water cell is empty and every empty cell is unowned.
    pub fn is_consistent(&self) -> bool {
        self.iter().all(|(cell, p)| {
            let water_ok = !cell.is_water() || p.is_empty();
            let owner_ok = p.is_empty() == (p.owner == Owner::None);
            water_ok && owner_ok
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Index<Cell> for Board {
    type Output = PieceData;

    fn index(&self, cell: Cell) -> &PieceData {
        self.get(cell)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_WIDTH {
            for col in 0..BOARD_WIDTH {
                let cell = Cell::from_row_col(row, col);
                let piece = self.get(cell);
                let glyph = match (cell.is_water(), piece.owner) {
                    (true, _) => "~~".to_string(),
                    (false, Owner::None) => "..".to_string(),
                    (false, owner) => {
                        let tag = if owner == Owner::Host { 'h' } else { 'g' };
                        format!("{tag}{}", rank_glyph(piece.rank))
                    }
                };
                write!(f, "{glyph} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn rank_glyph(rank: Rank) -> char {
    match rank {
        Rank::Empty => '.',
        Rank::Spy => 'S',
        Rank::Scout => '2',
        Rank::Miner => '3',
        Rank::Sergeant => '4',
        Rank::Lieutenant => '5',
        Rank::Captain => '6',
        Rank::Major => '7',
        Rank::Colonel => '8',
        Rank::General => '9',
        Rank::Marshal => 'M',
        Rank::Bomb => 'B',
        Rank::Flag => 'F',
    }
}
