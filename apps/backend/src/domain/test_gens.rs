// Proptest generators for domain types.
// Layouts are valid by construction; invalid ones are derived from valid ones.

use proptest::prelude::*;

use crate::domain::board::{Cell, Side, BOARD_CELLS};
use crate::domain::ranks::{Rank, NAMED_RANKS};
use crate::domain::setup::{army_ranks, Layout, RankEntry};

pub fn side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Host), Just(Side::Guest)]
}

/// Any of the 12 placeable ranks.
pub fn named_rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(NAMED_RANKS.to_vec())
}

/// Ranks that can move.
pub fn movable_rank() -> impl Strategy<Value = Rank> {
    named_rank().prop_filter("bombs and flags stay put", |r| {
        !matches!(r, Rank::Bomb | Rank::Flag)
    })
}

/// Any on-board cell.
pub fn cell() -> impl Strategy<Value = Cell> {
    (0..BOARD_CELLS as u8).prop_map(|i| Cell::from_row_col(i / 10, i % 10))
}

/// Any dry cell.
pub fn land_cell() -> impl Strategy<Value = Cell> {
    cell().prop_filter("not a lake", |c| !c.is_water())
}

/// A full army shuffled across `side`'s home half.
pub fn army_layout(side: Side) -> impl Strategy<Value = Layout> {
    Just(army_ranks())
        .prop_shuffle()
        .prop_map(move |ranks| {
            side.home_cells()
                .map(Cell::value)
                .zip(ranks.into_iter().map(RankEntry::from))
                .collect()
        })
}

/// Side plus a valid layout for it.
pub fn side_and_layout() -> impl Strategy<Value = (Side, Layout)> {
    side().prop_flat_map(|s| (Just(s), army_layout(s)))
}
