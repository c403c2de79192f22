/// Property-based tests for army setup validation
use proptest::prelude::*;

use crate::domain::board::{Board, Side};
use crate::domain::ranks::{Rank, ARMY_SIZE};
use crate::domain::setup::{validate_army, RankEntry};
use crate::domain::{test_gens, test_prelude};
use crate::errors::domain::ValidationKind;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: any arrangement of the standard army over the home half is accepted.
    #[test]
    fn prop_any_arrangement_is_accepted((side, layout) in test_gens::side_and_layout()) {
        let army = validate_army(&layout, side);
        prop_assert!(army.is_ok(), "arrangement rejected: {:?}", army.err());

        let mut board = Board::empty();
        army.unwrap().place_on(&mut board);
        prop_assert_eq!(board.pieces_of(side).count(), ARMY_SIZE);
        prop_assert_eq!(board.pieces_of(side.opponent()).count(), 0);
        prop_assert!(board.is_consistent());
    }

    /// Property: swapping any one piece for a different rank breaks the counts.
    #[test]
    fn prop_count_deviation_is_rejected(
        (side, layout) in test_gens::side_and_layout(),
        slot in 0usize..ARMY_SIZE,
        replacement in test_gens::named_rank(),
    ) {
        let key = side.home_range().start + slot as u8;
        let mut layout = layout;
        let replaced = layout.insert(key, replacement.into());
        prop_assume!(replaced != Some(RankEntry::Known(replacement)));

        let err = validate_army(&layout, side).unwrap_err();
        prop_assert!(matches!(
            err.validation_kind(),
            Some(ValidationKind::InvalidArmyComposition(_))
        ));
    }

    /// Property: a hole anywhere in the home half is reported at that cell.
    #[test]
    fn prop_missing_cell_is_reported(
        (side, layout) in test_gens::side_and_layout(),
        slot in 0usize..ARMY_SIZE,
    ) {
        let key = side.home_range().start + slot as u8;
        let mut layout = layout;
        layout.remove(&key);

        let err = validate_army(&layout, side).unwrap_err();
        prop_assert_eq!(err.validation_kind(), Some(&ValidationKind::MissingPiece(key)));
    }

    /// Property: the empty sentinel is never a placeable rank.
    #[test]
    fn prop_empty_rank_is_rejected(
        (side, layout) in test_gens::side_and_layout(),
        slot in 0usize..ARMY_SIZE,
    ) {
        let key = side.home_range().start + slot as u8;
        let mut layout = layout;
        layout.insert(key, Rank::Empty.into());

        let err = validate_army(&layout, side).unwrap_err();
        prop_assert_eq!(
            err.validation_kind(),
            Some(&ValidationKind::InvalidRank("empty".to_string()))
        );
    }

    /// Property: a layout for one side never validates for the other.
    #[test]
    fn prop_layout_is_side_specific((side, layout) in test_gens::side_and_layout()) {
        let err = validate_army(&layout, side.opponent()).unwrap_err();
        let first = side.opponent().home_range().start;
        prop_assert_eq!(err.validation_kind(), Some(&ValidationKind::MissingPiece(first)));
    }
}
