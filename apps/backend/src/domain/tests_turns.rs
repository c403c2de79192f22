// Lifecycle tests: create, join, and turn-ordered moves.

use crate::domain::board::{Owner, PieceData, Side};
use crate::domain::movement::{validate_move, MoveResult};
use crate::domain::ranks::Rank;
use crate::domain::setup::standard_layout;
use crate::domain::state::Status;
use crate::domain::test_state_helpers::{
    board_with, cell, pid, started_game, state_with, GUEST, HOST,
};
use crate::domain::turns::{apply_move, create_game, join_game};
use crate::errors::domain::{DomainError, ValidationKind};

fn kind(err: DomainError) -> ValidationKind {
    err.validation_kind().cloned().unwrap()
}

#[test]
fn create_populates_only_host_half() {
    let state = create_game(pid(HOST), &standard_layout(Side::Host)).unwrap();
    assert_eq!(state.status, Status::Setup);
    assert_eq!(state.host, Some(pid(HOST)));
    assert_eq!(state.guest, None);

    for (c, piece) in state.board.iter() {
        if c.value() < 40 {
            assert!(piece.belongs_to(Side::Host), "cell {c} should hold a host piece");
        } else {
            assert!(piece.is_empty(), "cell {c} should be empty");
        }
    }
}

#[test]
fn create_rejects_bad_army() {
    let mut layout = standard_layout(Side::Host);
    layout.insert(0, Rank::Marshal.into());
    let err = create_game(pid(HOST), &layout).unwrap_err();
    assert!(matches!(kind(err), ValidationKind::InvalidArmyComposition(_)));
}

#[test]
fn join_starts_game_and_leaves_host_half_alone() {
    let mut state = create_game(pid(HOST), &standard_layout(Side::Host)).unwrap();
    let host_half: Vec<PieceData> = (0..60).map(|i| *state.board.get(cell(i))).collect();

    let mut layout = standard_layout(Side::Guest);
    layout.insert(5, Rank::Flag.into());
    layout.insert(45, Rank::Bomb.into());
    join_game(&mut state, pid(GUEST), &layout).unwrap();

    assert_eq!(state.status, Status::HostMove);
    assert_eq!(state.guest, Some(pid(GUEST)));
    let after: Vec<PieceData> = (0..60).map(|i| *state.board.get(cell(i))).collect();
    assert_eq!(after, host_half);
    assert_eq!(state.board.get(cell(99)).rank, Rank::Flag);
    assert_eq!(state.board.get(cell(99)).owner, Owner::Guest);
    assert!(state.board.is_consistent());
}

#[test]
fn join_requires_setup_and_a_different_player() {
    let mut state = started_game();
    let err = join_game(&mut state, pid("late"), &standard_layout(Side::Guest)).unwrap_err();
    assert_eq!(kind(err), ValidationKind::PhaseMismatch);

    let mut state = create_game(pid(HOST), &standard_layout(Side::Host)).unwrap();
    let err = join_game(&mut state, pid(HOST), &standard_layout(Side::Guest)).unwrap_err();
    assert_eq!(kind(err), ValidationKind::AlreadyJoined);
}

#[test]
fn failed_join_changes_nothing() {
    let mut state = create_game(pid(HOST), &standard_layout(Side::Host)).unwrap();
    let before = state.clone();

    let mut layout = standard_layout(Side::Guest);
    layout.remove(&77);
    let err = join_game(&mut state, pid(GUEST), &layout).unwrap_err();
    assert_eq!(kind(err), ValidationKind::MissingPiece(77));
    assert_eq!(state, before);
}

#[test]
fn moves_wait_for_the_guest() {
    let mut state = create_game(pid(HOST), &standard_layout(Side::Host)).unwrap();
    let err = apply_move(&mut state, &pid(HOST), 30, 40).unwrap_err();
    assert_eq!(kind(err), ValidationKind::GameNotStarted);
}

#[test]
fn strangers_and_out_of_turn_players_are_rejected() {
    let mut state = started_game();
    let before = state.clone();

    let err = apply_move(&mut state, &pid("mallory"), 30, 40).unwrap_err();
    assert_eq!(kind(err), ValidationKind::NotAPlayer);

    let err = apply_move(&mut state, &pid(GUEST), 60, 50).unwrap_err();
    assert_eq!(kind(err), ValidationKind::NotYourTurn);

    assert_eq!(state, before);
}

#[test]
fn turns_alternate_after_each_move() {
    let mut state = started_game();

    let applied = apply_move(&mut state, &pid(HOST), 30, 40).unwrap();
    assert_eq!(applied.result, MoveResult::Moves);
    assert_eq!(applied.side, Side::Host);
    assert_eq!(state.status, Status::GuestMove);

    let applied = apply_move(&mut state, &pid(GUEST), 60, 50).unwrap();
    assert_eq!(applied.result, MoveResult::Moves);
    assert_eq!(state.status, Status::HostMove);

    // Colonel takes the spy.
    let applied = apply_move(&mut state, &pid(HOST), 40, 50).unwrap();
    assert_eq!(applied.result, MoveResult::Attacks);
    assert_eq!(applied.status_after, Status::GuestMove);
    assert!(state.board.get(cell(40)).is_empty());
    assert_eq!(state.board.get(cell(50)).rank, Rank::Colonel);
    assert_eq!(state.board.get(cell(50)).owner, Owner::Host);
}

#[test]
fn illegal_move_leaves_state_untouched() {
    let mut state = started_game();
    let before = state.clone();
    let err = apply_move(&mut state, &pid(HOST), 33, 43).unwrap_err();
    assert_eq!(kind(err), ValidationKind::ImmovablePiece);
    let err = apply_move(&mut state, &pid(HOST), 32, 42).unwrap_err();
    assert_eq!(kind(err), ValidationKind::BlockedByWater);
    assert_eq!(state, before);
}

#[test]
fn miner_clears_bomb_but_sergeant_does_not() {
    let board = board_with(&[
        (44, Rank::Miner, Side::Host),
        (54, Rank::Bomb, Side::Guest),
        (45, Rank::Sergeant, Side::Host),
        (55, Rank::Bomb, Side::Guest),
        (90, Rank::Flag, Side::Guest),
        (0, Rank::Flag, Side::Host),
        (91, Rank::Scout, Side::Guest),
    ]);
    let mut state = state_with(board, Status::HostMove);

    let applied = apply_move(&mut state, &pid(HOST), 44, 54).unwrap();
    assert_eq!(applied.result, MoveResult::Attacks);
    assert_eq!(state.board.get(cell(54)).rank, Rank::Miner);
    assert!(state.board.get(cell(44)).is_empty());

    apply_move(&mut state, &pid(GUEST), 91, 92).unwrap();

    let applied = apply_move(&mut state, &pid(HOST), 45, 55).unwrap();
    assert_eq!(applied.result, MoveResult::Defends);
    assert!(state.board.get(cell(45)).is_empty());
    assert_eq!(state.board.get(cell(55)).rank, Rank::Bomb);
    assert!(!state.board.get(cell(55)).revealed);
}

#[test]
fn failed_scout_attack_reveals_defender() {
    let board = board_with(&[
        (5, Rank::Scout, Side::Host),
        (65, Rank::General, Side::Guest),
    ]);
    let mut state = state_with(board, Status::HostMove);

    let applied = apply_move(&mut state, &pid(HOST), 5, 65).unwrap();
    assert_eq!(applied.result, MoveResult::Reveals(Rank::General));
    assert!(state.board.get(cell(5)).is_empty());

    let general = state.board.get(cell(65));
    assert_eq!(general.rank, Rank::General);
    assert_eq!(general.owner, Owner::Guest);
    assert!(general.revealed);
    assert_eq!(state.status, Status::GuestMove);
}

#[test]
fn revealed_flag_travels_with_the_piece() {
    let mut board = board_with(&[(65, Rank::General, Side::Guest)]);
    let mut general = *board.get(cell(65));
    general.revealed = true;
    board.set(cell(65), general);
    let mut state = state_with(board, Status::GuestMove);

    apply_move(&mut state, &pid(GUEST), 65, 64).unwrap();
    assert!(state.board.get(cell(64)).revealed);
    assert!(state.board.get(cell(65)).is_empty());
}

#[test]
fn capturing_the_flag_ends_the_game() {
    let board = board_with(&[
        (5, Rank::Scout, Side::Host),
        (15, Rank::Flag, Side::Guest),
        (70, Rank::Marshal, Side::Guest),
    ]);
    let mut state = state_with(board, Status::HostMove);
    let board_before = state.board.clone();

    let applied = apply_move(&mut state, &pid(HOST), 5, 15).unwrap();
    assert_eq!(applied.result, MoveResult::Wins);
    assert_eq!(applied.status_after, Status::Done);
    assert_eq!(state.status, Status::Done);
    assert_eq!(state.board, board_before);

    let err = apply_move(&mut state, &pid(GUEST), 70, 60).unwrap_err();
    assert_eq!(kind(err), ValidationKind::GameAlreadyOver);
    let err = apply_move(&mut state, &pid(HOST), 5, 15).unwrap_err();
    assert_eq!(kind(err), ValidationKind::GameAlreadyOver);
}

#[test]
fn scout_runs_up_the_column_then_is_stopped() {
    let board = board_with(&[
        (5, Rank::Scout, Side::Host),
        (65, Rank::Spy, Side::Guest),
        (99, Rank::Flag, Side::Guest),
    ]);
    let mut state = state_with(board, Status::HostMove);

    let applied = apply_move(&mut state, &pid(HOST), 5, 35).unwrap();
    assert_eq!(applied.result, MoveResult::Moves);
    assert_eq!(state.board.get(cell(35)).rank, Rank::Scout);

    // Out of turn first, then blocked by the spy on the path.
    let err = apply_move(&mut state, &pid(HOST), 35, 75).unwrap_err();
    assert_eq!(kind(err), ValidationKind::NotYourTurn);
    let err = validate_move(&state.board, 35, 75, Side::Host).unwrap_err();
    assert_eq!(kind(err), ValidationKind::BlockedByPiece);
}
