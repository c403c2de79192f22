//! Domain layer: pure rules with no I/O.

pub mod board;
pub mod combat;
pub mod game_transition;
pub mod movement;
mod pieces_serde;
pub mod player_view;
pub mod ranks;
pub mod setup;
pub mod state;
pub mod turns;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_props_setup;
#[cfg(test)]
mod tests_turns;

// Re-exports for ergonomics
pub use board::{Board, Cell, Owner, PieceData, Side};
pub use combat::{resolve_combat, CombatOutcome};
pub use movement::{legal_destinations, validate_move, CheckedMove, MoveResult};
pub use ranks::{beats, is_movable, is_valid_rank, Rank, RankCounts};
pub use setup::{shuffled_layout, standard_layout, validate_army, Army, Layout, RankEntry};
pub use state::{GameState, PlayerId, Status};
pub use turns::{apply_move, create_game, join_game, MoveApplied};
