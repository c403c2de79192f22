// apps/backend/src/domain/game_transition.rs

use crate::domain::board::Side;
use crate::domain::state::Status;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLifecycleView {
    pub version: i32,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTransition {
    /// Edge-triggered: the turn became a specific side.
    TurnBecame { side: Side },

    /// Edge-triggered: Game moved from Setup -> HostMove (guest joined)
    GameStarted,

    /// Edge-triggered: Game moved from Active -> Done
    GameEnded,
}

/// Derive domain transitions from before/after lifecycle state.
pub fn derive_game_transitions(
    before: &GameLifecycleView,
    after: &GameLifecycleView,
) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    // 1. Game start (Setup -> anything playable)
    if before.status == Status::Setup && after.status.turn().is_some() {
        transitions.push(GameTransition::GameStarted);
    }

    // 2. Turn change
    if let Some(side) = after.status.turn() {
        if before.status.turn() != Some(side) {
            transitions.push(GameTransition::TurnBecame { side });
        }
    }

    // 3. Game end (!Done -> Done)
    if !before.status.is_over() && after.status.is_over() {
        transitions.push(GameTransition::GameEnded);
    }

    transitions
}
