//! Combat resolution between an attacking and a defending rank.

use crate::domain::ranks::{beats, Rank};

/// Result of moving onto an opponent's piece.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CombatOutcome {
    /// Attacker wins: defender removed, attacker takes the cell.
    Attacks,
    /// Attacker loses and is removed; defender stays.
    Defends,
    /// A failed Scout attack: Scout removed, defender's rank revealed.
    Reveals,
    /// The Flag was captured.
    Wins,
}

/// Resolve an attack using the dominance table alone.
///
/// Equal ranks are not special-cased: a Spy attacking a Spy defends.
pub fn resolve_combat(attacker: Rank, defender: Rank) -> CombatOutcome {
    if beats(attacker, defender) {
        if defender == Rank::Flag {
            CombatOutcome::Wins
        } else {
            CombatOutcome::Attacks
        }
    } else if attacker == Rank::Scout {
        CombatOutcome::Reveals
    } else {
        CombatOutcome::Defends
    }
}
