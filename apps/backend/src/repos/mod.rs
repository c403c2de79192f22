//! Persistence collaborators.

pub mod games;

pub use games::{Game, GameId, GameStore, MemoryGameStore};
