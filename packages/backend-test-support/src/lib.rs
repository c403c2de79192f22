//! Shared helpers for the engine's integration tests: one-time logging
//! setup and collision-free player identities.

pub mod logging;
pub mod unique_helpers;
