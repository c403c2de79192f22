//! Service layer: orchestrates identity, persistence, and notification
//! around the pure rules in `domain`.

pub mod games;
pub mod identity;
pub mod notifier;

pub use games::{GameService, GameView, MoveOutcome};
pub use identity::{ContextIdentity, IdentityResolver, RequestContext};
pub use notifier::{BroadcastHub, Notifier};
