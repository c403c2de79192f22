//! Wire shapes exchanged with the transport and notification layers.

pub mod messages;
pub mod requests;

pub use messages::{MoveMessage, NotificationEnvelope};
pub use requests::{GameIdResponse, MoveRequest, StartingPositions};
