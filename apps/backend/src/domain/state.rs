use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::board::{Board, Side};
use crate::errors::domain::{DomainError, ValidationKind};

/// Overall game progression.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Host has placed an army; waiting for a guest.
    #[serde(rename = "setup")]
    Setup,
    /// Host to move.
    #[serde(rename = "host")]
    HostMove,
    /// Guest to move.
    #[serde(rename = "guest")]
    GuestMove,
    /// A flag was captured. Terminal.
    #[serde(rename = "done")]
    Done,
}

impl Status {
    /// Side expected to act, if any.
    pub const fn turn(self) -> Option<Side> {
        match self {
            Status::HostMove => Some(Side::Host),
            Status::GuestMove => Some(Side::Guest),
            Status::Setup | Status::Done => None,
        }
    }

    pub const fn for_turn(side: Side) -> Status {
        match side {
            Side::Host => Status::HostMove,
            Side::Guest => Status::GuestMove,
        }
    }

    pub const fn is_over(self) -> bool {
        matches!(self, Status::Done)
    }
}

/// Authenticated player identity. Never empty.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerId,
                "player id must not be blank",
            ));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PlayerId {
    type Error = DomainError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        PlayerId::new(id)
    }
}

impl From<PlayerId> for String {
    fn from(id: PlayerId) -> Self {
        id.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything the rules need to judge a request.
///
/// `host` is set at creation and `guest` at join; neither changes afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub host: Option<PlayerId>,
    pub guest: Option<PlayerId>,
    pub status: Status,
}

impl GameState {
    /// Role of `player` in this game, resolved only from the stored ids.
    pub fn role_of(&self, player: &PlayerId) -> Option<Side> {
        if self.host.as_ref() == Some(player) {
            Some(Side::Host)
        } else if self.guest.as_ref() == Some(player) {
            Some(Side::Guest)
        } else {
            None
        }
    }

    pub fn player_for(&self, side: Side) -> Option<&PlayerId> {
        match side {
            Side::Host => self.host.as_ref(),
            Side::Guest => self.guest.as_ref(),
        }
    }

    pub fn both_seated(&self) -> bool {
        self.host.is_some() && self.guest.is_some()
    }
}

pub fn require_host<'a>(
    state: &'a GameState,
    ctx: &'static str,
) -> Result<&'a PlayerId, DomainError> {
    state.host.as_ref().ok_or_else(|| {
        DomainError::validation_other(format!("Invariant violated: host must be set ({ctx})"))
    })
}
