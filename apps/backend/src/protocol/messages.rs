//! Notification messages published after each lifecycle step.
//!
//! Wire form is a space-separated token line wrapped in `{"message": ...}`:
//! `started`, `<result> <from> <to>`, or `reveals <from> <to> <rank>`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::board::Cell;
use crate::domain::movement::MoveResult;
use crate::domain::ranks::Rank;
use crate::domain::turns::MoveApplied;
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveMessage {
    Started,
    Moved { from: Cell, to: Cell },
    Attacked { from: Cell, to: Cell },
    Defended { from: Cell, to: Cell },
    Revealed { from: Cell, to: Cell, rank: Rank },
    Won { from: Cell, to: Cell },
}

impl From<&MoveApplied> for MoveMessage {
    fn from(applied: &MoveApplied) -> Self {
        let (from, to) = (applied.from, applied.to);
        match applied.result {
            MoveResult::Moves => MoveMessage::Moved { from, to },
            MoveResult::Attacks => MoveMessage::Attacked { from, to },
            MoveResult::Defends => MoveMessage::Defended { from, to },
            MoveResult::Reveals(rank) => MoveMessage::Revealed { from, to, rank },
            MoveResult::Wins => MoveMessage::Won { from, to },
        }
    }
}

impl fmt::Display for MoveMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveMessage::Started => f.write_str("started"),
            MoveMessage::Moved { from, to } => write!(f, "moves {from} {to}"),
            MoveMessage::Attacked { from, to } => write!(f, "attacks {from} {to}"),
            MoveMessage::Defended { from, to } => write!(f, "defends {from} {to}"),
            MoveMessage::Revealed { from, to, rank } => write!(f, "reveals {from} {to} {rank}"),
            MoveMessage::Won { from, to } => write!(f, "wins {from} {to}"),
        }
    }
}

fn malformed(line: &str) -> DomainError {
    DomainError::validation(
        ValidationKind::MalformedPayload,
        format!("malformed move message: {line:?}"),
    )
}

fn parse_cell(token: Option<&str>, line: &str) -> Result<Cell, DomainError> {
    token
        .and_then(|t| t.parse::<i64>().ok())
        .and_then(Cell::new)
        .ok_or_else(|| malformed(line))
}

impl FromStr for MoveMessage {
    type Err = DomainError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split(' ');
        let head = tokens.next().ok_or_else(|| malformed(line))?;
        if head == "started" {
            return match tokens.next() {
                None => Ok(MoveMessage::Started),
                Some(_) => Err(malformed(line)),
            };
        }

        let from = parse_cell(tokens.next(), line)?;
        let to = parse_cell(tokens.next(), line)?;
        let message = match head {
            "moves" => MoveMessage::Moved { from, to },
            "attacks" => MoveMessage::Attacked { from, to },
            "defends" => MoveMessage::Defended { from, to },
            "wins" => MoveMessage::Won { from, to },
            "reveals" => {
                let rank = tokens
                    .next()
                    .and_then(|t| t.parse::<Rank>().ok())
                    .ok_or_else(|| malformed(line))?;
                MoveMessage::Revealed { from, to, rank }
            }
            _ => return Err(malformed(line)),
        };

        if tokens.next().is_some() {
            return Err(malformed(line));
        }
        Ok(message)
    }
}

/// JSON body delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationEnvelope {
    pub message: String,
}

impl From<&MoveMessage> for NotificationEnvelope {
    fn from(message: &MoveMessage) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl NotificationEnvelope {
    pub fn parse(&self) -> Result<MoveMessage, DomainError> {
        self.message.parse()
    }
}
