use serde::{Deserialize, Serialize};

use crate::domain::setup::Layout;
use crate::error::AppError;
use crate::repos::games::GameId;

/// Create/join body: one side's starting positions keyed by cell index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartingPositions {
    pub starting_positions: Layout,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub from: i64,
    pub to: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameIdResponse {
    pub id: GameId,
}

impl StartingPositions {
    pub fn from_json(body: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(body)?)
    }
}

impl MoveRequest {
    pub fn from_json(body: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(body)?)
    }
}
