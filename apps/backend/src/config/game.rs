use std::env;

use time::Duration;

use crate::error::AppError;

pub const DEFAULT_GAME_TTL_HOURS: i64 = 24;
pub const DEFAULT_TOPIC_PREFIX: &str = "games";

/// Runtime knobs for the game service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// How long a game lives after its last write.
    pub game_ttl: Duration,
    /// Notification topics are `<topic_prefix>/<game id>/moves`.
    pub topic_prefix: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            game_ttl: Duration::hours(DEFAULT_GAME_TTL_HOURS),
            topic_prefix: DEFAULT_TOPIC_PREFIX.to_string(),
        }
    }
}

impl GameConfig {
    /// Reads `STRATEGO_GAME_TTL_HOURS` and `STRATEGO_TOPIC_PREFIX`, falling back to defaults.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let game_ttl = match lookup("STRATEGO_GAME_TTL_HOURS") {
            Some(raw) => Duration::hours(ttl_hours(&raw)?),
            None => Duration::hours(DEFAULT_GAME_TTL_HOURS),
        };

        let topic_prefix = match lookup("STRATEGO_TOPIC_PREFIX") {
            Some(raw) => topic_prefix(&raw)?,
            None => DEFAULT_TOPIC_PREFIX.to_string(),
        };

        Ok(Self {
            game_ttl,
            topic_prefix,
        })
    }
}

fn ttl_hours(raw: &str) -> Result<i64, AppError> {
    match raw.trim().parse::<i64>() {
        Ok(hours) if hours > 0 => Ok(hours),
        _ => Err(AppError::config(format!(
            "STRATEGO_GAME_TTL_HOURS must be a positive integer, but got: '{raw}'"
        ))),
    }
}

fn topic_prefix(raw: &str) -> Result<String, AppError> {
    let prefix = raw.trim().trim_end_matches('/');
    if prefix.is_empty() {
        return Err(AppError::config(
            "STRATEGO_TOPIC_PREFIX must not be empty".to_string(),
        ));
    }
    Ok(prefix.to_string())
}
