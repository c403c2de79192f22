//! Best-effort fan-out of move messages to subscribers.

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::broadcast;
use tracing::debug;

use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::protocol::messages::{MoveMessage, NotificationEnvelope};
use crate::repos::games::GameId;

const DEFAULT_CAPACITY: usize = 64;

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn publish(&self, game_id: GameId, message: &MoveMessage) -> Result<(), DomainError>;
}

/// In-process hub with one broadcast channel per topic.
///
/// Subscribers receive the JSON envelope `{"message": "..."}` as a string.
#[derive(Debug)]
pub struct BroadcastHub {
    prefix: String,
    capacity: usize,
    topics: DashMap<String, broadcast::Sender<String>>,
}

impl BroadcastHub {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_capacity(prefix, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(prefix: impl Into<String>, capacity: usize) -> Self {
        Self {
            prefix: prefix.into(),
            capacity: capacity.max(1),
            topics: DashMap::new(),
        }
    }

    pub fn topic_for(&self, game_id: GameId) -> String {
        format!("{}/{}/moves", self.prefix, game_id)
    }

    pub fn subscribe(&self, topic: &str) -> broadcast::Receiver<String> {
        self.topics
            .entry(topic.to_string())
            .or_insert_with(|| broadcast::channel(self.capacity).0)
            .subscribe()
    }

    pub fn subscribe_game(&self, game_id: GameId) -> broadcast::Receiver<String> {
        self.subscribe(&self.topic_for(game_id))
    }

    /// Drop topics nobody listens to any more.
    pub fn prune(&self) {
        self.topics.retain(|_, tx| tx.receiver_count() > 0);
    }
}

#[async_trait]
impl Notifier for BroadcastHub {
    async fn publish(&self, game_id: GameId, message: &MoveMessage) -> Result<(), DomainError> {
        let topic = self.topic_for(game_id);
        let payload = serde_json::to_string(&NotificationEnvelope::from(message)).map_err(|e| {
            DomainError::infra(
                InfraErrorKind::Delivery,
                format!("Failed to serialize notification: {e}"),
            )
        })?;

        let Some(tx) = self.topics.get(&topic) else {
            debug!(topic, "No subscribers for topic");
            return Ok(());
        };
        // A send error only means every receiver has gone away.
        if tx.send(payload).is_err() {
            debug!(topic, "All subscribers dropped");
        }
        Ok(())
    }
}
