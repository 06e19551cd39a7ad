use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Discrete lifecycle events reported by the embedded player and consumed
/// by the playback session state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    Ready,
    Playing,
    Paused,
    Ended,
    Error(String),
}

/// Abstraction over the embedded media player. Implementations must
/// tolerate being queried before media metadata has loaded: both queries
/// return `None` (or a zero duration) until the player is ready, and the
/// tracker skips those samples.
#[async_trait]
pub trait PlaybackCapability: Send + Sync {
    async fn current_position(&self) -> Option<Duration>;

    async fn total_duration(&self) -> Option<Duration>;

    /// Ask the player to continue from its last position. Optional; players
    /// that always start from the saved position can leave the default.
    async fn resume(&self) -> Result<()> {
        Ok(())
    }
}
