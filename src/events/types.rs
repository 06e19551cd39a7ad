use serde::{Deserialize, Serialize};

use crate::models::ContentItemId;

/// Playback lifecycle and persistence event published on the bus so the
/// UI shell can react without polling the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressEvent {
    pub id: String,
    pub event_type: EventType,
    pub content_id: Option<ContentItemId>,
    /// Percentage carried by progress events; absent for pure lifecycle ones.
    pub percentage: Option<i32>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl ProgressEvent {
    pub fn new(event_type: EventType, content_id: Option<ContentItemId>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            event_type,
            content_id,
            percentage: None,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn with_percentage(mut self, percentage: i32) -> Self {
        self.percentage = Some(percentage);
        self
    }
}

/// Event types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EventType {
    SessionOpened,
    PlaybackStarted,
    PlaybackPaused,
    PlaybackEnded,
    SessionClosed,
    ProgressSaved,
    ContentCompleted,
}

impl EventType {
    /// Get a string representation for filtering/routing
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::SessionOpened => "session.opened",
            EventType::PlaybackStarted => "playback.started",
            EventType::PlaybackPaused => "playback.paused",
            EventType::PlaybackEnded => "playback.ended",
            EventType::SessionClosed => "session.closed",
            EventType::ProgressSaved => "progress.saved",
            EventType::ContentCompleted => "content.completed",
        }
    }
}
