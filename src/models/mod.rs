mod identifiers;

pub use identifiers::{ContentItemId, ProgressRecordId, UserId};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog entry representing one trackable unit of training content.
/// Owned and mutated only by the catalog provider; read-only to this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ContentItemId,
    pub title: String,
    pub description: String,
    /// Declared duration label as authored (e.g. "12 min"); display only.
    pub duration_label: Option<String>,
    /// Playable media identifier understood by the player shell.
    pub media_source: String,
    /// Which portal audience the item is published to.
    pub audience: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// One user's consumption state of one content item.
///
/// `id` is absent until the store has persisted the record once; the ledger
/// learns the store-assigned identity on the create path and uses it for
/// every later update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub id: Option<ProgressRecordId>,
    pub content_id: ContentItemId,
    pub user_id: UserId,
    /// Always within 0..=100.
    pub progress_percentage: i32,
    pub completed: bool,
    pub last_viewed_at: DateTime<Utc>,
    /// Set the first time `completed` flips to true, never overwritten.
    pub completed_at: Option<DateTime<Utc>>,
}

impl ProgressRecord {
    /// Started but not finished.
    pub fn is_in_progress(&self) -> bool {
        !self.completed && self.progress_percentage > 0
    }

    pub fn is_not_started(&self) -> bool {
        self.progress_percentage == 0 && !self.completed
    }
}

/// Fields for a record the store has not assigned an identity to yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProgressRecord {
    pub content_id: ContentItemId,
    pub user_id: UserId,
    pub progress_percentage: i32,
    pub completed: bool,
    pub last_viewed_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Partial update applied to an existing record by its identity.
/// `completed_at` is only ever written when `Some`; stores never clear it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressPatch {
    pub progress_percentage: i32,
    pub completed: bool,
    pub last_viewed_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// A content item joined with its progress record for display: derived,
/// never persisted, recomputed on demand by the merger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewRow {
    pub item: ContentItem,
    pub progress_percentage: i32,
    pub completed: bool,
    pub last_viewed_at: Option<DateTime<Utc>>,
}
