use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::backends::ProgressStore;
use crate::constants::COMPLETION_THRESHOLD_PCT;
use crate::events::{EventBus, EventType, ProgressEvent};
use crate::models::{ContentItemId, NewProgressRecord, ProgressPatch, ProgressRecord, UserId};
use crate::utils::TrackerError;

/// The single write authority for progress. Owns the in-memory progress
/// map and applies the no-regression, create-or-update merge policy to
/// every candidate write; neither the tracker nor the session talk to the
/// store directly.
#[derive(Debug)]
pub struct ProgressLedger {
    store: Arc<dyn ProgressStore>,
    user_id: UserId,
    event_bus: Arc<EventBus>,
    records: RwLock<HashMap<ContentItemId, ProgressRecord>>,
}

impl ProgressLedger {
    pub fn new(store: Arc<dyn ProgressStore>, user_id: UserId, event_bus: Arc<EventBus>) -> Self {
        Self {
            store,
            user_id,
            event_bus,
            records: RwLock::new(HashMap::new()),
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Replace the in-memory map with the store's authoritative records.
    /// Called on screen load; also how state self-heals after a viewing
    /// whose writes kept failing.
    pub async fn load(&self) -> Result<(), TrackerError> {
        let records = self
            .store
            .list_by_user(&self.user_id)
            .await
            .map_err(TrackerError::TransientStore)?;

        let mut map = HashMap::with_capacity(records.len());
        for record in records {
            map.insert(record.content_id.clone(), record);
        }

        debug!("Loaded {} progress records for {}", map.len(), self.user_id);
        *self.records.write().await = map;
        Ok(())
    }

    pub async fn get(&self, content_id: &ContentItemId) -> Option<ProgressRecord> {
        self.records.read().await.get(content_id).cloned()
    }

    /// Current view of all known records, keyed by content id.
    pub async fn snapshot(&self) -> HashMap<ContentItemId, ProgressRecord> {
        self.records.read().await.clone()
    }

    /// Evaluate one candidate write. Returns `Ok(None)` when the merge
    /// policy discards the sample, `Ok(Some(record))` after a qualifying
    /// write. The map is updated before the store round-trip resolves, and
    /// the map lock is held until it does, serializing qualifying writes:
    /// a forced flush racing a periodic sample waits for the in-flight
    /// create and reuses its identity instead of issuing a second one. A
    /// store failure leaves the optimistic map value in place and the next
    /// qualifying sample writes the full state again.
    pub async fn apply(
        &self,
        content_id: &ContentItemId,
        candidate_percentage: f64,
        force: bool,
    ) -> Result<Option<ProgressRecord>, TrackerError> {
        let next = (candidate_percentage.round() as i32).clamp(0, 100);
        let now = Utc::now();

        let mut records = self.records.write().await;
        let existing = records.get(content_id).cloned();
        let prev = existing
            .as_ref()
            .map(|r| r.progress_percentage)
            .unwrap_or(0);

        // No-regression guard: duplicate and out-of-order samples land here.
        if !force && next <= prev {
            return Ok(None);
        }

        let completed = next >= COMPLETION_THRESHOLD_PCT;
        let newly_completed = completed
            && existing
                .as_ref()
                .map(|r| r.completed_at.is_none())
                .unwrap_or(true);

        let mut record = existing.unwrap_or_else(|| ProgressRecord {
            id: None,
            content_id: content_id.clone(),
            user_id: self.user_id.clone(),
            progress_percentage: 0,
            completed: false,
            last_viewed_at: now,
            completed_at: None,
        });
        record.progress_percentage = next;
        record.completed = completed;
        record.last_viewed_at = now;
        if newly_completed {
            record.completed_at = Some(now);
        }

        records.insert(content_id.clone(), record.clone());

        // The guard stays held across the store round-trip: two writes
        // racing inside a create's latency window would otherwise both see
        // a record without identity and issue duplicate creates for one
        // (content_id, user_id) pair.
        let outcome = match record.id.clone() {
            Some(id) => {
                let patch = ProgressPatch {
                    progress_percentage: next,
                    completed,
                    last_viewed_at: now,
                    completed_at: if newly_completed { Some(now) } else { None },
                };
                self.store.update_by_id(&id, patch).await
            }
            None => {
                let created = self
                    .store
                    .create(NewProgressRecord {
                        content_id: record.content_id.clone(),
                        user_id: record.user_id.clone(),
                        progress_percentage: next,
                        completed,
                        last_viewed_at: now,
                        completed_at: record.completed_at,
                    })
                    .await;

                if let Ok(stored) = &created {
                    // Learn the store-assigned identity so the next write
                    // takes the update path.
                    if let Some(entry) = records.get_mut(content_id) {
                        entry.id = stored.id.clone();
                    }
                    record.id = stored.id.clone();
                }
                created
            }
        };

        drop(records);

        match outcome {
            Ok(_) => {
                self.event_bus.publish(
                    ProgressEvent::new(EventType::ProgressSaved, Some(content_id.clone()))
                        .with_percentage(next),
                );
                if newly_completed {
                    self.event_bus.publish(
                        ProgressEvent::new(EventType::ContentCompleted, Some(content_id.clone()))
                            .with_percentage(next),
                    );
                }
                Ok(Some(record))
            }
            Err(e) => Err(TrackerError::TransientStore(e)),
        }
    }
}
