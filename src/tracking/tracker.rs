use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::warn;

use super::ledger::ProgressLedger;
use crate::models::ContentItemId;
use crate::player::PlaybackCapability;

/// Compute the completion percentage for the player's current position.
/// Returns `None` while the player has no usable duration, which also
/// guards the division: not-yet-ready players report zero/unknown
/// durations and those samples are skipped silently.
pub(crate) async fn sample_percentage(player: &dyn PlaybackCapability) -> Option<f64> {
    let duration = player.total_duration().await?;
    if duration.is_zero() {
        return None;
    }
    let position = player.current_position().await?;
    Some(position.as_secs_f64() / duration.as_secs_f64() * 100.0)
}

/// Drives periodic sampling while the owning session is playing. The
/// scheduling handle is an explicit owned field, cleared on every exit
/// path; cancellation is a unit-testable operation instead of a closure
/// lifetime accident.
#[derive(Debug)]
pub struct ProgressTracker {
    interval: Duration,
    handle: Option<JoinHandle<()>>,
    /// Freshest percentage the sampling task observed; the session's
    /// forced flush falls back to this when the player is gone.
    last_percentage: Arc<Mutex<Option<f64>>>,
}

impl ProgressTracker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            handle: None,
            last_percentage: Arc::new(Mutex::new(None)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }

    /// Start sampling. Any previous task is cancelled first, so at most
    /// one timer is ever active.
    pub fn start(
        &mut self,
        player: Arc<dyn PlaybackCapability>,
        ledger: Arc<ProgressLedger>,
        content_id: ContentItemId,
    ) {
        self.stop();

        let interval = self.interval;
        let last_percentage = self.last_percentage.clone();

        self.handle = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                let Some(pct) = sample_percentage(player.as_ref()).await else {
                    continue;
                };
                *last_percentage.lock().await = Some(pct);

                // A failed write never interrupts playback; the next tick
                // carries the full state again.
                if let Err(e) = ledger.apply(&content_id, pct, false).await {
                    warn!("Periodic progress write failed for {}: {}", content_id, e);
                }
            }
        }));
    }

    /// Cancel the sampling task and clear the handle.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub async fn last_percentage(&self) -> Option<f64> {
        *self.last_percentage.lock().await
    }

    /// Stop and forget the previous viewing's position, so a new session
    /// can never flush a stale percentage from the old one.
    pub async fn reset(&mut self) {
        self.stop();
        *self.last_percentage.lock().await = None;
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.stop();
    }
}
