use std::sync::Arc;
use tracing::{debug, warn};

use super::ledger::ProgressLedger;
use super::tracker::{ProgressTracker, sample_percentage};
use crate::config::TrackingConfig;
use crate::events::{EventBus, EventType, ProgressEvent};
use crate::models::{ContentItem, ContentItemId};
use crate::player::{PlaybackCapability, PlayerEvent};
use crate::utils::TrackerError;

/// Lifecycle of one viewing. `Open` means an item is selected and the
/// player is still mounting; `Closed` is terminal for the viewing, the
/// next `open` starts a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Open,
    Playing,
    Paused,
    Ended,
    Closed,
}

/// Per-viewing state machine wrapping one open content item and its live
/// player handle. Only one session is active at a time: opening an item
/// while another is active implicitly closes the old one, force-flushing
/// its latest known progress first.
pub struct PlaybackSession {
    ledger: Arc<ProgressLedger>,
    event_bus: Arc<EventBus>,
    config: TrackingConfig,
    tracker: ProgressTracker,
    state: SessionState,
    active_content: Option<ContentItemId>,
    player: Option<Arc<dyn PlaybackCapability>>,
}

impl PlaybackSession {
    pub fn new(
        ledger: Arc<ProgressLedger>,
        event_bus: Arc<EventBus>,
        config: TrackingConfig,
    ) -> Self {
        let tracker = ProgressTracker::new(config.sample_interval());
        Self {
            ledger,
            event_bus,
            config,
            tracker,
            state: SessionState::Idle,
            active_content: None,
            player: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn event_bus(&self) -> &Arc<EventBus> {
        &self.event_bus
    }

    pub fn active_content(&self) -> Option<&ContentItemId> {
        self.active_content.as_ref()
    }

    pub fn is_tracking(&self) -> bool {
        self.tracker.is_running()
    }

    /// Select an item for viewing. Any active session is closed first, so
    /// its latest progress is flushed before the new timer can start.
    pub async fn open(&mut self, item: &ContentItem) {
        if self.active_content.is_some() {
            self.close().await;
        }

        self.tracker.reset().await;
        self.active_content = Some(item.id.clone());
        self.state = SessionState::Open;
        debug!("Opened session for {}", item.id);
        self.event_bus.publish(ProgressEvent::new(
            EventType::SessionOpened,
            Some(item.id.clone()),
        ));
    }

    /// Bind the mounted player handle. No state change: playback state is
    /// driven purely by the player's own events.
    pub fn bind_player(&mut self, player: Arc<dyn PlaybackCapability>) {
        self.player = Some(player);
    }

    pub async fn handle_player_event(&mut self, event: PlayerEvent) {
        match event {
            PlayerEvent::Ready => self.maybe_resume().await,
            PlayerEvent::Playing => self.on_playing().await,
            PlayerEvent::Paused => self.on_paused().await,
            PlayerEvent::Ended => self.on_ended().await,
            PlayerEvent::Error(message) => {
                warn!("Player reported error: {}", message);
                self.tracker.stop();
            }
        }
    }

    /// Release the session: stop the timer, flush once, drop the player
    /// handle and the active content id. Idempotent.
    pub async fn close(&mut self) {
        let Some(content_id) = self.active_content.clone() else {
            return;
        };

        self.tracker.stop();
        self.flush_logged(&content_id).await;
        self.tracker.reset().await;
        self.player = None;
        self.active_content = None;
        self.state = SessionState::Closed;
        debug!("Closed session for {}", content_id);
        self.event_bus
            .publish(ProgressEvent::new(EventType::SessionClosed, Some(content_id)));
    }

    async fn on_playing(&mut self) {
        let (Some(content_id), Some(player)) =
            (self.active_content.clone(), self.player.clone())
        else {
            debug!("Ignoring playing event with no active session");
            return;
        };

        self.state = SessionState::Playing;
        self.tracker
            .start(player, self.ledger.clone(), content_id.clone());
        self.event_bus
            .publish(ProgressEvent::new(EventType::PlaybackStarted, Some(content_id)));
    }

    async fn on_paused(&mut self) {
        // Duplicate pause events get a single forced write, not one each.
        if self.state != SessionState::Playing {
            return;
        }
        let Some(content_id) = self.active_content.clone() else {
            return;
        };

        self.state = SessionState::Paused;
        self.tracker.stop();
        self.flush_logged(&content_id).await;
        self.event_bus
            .publish(ProgressEvent::new(EventType::PlaybackPaused, Some(content_id)));
    }

    async fn on_ended(&mut self) {
        if matches!(self.state, SessionState::Ended | SessionState::Closed) {
            return;
        }
        let Some(content_id) = self.active_content.clone() else {
            return;
        };

        self.state = SessionState::Ended;
        self.tracker.stop();
        self.flush_logged(&content_id).await;
        self.event_bus
            .publish(ProgressEvent::new(EventType::PlaybackEnded, Some(content_id)));
    }

    /// One forced persistence of the freshest known position: a live
    /// sample when the player still answers, otherwise the last percentage
    /// the tracker observed.
    async fn flush(&mut self, content_id: &ContentItemId) -> Result<(), TrackerError> {
        let live = match &self.player {
            Some(player) => sample_percentage(player.as_ref()).await,
            None => None,
        };
        let percentage = match live {
            Some(pct) => Some(pct),
            None => self.tracker.last_percentage().await,
        };

        // The player never reported a usable duration, so no position was
        // ever known for this viewing.
        let Some(percentage) = percentage else {
            return Err(TrackerError::PlaybackUnavailable);
        };

        self.ledger.apply(content_id, percentage, true).await?;
        Ok(())
    }

    async fn flush_logged(&mut self, content_id: &ContentItemId) {
        if let Err(e) = self.flush(content_id).await {
            if e.is_expected() {
                debug!("Skipped forced progress write for {}: {}", content_id, e);
            } else {
                warn!("Forced progress write failed for {}: {}", content_id, e);
            }
        }
    }

    async fn maybe_resume(&self) {
        if !self.config.auto_resume {
            return;
        }
        let (Some(content_id), Some(player)) = (&self.active_content, &self.player) else {
            return;
        };

        if let Some(record) = self.ledger.get(content_id).await
            && record.is_in_progress()
            && let Err(e) = player.resume().await
        {
            warn!("Resume request failed for {}: {}", content_id, e);
        }
    }
}
