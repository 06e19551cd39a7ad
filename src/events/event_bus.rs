use tokio::sync::broadcast;
use tracing::trace;

use super::types::{EventType, ProgressEvent};

const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Event subscriber handle
pub struct EventSubscriber {
    receiver: broadcast::Receiver<ProgressEvent>,
    types: Option<Vec<EventType>>,
}

impl EventSubscriber {
    /// Receive the next event matching the subscription filter
    pub async fn recv(&mut self) -> Result<ProgressEvent, broadcast::error::RecvError> {
        loop {
            let event = self.receiver.recv().await?;
            match &self.types {
                Some(types) if !types.contains(&event.event_type) => continue,
                _ => return Ok(event),
            }
        }
    }

    /// Try to receive without blocking
    pub fn try_recv(&mut self) -> Option<ProgressEvent> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => match &self.types {
                    Some(types) if !types.contains(&event.event_type) => continue,
                    _ => return Some(event),
                },
                Err(_) => return None,
            }
        }
    }
}

/// Broadcast bus for playback lifecycle and progress events. Publishing
/// never fails: with no subscribers the event is simply dropped.
#[derive(Debug)]
pub struct EventBus {
    sender: broadcast::Sender<ProgressEvent>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { sender }
    }

    pub fn publish(&self, event: ProgressEvent) {
        trace!("Publishing event: {}", event.event_type.as_str());
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> EventSubscriber {
        EventSubscriber {
            receiver: self.sender.subscribe(),
            types: None,
        }
    }

    pub fn subscribe_to(&self, types: Vec<EventType>) -> EventSubscriber {
        EventSubscriber {
            receiver: self.sender.subscribe(),
            types: Some(types),
        }
    }
}
