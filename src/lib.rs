// Playback progress tracking engine for the training portal.
// The UI shell consumes this crate; it owns no screens of its own.

pub mod backends;
pub mod config;
pub mod constants;
pub mod db;
pub mod events;
pub mod models;
pub mod player;
pub mod tracking;
pub mod utils;


pub use config::TrackingConfig;
pub use events::{EventBus, EventType, ProgressEvent};
pub use models::{ContentItem, ProgressRecord, ViewRow};
pub use player::{PlaybackCapability, PlayerEvent};
pub use tracking::{PlaybackSession, ProgressLedger, SessionState, StatusFilter};
