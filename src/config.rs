use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::PROGRESS_SAMPLE_INTERVAL_SECS;

/// Tracking behavior knobs, loaded by the host application and handed to
/// the engine. Everything defaults to the values in `constants.rs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingConfig {
    /// Seconds between periodic progress samples while playing.
    #[serde(default = "default_sample_interval")]
    pub sample_interval_secs: u64,

    /// Whether to ask the player to resume when an in-progress item is opened.
    #[serde(default = "default_true")]
    pub auto_resume: bool,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            sample_interval_secs: default_sample_interval(),
            auto_resume: default_true(),
        }
    }
}

impl TrackingConfig {
    pub fn sample_interval(&self) -> Duration {
        Duration::from_secs(self.sample_interval_secs.max(1))
    }
}

fn default_sample_interval() -> u64 {
    PROGRESS_SAMPLE_INTERVAL_SECS
}

fn default_true() -> bool {
    true
}
