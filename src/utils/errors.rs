use thiserror::Error;

/// Failures the tracking engine can encounter. None of these are fatal and
/// none reach the UI layer: transient store failures are retried naturally
/// by the next qualifying sample, and a screen reload re-fetches the
/// authoritative records from the store.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Progress store error: {0}")]
    TransientStore(#[source] anyhow::Error),

    #[error("Playback capability not ready")]
    PlaybackUnavailable,
}

impl TrackerError {
    /// Expected transient conditions are logged at debug, real failures at warn.
    pub fn is_expected(&self) -> bool {
        matches!(self, TrackerError::PlaybackUnavailable)
    }
}
