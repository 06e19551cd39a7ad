// Tuning constants - adjust these to balance write volume vs freshness
// All tracking-related constants in one place for easy tuning

// === Progress Sampling ===
/// How often the tracker samples the player while a session is playing.
/// A tuning choice, not a correctness requirement: the merge policy makes
/// duplicate or out-of-order samples harmless.
pub const PROGRESS_SAMPLE_INTERVAL_SECS: u64 = 5;

/// Percentage at which an item counts as completed.
pub const COMPLETION_THRESHOLD_PCT: i32 = 100;

// === Progress Store (REST) ===
/// Request timeout for the REST progress store client.
pub const STORE_REQUEST_TIMEOUT_SECS: u64 = 30;
