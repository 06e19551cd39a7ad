mod ledger;
mod merger;
mod session;
mod tracker;

pub use ledger::ProgressLedger;
pub use merger::{ProgressSummary, StatusFilter, aggregate, filter_rows, to_view_rows};
pub use session::{PlaybackSession, SessionState};
pub use tracker::ProgressTracker;
