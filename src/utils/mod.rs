pub mod errors;
pub mod logging;

pub use errors::TrackerError;
pub use logging::init_logging;
