mod traits;

pub use traits::{PlaybackCapability, PlayerEvent};
