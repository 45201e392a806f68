//! Application Ports - interfaces for external dependencies
//!
//! Adapters implement these; the application layer only sees the traits.

pub mod clock_port;
pub mod feed_port;
pub mod media_port;
pub mod storage_port;

pub use clock_port::{ClockPort, FixedClock, SystemClock};
pub use feed_port::{FeedPort, FetchError, FETCH_FAILED_MESSAGE};
pub use media_port::{DownloadOutcome, MediaPort};
pub use storage_port::{KeyValueStore, StorageError, FAVORITES_KEY, HISTORY_KEY};
