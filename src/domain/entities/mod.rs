//! Domain Entities - Core business objects
//!
//! Entities are objects with a distinct identity that persists over time.
//! Every entity here is identified by its feed date.

pub mod favorite_entry;
pub mod history_entry;
pub mod image_record;

pub use favorite_entry::FavoriteEntry;
pub use history_entry::HistoryEntry;
pub use image_record::{ImageRecord, MediaType};
