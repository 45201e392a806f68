//! Application Services - store-backed collections
//!
//! These implement the domain repository traits on top of a KeyValueStore.

mod collection;
pub mod favorites_set;
pub mod history_log;

pub use favorites_set::FavoritesSet;
pub use history_log::HistoryLog;
