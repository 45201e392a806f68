//! Domain Repository Interfaces
//!
//! These are trait definitions only - no implementations.
//! Implementations belong in the application services layer.

pub mod favorites_repository;
pub mod history_repository;

pub use favorites_repository::{FavoritesRepository, NullFavoritesRepository};
pub use history_repository::{HistoryRepository, NullHistoryRepository, MAX_HISTORY_ENTRIES};
