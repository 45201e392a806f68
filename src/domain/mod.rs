//! Domain Layer - Entities, value objects and repository interfaces
//!
//! No I/O lives here. Everything is plain data plus the rules that keep it
//! valid (date range, history cap, favorites key).

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod value_objects;

pub use errors::DomainError;
