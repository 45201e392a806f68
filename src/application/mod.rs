//! Application Layer - Use Cases and Business Workflows
//!
//! This layer orchestrates domain entities and defines application-specific workflows.
//! It contains:
//! - **Use Cases**: Single-purpose operations (FetchImage)
//! - **Ports**: Interfaces for external dependencies (feed, storage, clock)
//! - **Services**: Store-backed History Log and Favorites Set
//!
//! # Clean Architecture Rules
//! - Depends only on the domain layer
//! - Defines ports that adapters implement
//! - Contains no transport-specific code

pub mod ports;
pub mod services;
pub mod use_cases;

// Re-export commonly used types
pub use ports::*;
pub use services::*;
pub use use_cases::*;
