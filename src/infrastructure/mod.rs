//! Infrastructure Layer - wiring

pub mod composition_root;

pub use composition_root::{AppBrowseView, AppController, CompositionRoot};
