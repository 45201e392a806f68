//! Views - terminal front-ends over the controller

pub mod browse_view;

pub use browse_view::{BrowseCommand, BrowseView, Flow};
