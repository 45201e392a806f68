//! Presenters - turn application state into display text

pub mod image_presenter;

pub use image_presenter::{ImagePresenter, ListItemViewModel};
