//! Use Cases - single-purpose operations

pub mod fetch_image;

pub use fetch_image::FetchImageUseCase;
