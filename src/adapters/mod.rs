//! Adapters Layer - Gateways, controllers, presenters and views
//!
//! Gateways implement the application ports against HTTP and the
//! filesystem. Controllers and views sit between the user and the
//! application layer.

pub mod controllers;
pub mod gateways;
pub mod presenters;
pub mod views;
