//! apodview - browse the Astronomy Picture of the Day from a terminal
//!
//! Layered the usual way: `domain` holds entities and repository traits,
//! `application` the ports, stores and use cases, `adapters` the HTTP and
//! file gateways plus the controller/presenter/view trio, and
//! `infrastructure` wires it all together for the binary.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
