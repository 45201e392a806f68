//! Controllers - turn user intents into application calls

pub mod view_state_controller;

pub use view_state_controller::{
    DateRequest, FetchTicket, ViewPhase, ViewState, ViewStateController,
};
