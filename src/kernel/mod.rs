//! Headless navigator core (state/action/store).

pub mod action;
pub mod services;
pub mod state;
pub mod store;

pub use action::Action;
pub use state::LayoutState;
pub use store::{DispatchResult, Store};
