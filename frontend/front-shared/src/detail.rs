//! State and lifecycle of the server detail view.

mod controller;
mod state;

pub use controller::*;
pub use state::*;
