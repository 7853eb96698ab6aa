//! Application layer.
//!
//! This module holds the application state, the controller that drives it and
//! the text rendering used by the CLI.

mod controller;
mod render;
mod state;
mod status;

// Re-export public API
pub use controller::Controller;
pub use render::render_table;
pub use state::{AppState, RankedRow, Ranking};
pub use status::{Status, Tone};
