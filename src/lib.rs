//! prerank library: competition pre-ranking from WCA personal bests
//!
//! This library scrapes a competition's registration and event tables from the
//! upstream site, looks up every registered competitor's personal bests in the
//! per-person record feed and orders them into a pre-ranking per event.
//!
//! # Example
//!
//! ```no_run
//! use prerank::app::{render_table, AppState, Controller};
//! use prerank::{Config, EventCode};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let controller = Controller::from_config(Config::default())?;
//!
//! let (state, status) = controller.load_competitors(AppState::new()).await;
//! println!("{}", status);
//! let (state, status) = controller.load_ranking(state, Some(EventCode::Three)).await;
//! println!("{}", status);
//! println!("{}", render_table(&state.ranked_rows()));
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod app;
pub mod config;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod models;
pub mod parse;
pub mod proxy;
pub mod ranking;
pub mod time_codec;
mod utils;

// Re-export public API
pub use config::{Config, HtmlBackend, LogFormat, LogLevel};
pub use fetch::RankingFetcher;
pub use models::{BestResult, Competitor, EventCode, EventDescriptor, RankingMap};
pub use ranking::{rank, SortPolicy};
pub use time_codec::format_result;
pub use utils::map_bounded;
