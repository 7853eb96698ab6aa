//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (upstream locations, pool size, placeholders)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Cli, Command, Config, HtmlBackend, LogFormat, LogLevel, Opt, ServeOpt};
