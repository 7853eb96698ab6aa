//! Error handling and failure statistics.
//!
//! This module provides:
//! - Typed errors for initialization, person-feed lookups and proxying
//! - Failure categorization of `reqwest` errors
//! - Thread-safe failure counters for one ranking fetch
//!
//! Parse misses are not errors: scraping degrades to fewer rows instead.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use stats::FetchStats;
pub use types::{FailureKind, FetchError, InitializationError, ProxyError};
