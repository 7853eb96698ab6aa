//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger
//! - HTTP clients
//! - HTML table extractor

mod client;
mod logger;

use std::sync::Arc;

use crate::config::HtmlBackend;
use crate::parse::{KuchikiExtractor, ScraperExtractor, TableExtractor};

// Re-export public API
pub use client::{init_client, init_proxy_client};
pub use logger::init_logger_with;

/// Initializes the HTML table extractor for the selected backend.
pub fn init_extractor(backend: HtmlBackend) -> Arc<dyn TableExtractor> {
    match backend {
        HtmlBackend::Scraper => Arc::new(ScraperExtractor),
        HtmlBackend::Kuchiki => Arc::new(KuchikiExtractor),
    }
}
