//! HTML table scraping.
//!
//! This module turns the upstream registration pages into typed records:
//! - Competitors (with the events they registered for)
//! - Events offered by the competition
//!
//! Parsing never fails. Unexpected markup yields fewer rows, and what was
//! skipped is counted in [`ParseStats`].

mod competitors;
mod events;
mod extractor;
mod kuchiki_extractor;

// Re-export public API
pub use competitors::{scrape_competitors, scrape_competitors_with_stats};
pub use events::{scrape_events, scrape_events_with_stats};
pub use extractor::{ScraperExtractor, TableCell, TableExtractor, TableRow};
pub use kuchiki_extractor::KuchikiExtractor;

/// Rows seen and skipped while scraping one table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub rows: usize,
    /// Competitor rows with fewer than five cells
    pub short_rows: usize,
    /// Event rows without a label cell
    pub unlabeled_rows: usize,
    /// Event rows for the base registration fee
    pub fee_rows: usize,
    /// Event rows whose label is not a known event
    pub unknown_events: usize,
}

impl ParseStats {
    pub fn skipped(&self) -> usize {
        self.short_rows + self.unlabeled_rows + self.fee_rows + self.unknown_events
    }

    fn log_summary(&self, table: &str) {
        log::debug!(
            "Scraped {} table: {} rows, {} skipped ({} short, {} unlabeled, {} fee, {} unknown)",
            table,
            self.rows,
            self.skipped(),
            self.short_rows,
            self.unlabeled_rows,
            self.fee_rows,
            self.unknown_events
        );
    }
}
