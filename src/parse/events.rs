//! Event list extraction from the competition's fee table.

use regex::Regex;
use std::sync::LazyLock;

use super::extractor::TableExtractor;
use super::ParseStats;
use crate::models::{EventCode, EventDescriptor};

/// Class marking the label cell of a fee-table row.
const LABEL_CELL_CLASS: &str = "text-start";

static BASE_FEE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)base fee").unwrap_or_else(|e| {
        panic!("Failed to compile base fee pattern: {}. This is a programming error.", e)
    })
});

/// Scrapes the events table.
///
/// Only rows whose label maps to a known event are kept; the base
/// registration fee row is skipped.
pub fn scrape_events(extractor: &dyn TableExtractor, html: &str) -> Vec<EventDescriptor> {
    let (events, stats) = scrape_events_with_stats(extractor, html);
    stats.log_summary("events");
    events
}

/// Like [`scrape_events`], also returning what was skipped.
pub fn scrape_events_with_stats(
    extractor: &dyn TableExtractor,
    html: &str,
) -> (Vec<EventDescriptor>, ParseStats) {
    let mut stats = ParseStats::default();
    let mut events = Vec::new();

    for row in extractor.first_table_rows(html) {
        stats.rows += 1;
        let label = row
            .cells
            .iter()
            .find(|cell| cell.has_class(LABEL_CELL_CLASS))
            .map(|cell| cell.text.as_str())
            .filter(|label| !label.is_empty());

        let Some(label) = label else {
            stats.unlabeled_rows += 1;
            continue;
        };
        if BASE_FEE_PATTERN.is_match(label) {
            stats.fee_rows += 1;
            continue;
        }
        match EventCode::from_display_name(label) {
            Some(code) => events.push(EventDescriptor {
                display_name: label.to_string(),
                code,
            }),
            None => {
                log::debug!("Ignoring unknown event label '{}'", label);
                stats.unknown_events += 1;
            }
        }
    }

    (events, stats)
}
