//! Competitor list extraction.
//!
//! Column layout of the upstream competitors table:
//! `# | name | WCA id | country | gender | one column per event...`

use std::collections::BTreeSet;

use strum::IntoEnumIterator;

use super::extractor::{TableExtractor, TableRow};
use super::ParseStats;
use crate::models::{Competitor, EventCode};

const MIN_COMPETITOR_CELLS: usize = 5;
const FIRST_EVENT_COLUMN: usize = 5;

/// Scrapes the competitors table.
///
/// Rows with fewer than five cells are skipped. An empty or malformed document
/// yields an empty list.
pub fn scrape_competitors(extractor: &dyn TableExtractor, html: &str) -> Vec<Competitor> {
    let (competitors, stats) = scrape_competitors_with_stats(extractor, html);
    stats.log_summary("competitors");
    competitors
}

/// Like [`scrape_competitors`], also returning what was skipped.
pub fn scrape_competitors_with_stats(
    extractor: &dyn TableExtractor,
    html: &str,
) -> (Vec<Competitor>, ParseStats) {
    let mut stats = ParseStats::default();
    let competitors = extractor
        .first_table_rows(html)
        .iter()
        .filter_map(|row| {
            stats.rows += 1;
            let competitor = competitor_from_row(row);
            if competitor.is_none() {
                stats.short_rows += 1;
            }
            competitor
        })
        .collect();
    (competitors, stats)
}

fn competitor_from_row(row: &TableRow) -> Option<Competitor> {
    let cells = &row.cells;
    if cells.len() < MIN_COMPETITOR_CELLS {
        return None;
    }

    let wca_cell = &cells[2];
    let wca_id = match wca_cell.link_text.as_deref() {
        Some(link) if !link.is_empty() => link.to_string(),
        _ => wca_cell.text.clone(),
    };

    Some(Competitor {
        name: cells[1].text.clone(),
        wca_id,
        country: cells[3].text.clone(),
        gender: cells[4].text.clone(),
        events: registered_events(row),
    })
}

/// A registration column counts when its trimmed text is non-empty.
fn registered_events(row: &TableRow) -> BTreeSet<EventCode> {
    row.cells
        .iter()
        .skip(FIRST_EVENT_COLUMN)
        .zip(EventCode::iter())
        .filter(|(cell, _)| !cell.text.is_empty())
        .map(|(_, event)| event)
        .collect()
}
