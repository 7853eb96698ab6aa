//! Table extraction over a parsed HTML document.
//!
//! Scraping logic only sees [`TableRow`]s, so the HTML backend can be swapped
//! (and the scrapers tested) without a browser.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::utils::parse_selector_unsafe;

pub(crate) const TBODY_SELECTOR_STR: &str = "table tbody";
pub(crate) const ROW_SELECTOR_STR: &str = "tr";
pub(crate) const CELL_SELECTOR_STR: &str = "td";
pub(crate) const LINK_SELECTOR_STR: &str = "a";

static TBODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(TBODY_SELECTOR_STR, "TBODY_SELECTOR"));
static ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(ROW_SELECTOR_STR, "ROW_SELECTOR"));
static CELL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(CELL_SELECTOR_STR, "CELL_SELECTOR"));
static LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(LINK_SELECTOR_STR, "LINK_SELECTOR"));

/// One `td` of a table row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableCell {
    /// Trimmed text content of the cell.
    pub text: String,
    /// Trimmed text of the first link inside the cell, if there is one.
    pub link_text: Option<String>,
    /// Tokens of the cell's `class` attribute.
    pub classes: Vec<String>,
}

impl TableCell {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// One `tr` of a table body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

/// Reads the rows of the first table body in an HTML document.
///
/// Implementations never fail: a document without a `table tbody` yields no
/// rows.
pub trait TableExtractor: Send + Sync {
    fn first_table_rows(&self, html: &str) -> Vec<TableRow>;
}

/// [`TableExtractor`] backed by the `scraper` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScraperExtractor;

impl TableExtractor for ScraperExtractor {
    fn first_table_rows(&self, html: &str) -> Vec<TableRow> {
        let document = Html::parse_document(html);
        let Some(tbody) = document.select(&TBODY_SELECTOR).next() else {
            log::debug!("No table body found in document");
            return Vec::new();
        };

        tbody
            .select(&ROW_SELECTOR)
            .map(|row| TableRow {
                cells: row.select(&CELL_SELECTOR).map(scraper_cell).collect(),
            })
            .collect()
    }
}

fn scraper_cell(cell: ElementRef<'_>) -> TableCell {
    TableCell {
        text: cell.text().collect::<String>().trim().to_string(),
        link_text: cell
            .select(&LINK_SELECTOR)
            .next()
            .map(|link| link.text().collect::<String>().trim().to_string()),
        classes: cell.value().classes().map(str::to_string).collect(),
    }
}
