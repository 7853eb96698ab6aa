//! [`TableExtractor`] backed by the `kuchiki` DOM tree.

use kuchiki::traits::TendrilSink;
use kuchiki::{ElementData, NodeDataRef};

use super::extractor::{
    TableCell, TableExtractor, TableRow, CELL_SELECTOR_STR, LINK_SELECTOR_STR, ROW_SELECTOR_STR,
    TBODY_SELECTOR_STR,
};

/// Extracts table rows by walking a `kuchiki` document.
#[derive(Debug, Clone, Copy, Default)]
pub struct KuchikiExtractor;

impl TableExtractor for KuchikiExtractor {
    fn first_table_rows(&self, html: &str) -> Vec<TableRow> {
        let document = kuchiki::parse_html().one(html);
        let Ok(tbody) = document.select_first(TBODY_SELECTOR_STR) else {
            log::debug!("No table body found in document");
            return Vec::new();
        };
        let Ok(rows) = tbody.as_node().select(ROW_SELECTOR_STR) else {
            return Vec::new();
        };

        rows.map(|row| TableRow {
            cells: match row.as_node().select(CELL_SELECTOR_STR) {
                Ok(cells) => cells.map(kuchiki_cell).collect(),
                Err(()) => Vec::new(),
            },
        })
        .collect()
    }
}

fn kuchiki_cell(cell: NodeDataRef<ElementData>) -> TableCell {
    let classes = cell
        .attributes
        .borrow()
        .get("class")
        .map(|value| value.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default();

    TableCell {
        text: cell.as_node().text_contents().trim().to_string(),
        link_text: cell
            .as_node()
            .select_first(LINK_SELECTOR_STR)
            .ok()
            .map(|link| link.as_node().text_contents().trim().to_string()),
        classes,
    }
}
