//! Fixed-width text rendering of the ranking table.

use super::state::RankedRow;

const HEADERS: [&str; 7] = ["#", "Name", "WCA ID", "Country", "Gender", "Average", "Single"];

/// Renders `rows` as an aligned text table, one line per row plus a header.
pub fn render_table(rows: &[RankedRow]) -> String {
    if rows.is_empty() {
        return "No competitors found.".to_string();
    }

    let cells: Vec<[String; 7]> = rows
        .iter()
        .map(|row| {
            [
                row.position.to_string(),
                row.name.clone(),
                row.wca_id.clone(),
                row.country.clone(),
                row.gender.clone(),
                row.average.clone(),
                row.single.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS.map(str::to_string), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);
    for line in &cells {
        push_line(&mut out, line, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize; 7]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            // chars, not bytes: names and the placeholder are not ASCII
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    out.push_str(padded.join("  ").trim_end());
    out.push('\n');
}
