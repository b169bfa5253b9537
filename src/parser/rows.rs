use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::parser::{links, location};
use crate::store::Record;

/// Marks a row that reuses the company of the nearest preceding row.
pub const REPEAT_GLYPH: &str = "\u{21B3}"; // ↳

// The table dialect is fixed at five columns, so the separator row is
// exactly five pipe-delimited dash groups.
static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|(?:\s*-+\s*\|){5}$").unwrap());
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Index of the dash separator row, if any. The header is the line above it.
pub fn find_separator(lines: &[&str]) -> Option<usize> {
    lines
        .iter()
        .position(|line| SEPARATOR_RE.is_match(line.trim()))
}

/// Strip the boundary pipes and split a table row into trimmed cells.
pub fn split_cells(line: &str) -> Vec<String> {
    line.trim_matches('|')
        .split('|')
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// Remove HTML-tag-like substrings. No attribute parsing, the whole `<...>`
/// span goes.
fn strip_tags(cell: &str) -> String {
    TAG_RE.replace_all(cell, "").into_owned()
}

/// Normalize one data line into a record, or `None` for lines that are not
/// table rows (blank, trailing dash artifacts, prose) and for rows with too
/// few cells. `last_company` is the repeat-glyph accumulator threaded across
/// the row sequence by the caller.
pub fn parse_row(line: &str, last_company: &mut String) -> Option<Record> {
    let line = line.trim();
    if line.is_empty() || line.starts_with("---") || !line.starts_with('|') {
        return None;
    }

    let mut cells = split_cells(line);
    if cells.len() < 5 {
        warn!("Skipping malformed row: {}", line);
        return None;
    }

    // ↳ inherits the company of the nearest preceding non-repeat row.
    // Substitution happens before tag stripping, on the raw cell value.
    if cells[0] == REPEAT_GLYPH {
        cells[0] = last_company.clone();
    } else {
        *last_company = cells[0].clone();
    }

    for (i, cell) in cells.iter_mut().enumerate() {
        if i != 3 {
            *cell = strip_tags(cell);
        }
    }

    let link = links::extract_link(&cells[3]);
    let is_us = if location::is_us_location(&cells[2]) {
        "Yes"
    } else {
        "No"
    };

    Some(Record {
        company: std::mem::take(&mut cells[0]),
        role: std::mem::take(&mut cells[1]),
        location: std::mem::take(&mut cells[2]),
        link,
        date_posted: std::mem::take(&mut cells[4]),
        is_us_location: is_us.to_string(),
    })
}
