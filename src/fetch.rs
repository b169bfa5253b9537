use anyhow::Result;
use tracing::info;

use crate::error::{FetchError, FormatError};

// The table region is bounded by the table's own header row and a sentinel
// comment the README maintainers promise not to change.
const START_MARKER: &str = "| Company | Role | Location | Application/Link | Date Posted |";
const END_MARKER: &str =
    "<!-- Please leave a one line gap between this and the table TABLE_END (DO NOT CHANGE THIS LINE) -->";

// Rows flagged with these exact codepoints are citizenship-restricted or
// closed postings and never make it into the batch.
const RESTRICTED_GLYPH: char = '\u{1F6C2}'; // 🛂
const LOCKED_GLYPH: char = '\u{1F512}'; // 🔒

/// Download the source document and return the filtered table region.
/// No timeout and no retries: a hung or failed request surfaces to the
/// caller and aborts the run.
pub fn fetch_table(url: &str) -> Result<String> {
    info!("Fetching source document: {}", url);
    let response = reqwest::blocking::get(url).map_err(|source| FetchError::Request {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        }
        .into());
    }

    let body = response.text().map_err(|source| FetchError::Request {
        url: url.to_string(),
        source,
    })?;

    let table = slice_table(&body)?;
    info!("Sliced {} table lines", table.lines().count());
    Ok(table)
}

/// Slice the table region out of the full document text. The region starts
/// at the header row (the start marker itself) and stops before the end
/// sentinel; restricted and locked rows are dropped.
pub fn slice_table(document: &str) -> Result<String, FormatError> {
    let lines: Vec<&str> = document.lines().collect();

    // Last start marker before the end sentinel wins, the search stops at
    // the first end sentinel.
    let mut start = None;
    let mut end = None;
    for (i, line) in lines.iter().enumerate() {
        if line.contains(START_MARKER) {
            start = Some(i);
        }
        if line.contains(END_MARKER) {
            end = Some(i);
            break;
        }
    }

    let start = start.ok_or(FormatError::StartMarkerMissing)?;
    let end = end.ok_or(FormatError::EndMarkerMissing)?;
    if end <= start {
        return Err(FormatError::MarkersOutOfOrder);
    }

    let filtered: Vec<&str> = lines[start..end]
        .iter()
        .copied()
        .filter(|line| !line.contains(RESTRICTED_GLYPH) && !line.contains(LOCKED_GLYPH))
        .collect();

    Ok(filtered.join("\n"))
}
