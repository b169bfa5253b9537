use std::sync::LazyLock;

use regex::Regex;

static HREF_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"<a href="([^"]+)""#).unwrap());

// Aggregator redirects are never the canonical application link.
const TRACKING_PREFIX: &str = "https://simplify";
const TRACKING_SUFFIX: &str = "?utm_source=Simplify&ref=Simplify";

/// Pick the canonical application link out of a raw link cell: the first
/// `href` in document order that is not an aggregator redirect, with the
/// tracking query suffix removed. Empty string when no link qualifies.
pub fn extract_link(cell: &str) -> String {
    for caps in HREF_RE.captures_iter(cell) {
        let href = &caps[1];
        if href.starts_with(TRACKING_PREFIX) {
            continue;
        }
        return match href.strip_suffix(TRACKING_SUFFIX) {
            Some(stripped) => stripped.to_string(),
            None => href.to_string(),
        };
    }
    String::new()
}
