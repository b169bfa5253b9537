use std::sync::LazyLock;

use regex::Regex;

const US_STATES: [&str; 50] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID",
    "IL", "IN", "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS",
    "MO", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH", "OK",
    "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA", "WV",
    "WI", "WY",
];

/// Well-known US locations written without a state or country suffix.
const US_SHORTHANDS: [&str; 5] = ["nyc", "washington d.c.", "washington, dc", "dc", "remote in usa"];

static COUNTRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(usa|united states)").unwrap());

// "San Jose, CA" or "San Jose, CA, USA", anchored at the end of the cell.
static STATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"(?i),\s+({})(,?\s*(USA|United States)?)?$",
        US_STATES.join("|")
    );
    Regex::new(&pattern).unwrap()
});

/// Classify a location cell as US or non-US. Country mention beats state
/// suffix beats shorthand; anything unmatched is non-US.
pub fn is_us_location(location: &str) -> bool {
    if COUNTRY_RE.is_match(location) {
        return true;
    }
    if STATE_RE.is_match(location) {
        return true;
    }
    US_SHORTHANDS.contains(&location.trim().to_lowercase().as_str())
}
