use crate::sorting::compare_size_tokens;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Integer range segment, e.g. "12-22" or "28 - 26". Both bounds must
/// be plain integer literals; decimals and signs never expand.
fn range_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+)\s*-\s*(\d+)$").unwrap())
}

/// Parse a free-text size specification into a canonical, deduplicated,
/// ordered list of size tokens.
///
/// The input is comma-separated; integer ranges expand inclusively in
/// either direction ("28-26" yields 28, 27, 26 before sorting), and any
/// other segment survives verbatim as a label ("26.5", "talla unica").
/// Nullish input yields an empty list. Never fails.
pub fn parse_sizes(input: Option<&str>) -> Vec<String> {
    let Some(input) = input else {
        return Vec::new();
    };

    let mut tokens = Vec::new();
    for segment in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        match expand_range(segment) {
            Some(expanded) => tokens.extend(expanded),
            None => tokens.push(segment.to_string()),
        }
    }

    let mut seen = HashSet::new();
    tokens.retain(|t| seen.insert(t.clone()));
    tokens.sort_by(|a, b| compare_size_tokens(a, b));
    tokens
}

/// Expand an integer range segment, or None when the segment is not a
/// range (including bounds too large to represent).
fn expand_range(segment: &str) -> Option<Vec<String>> {
    let caps = range_pattern().captures(segment)?;
    let a: i64 = caps[1].parse().ok()?;
    let b: i64 = caps[2].parse().ok()?;

    let values: Vec<i64> = if a <= b {
        (a..=b).collect()
    } else {
        (b..=a).rev().collect()
    };

    Some(values.into_iter().map(|v| v.to_string()).collect())
}
