use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for locale-insensitive comparison
/// - Unicode normalization (NFD decomposition) with combining marks stripped
/// - Lowercase
/// - Collapse internal whitespace
pub fn sort_key(s: &str) -> String {
    let stripped: String = s.nfd().filter(|c| !is_combining_mark(*c)).collect();
    let lowered = stripped.to_lowercase();
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Case- and diacritic-insensitive ordering, with the raw strings as a
/// tiebreaker so the order stays total.
pub fn compare_alpha(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b)).then_with(|| a.cmp(b))
}

fn numeric_value(s: &str) -> Option<f64> {
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Pure numeric ordering for the derived size option list. Tokens that
/// do not parse as finite numbers compare equal to each other and after
/// every numeric token; under a stable sort their first-appearance
/// order is preserved.
pub fn compare_numeric(a: &str, b: &str) -> Ordering {
    match (numeric_value(a), numeric_value(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Mixed ordering for parsed size tokens: numeric tokens by value,
/// every numeric token before every label, labels by locale-insensitive
/// text. This is what makes "8, 10, XL" sort as 8, 10, XL instead of
/// lexicographically.
pub fn compare_size_tokens(a: &str, b: &str) -> Ordering {
    match (numeric_value(a), numeric_value(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => compare_alpha(a, b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_strips_diacritics_and_case() {
        assert_eq!(sort_key("Árbol"), "arbol");
        assert_eq!(sort_key("  Niño   Grande "), "nino grande");
    }

    #[test]
    fn test_compare_alpha_is_accent_insensitive() {
        assert_eq!(compare_alpha("adidas", "Ángel"), Ordering::Less);
        assert_eq!(compare_alpha("ángel", "angel"), Ordering::Greater); // tiebreak on raw bytes
    }

    #[test]
    fn test_compare_numeric_orders_by_value() {
        assert_eq!(compare_numeric("9", "10"), Ordering::Less);
        assert_eq!(compare_numeric("26.5", "26"), Ordering::Greater);
    }

    #[test]
    fn test_compare_numeric_puts_labels_last_and_equal() {
        assert_eq!(compare_numeric("100", "talla unica"), Ordering::Less);
        assert_eq!(compare_numeric("talla unica", "100"), Ordering::Greater);
        assert_eq!(compare_numeric("talla unica", "XL"), Ordering::Equal);
    }

    #[test]
    fn test_compare_size_tokens_mixed() {
        assert_eq!(compare_size_tokens("8", "XL"), Ordering::Less);
        assert_eq!(compare_size_tokens("XL", "8"), Ordering::Greater);
        assert_eq!(compare_size_tokens("m", "XL"), Ordering::Less);
    }
}
