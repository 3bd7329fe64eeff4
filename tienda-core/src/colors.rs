/// Extract the primary color token from a free-text color field.
///
/// The field may hold several space- or comma-separated color words
/// ("blanco negro", "blanco, negro"); only the first word is ever used
/// for filtering and option listing. A product tagged "blanco negro"
/// is filed under "blanco" and a search for "negro" must not match it.
/// Nullish input yields the empty string.
pub fn primary_color(input: Option<&str>) -> String {
    let lowered = input.unwrap_or("").to_lowercase();
    let spaced = lowered.replace(',', " ");
    spaced
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_separated_takes_first_word() {
        assert_eq!(primary_color(Some("blanco negro")), "blanco");
    }

    #[test]
    fn test_comma_separated_takes_first_word() {
        assert_eq!(primary_color(Some("blanco, negro")), "blanco");
        assert_eq!(primary_color(Some("blanco,,negro")), "blanco");
    }

    #[test]
    fn test_lowercases_and_trims() {
        assert_eq!(primary_color(Some("  Negro  ")), "negro");
    }

    #[test]
    fn test_nullish_and_empty_yield_empty() {
        assert_eq!(primary_color(None), "");
        assert_eq!(primary_color(Some("")), "");
        assert_eq!(primary_color(Some(" , , ")), "");
    }
}
