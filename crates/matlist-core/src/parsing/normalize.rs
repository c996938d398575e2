use std::collections::HashMap;
use std::sync::LazyLock;

/// Clean up a cell or token from extracted text.
///
/// Steps:
/// 1. Replace no-break and thin spaces with plain spaces
/// 2. Trim
/// 3. Collapse internal whitespace runs to a single space
pub fn normalize_text(raw: &str) -> String {
    raw.replace(['\u{00a0}', '\u{2009}'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Comparison form of a size or description: normalized text, lowercased.
pub fn normalize_key_part(raw: &str) -> String {
    normalize_text(raw).to_lowercase()
}

/// Comparison form of a unit of measure, with synonyms folded together.
pub fn normalize_units(raw: &str) -> String {
    let lower = normalize_key_part(raw);
    match UNIT_ALIASES.get(lower.as_str()) {
        Some(canonical) => canonical.to_string(),
        None => lower,
    }
}

static UNIT_ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    // Each
    m.insert("ea", "ea");
    m.insert("ea.", "ea");
    m.insert("each", "ea");

    // Linear feet
    m.insert("lf", "lf");
    m.insert("lf.", "lf");
    m.insert("lin ft", "lf");
    m.insert("lin. ft.", "lf");
    m.insert("linear feet", "lf");
    m.insert("linear ft", "lf");

    // Feet
    m.insert("ft", "ft");
    m.insert("ft.", "ft");
    m.insert("feet", "ft");

    m
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize_text("  Type   L  copper "), "Type L copper");
    }

    #[test]
    fn test_odd_spaces() {
        assert_eq!(normalize_text("3/4\u{2009}in\u{00a0}\u{00a0}tee"), "3/4 in tee");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize_text("   "), "");
    }

    #[test]
    fn test_key_part_is_case_insensitive() {
        assert_eq!(normalize_key_part(" Bolt "), normalize_key_part("BOLT"));
    }

    #[test]
    fn test_unit_synonyms() {
        assert_eq!(normalize_units("EA"), "ea");
        assert_eq!(normalize_units("Each"), "ea");
        assert_eq!(normalize_units("ea."), "ea");
        assert_eq!(normalize_units("Lin  Ft"), "lf");
        assert_eq!(normalize_units("LF"), "lf");
        assert_eq!(normalize_units("Feet"), "ft");
    }

    #[test]
    fn test_unknown_unit_passthrough() {
        assert_eq!(normalize_units(" Box "), "box");
    }
}
