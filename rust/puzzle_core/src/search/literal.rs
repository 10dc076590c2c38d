//! Literal substring location with character-based offsets.

use memchr::memmem;

/// Leftmost occurrence of `needle` in `haystack` as `(char_start, char_len)`.
///
/// Case-sensitive, no wildcards. An empty needle never matches.
pub fn find_literal(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return None;
    }
    let byte_start = memmem::find(haystack.as_bytes(), needle.as_bytes())?;
    let char_start = haystack[..byte_start].chars().count();
    Some((char_start, needle.chars().count()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_leftmost() {
        assert_eq!(find_literal("31415926", "159"), Some((3, 3)));
        assert_eq!(find_literal("1111", "11"), Some((0, 2)));
        assert_eq!(find_literal("26535", "5"), Some((2, 1)));
    }

    #[test]
    fn missing_or_empty_needle() {
        assert_eq!(find_literal("31415926", "999"), None);
        assert_eq!(find_literal("31415926", ""), None);
        assert_eq!(find_literal("", "3"), None);
    }

    #[test]
    fn case_sensitive() {
        assert_eq!(find_literal("abcABC", "ABC"), Some((3, 3)));
        assert_eq!(find_literal("abc", "B"), None);
    }

    #[test]
    fn offsets_count_characters() {
        assert_eq!(find_literal("π=3141", "314"), Some((2, 3)));
    }
}
