//! Character-position helpers.
//!
//! Code lengths and field offsets are counted in characters, not bytes, so
//! non-ASCII input is measured the way a reader sees it and slicing never
//! splits a multi-byte character.

/// Number of characters in `value`.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// The characters of `value` at positions `start..end`.
///
/// Positions past the end are clamped, so out-of-range requests yield a
/// shorter or empty slice.
pub fn char_slice(value: &str, start: usize, end: usize) -> &str {
    let offset = |n: usize| {
        value
            .char_indices()
            .nth(n)
            .map_or(value.len(), |(i, _)| i)
    };
    let from = offset(start);
    let to = offset(end.max(start));
    &value[from..to]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_slices() {
        assert_eq!(char_slice("DEUTDEFF500", 0, 4), "DEUT");
        assert_eq!(char_slice("DEUTDEFF500", 8, 11), "500");
        assert_eq!(char_slice("DEUTDEFF", 8, 11), "");
    }

    #[test]
    fn multibyte_slices() {
        assert_eq!(char_len("DÉ68"), 4);
        assert_eq!(char_slice("DÉ68", 1, 3), "É6");
        assert_eq!(char_slice("DÉ68", 2, usize::MAX), "68");
    }

    #[test]
    fn reversed_range_is_empty() {
        assert_eq!(char_slice("ABCDEF", 4, 2), "");
    }
}
