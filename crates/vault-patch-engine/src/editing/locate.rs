//! Literal substring lookup by 1-based occurrence.
//!
//! Matches are case-sensitive, found left to right, and never overlap: once
//! occurrence `k` is found at `o`, the search for `k + 1` resumes at
//! `o + needle.len()`. Offsets handed out by the public functions are counted
//! in `char`s; the `*_byte` variants are for splicing into UTF-8 buffers.

/// Char offset of the start of the `occurrence`-th match of `needle`.
///
/// Returns `None` when `needle` is empty, `occurrence` is zero, or there are
/// fewer than `occurrence` matches.
pub fn locate(haystack: &str, needle: &str, occurrence: usize) -> Option<usize> {
    locate_byte(haystack, needle, occurrence).map(|byte| char_len(&haystack[..byte]))
}

/// Number of non-overlapping matches of `needle`; zero for an empty needle.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Byte offset of the start of the `occurrence`-th match of `needle`.
pub(crate) fn locate_byte(haystack: &str, needle: &str, occurrence: usize) -> Option<usize> {
    if needle.is_empty() || occurrence == 0 {
        return None;
    }
    haystack
        .match_indices(needle)
        .nth(occurrence - 1)
        .map(|(byte, _)| byte)
}

/// Byte ranges of every non-overlapping match of `needle`, in order.
pub(crate) fn match_byte_ranges<'a>(
    haystack: &'a str,
    needle: &'a str,
) -> impl Iterator<Item = std::ops::Range<usize>> + 'a {
    // An empty needle would match between every char.
    let needle_len = needle.len();
    haystack
        .match_indices(needle)
        .filter(move |_| needle_len > 0)
        .map(move |(byte, _)| byte..byte + needle_len)
}

pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Convert a char offset into a byte offset. `char_offset` must not exceed
/// `char_len(text)`; the end of the text maps to `text.len()`.
pub(crate) fn byte_offset(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map_or(text.len(), |(byte, _)| byte)
}
