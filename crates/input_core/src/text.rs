//! UTF-8 text utilities for caret handling.
//!
//! Carets are byte offsets that must never split a multi-byte character.
//! The DOM surface counts characters instead, so conversion helpers live here
//! as well.

use std::borrow::Cow;

/// Clamp an arbitrary byte index to a valid UTF-8 character boundary.
///
/// Indices beyond the end clamp to `s.len()`; indices inside a multi-byte
/// character move back to the start of that character.
///
/// ```
/// use input_core::clamp_to_char_boundary;
///
/// let s = "a€b"; // '€' is 3 bytes
/// assert_eq!(clamp_to_char_boundary(s, 2), 1);
/// assert_eq!(clamp_to_char_boundary(s, 4), 4);
/// assert_eq!(clamp_to_char_boundary(s, 100), 5);
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Previous character boundary strictly before `i` (0 at the start).
pub fn prev_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    s[..i].char_indices().next_back().map_or(0, |(idx, _)| idx)
}

/// Next character boundary strictly after `i` (`s.len()` at the end).
pub fn next_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    s[i..].chars().next().map_or(s.len(), |ch| i + ch.len_utf8())
}

/// Number of characters in front of the byte offset `byte`.
///
/// ```
/// use input_core::byte_to_char_offset;
///
/// assert_eq!(byte_to_char_offset("a€b", 4), 2);
/// assert_eq!(byte_to_char_offset("a€b", 2), 1); // clamped into '€'
/// ```
pub fn byte_to_char_offset(s: &str, byte: usize) -> usize {
    let byte = clamp_to_char_boundary(s, byte);
    s[..byte].chars().count()
}

/// Byte offset of the `chars`-th character boundary, clamped to the end.
///
/// ```
/// use input_core::char_to_byte_offset;
///
/// assert_eq!(char_to_byte_offset("a€b", 2), 4);
/// assert_eq!(char_to_byte_offset("a€b", 9), 5);
/// ```
pub fn char_to_byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map_or(s.len(), |(idx, _)| idx)
}

/// Strip CR and LF, since a single-line field cannot hold them.
///
/// Borrows when there is nothing to strip.
pub fn filter_single_line(s: &str) -> Cow<'_, str> {
    if !s.contains(['\n', '\r']) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|c| *c != '\n' && *c != '\r').collect())
}
