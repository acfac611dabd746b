//! Editing state for a single-line field: value, caret and selection.
//!
//! The buffer is UI-agnostic. It does no layout or text measurement, and it
//! never dispatches events. Integration layers translate key presses and
//! pointer positions into calls on this type and read the result back.

use crate::selection::SelectionRange;
use crate::text::{
    byte_to_char_offset, char_to_byte_offset, clamp_to_char_boundary, filter_single_line,
    next_cursor_boundary, prev_cursor_boundary,
};

/// Value, caret and selection of one editable field.
///
/// Offsets are byte indices kept on UTF-8 character boundaries. The value
/// revision increases on every text mutation so observers can cheaply detect
/// that something changed.
///
/// # Example
///
/// ```
/// use input_core::EditBuffer;
///
/// let mut buf = EditBuffer::with_value("12");
/// buf.insert_text("a3");
/// assert_eq!(buf.value(), "12a3");
///
/// buf.set_selection_chars(2, 3);
/// buf.delete();
/// assert_eq!(buf.value(), "123");
/// assert_eq!(buf.selection_chars(), (2, 2));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditBuffer {
    value: String,
    value_rev: u64,
    caret: usize,
    selection_anchor: Option<usize>,
}

impl EditBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A buffer holding `value` with the caret at its end.
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let caret = value.len();
        Self {
            value,
            value_rev: 0,
            caret,
            selection_anchor: None,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Revision counter, bumped by every mutation of the text.
    pub fn value_rev(&self) -> u64 {
        self.value_rev
    }

    /// Caret byte offset.
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Overwrite the value.
    ///
    /// Moves the caret to the end and clears the selection, the way a
    /// programmatic `value` assignment behaves on a native field. Returns
    /// `true` if the text changed.
    pub fn set_value(&mut self, value: &str) -> bool {
        let changed = self.value != value;
        if changed {
            self.value.clear();
            self.value.push_str(value);
            self.value_rev = self.value_rev.wrapping_add(1);
        }
        self.caret = self.value.len();
        self.selection_anchor = None;
        changed
    }

    /// Current selection, if a non-empty one exists.
    pub fn selection(&self) -> Option<SelectionRange> {
        let anchor = self.selection_anchor?;
        (anchor != self.caret).then(|| SelectionRange::new(anchor, self.caret))
    }

    /// `(start, end)` of the selection in characters; a collapsed selection
    /// at the caret when nothing is selected.
    pub fn selection_chars(&self) -> (usize, usize) {
        let range = self
            .selection()
            .unwrap_or(SelectionRange::collapsed(self.caret));
        (
            byte_to_char_offset(&self.value, range.start),
            byte_to_char_offset(&self.value, range.end),
        )
    }

    /// Select the characters `start..end`; both ends clamp to the value.
    ///
    /// The caret lands on `end`, matching `setSelectionRange` with a forward
    /// direction.
    pub fn set_selection_chars(&mut self, start: usize, end: usize) {
        let end = end.max(start);
        let start = char_to_byte_offset(&self.value, start);
        let end = char_to_byte_offset(&self.value, end);
        self.caret = end;
        self.selection_anchor = (start != end).then_some(start);
    }

    /// Place the caret at a byte offset.
    ///
    /// With `selecting`, the selection grows from the current anchor (or the
    /// old caret) to the new position.
    pub fn set_caret(&mut self, caret: usize, selecting: bool) {
        let caret = clamp_to_char_boundary(&self.value, caret);
        if selecting {
            if self.selection_anchor.is_none() {
                self.selection_anchor = Some(self.caret);
            }
        } else {
            self.selection_anchor = None;
        }
        self.caret = caret;
        self.normalize_anchor();
    }

    pub fn move_caret_to_end(&mut self) {
        self.caret = self.value.len();
        self.selection_anchor = None;
    }

    pub fn select_all(&mut self) {
        if self.value.is_empty() {
            self.selection_anchor = None;
            self.caret = 0;
            return;
        }
        self.selection_anchor = Some(0);
        self.caret = self.value.len();
    }

    /// Called when the field gains focus. Clamps the caret and drops the
    /// selection.
    pub fn focus(&mut self) {
        self.clamp();
        self.selection_anchor = None;
    }

    /// Called when the field loses focus.
    pub fn blur(&mut self) {
        self.clamp();
        self.selection_anchor = None;
    }

    /// Insert text at the caret, replacing the selection if there is one.
    ///
    /// Line breaks are stripped since the field holds a single line.
    pub fn insert_text(&mut self, s: &str) {
        self.clamp();
        let s = filter_single_line(s);
        if s.is_empty() {
            return;
        }

        self.delete_selection_if_any();

        let caret = clamp_to_char_boundary(&self.value, self.caret);
        self.value.insert_str(caret, &s);
        self.caret = caret + s.len();
        self.mark_text_dirty();
    }

    /// Delete the character before the caret, or the selection.
    pub fn backspace(&mut self) {
        self.clamp();
        if self.delete_selection_if_any() {
            return;
        }
        if self.caret == 0 {
            return;
        }

        let prev = prev_cursor_boundary(&self.value, self.caret);
        self.value.drain(prev..self.caret);
        self.caret = prev;
        self.mark_text_dirty();
    }

    /// Delete the character after the caret, or the selection.
    pub fn delete(&mut self) {
        self.clamp();
        if self.delete_selection_if_any() {
            return;
        }
        if self.caret >= self.value.len() {
            return;
        }

        let next = next_cursor_boundary(&self.value, self.caret);
        self.value.drain(self.caret..next);
        self.mark_text_dirty();
    }

    fn delete_selection_if_any(&mut self) -> bool {
        let Some(range) = self.selection() else {
            self.selection_anchor = None;
            return false;
        };
        self.value.drain(range.start..range.end);
        self.caret = range.start;
        self.selection_anchor = None;
        self.mark_text_dirty();
        true
    }

    fn clamp(&mut self) {
        self.caret = clamp_to_char_boundary(&self.value, self.caret);
        if let Some(anchor) = self.selection_anchor {
            self.selection_anchor = Some(clamp_to_char_boundary(&self.value, anchor));
        }
        self.normalize_anchor();
    }

    fn normalize_anchor(&mut self) {
        if self.selection_anchor == Some(self.caret) {
            self.selection_anchor = None;
        }
    }

    fn mark_text_dirty(&mut self) {
        self.value_rev = self.value_rev.wrapping_add(1);
    }
}
