//! # input_core
//!
//! UI-agnostic editing state for the editable field that sits inside a text
//! control.
//!
//! This crate provides:
//! - [`EditBuffer`]: value, caret, selection and revision of a single field
//! - [`SelectionRange`]: a normalized byte range into the value
//! - UTF-8 helpers to keep byte offsets on character boundaries and to
//!   translate between byte offsets and character offsets
//!
//! ## Offsets
//!
//! Internally every caret and selection offset is a byte index that is always
//! kept on a UTF-8 character boundary. Callers that speak in characters (the
//! DOM-facing `selectionStart`/`selectionEnd` surface) go through
//! [`EditBuffer::selection_chars`] and [`EditBuffer::set_selection_chars`].
//!
//! ## Design Principles
//!
//! The crate depends only on `std`. It performs no layout, measurement or
//! event dispatch; it only answers "what is the value and where is the caret".

mod buffer;
mod selection;
mod text;

pub use buffer::EditBuffer;
pub use selection::SelectionRange;

pub use text::{
    byte_to_char_offset, char_to_byte_offset, clamp_to_char_boundary, filter_single_line,
    next_cursor_boundary, prev_cursor_boundary,
};
