use core_types::NodeId;
use input_core::{EditBuffer, byte_to_char_offset};
use log::debug;

use super::AttributeMap;
use crate::error::FieldError;
use crate::host::{AttributeTarget, EditableField};

/// Types whose selection API is available, per the HTML standard.
const SELECTABLE_TYPES: &[&str] = &["text", "search", "url", "tel", "password"];

/// An `<input>` backed by an [`EditBuffer`].
#[derive(Clone, Debug)]
pub struct InputField {
    id: NodeId,
    input_type: String,
    attributes: AttributeMap,
    buffer: EditBuffer,
    focused: bool,
    focus_requests: usize,
    custom_validity: Option<String>,
}

impl InputField {
    pub fn new(id: NodeId, input_type: &str) -> Self {
        Self {
            id,
            input_type: input_type.to_ascii_lowercase(),
            attributes: AttributeMap::default(),
            buffer: EditBuffer::new(),
            focused: false,
            focus_requests: 0,
            custom_validity: None,
        }
    }

    pub fn text(id: NodeId) -> Self {
        Self::new(id, "text")
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.buffer.set_value(value);
        self
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn buffer(&self) -> &EditBuffer {
        &self.buffer
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus_requests(&self) -> usize {
        self.focus_requests
    }

    pub fn blur(&mut self) {
        self.focused = false;
        self.buffer.blur();
    }

    /// `setCustomValidity`: a non-empty message makes the field invalid.
    pub fn set_custom_validity(&mut self, message: &str) {
        self.custom_validity = (!message.is_empty()).then(|| message.to_string());
    }

    /// User typing: insert `ch` at the caret.
    pub fn type_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.buffer.insert_text(ch.encode_utf8(&mut buf));
    }

    /// User paste: insert `text` at the caret, replacing the selection.
    pub fn paste(&mut self, text: &str) {
        self.buffer.insert_text(text);
    }

    pub fn backspace(&mut self) {
        self.buffer.backspace();
    }

    pub fn select_all(&mut self) {
        self.buffer.select_all();
    }

    /// `(selectionStart, selectionEnd)` in characters, ignoring type support.
    pub fn selection_chars(&self) -> (usize, usize) {
        self.buffer.selection_chars()
    }

    fn supports_selection(&self) -> bool {
        SELECTABLE_TYPES.contains(&self.input_type.as_str())
    }

    fn char_len(&self) -> usize {
        byte_to_char_offset(self.buffer.value(), self.buffer.value().len())
    }
}

impl AttributeTarget for InputField {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.set(name, value);
    }

    fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }
}

impl EditableField for InputField {
    fn input_type(&self) -> &str {
        &self.input_type
    }

    fn value(&self) -> &str {
        self.buffer.value()
    }

    fn set_value(&mut self, value: &str) {
        self.buffer.set_value(value);
    }

    fn selection_start(&self) -> Result<usize, FieldError> {
        if !self.supports_selection() {
            return Err(FieldError::SelectionUnsupported {
                input_type: self.input_type.clone(),
            });
        }
        Ok(self.buffer.selection_chars().0)
    }

    fn set_selection_range(&mut self, start: usize, end: usize) -> Result<(), FieldError> {
        if !self.supports_selection() {
            return Err(FieldError::SelectionUnsupported {
                input_type: self.input_type.clone(),
            });
        }
        let len = self.char_len();
        if let Some(offset) = [start, end].into_iter().find(|o| *o > len) {
            return Err(FieldError::OutOfRange { offset, len });
        }
        self.buffer.set_selection_chars(start, end);
        Ok(())
    }

    fn focus(&mut self) {
        self.focus_requests += 1;
        if !self.focused {
            self.focused = true;
            self.buffer.focus();
        }
    }

    fn check_validity(&self) -> bool {
        if let Some(message) = &self.custom_validity {
            debug!(target: "dom.host", "field {:?} invalid: {message}", self.id);
            return false;
        }
        let value = self.buffer.value();
        match self.input_type.as_str() {
            "number" => value.is_empty() || value.trim().parse::<f64>().is_ok(),
            "email" => value.is_empty() || value.contains('@'),
            _ => true,
        }
    }
}
