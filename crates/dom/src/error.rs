use std::fmt;

/// Failure of a caret/selection call on an editable field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// The field type has no selection API (e.g. `number`, `email`).
    SelectionUnsupported { input_type: String },
    /// A character offset lies past the end of the value.
    OutOfRange { offset: usize, len: usize },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::SelectionUnsupported { input_type } => {
                write!(f, "input type '{input_type}' does not support selection")
            }
            FieldError::OutOfRange { offset, len } => {
                write!(f, "offset {offset} is out of range for a value of {len} characters")
            }
        }
    }
}

impl std::error::Error for FieldError {}
