use core_types::NodeId;

use crate::host::FormInternals;

/// Form association that records every submitted value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormRecorder {
    values: Vec<String>,
    valid: bool,
    form: Option<NodeId>,
}

impl Default for FormRecorder {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            valid: true,
            form: None,
        }
    }
}

impl FormRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_form(mut self, form: NodeId) -> Self {
        self.form = Some(form);
        self
    }

    pub fn set_valid(&mut self, valid: bool) {
        self.valid = valid;
    }

    /// Every value handed to `set_form_value`, oldest first.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn current(&self) -> Option<&str> {
        self.values.last().map(String::as_str)
    }
}

impl FormInternals for FormRecorder {
    fn set_form_value(&mut self, value: &str) {
        self.values.push(value.to_string());
    }

    fn check_validity(&self) -> bool {
        self.valid
    }

    fn form(&self) -> Option<NodeId> {
        self.form
    }
}
