use dom::ElementHost;
use log::debug;

use super::{TARGET, ValidatableInputUnit};

impl ValidatableInputUnit {
    /// Validate the current value and update `invalid`.
    ///
    /// Without an editable field the control counts as valid.
    pub fn validate<H: ElementHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if host.editable_field().is_none() {
            debug!(target: TARGET, "validate without an editable field");
            self.set_invalid(host, false);
            return true;
        }
        let mut valid = self.check_input_validity(host);
        if valid && self.required && self.value.is_empty() {
            valid = false;
        }
        self.set_invalid(host, !valid);
        valid
    }

    /// Same rules as [`validate`](Self::validate) combined with the form
    /// association's validity, without touching `invalid`.
    pub fn check_validity<H: ElementHost + ?Sized>(&self, host: &mut H) -> bool {
        let own = host.editable_field().is_none() || self.check_input_validity(host);
        own && host
            .form_internals()
            .is_none_or(|internals| internals.check_validity())
    }

    /// Re-run native constraint validation plus the rules the field cannot
    /// see because its value is set programmatically.
    fn check_input_validity<H: ElementHost + ?Sized>(&self, host: &mut H) -> bool {
        if self.required && self.value.is_empty() {
            return false;
        }
        if self.effective_type() == "file" {
            return true;
        }
        if !host.editable_field().is_none_or(|field| field.check_validity()) {
            return false;
        }
        if !self.check_pattern_validity(&self.value) {
            return false;
        }
        // Like the native `pattern` constraint, an empty value is exempt.
        if !self.value.is_empty()
            && self
                .value_pattern
                .as_ref()
                .is_some_and(|pattern| !pattern.matches_value(&self.value))
        {
            return false;
        }
        let len = self.value.chars().count();
        if self.min_length.is_some_and(|min| min > 0 && len < min) {
            return false;
        }
        if self.max_length.is_some_and(|max| max > 0 && len > max) {
            return false;
        }
        true
    }

    /// Put `role="alert"` on the message element so the new message gets
    /// announced, and schedule its removal. A newer change re-arms the
    /// removal.
    pub(super) fn ensure_invalid_alert_state<H: ElementHost + ?Sized>(&mut self, host: &mut H, invalid: bool) {
        if self.invalid_message.is_none() {
            return;
        }
        let Some(node) = host.validation_message() else {
            debug!(target: TARGET, "no validation message element");
            return;
        };
        if invalid {
            node.set_attribute("role", "alert");
        } else {
            node.remove_attribute("role");
        }
        if let Some(previous) = self.alert_timer.take() {
            host.clear_timeout(previous);
        }
        self.alert_timer = Some(host.set_timeout(self.alert_role_duration));
    }
}
