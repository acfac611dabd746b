//! Keystroke, paste and retargeting handlers.

use dom::{CustomEvent, DomEvent, ElementHost, EventDetail, NodeId};
use log::debug;

use super::{ShiftTabRestore, TARGET, ValidatableInputUnit};
use crate::keys::{is_composing, is_printable};

const INVALID_STRING: &str = "Invalid string of characters entered.";

impl ValidatableInputUnit {
    /// `keydown` on the control.
    ///
    /// Printable characters that fail the character pattern are prevented
    /// and announced. An accepted character marks the keystroke as checked
    /// so the following `input` does not check it again.
    pub fn handle_keydown<H: ElementHost + ?Sized>(&mut self, host: &mut H, event: &mut DomEvent) {
        let key = &event.keyboard;
        if is_composing(key) {
            return;
        }
        if key.key == "Tab" && key.shift_key {
            let target = event.target;
            self.on_shift_tab_down(host, target);
            return;
        }
        if !self.prevent_invalid_input || self.effective_type() == "file" {
            return;
        }
        let Some(pattern) = &self.char_pattern else {
            return;
        };
        if key.meta_key || key.ctrl_key || key.key == "Backspace" || !is_printable(key) {
            return;
        }
        let Some(ch) = key.key.chars().next() else {
            return;
        };
        if pattern.matches_char(ch) {
            self.pattern_already_checked = true;
            return;
        }
        let text = format!("Invalid character {ch} not entered.");
        event.prevent_default();
        announce(host, text);
    }

    /// `input` from the editable field.
    ///
    /// Catches what the keystroke filter cannot (paste, drop, autofill): the
    /// whole new value is checked and reverted to the last valid one on
    /// failure.
    pub fn input_handler<H: ElementHost + ?Sized>(&mut self, host: &mut H) {
        let Some(field) = host.editable_field() else {
            debug!(target: TARGET, "input event without an editable field");
            return;
        };
        let field_type = field.input_type().to_string();
        let typed = field.value().to_string();

        let mut value = typed.clone();
        if self.restricts_characters() && !self.pattern_already_checked && !self.check_pattern_validity(&value) {
            announce(host, INVALID_STRING.to_string());
            value = self.previous_valid_input.clone();
        }
        self.pattern_already_checked = false;
        self.previous_valid_input.clone_from(&value);

        if field_type != "file" {
            if typed != value {
                if let Some(field) = host.editable_field() {
                    field.set_value(&value);
                }
            }
            self.set_value(host, &value);
        }
        if self.auto_validate {
            self.validate(host);
        }
    }

    /// `change` does not leave the shadow tree, so it is re-dispatched from
    /// the control with the same flags.
    pub fn change_handler<H: ElementHost + ?Sized>(&mut self, host: &mut H, event: &DomEvent) {
        host.dispatch_event(CustomEvent {
            name: event.event_type.as_str().to_string(),
            detail: EventDetail::SourceEvent(event.event_type),
            bubbles: event.bubbles,
            cancelable: event.cancelable,
            composed: false,
        });
    }

    /// Set the value without losing the caret.
    ///
    /// Fields without a selection API (e.g. `number`) just get the value.
    pub fn update_value_and_preserve_caret<H: ElementHost + ?Sized>(&mut self, host: &mut H, value: &str) {
        let start = host.editable_field().map(|field| field.selection_start());
        match start {
            Some(Ok(start)) => {
                self.set_value(host, value);
                if let Some(field) = host.editable_field() {
                    field.set_value(value);
                    if let Err(err) = field.set_selection_range(start, start) {
                        debug!(target: TARGET, "caret not restored: {err}");
                    }
                }
            }
            Some(Err(err)) => {
                debug!(target: TARGET, "caret not preserved: {err}");
                self.set_value(host, value);
            }
            None => self.set_value(host, value),
        }
    }

    /// `true` when every character of `value` passes the character pattern.
    pub fn check_pattern_validity(&self, value: &str) -> bool {
        match &self.char_pattern {
            Some(pattern) => pattern.matches_str(value),
            None => true,
        }
    }

    fn restricts_characters(&self) -> bool {
        self.prevent_invalid_input || self.allowed_pattern.is_some() || self.pattern.is_some()
    }

    /// Hold `tabindex` at `-1` for a frame so Shift+Tab leaves the control
    /// instead of landing on the inner field.
    fn on_shift_tab_down<H: ElementHost + ?Sized>(&mut self, host: &mut H, target: Option<NodeId>) {
        if target != Some(host.node_id()) {
            return;
        }
        if self.control_disabled {
            // Disabling already keeps the control out of the tab order.
            return;
        }
        let saved = match self.shift_tab.take() {
            Some(pending) => {
                host.clear_timeout(pending.timer);
                pending.saved
            }
            None => host.attribute("tabindex").map(str::to_string),
        };
        host.set_attribute("tabindex", "-1");
        let timer = host.set_timeout(self.tab_restore_delay);
        debug!(target: TARGET, "tabindex held at -1 until {timer:?}");
        self.shift_tab = Some(ShiftTabRestore { timer, saved });
    }
}

/// Tell assistive technology about rejected input.
fn announce<H: ElementHost + ?Sized>(host: &mut H, text: String) {
    debug!(target: TARGET, "announce: {text}");
    host.dispatch_event(CustomEvent::new("announce", EventDetail::Text(text)).bubbling_composed());
}
