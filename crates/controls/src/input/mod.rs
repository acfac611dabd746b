//! Value binding and validation for text controls.
//!
//! The unit owns the control's value and validity. It keeps the editable
//! field in sync with the value, filters keystrokes and pastes against a
//! character pattern, and publishes validity through `invalid`,
//! `aria-invalid` and the validation-message element.

mod keystroke;
mod label;
mod pattern;
mod validate;

use std::time::Duration;

use dom::{ElementHost, EventType, NodeId, TimerId};
use log::{debug, trace, warn};

use crate::bool_attr::BoolAttr;
use crate::config::ControlConfig;
use crate::focus::{ControlState, ControlStateObserver};
use crate::label_id::LabelIdGenerator;
use crate::reflect::{notify, reflect_flag, true_false};

pub use pattern::{CharPattern, PatternError};

pub(crate) const TARGET: &str = "controls.input";

/// `tabindex` to put back once the Shift+Tab workaround ends.
#[derive(Clone, Debug)]
struct ShiftTabRestore {
    timer: TimerId,
    saved: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ValidatableInputUnit {
    value: String,
    input_type: Option<String>,
    invalid: bool,
    invalid_message: Option<String>,
    has_validation_message: bool,
    required: bool,
    pattern: Option<String>,
    allowed_pattern: Option<String>,
    /// `pattern` compiled for whole-value matching.
    value_pattern: Option<CharPattern>,
    char_pattern: Option<CharPattern>,
    min_length: Option<usize>,
    max_length: Option<usize>,
    auto_validate: bool,
    prevent_invalid_input: bool,
    autofocus: bool,
    previous_valid_input: String,
    pattern_already_checked: bool,
    shift_tab: Option<ShiftTabRestore>,
    control_disabled: bool,
    alert_timer: Option<TimerId>,
    aria_labelled_by: Option<String>,
    aria_ensured: bool,
    rendered: bool,
    alert_role_duration: Duration,
    tab_restore_delay: Duration,
    label_ids: LabelIdGenerator,
}

impl ValidatableInputUnit {
    pub fn new(config: &ControlConfig, label_ids: LabelIdGenerator) -> Self {
        Self {
            value: String::new(),
            input_type: None,
            invalid: false,
            invalid_message: None,
            has_validation_message: false,
            required: false,
            pattern: None,
            allowed_pattern: None,
            value_pattern: None,
            char_pattern: None,
            min_length: None,
            max_length: None,
            auto_validate: false,
            prevent_invalid_input: false,
            autofocus: false,
            previous_valid_input: String::new(),
            pattern_already_checked: false,
            shift_tab: None,
            control_disabled: false,
            alert_timer: None,
            aria_labelled_by: None,
            aria_ensured: false,
            rendered: false,
            alert_role_duration: config.alert_role_duration,
            tab_restore_delay: config.tab_restore_delay,
            label_ids,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the bound value.
    ///
    /// Writes it through to the editable field and the form association and
    /// dispatches `changed`. Setting the current value does nothing.
    pub fn set_value<H: ElementHost + ?Sized>(&mut self, host: &mut H, value: &str) {
        if self.value == value {
            return;
        }
        self.value.clear();
        self.value.push_str(value);
        trace!(target: TARGET, "value -> {value:?}");
        if let Some(field) = host.editable_field() {
            if field.value() != value {
                field.set_value(value);
            }
        }
        if let Some(internals) = host.form_internals() {
            internals.set_form_value(value);
        }
        notify(host, "changed", value);
    }

    /// The `type` property; `None` behaves as `"text"`.
    pub fn input_type(&self) -> Option<&str> {
        self.input_type.as_deref()
    }

    pub(crate) fn effective_type(&self) -> &str {
        self.input_type.as_deref().unwrap_or("text")
    }

    pub fn set_input_type(&mut self, input_type: Option<&str>) {
        self.input_type = input_type.map(str::to_ascii_lowercase);
        self.refresh_char_pattern();
    }

    pub fn invalid(&self) -> bool {
        self.invalid
    }

    pub fn set_invalid<H: ElementHost + ?Sized>(&mut self, host: &mut H, value: bool) {
        if self.invalid == value {
            return;
        }
        self.invalid = value;
        trace!(target: TARGET, "invalid -> {value}");
        reflect_flag(host, "invalid", value);
        host.set_attribute("aria-invalid", true_false(value));
        let has_message = value && self.invalid_message.is_some();
        self.set_has_validation_message(host, has_message);
        self.ensure_invalid_alert_state(host, value);
    }

    pub fn invalid_message(&self) -> Option<&str> {
        self.invalid_message.as_deref()
    }

    /// An empty message counts as no message.
    pub fn set_invalid_message<H: ElementHost + ?Sized>(&mut self, host: &mut H, message: Option<&str>) {
        let message = message.filter(|m| !m.is_empty()).map(str::to_string);
        if self.invalid_message == message {
            return;
        }
        self.invalid_message = message;
        let has_message = self.invalid && self.invalid_message.is_some();
        self.set_has_validation_message(host, has_message);
    }

    /// `invalid` with a non-empty message.
    pub fn has_validation_message(&self) -> bool {
        self.has_validation_message
    }

    fn set_has_validation_message<H: ElementHost + ?Sized>(&mut self, host: &mut H, value: bool) {
        if self.has_validation_message == value {
            return;
        }
        self.has_validation_message = value;
        notify(host, "hasvalidationmessage", value);
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn set_required(&mut self, value: impl Into<BoolAttr>) {
        self.required = value.into().is_true();
    }

    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    pub fn set_pattern(&mut self, pattern: Option<&str>) {
        self.pattern = pattern.filter(|p| !p.is_empty()).map(str::to_string);
        self.refresh_char_pattern();
    }

    pub fn allowed_pattern(&self) -> Option<&str> {
        self.allowed_pattern.as_deref()
    }

    pub fn set_allowed_pattern(&mut self, pattern: Option<&str>) {
        self.allowed_pattern = pattern.filter(|p| !p.is_empty()).map(str::to_string);
        self.refresh_char_pattern();
    }

    /// The compiled pattern characters are checked against, if any.
    pub fn char_pattern(&self) -> Option<&CharPattern> {
        self.char_pattern.as_ref()
    }

    pub fn min_length(&self) -> Option<usize> {
        self.min_length
    }

    pub fn set_min_length(&mut self, value: Option<usize>) {
        self.min_length = value;
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    pub fn set_max_length(&mut self, value: Option<usize>) {
        self.max_length = value;
    }

    pub fn prevent_invalid_input(&self) -> bool {
        self.prevent_invalid_input
    }

    pub fn set_prevent_invalid_input(&mut self, value: impl Into<BoolAttr>) {
        self.prevent_invalid_input = value.into().is_true();
    }

    pub fn auto_validate(&self) -> bool {
        self.auto_validate
    }

    /// Turning auto-validation on validates immediately.
    pub fn set_auto_validate<H: ElementHost + ?Sized>(&mut self, host: &mut H, value: impl Into<BoolAttr>) {
        let value = value.into().is_true();
        if self.auto_validate == value {
            return;
        }
        self.auto_validate = value;
        if value {
            self.validate(host);
        }
    }

    pub fn autofocus(&self) -> bool {
        self.autofocus
    }

    pub fn set_autofocus<H: ElementHost + ?Sized>(&mut self, host: &mut H, value: impl Into<BoolAttr>) {
        let value = value.into().is_true();
        if self.autofocus == value {
            return;
        }
        self.autofocus = value;
        self.autofocus_changed(host, value);
    }

    /// Id of the slotted label, once resolved on first render.
    pub fn aria_labelled_by(&self) -> Option<&str> {
        self.aria_labelled_by.as_deref()
    }

    /// Owning form, when form association is available.
    pub fn form<H: ElementHost + ?Sized>(&self, host: &mut H) -> Option<NodeId> {
        host.form_internals().and_then(|internals| internals.form())
    }

    /// `true` while the Shift+Tab workaround holds `tabindex` at `-1`.
    pub fn shift_tab_pending(&self) -> bool {
        self.shift_tab.is_some()
    }

    pub fn connect<H: ElementHost + ?Sized>(&mut self, host: &mut H) {
        host.add_event_listener(EventType::KeyDown);
        self.ensure_aria(host);
        if self.autofocus {
            self.autofocus_changed(host, true);
        }
    }

    /// Cancels pending timers. A held Shift+Tab `tabindex` is restored
    /// right away and a transient alert role is removed.
    pub fn disconnect<H: ElementHost + ?Sized>(&mut self, host: &mut H) {
        host.remove_event_listener(EventType::KeyDown);
        if let Some(timer) = self.alert_timer.take() {
            host.clear_timeout(timer);
            if let Some(node) = host.validation_message() {
                node.remove_attribute("role");
            }
        }
        self.flush_shift_tab(host);
    }

    /// End a pending Shift+Tab hold now: its timer is cancelled and the
    /// held `tabindex` put back.
    pub fn flush_shift_tab<H: ElementHost + ?Sized>(&mut self, host: &mut H) {
        if let Some(restore) = self.shift_tab.take() {
            host.clear_timeout(restore.timer);
            debug!(target: TARGET, "shift+tab hold released early");
            restore_tabindex(host, restore.saved);
        }
    }

    /// Resolves the label once and applies autofocus on the first render.
    pub fn first_render<H: ElementHost + ?Sized>(&mut self, host: &mut H) {
        if self.rendered {
            return;
        }
        self.rendered = true;
        self.update_aria_labelled_by(host);
        if self.autofocus {
            self.autofocus_changed(host, true);
        }
    }

    /// Runs after the focus unit processed a native `focus`/`blur`.
    ///
    /// Focus is forwarded to the editable field with the caret moved to the
    /// end of plain text; blur validates when auto-validation is on.
    pub fn after_focus_blur<H: ElementHost + ?Sized>(&mut self, host: &mut H, is_focus: bool, focused: bool) {
        if focused && self.shift_tab.is_none() {
            let plain_text = self.effective_type() == "text";
            if let Some(field) = host.editable_field() {
                field.focus();
                let len = field.value().chars().count();
                if len > 0 && plain_text {
                    if let Err(err) = field.set_selection_range(len, len) {
                        debug!(target: TARGET, "caret not moved to end: {err}");
                    }
                }
            }
        }
        if !is_focus && self.auto_validate {
            self.validate(host);
        }
    }

    /// The form was reset.
    pub fn form_reset_callback<H: ElementHost + ?Sized>(&mut self, host: &mut H) {
        self.set_value(host, "");
    }

    /// The browser restored form state.
    pub fn form_state_restore_callback<H: ElementHost + ?Sized>(&mut self, host: &mut H, state: &str) {
        self.set_value(host, state);
    }

    /// Returns `false` for timers this unit does not own.
    pub fn on_timer<H: ElementHost + ?Sized>(&mut self, host: &mut H, id: TimerId) -> bool {
        if self.alert_timer == Some(id) {
            self.alert_timer = None;
            debug!(target: TARGET, "alert role cleared");
            if let Some(node) = host.validation_message() {
                node.remove_attribute("role");
            }
            return true;
        }
        if let Some(restore) = self.shift_tab.take_if(|r| r.timer == id) {
            debug!(target: TARGET, "tabindex restored after shift+tab");
            restore_tabindex(host, restore.saved);
            return true;
        }
        false
    }

    fn ensure_aria<H: ElementHost + ?Sized>(&mut self, host: &mut H) {
        if self.aria_ensured {
            return;
        }
        self.aria_ensured = true;
        if host.attribute("tabindex").is_none_or(str::is_empty) {
            host.set_attribute("tabindex", "0");
        }
    }

    fn autofocus_changed<H: ElementHost + ?Sized>(&mut self, host: &mut H, value: bool) {
        if !value {
            return;
        }
        if host.has_foreign_focus() {
            debug!(target: TARGET, "autofocus skipped, focus is elsewhere");
            return;
        }
        if let Some(field) = host.editable_field() {
            field.focus();
        }
    }

    /// `allowed_pattern` restricts characters. Otherwise `pattern` does when
    /// a single character can satisfy it (`[0-9]` but not `[0-9]{3}`), then
    /// the type default. `pattern` is also matched against the whole value
    /// on validation.
    fn refresh_char_pattern(&mut self) {
        self.value_pattern = self.pattern.as_deref().and_then(compile_pattern);
        let from_pattern = self
            .value_pattern
            .as_ref()
            .filter(|pattern| pattern.accepts_single_char())
            .cloned();
        if from_pattern.is_none() && self.value_pattern.is_some() {
            debug!(target: TARGET, "pattern constrains whole values only");
        }
        self.char_pattern = match self.allowed_pattern.as_deref() {
            Some(source) => compile_pattern(source),
            None => from_pattern.or_else(|| {
                pattern::default_for_type(self.effective_type()).and_then(compile_pattern)
            }),
        };
    }
}

impl ControlStateObserver for ValidatableInputUnit {
    fn control_state_changed<H: ElementHost + ?Sized>(&mut self, _: &mut H, state: ControlState) {
        self.control_disabled = state.disabled;
    }

    fn will_disable<H: ElementHost + ?Sized>(&mut self, host: &mut H) {
        self.flush_shift_tab(host);
    }
}

fn compile_pattern(source: &str) -> Option<CharPattern> {
    match CharPattern::new(source) {
        Ok(compiled) => Some(compiled),
        Err(err) => {
            warn!(target: TARGET, "{err}; characters are not restricted");
            None
        }
    }
}

fn restore_tabindex<H: ElementHost + ?Sized>(host: &mut H, saved: Option<String>) {
    match saved {
        Some(tabindex) => host.set_attribute("tabindex", &tabindex),
        None => host.remove_attribute("tabindex"),
    }
}
