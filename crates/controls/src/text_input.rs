//! Text input: value binding and validation over hover and focus.

use dom::{DomEvent, ElementHost, EventType, NodeId, TimerId};
use log::trace;

use crate::bool_attr::BoolAttr;
use crate::config::ControlConfig;
use crate::focus::{ControlState, FocusDisabledUnit};
use crate::hover::HoverUnit;
use crate::input::ValidatableInputUnit;
use crate::label_id::LabelIdGenerator;
use crate::widget::Widget;

/// Types whose native field always shows something, so the label floats.
const FLOATING_TYPES: [&str; 7] = ["date", "color", "datetime-local", "file", "month", "time", "week"];

#[derive(Clone, Debug)]
pub struct TextInput {
    focus: FocusDisabledUnit,
    hover: HoverUnit,
    input: ValidatableInputUnit,
    placeholder: Option<String>,
    info_message: Option<String>,
    no_label_float: bool,
    connected: bool,
}

impl TextInput {
    /// Label ids come from a generator private to this control. Use
    /// [`with_label_ids`](Self::with_label_ids) to share one across controls.
    pub fn new(config: ControlConfig) -> Self {
        let labels = LabelIdGenerator::new(&config.label_id_prefix);
        Self::with_label_ids(config, labels)
    }

    pub fn with_label_ids(config: ControlConfig, labels: LabelIdGenerator) -> Self {
        Self {
            focus: FocusDisabledUnit::new(),
            hover: HoverUnit::new(),
            input: ValidatableInputUnit::new(&config, labels),
            placeholder: None,
            info_message: None,
            no_label_float: false,
            connected: false,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// The value and validation unit, for properties without a shortcut here.
    pub fn input(&self) -> &ValidatableInputUnit {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut ValidatableInputUnit {
        &mut self.input
    }

    pub fn focused(&self) -> bool {
        self.focus.focused()
    }

    pub fn disabled(&self) -> bool {
        self.focus.disabled()
    }

    pub fn hovered(&self) -> bool {
        self.hover.hovered()
    }

    pub fn control_state(&self) -> ControlState {
        self.focus.state()
    }

    pub fn set_focused<H: ElementHost + ?Sized>(&mut self, host: &mut H, value: impl Into<BoolAttr>) {
        self.focus.set_focused(host, &mut self.input, value.into().is_true());
    }

    pub fn set_disabled<H: ElementHost + ?Sized>(&mut self, host: &mut H, value: impl Into<BoolAttr>) {
        self.focus.set_disabled(host, &mut self.input, value.into().is_true());
    }

    pub fn set_hovered<H: ElementHost + ?Sized>(&mut self, host: &mut H, value: impl Into<BoolAttr>) {
        self.hover.set_hovered(host, value.into().is_true());
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn set_value<H: ElementHost + ?Sized>(&mut self, host: &mut H, value: &str) {
        self.input.set_value(host, value);
    }

    /// `"text"` unless a type was set.
    pub fn input_type(&self) -> &str {
        self.input.effective_type()
    }

    pub fn set_input_type(&mut self, input_type: Option<&str>) {
        self.input.set_input_type(input_type);
    }

    pub fn invalid(&self) -> bool {
        self.input.invalid()
    }

    pub fn set_invalid<H: ElementHost + ?Sized>(&mut self, host: &mut H, value: impl Into<BoolAttr>) {
        self.input.set_invalid(host, value.into().is_true());
    }

    pub fn set_invalid_message<H: ElementHost + ?Sized>(&mut self, host: &mut H, message: Option<&str>) {
        self.input.set_invalid_message(host, message);
    }

    pub fn has_validation_message(&self) -> bool {
        self.input.has_validation_message()
    }

    pub fn validate<H: ElementHost + ?Sized>(&mut self, host: &mut H) -> bool {
        self.input.validate(host)
    }

    pub fn check_validity<H: ElementHost + ?Sized>(&self, host: &mut H) -> bool {
        self.input.check_validity(host)
    }

    pub fn update_value_and_preserve_caret<H: ElementHost + ?Sized>(&mut self, host: &mut H, value: &str) {
        self.input.update_value_and_preserve_caret(host, value);
    }

    pub fn form<H: ElementHost + ?Sized>(&self, host: &mut H) -> Option<NodeId> {
        self.input.form(host)
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn set_placeholder<H: ElementHost + ?Sized>(&mut self, host: &mut H, placeholder: Option<&str>) {
        self.placeholder = placeholder.map(str::to_string);
        if let Some(field) = host.editable_field() {
            match &self.placeholder {
                Some(text) => field.set_attribute("placeholder", text),
                None => field.remove_attribute("placeholder"),
            }
        }
    }

    pub fn info_message(&self) -> Option<&str> {
        self.info_message.as_deref()
    }

    pub fn set_info_message(&mut self, message: Option<&str>) {
        self.info_message = message.filter(|m| !m.is_empty()).map(str::to_string);
    }

    pub fn no_label_float(&self) -> bool {
        self.no_label_float
    }

    pub fn set_no_label_float(&mut self, value: impl Into<BoolAttr>) {
        self.no_label_float = value.into().is_true();
    }

    /// Resolves the label and applies autofocus; later calls do nothing.
    pub fn first_render<H: ElementHost + ?Sized>(&mut self, host: &mut H) {
        self.input.first_render(host);
    }

    /// The owning form's disabled state changed.
    pub fn form_disabled_callback<H: ElementHost + ?Sized>(&mut self, host: &mut H, disabled: bool) {
        self.set_disabled(host, disabled);
    }

    pub fn form_reset_callback<H: ElementHost + ?Sized>(&mut self, host: &mut H) {
        self.input.form_reset_callback(host);
    }

    pub fn form_state_restore_callback<H: ElementHost + ?Sized>(&mut self, host: &mut H, state: &str) {
        self.input.form_state_restore_callback(host, state);
    }

    /// Class list of the label container.
    ///
    /// The label floats above the field once it has a value, a placeholder
    /// or a type whose native field is never empty, or while focused.
    pub fn label_class<H: ElementHost + ?Sized>(&self, host: &H) -> String {
        let mut class = String::from("label");
        if host.has_slotted("prefix") {
            class.push_str(" with-prefix");
        }
        let floats = self.focus.focused()
            || !self.input.value().is_empty()
            || self.placeholder.as_deref().is_some_and(|p| !p.is_empty())
            || FLOATING_TYPES.contains(&self.input_type());
        if floats && self.no_label_float {
            class.push_str(" hidden");
        } else if floats {
            class.push_str(" floating");
        } else {
            class.push_str(" resting");
        }
        class
    }

    /// Class list of the info line; hidden while an error is shown.
    pub fn info_addon_class(&self) -> String {
        let mut class = String::from("info");
        if self.input.invalid() && self.input.invalid_message().is_some() {
            class.push_str(" label-hidden");
        }
        class
    }

    /// Class list of the error line.
    pub fn error_addon_class(&self) -> String {
        let mut class = String::from("invalid");
        if !self.input.invalid() {
            class.push_str(" label-hidden");
        }
        if self.info_message.is_some() {
            class.push_str(" info-offset");
        }
        class
    }
}

impl Widget for TextInput {
    fn connect<H: ElementHost + ?Sized>(&mut self, host: &mut H) {
        if self.connected {
            return;
        }
        self.connected = true;
        self.focus.connect(host);
        self.input.connect(host);
        self.hover.connect(host);
        host.add_event_listener(EventType::Input);
        host.add_event_listener(EventType::Change);
    }

    fn disconnect<H: ElementHost + ?Sized>(&mut self, host: &mut H) {
        if !self.connected {
            return;
        }
        self.connected = false;
        host.remove_event_listener(EventType::Change);
        host.remove_event_listener(EventType::Input);
        self.hover.disconnect(host);
        self.input.disconnect(host);
        self.focus.disconnect(host);
    }

    fn handle_event<H: ElementHost + ?Sized>(&mut self, host: &mut H, event: &mut DomEvent) {
        if !self.connected {
            trace!(target: "controls.input", "{} ignored, not connected", event.event_type.as_str());
            return;
        }
        match event.event_type {
            EventType::Focus | EventType::Blur => {
                let is_focus = event.event_type == EventType::Focus;
                self.focus.handle_focus_blur(host, &mut self.input, is_focus);
                self.input.after_focus_blur(host, is_focus, self.focus.focused());
            }
            EventType::MouseOver | EventType::MouseLeave => {
                self.hover.handle_event(host, event);
            }
            EventType::KeyDown => self.input.handle_keydown(host, event),
            EventType::Input => self.input.input_handler(host),
            EventType::Change => self.input.change_handler(host, event),
            _ => {}
        }
    }

    fn on_timer<H: ElementHost + ?Sized>(&mut self, host: &mut H, id: TimerId) {
        self.input.on_timer(host, id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom::{AttributeTarget, HostElement, InputField, Node};

    const SELF: NodeId = NodeId(1);

    fn host() -> HostElement {
        HostElement::new(SELF).with_field(InputField::text(NodeId(10)))
    }

    #[test]
    fn label_rests_on_empty_text_field() {
        let input = TextInput::new(ControlConfig::default());
        assert_eq!(input.label_class(&host()), "label resting");
    }

    #[test]
    fn label_floats_for_value_placeholder_and_types() {
        let mut host = host();
        let mut input = TextInput::new(ControlConfig::default());
        input.set_value(&mut host, "x");
        assert_eq!(input.label_class(&host), "label floating");

        let mut input = TextInput::new(ControlConfig::default());
        input.set_placeholder(&mut host, Some("Name"));
        assert_eq!(input.label_class(&host), "label floating");
        assert_eq!(host.field().and_then(|f| f.attribute("placeholder")), Some("Name"));

        let mut input = TextInput::new(ControlConfig::default());
        input.set_input_type(Some("date"));
        input.set_no_label_float(true);
        assert_eq!(input.label_class(&host), "label hidden");
    }

    #[test]
    fn prefix_slot_is_reflected_in_label_class() {
        let host = host().with_light_child(Node::element(5, "span").with_attr("slot", "prefix"));
        let input = TextInput::new(ControlConfig::default());
        assert_eq!(input.label_class(&host), "label with-prefix resting");
    }

    #[test]
    fn addon_classes_follow_validity() {
        let mut host = host();
        let mut input = TextInput::new(ControlConfig::default());
        assert_eq!(input.info_addon_class(), "info");
        assert_eq!(input.error_addon_class(), "invalid label-hidden");

        input.set_info_message(Some("Hint"));
        input.set_invalid_message(&mut host, Some("Bad"));
        input.set_invalid(&mut host, true);
        assert_eq!(input.info_addon_class(), "info label-hidden");
        assert_eq!(input.error_addon_class(), "invalid info-offset");
    }

    #[test]
    fn form_disabled_callback_disables() {
        let mut host = host();
        let mut input = TextInput::new(ControlConfig::default());
        input.connect(&mut host);
        input.form_disabled_callback(&mut host, true);
        assert!(input.disabled());
        assert_eq!(host.attribute("tabindex"), Some("-1"));

        input.form_disabled_callback(&mut host, false);
        assert_eq!(host.attribute("tabindex"), Some("0"));
    }

    #[test]
    fn disabling_releases_a_pending_shift_tab_hold() {
        let mut host = host();
        let mut input = TextInput::new(ControlConfig::default());
        input.connect(&mut host);
        let mut tab = DomEvent::key_down(dom::KeyboardInit::named("Tab").with_shift()).with_target(SELF);
        input.handle_event(&mut host, &mut tab);
        assert!(input.input().shift_tab_pending());

        input.set_disabled(&mut host, true);
        assert!(!input.input().shift_tab_pending());
        assert_eq!(host.attribute("tabindex"), Some("-1"));
        assert_eq!(host.timers().pending_len(), 0);

        // A Shift+Tab while disabled does not hold anything.
        input.handle_event(&mut host, &mut tab);
        assert!(!input.input().shift_tab_pending());

        input.set_disabled(&mut host, false);
        assert_eq!(host.attribute("tabindex"), Some("0"));
    }

    #[test]
    fn focus_event_focuses_the_field() {
        let mut host = host();
        let mut input = TextInput::new(ControlConfig::default());
        input.connect(&mut host);
        input.handle_event(&mut host, &mut DomEvent::focus());
        assert!(input.focused());
        assert_eq!(host.field().map(InputField::is_focused), Some(true));
        assert_eq!(input.label_class(&host), "label floating");
    }

    #[test]
    fn input_event_syncs_value() {
        let mut host = host();
        let mut input = TextInput::new(ControlConfig::default());
        input.connect(&mut host);
        if let Some(field) = host.field_mut() {
            field.paste("hello");
        }
        input.handle_event(&mut host, &mut DomEvent::input());
        assert_eq!(input.value(), "hello");
    }
}
