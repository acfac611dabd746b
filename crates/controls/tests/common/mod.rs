#![allow(dead_code)]

use std::time::Duration;

use controls::{Button, ControlConfig, TextInput, Widget, advance_clock};
use dom::{DomEvent, HostElement, InputField, KeyboardInit, NodeId};

pub const SELF: NodeId = NodeId(1);
pub const FIELD: NodeId = NodeId(10);

pub fn button() -> (Button, HostElement) {
    let mut host = HostElement::new(SELF);
    let mut button = Button::new(ControlConfig::default());
    button.connect(&mut host);
    (button, host)
}

pub fn text_input() -> (TextInput, HostElement) {
    let mut host = HostElement::new(SELF)
        .with_field(InputField::text(FIELD))
        .with_message_element();
    let mut input = TextInput::new(ControlConfig::default());
    input.connect(&mut host);
    (input, host)
}

/// Dispatch `event` aimed at the control and hand it back for inspection.
pub fn fire<W: Widget>(widget: &mut W, host: &mut HostElement, event: DomEvent) -> DomEvent {
    let mut event = event.with_target(SELF);
    widget.handle_event(host, &mut event);
    event
}

pub fn key_down<W: Widget>(widget: &mut W, host: &mut HostElement, key: KeyboardInit) -> DomEvent {
    fire(widget, host, DomEvent::key_down(key))
}

pub fn key_up<W: Widget>(widget: &mut W, host: &mut HostElement, key: KeyboardInit) -> DomEvent {
    fire(widget, host, DomEvent::key_up(key))
}

/// Type `text` the way a browser does: keydown per character, and unless it
/// was prevented the field takes the character and fires `input`.
pub fn type_text(input: &mut TextInput, host: &mut HostElement, text: &str) {
    for ch in text.chars() {
        let event = key_down(input, host, KeyboardInit::character(ch));
        if event.default_prevented() {
            continue;
        }
        if let Some(field) = host.field_mut() {
            field.type_char(ch);
        }
        fire(input, host, DomEvent::input());
    }
}

pub fn paste(input: &mut TextInput, host: &mut HostElement, text: &str) {
    if let Some(field) = host.field_mut() {
        field.paste(text);
    }
    fire(input, host, DomEvent::input());
}

pub fn run_timers<W: Widget>(widget: &mut W, host: &mut HostElement, ms: u64) {
    advance_clock(widget, host, Duration::from_millis(ms));
}

pub fn field_value(host: &HostElement) -> String {
    host.field()
        .map(|field| field.buffer().value().to_string())
        .unwrap_or_default()
}
