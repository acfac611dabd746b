//! Pointer hover state.

use dom::{DomEvent, ElementHost, EventType};
use log::trace;

use crate::reflect::{notify_composed, reflect_flag};

/// Owns `hovered`. Independent of every other unit.
#[derive(Clone, Debug, Default)]
pub struct HoverUnit {
    hovered: bool,
}

impl HoverUnit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> bool {
        self.hovered
    }

    pub fn connect<H: ElementHost + ?Sized>(&mut self, host: &mut H) {
        host.add_event_listener(EventType::MouseOver);
        host.add_event_listener(EventType::MouseLeave);
    }

    pub fn disconnect<H: ElementHost + ?Sized>(&mut self, host: &mut H) {
        host.remove_event_listener(EventType::MouseOver);
        host.remove_event_listener(EventType::MouseLeave);
    }

    pub fn set_hovered<H: ElementHost + ?Sized>(&mut self, host: &mut H, value: bool) {
        if self.hovered == value {
            return;
        }
        self.hovered = value;
        trace!(target: "controls.hover", "hovered -> {value}");
        reflect_flag(host, "hovered", value);
        notify_composed(host, "hoveredchange", value);
    }

    /// Returns `true` when the event was a hover event.
    pub fn handle_event<H: ElementHost + ?Sized>(&mut self, host: &mut H, event: &DomEvent) -> bool {
        match event.event_type {
            EventType::MouseOver => self.set_hovered(host, true),
            EventType::MouseLeave => self.set_hovered(host, false),
            _ => return false,
        }
        true
    }
}
