//! Button: press and toggle behavior over hover and focus.

use dom::{DomEvent, ElementHost, EventType, TimerId};
use log::trace;

use crate::bool_attr::BoolAttr;
use crate::config::ControlConfig;
use crate::focus::{ControlState, FocusDisabledUnit};
use crate::hover::HoverUnit;
use crate::press::{ButtonState, PressActiveUnit};
use crate::widget::Widget;

#[derive(Debug)]
pub struct Button {
    focus: FocusDisabledUnit,
    hover: HoverUnit,
    press: PressActiveUnit,
    connected: bool,
}

impl Button {
    pub fn new(config: ControlConfig) -> Self {
        Self {
            focus: FocusDisabledUnit::new(),
            hover: HoverUnit::new(),
            press: PressActiveUnit::new(&config),
            connected: false,
        }
    }

    pub fn with_button_state_callback(mut self, callback: impl FnMut(ButtonState) + 'static) -> Self {
        self.press = self.press.with_button_state_callback(callback);
        self
    }

    pub fn is_connected(&self) -> bool {
        self.connected
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

    pub fn pressed(&self) -> bool {
        self.press.pressed()
    }

    pub fn active(&self) -> bool {
        self.press.active()
    }

    pub fn toggles(&self) -> bool {
        self.press.toggles()
    }

    pub fn pointer_down(&self) -> bool {
        self.press.pointer_down()
    }

    pub fn received_focus_from_keyboard(&self) -> bool {
        self.press.received_focus_from_keyboard()
    }

    pub fn aria_active_attribute(&self) -> &str {
        self.press.aria_active_attribute()
    }

    pub fn control_state(&self) -> ControlState {
        self.focus.state()
    }

    pub fn button_state(&self) -> ButtonState {
        self.press.button_state()
    }

    /// Synthetic clicks waiting on their timer.
    pub fn pending_clicks(&self) -> usize {
        self.press.pending_clicks().len()
    }

    pub fn set_focused<H: ElementHost + ?Sized>(&mut self, host: &mut H, value: impl Into<BoolAttr>) {
        self.focus.set_focused(host, &mut self.press, value.into().is_true());
    }

    pub fn set_disabled<H: ElementHost + ?Sized>(&mut self, host: &mut H, value: impl Into<BoolAttr>) {
        self.focus.set_disabled(host, &mut self.press, value.into().is_true());
    }

    pub fn set_hovered<H: ElementHost + ?Sized>(&mut self, host: &mut H, value: impl Into<BoolAttr>) {
        self.hover.set_hovered(host, value.into().is_true());
    }

    pub fn set_active<H: ElementHost + ?Sized>(&mut self, host: &mut H, value: impl Into<BoolAttr>) {
        self.press.set_active(host, value.into().is_true());
    }

    pub fn set_toggles<H: ElementHost + ?Sized>(&mut self, host: &mut H, value: impl Into<BoolAttr>) {
        self.press.set_toggles(host, value);
    }

    pub fn set_aria_active_attribute<H: ElementHost + ?Sized>(&mut self, host: &mut H, name: &str) {
        self.press.set_aria_active_attribute(host, name);
    }
}

impl Widget for Button {
    fn connect<H: ElementHost + ?Sized>(&mut self, host: &mut H) {
        if self.connected {
            return;
        }
        self.connected = true;
        self.focus.connect(host);
        self.hover.connect(host);
        self.press.connect(host);
    }

    fn disconnect<H: ElementHost + ?Sized>(&mut self, host: &mut H) {
        if !self.connected {
            return;
        }
        self.connected = false;
        self.press.disconnect(host);
        self.hover.disconnect(host);
        self.focus.disconnect(host);
    }

    fn handle_event<H: ElementHost + ?Sized>(&mut self, host: &mut H, event: &mut DomEvent) {
        if !self.connected {
            trace!(target: "controls.press", "{} ignored, not connected", event.event_type.as_str());
            return;
        }
        match event.event_type {
            EventType::Focus | EventType::Blur => {
                let is_focus = event.event_type == EventType::Focus;
                self.focus.handle_focus_blur(host, &mut self.press, is_focus);
                self.press.handle_event(host, event, self.focus.disabled());
            }
            EventType::MouseOver | EventType::MouseLeave => {
                self.hover.handle_event(host, event);
            }
            _ => {
                self.press.handle_event(host, event, self.focus.disabled());
            }
        }
    }

    fn on_timer<H: ElementHost + ?Sized>(&mut self, host: &mut H, id: TimerId) {
        self.press.on_timer(host, id, self.focus.disabled());
    }
}
