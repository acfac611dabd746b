//! Press, active and toggle state machine.
//!
//! Pointer, keyboard and click paths all end in the same two setters, so the
//! reflected attributes and events are identical whichever way the user
//! activates the control.

use std::fmt;
use std::time::Duration;

use dom::{DomEvent, ElementHost, EventType, NodeId, TimerId};
use log::{debug, trace};

use crate::bool_attr::BoolAttr;
use crate::config::ControlConfig;
use crate::focus::{ControlState, ControlStateObserver};
use crate::keys::{is_enter, is_space};
use crate::reflect::{notify, notify_composed, reflect_flag, true_false};

const TARGET: &str = "controls.press";

/// Snapshot passed to the button-state callback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub pressed: bool,
    pub active: bool,
    pub toggles: bool,
}

pub type ButtonStateCallback = Box<dyn FnMut(ButtonState)>;

pub struct PressActiveUnit {
    pressed: bool,
    active: bool,
    toggles: bool,
    pointer_down: bool,
    received_focus_from_keyboard: bool,
    aria_active_attribute: String,
    click_delay: Duration,
    pending_clicks: Vec<TimerId>,
    on_button_state_changed: Option<ButtonStateCallback>,
}

impl fmt::Debug for PressActiveUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PressActiveUnit")
            .field("pressed", &self.pressed)
            .field("active", &self.active)
            .field("toggles", &self.toggles)
            .field("pointer_down", &self.pointer_down)
            .field("aria_active_attribute", &self.aria_active_attribute)
            .field("pending_clicks", &self.pending_clicks)
            .finish_non_exhaustive()
    }
}

impl PressActiveUnit {
    pub fn new(config: &ControlConfig) -> Self {
        Self {
            pressed: false,
            active: false,
            toggles: false,
            pointer_down: false,
            received_focus_from_keyboard: false,
            aria_active_attribute: config.aria_active_attribute.clone(),
            click_delay: config.click_delay,
            pending_clicks: Vec::new(),
            on_button_state_changed: None,
        }
    }

    /// Register the button-state callback, run after every pressed or active
    /// change and after control-state changes of an enabled control.
    pub fn with_button_state_callback(mut self, callback: impl FnMut(ButtonState) + 'static) -> Self {
        self.on_button_state_changed = Some(Box::new(callback));
        self
    }

    pub fn pressed(&self) -> bool {
        self.pressed
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn toggles(&self) -> bool {
        self.toggles
    }

    pub fn pointer_down(&self) -> bool {
        self.pointer_down
    }

    pub fn received_focus_from_keyboard(&self) -> bool {
        self.received_focus_from_keyboard
    }

    pub fn aria_active_attribute(&self) -> &str {
        &self.aria_active_attribute
    }

    pub fn button_state(&self) -> ButtonState {
        ButtonState {
            pressed: self.pressed,
            active: self.active,
            toggles: self.toggles,
        }
    }

    /// Synthetic clicks scheduled but not fired yet.
    pub fn pending_clicks(&self) -> &[TimerId] {
        &self.pending_clicks
    }

    pub fn connect<H: ElementHost + ?Sized>(&mut self, host: &mut H) {
        self.reflect_active(host);
        for ty in LISTENS_TO {
            host.add_event_listener(ty);
        }
        if !host.has_attribute("role") {
            host.set_attribute("role", "button");
        }
    }

    pub fn disconnect<H: ElementHost + ?Sized>(&mut self, host: &mut H) {
        for ty in LISTENS_TO {
            host.remove_event_listener(ty);
        }
        for id in self.pending_clicks.drain(..) {
            host.clear_timeout(id);
        }
    }

    pub fn set_toggles<H: ElementHost + ?Sized>(&mut self, host: &mut H, value: impl Into<BoolAttr>) {
        let value = value.into().is_true();
        if self.toggles == value {
            return;
        }
        self.toggles = value;
        reflect_flag(host, "toggles", value);
        self.active_changed(host);
    }

    pub fn set_active<H: ElementHost + ?Sized>(&mut self, host: &mut H, value: bool) {
        if self.active == value {
            return;
        }
        self.active = value;
        trace!(target: TARGET, "active -> {value}");
        reflect_flag(host, "active", value);
        notify(host, "activechange", value);
        self.active_changed(host);
    }

    /// Swap the ARIA attribute carrying the active state. The old attribute
    /// is removed and the new one applied right away.
    pub fn set_aria_active_attribute<H: ElementHost + ?Sized>(&mut self, host: &mut H, name: &str) {
        if self.aria_active_attribute == name {
            return;
        }
        let old = std::mem::replace(&mut self.aria_active_attribute, name.to_string());
        if host.has_attribute(&old) {
            host.remove_attribute(&old);
        }
        self.active_changed(host);
    }

    pub(crate) fn set_pressed<H: ElementHost + ?Sized>(&mut self, host: &mut H, value: bool) {
        if self.pressed == value {
            return;
        }
        self.pressed = value;
        trace!(target: TARGET, "pressed -> {value}");
        reflect_flag(host, "pressed", value);
        notify_composed(host, "pressedchange", value);
        self.button_state_changed();
    }

    /// Route a native event. Returns `true` if this unit listens for it.
    pub fn handle_event<H: ElementHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: &mut DomEvent,
        disabled: bool,
    ) -> bool {
        match event.event_type {
            EventType::MouseDown => {
                if disabled {
                    return true;
                }
                self.pointer_down = true;
                self.set_pressed(host, true);
                self.received_focus_from_keyboard = false;
            }
            EventType::MouseUp => {
                self.pointer_down = false;
                self.set_pressed(host, false);
            }
            EventType::Click => self.click(host, disabled),
            EventType::KeyDown => {
                if is_enter(&event.keyboard) {
                    if !disabled {
                        self.async_click(host);
                    }
                } else if is_space(&event.keyboard) {
                    self.space_key_down(host, event, disabled);
                }
            }
            EventType::KeyUp => {
                if is_space(&event.keyboard) {
                    self.space_key_up(host, event);
                }
            }
            EventType::Blur => {
                self.detect_keyboard_focus(false);
                self.set_pressed(host, false);
            }
            EventType::Focus => self.detect_keyboard_focus(true),
            _ => return false,
        }
        true
    }

    /// Fire a due synthetic click. Returns `false` for timers this unit does
    /// not own.
    pub fn on_timer<H: ElementHost + ?Sized>(&mut self, host: &mut H, id: TimerId, disabled: bool) -> bool {
        let Some(index) = self.pending_clicks.iter().position(|p| *p == id) else {
            return false;
        };
        self.pending_clicks.remove(index);
        if disabled {
            debug!(target: TARGET, "synthetic click {id:?} dropped, control disabled");
            return true;
        }
        debug!(target: TARGET, "synthetic click {id:?} fired");
        host.synthesize_click();
        self.click(host, disabled);
        true
    }

    fn click<H: ElementHost + ?Sized>(&mut self, host: &mut H, disabled: bool) {
        if disabled {
            return;
        }
        if self.toggles {
            self.set_active(host, !self.active);
        } else {
            self.set_active(host, false);
        }
    }

    fn space_key_down<H: ElementHost + ?Sized>(&mut self, host: &mut H, event: &mut DomEvent, disabled: bool) {
        // A focused light child handles its own activation.
        let Some(target) = event.target else {
            return;
        };
        if is_light_descendant(host, target) {
            return;
        }
        event.prevent_default();
        event.stop_immediate_propagation();
        if !disabled {
            self.set_pressed(host, true);
        }
    }

    fn space_key_up<H: ElementHost + ?Sized>(&mut self, host: &mut H, event: &DomEvent) {
        let Some(target) = event.target else {
            return;
        };
        if is_light_descendant(host, target) {
            return;
        }
        if self.pressed {
            self.async_click(host);
        }
        self.set_pressed(host, false);
    }

    fn async_click<H: ElementHost + ?Sized>(&mut self, host: &mut H) {
        let id = host.set_timeout(self.click_delay);
        debug!(target: TARGET, "synthetic click {id:?} scheduled in {:?}", self.click_delay);
        self.pending_clicks.push(id);
    }

    fn detect_keyboard_focus(&mut self, focused: bool) {
        self.received_focus_from_keyboard = !self.pointer_down && focused;
    }

    fn active_changed<H: ElementHost + ?Sized>(&mut self, host: &mut H) {
        self.reflect_active(host);
        self.button_state_changed();
    }

    fn reflect_active<H: ElementHost + ?Sized>(&self, host: &mut H) {
        if self.toggles {
            host.set_attribute(&self.aria_active_attribute, true_false(self.active));
        } else {
            host.remove_attribute(&self.aria_active_attribute);
        }
    }

    fn button_state_changed(&mut self) {
        let state = self.button_state();
        if let Some(callback) = self.on_button_state_changed.as_mut() {
            callback(state);
        }
    }
}

impl ControlStateObserver for PressActiveUnit {
    fn control_state_changed<H: ElementHost + ?Sized>(&mut self, host: &mut H, state: ControlState) {
        if state.disabled {
            self.set_pressed(host, false);
        } else {
            self.button_state_changed();
        }
    }
}

const LISTENS_TO: [EventType; 7] = [
    EventType::MouseDown,
    EventType::MouseUp,
    EventType::Click,
    EventType::KeyDown,
    EventType::KeyUp,
    EventType::Blur,
    EventType::Focus,
];

fn is_light_descendant<H: ElementHost + ?Sized>(host: &H, node: NodeId) -> bool {
    node != host.node_id() && host.contains(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom::{AttributeTarget, HostElement, KeyboardInit, Node};
    use std::cell::RefCell;
    use std::rc::Rc;

    const SELF: NodeId = NodeId(1);

    fn host() -> HostElement {
        HostElement::new(SELF).with_light_child(Node::element(2, "a"))
    }

    fn unit() -> PressActiveUnit {
        PressActiveUnit::new(&ControlConfig::default())
    }

    fn key(ty: EventType, key: KeyboardInit, target: NodeId) -> DomEvent {
        let ev = match ty {
            EventType::KeyUp => DomEvent::key_up(key),
            _ => DomEvent::key_down(key),
        };
        ev.with_target(target)
    }

    #[test]
    fn connect_sets_default_role_without_overriding() {
        let mut h = host();
        unit().connect(&mut h);
        assert_eq!(h.attribute("role"), Some("button"));

        let mut h = host().with_attribute("role", "switch");
        unit().connect(&mut h);
        assert_eq!(h.attribute("role"), Some("switch"));
    }

    #[test]
    fn pointer_down_up_drive_pressed() {
        let mut h = host();
        let mut u = unit();
        u.handle_event(&mut h, &mut DomEvent::mouse_down(), false);
        assert!(u.pressed() && u.pointer_down());
        assert_eq!(h.attribute("pressed"), Some(""));
        u.handle_event(&mut h, &mut DomEvent::mouse_up(), false);
        assert!(!u.pressed() && !u.pointer_down());
        assert_eq!(h.count_events("pressedchange"), 2);
    }

    #[test]
    fn keyboard_focus_detection_ignores_pointer_focus() {
        let mut h = host();
        let mut u = unit();
        u.handle_event(&mut h, &mut DomEvent::focus(), false);
        assert!(u.received_focus_from_keyboard());

        u.handle_event(&mut h, &mut DomEvent::blur(), false);
        u.handle_event(&mut h, &mut DomEvent::mouse_down(), false);
        u.handle_event(&mut h, &mut DomEvent::focus(), false);
        assert!(!u.received_focus_from_keyboard());
    }

    #[test]
    fn space_press_and_release_schedules_one_click() {
        let mut h = host();
        let mut u = unit();
        let mut down = key(EventType::KeyDown, KeyboardInit::space(), SELF);
        u.handle_event(&mut h, &mut down, false);
        assert!(u.pressed());
        assert!(down.default_prevented() && down.propagation_stopped());

        u.handle_event(&mut h, &mut key(EventType::KeyUp, KeyboardInit::space(), SELF), false);
        assert!(!u.pressed());
        assert_eq!(u.pending_clicks().len(), 1);
    }

    #[test]
    fn space_from_light_child_is_left_alone() {
        let mut h = host();
        let mut u = unit();
        let mut down = key(EventType::KeyDown, KeyboardInit::space(), NodeId(2));
        u.handle_event(&mut h, &mut down, false);
        assert!(!u.pressed());
        assert!(!down.default_prevented());
    }

    #[test]
    fn enter_click_fires_only_after_timer() {
        let mut h = host();
        let mut u = unit();
        u.set_toggles(&mut h, true);
        u.handle_event(&mut h, &mut key(EventType::KeyDown, KeyboardInit::enter(), SELF), false);
        assert!(!u.active());

        let id = u.pending_clicks()[0];
        assert!(u.on_timer(&mut h, id, false));
        assert!(u.active());
        assert_eq!(h.synthetic_clicks(), 1);
        assert!(!u.on_timer(&mut h, id, false), "timer already consumed");
    }

    #[test]
    fn aria_attribute_follows_toggles() {
        let mut h = host();
        let mut u = unit();
        u.connect(&mut h);
        assert!(!h.has_attribute("aria-pressed"));

        u.set_toggles(&mut h, "");
        assert_eq!(h.attribute("toggles"), Some(""));
        assert_eq!(h.attribute("aria-pressed"), Some("false"));

        u.set_aria_active_attribute(&mut h, "aria-checked");
        assert!(!h.has_attribute("aria-pressed"));
        assert_eq!(h.attribute("aria-checked"), Some("false"));

        u.set_toggles(&mut h, false);
        assert!(!h.has_attribute("aria-checked"));
    }

    #[test]
    fn disabled_control_state_releases_press() {
        let mut h = host();
        let mut u = unit();
        u.handle_event(&mut h, &mut DomEvent::mouse_down(), false);
        u.control_state_changed(&mut h, ControlState { focused: false, disabled: true });
        assert!(!u.pressed());
    }

    #[test]
    fn callback_sees_every_button_state_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut u = unit().with_button_state_callback(move |s| sink.borrow_mut().push(s));
        let mut h = host();

        u.set_toggles(&mut h, true);
        u.handle_event(&mut h, &mut DomEvent::click(), false);
        u.control_state_changed(&mut h, ControlState::default());

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert!(seen[1].active);
        assert_eq!(seen[2], seen[1]);
    }
}
