mod common;

use common::{SELF, button, fire, key_down, key_up, run_timers};
use controls::{Button, ControlConfig, Widget};
use dom::{AttributeTarget, DomEvent, HostElement, KeyboardInit, Node, NodeId};

#[test]
fn click_without_toggles_always_deactivates() {
    let (mut button, mut host) = button();
    button.set_active(&mut host, true);
    fire(&mut button, &mut host, DomEvent::click());
    assert!(!button.active());
    fire(&mut button, &mut host, DomEvent::click());
    assert!(!button.active());
    assert!(!host.has_attribute("aria-pressed"));
}

#[test]
fn toggle_click_flips_active_and_aria_attribute() {
    let (mut button, mut host) = button();
    button.set_toggles(&mut host, true);
    assert_eq!(host.attribute("aria-pressed"), Some("false"));

    fire(&mut button, &mut host, DomEvent::click());
    assert!(button.active());
    assert_eq!(host.attribute("aria-pressed"), Some("true"));
    assert_eq!(host.attribute("active"), Some(""));

    fire(&mut button, &mut host, DomEvent::click());
    assert!(!button.active());
    assert_eq!(host.attribute("aria-pressed"), Some("false"));
    assert!(!host.has_attribute("active"));
}

#[test]
fn configured_aria_attribute_is_used() {
    let mut host = HostElement::new(SELF);
    let mut button = Button::new(ControlConfig::default().with_aria_active_attribute("aria-checked"));
    button.connect(&mut host);
    button.set_toggles(&mut host, "true");
    fire(&mut button, &mut host, DomEvent::click());
    assert_eq!(host.attribute("aria-checked"), Some("true"));

    button.set_aria_active_attribute(&mut host, "aria-selected");
    assert!(!host.has_attribute("aria-checked"));
    assert_eq!(host.attribute("aria-selected"), Some("true"));
}

#[test]
fn space_in_nested_focusable_does_not_press_the_control() {
    let mut host = HostElement::new(SELF).with_light_child(
        Node::element(4, "div").with_child(Node::element(5, "button")),
    );
    let mut button = Button::new(ControlConfig::default());
    button.connect(&mut host);

    let mut event = DomEvent::key_down(KeyboardInit::space()).with_target(NodeId(5));
    button.handle_event(&mut host, &mut event);
    assert!(!button.pressed());
    assert!(!event.default_prevented());

    let mut event = DomEvent::key_up(KeyboardInit::space()).with_target(NodeId(5));
    button.handle_event(&mut host, &mut event);
    run_timers(&mut button, &mut host, 10);
    assert_eq!(host.synthetic_clicks(), 0);
}

#[test]
fn space_on_the_control_presses_then_clicks() {
    let (mut button, mut host) = button();
    button.set_toggles(&mut host, true);

    let down = key_down(&mut button, &mut host, KeyboardInit::space());
    assert!(down.default_prevented());
    assert!(down.propagation_stopped());
    assert!(button.pressed());
    assert_eq!(host.attribute("pressed"), Some(""));

    key_up(&mut button, &mut host, KeyboardInit::space());
    assert!(!button.pressed());
    assert!(!button.active(), "click is deferred");

    run_timers(&mut button, &mut host, 1);
    assert!(button.active());
    assert_eq!(host.synthetic_clicks(), 1);
}

#[test]
fn pointer_press_tracks_mouse_buttons() {
    let (mut button, mut host) = button();
    fire(&mut button, &mut host, DomEvent::mouse_down());
    assert!(button.pressed());
    assert!(button.pointer_down());

    // Focus gained while the pointer is down is not keyboard focus.
    fire(&mut button, &mut host, DomEvent::focus());
    assert!(!button.received_focus_from_keyboard());

    fire(&mut button, &mut host, DomEvent::mouse_up());
    assert!(!button.pressed());

    fire(&mut button, &mut host, DomEvent::blur());
    fire(&mut button, &mut host, DomEvent::focus());
    assert!(button.received_focus_from_keyboard());

    let pressed: Vec<_> = host.events_named("pressedchange").collect();
    assert_eq!(pressed.len(), 2);
    assert!(pressed.iter().all(|e| e.bubbles && e.composed));
}

#[test]
fn setters_are_idempotent() {
    let (mut button, mut host) = button();
    button.set_toggles(&mut host, true);
    button.set_active(&mut host, true);
    button.set_hovered(&mut host, true);
    button.set_focused(&mut host, true);
    button.set_disabled(&mut host, false);

    let events = host.events().len();
    let mutations = host.attribute_mutations();
    button.set_active(&mut host, true);
    button.set_hovered(&mut host, "");
    button.set_focused(&mut host, "true");
    button.set_disabled(&mut host, false);
    button.set_toggles(&mut host, true);

    assert_eq!(host.events().len(), events);
    assert_eq!(host.attribute_mutations(), mutations);
}

#[test]
fn disabled_control_is_never_pressed_or_focused() {
    let (mut button, mut host) = button();
    button.set_disabled(&mut host, true);

    fire(&mut button, &mut host, DomEvent::mouse_down());
    key_down(&mut button, &mut host, KeyboardInit::space());
    key_down(&mut button, &mut host, KeyboardInit::enter());
    fire(&mut button, &mut host, DomEvent::focus());
    button.set_focused(&mut host, true);
    run_timers(&mut button, &mut host, 5);

    assert!(!button.pressed());
    assert!(!button.focused());
    assert_eq!(host.synthetic_clicks(), 0);
    assert_eq!(host.style("pointer-events"), Some("none"));
}

#[test]
fn disabling_blurs_a_focused_control() {
    let (mut button, mut host) = button();
    fire(&mut button, &mut host, DomEvent::focus());
    assert!(button.focused());
    button.set_disabled(&mut host, true);
    assert!(!button.focused());
    assert_eq!(host.blur_requests(), 1);
    let focused: Vec<_> = host
        .events_named("focusedchanged")
        .filter_map(|e| e.value_bool())
        .collect();
    assert_eq!(focused, vec![true, false]);
}

#[test]
fn tabindex_round_trips_through_disable() {
    let mut host = HostElement::new(SELF).with_attribute("tabindex", "3");
    let mut button = Button::new(ControlConfig::default());
    button.connect(&mut host);
    button.set_disabled(&mut host, true);
    assert_eq!(host.attribute("tabindex"), Some("-1"));
    button.set_disabled(&mut host, false);
    assert_eq!(host.attribute("tabindex"), Some("3"));
    assert_eq!(host.attribute("aria-disabled"), Some("false"));
    assert_eq!(host.style("pointer-events"), None);

    let (mut button, mut host) = common::button();
    button.set_disabled(&mut host, true);
    button.set_disabled(&mut host, false);
    assert!(!host.has_attribute("tabindex"));
}

#[test]
fn overlapping_synthetic_clicks_each_fire() {
    let (mut button, mut host) = button();
    button.set_toggles(&mut host, true);
    key_down(&mut button, &mut host, KeyboardInit::enter());
    key_down(&mut button, &mut host, KeyboardInit::enter());
    assert_eq!(button.pending_clicks(), 2);

    run_timers(&mut button, &mut host, 1);
    assert_eq!(host.synthetic_clicks(), 2);
    assert!(!button.active(), "two toggles cancel out");
}

#[test]
fn click_pending_at_disable_is_dropped() {
    let (mut button, mut host) = button();
    button.set_toggles(&mut host, true);
    key_down(&mut button, &mut host, KeyboardInit::enter());
    button.set_disabled(&mut host, true);
    run_timers(&mut button, &mut host, 1);
    assert_eq!(host.synthetic_clicks(), 0);
    assert!(!button.active());
}

#[test]
fn disconnect_cancels_pending_clicks() {
    let (mut button, mut host) = button();
    key_down(&mut button, &mut host, KeyboardInit::enter());
    button.disconnect(&mut host);
    assert_eq!(host.timers().pending_len(), 0);
    assert_eq!(host.total_listeners(), 0);
}

#[test]
fn existing_role_is_kept() {
    let mut host = HostElement::new(SELF).with_attribute("role", "switch");
    let mut button = Button::new(ControlConfig::default());
    button.connect(&mut host);
    assert_eq!(host.attribute("role"), Some("switch"));
}

#[test]
fn hover_events_bubble_out_of_the_shadow_tree() {
    let (mut button, mut host) = button();
    fire(&mut button, &mut host, DomEvent::mouse_over());
    assert_eq!(host.attribute("hovered"), Some(""));
    fire(&mut button, &mut host, DomEvent::mouse_leave());
    assert!(!host.has_attribute("hovered"));
    let hovered: Vec<_> = host.events_named("hoveredchange").collect();
    assert_eq!(hovered.len(), 2);
    assert!(hovered.iter().all(|e| e.bubbles && e.composed));
}
