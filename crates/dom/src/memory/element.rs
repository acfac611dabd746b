use std::collections::BTreeMap;
use std::time::Duration;

use core_types::{NodeId, TimerId};
use log::trace;

use super::{AttributeMap, FormRecorder, InputField, MessageElement};
use crate::event::{CustomEvent, EventType};
use crate::host::{AttributeTarget, EditableField, ElementHost, FormInternals};
use crate::node::Node;
use crate::timer::TimerQueue;

/// A custom element living entirely in memory.
///
/// Built with the `with_*` methods to describe what its rendered content
/// holds (an editable field, a message element, slots) and what the light
/// DOM projects into it.
#[derive(Clone, Debug)]
pub struct HostElement {
    id: NodeId,
    attributes: AttributeMap,
    style: Vec<(String, String)>,
    listeners: BTreeMap<EventType, usize>,
    events: Vec<CustomEvent>,
    has_focus: bool,
    focus_requests: usize,
    blur_requests: usize,
    foreign_focus: bool,
    synthetic_clicks: usize,
    light_dom: Vec<Node>,
    slots: Vec<String>,
    field: Option<InputField>,
    message: Option<MessageElement>,
    internals: Option<FormRecorder>,
    timers: TimerQueue,
}

impl HostElement {
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            attributes: AttributeMap::default(),
            style: Vec::new(),
            listeners: BTreeMap::new(),
            events: Vec::new(),
            has_focus: false,
            focus_requests: 0,
            blur_requests: 0,
            foreign_focus: false,
            synthetic_clicks: 0,
            light_dom: Vec::new(),
            slots: Vec::new(),
            field: None,
            message: None,
            internals: None,
            timers: TimerQueue::new(),
        }
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.set(name, value);
        self
    }

    pub fn with_field(mut self, field: InputField) -> Self {
        self.field = Some(field);
        self
    }

    pub fn with_message_element(mut self) -> Self {
        self.message = Some(MessageElement::new());
        self
    }

    pub fn with_form_internals(mut self, internals: FormRecorder) -> Self {
        self.internals = Some(internals);
        self
    }

    /// Declare a named slot in the rendered content.
    pub fn with_slot(mut self, name: &str) -> Self {
        self.slots.push(name.to_string());
        self
    }

    /// Append a light-DOM child; its `slot` attribute picks the slot.
    pub fn with_light_child(mut self, node: Node) -> Self {
        self.light_dom.push(node);
        self
    }

    pub fn with_foreign_focus(mut self) -> Self {
        self.foreign_focus = true;
        self
    }

    pub fn set_foreign_focus(&mut self, foreign: bool) {
        self.foreign_focus = foreign;
    }

    /// Drop the rendered field, as before the first render.
    pub fn take_field(&mut self) -> Option<InputField> {
        self.field.take()
    }

    pub fn field(&self) -> Option<&InputField> {
        self.field.as_ref()
    }

    pub fn field_mut(&mut self) -> Option<&mut InputField> {
        self.field.as_mut()
    }

    pub fn message(&self) -> Option<&MessageElement> {
        self.message.as_ref()
    }

    pub fn internals(&self) -> Option<&FormRecorder> {
        self.internals.as_ref()
    }

    pub fn internals_mut(&mut self) -> Option<&mut FormRecorder> {
        self.internals.as_mut()
    }

    pub fn light_dom(&self) -> &[Node] {
        &self.light_dom
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(k, _)| k == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter()
    }

    /// Count of attribute writes and removals so far.
    pub fn attribute_mutations(&self) -> usize {
        self.attributes.mutations()
    }

    pub fn listener_count(&self, event_type: EventType) -> usize {
        self.listeners.get(&event_type).copied().unwrap_or(0)
    }

    pub fn total_listeners(&self) -> usize {
        self.listeners.values().sum()
    }

    pub fn events(&self) -> &[CustomEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<CustomEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn events_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a CustomEvent> {
        self.events.iter().filter(move |e| e.name == name)
    }

    pub fn count_events(&self, name: &str) -> usize {
        self.events_named(name).count()
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    pub fn focus_requests(&self) -> usize {
        self.focus_requests
    }

    pub fn blur_requests(&self) -> usize {
        self.blur_requests
    }

    pub fn synthetic_clicks(&self) -> usize {
        self.synthetic_clicks
    }

    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    pub fn timers_mut(&mut self) -> &mut TimerQueue {
        &mut self.timers
    }
}

fn slot_of(node: &Node) -> &str {
    node.attr("slot").unwrap_or("")
}

impl AttributeTarget for HostElement {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.set(name, value);
    }

    fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }
}

impl ElementHost for HostElement {
    fn node_id(&self) -> NodeId {
        self.id
    }

    fn contains(&self, node: NodeId) -> bool {
        node == self.id || self.light_dom.iter().any(|n| n.contains(node))
    }

    fn set_style(&mut self, property: &str, value: &str) {
        self.style.retain(|(k, _)| k != property);
        if !value.is_empty() {
            self.style.push((property.to_string(), value.to_string()));
        }
    }

    fn add_event_listener(&mut self, event_type: EventType) {
        *self.listeners.entry(event_type).or_insert(0) += 1;
    }

    fn remove_event_listener(&mut self, event_type: EventType) {
        if let Some(count) = self.listeners.get_mut(&event_type) {
            *count -= 1;
            if *count == 0 {
                self.listeners.remove(&event_type);
            }
        }
    }

    fn dispatch_event(&mut self, event: CustomEvent) {
        trace!(target: "dom.host", "{:?} dispatch {} {:?}", self.id, event.name, event.detail);
        self.events.push(event);
    }

    fn focus(&mut self) {
        self.focus_requests += 1;
        self.has_focus = true;
    }

    fn blur(&mut self) {
        self.blur_requests += 1;
        self.has_focus = false;
        if let Some(field) = &mut self.field {
            field.blur();
        }
    }

    fn has_foreign_focus(&self) -> bool {
        self.foreign_focus
    }

    fn synthesize_click(&mut self) {
        self.synthetic_clicks += 1;
    }

    fn set_timeout(&mut self, delay: Duration) -> TimerId {
        self.timers.schedule(delay)
    }

    fn clear_timeout(&mut self, id: TimerId) {
        self.timers.cancel(id);
    }

    fn editable_field(&mut self) -> Option<&mut dyn EditableField> {
        self.field.as_mut().map(|f| f as &mut dyn EditableField)
    }

    fn validation_message(&mut self) -> Option<&mut dyn AttributeTarget> {
        self.message.as_mut().map(|m| m as &mut dyn AttributeTarget)
    }

    fn assigned_nodes(&mut self, slot: &str) -> Option<Vec<&mut Node>> {
        if !self.slots.iter().any(|s| s == slot) {
            return None;
        }
        Some(
            self.light_dom
                .iter_mut()
                .filter(|n| slot_of(n) == slot)
                .collect(),
        )
    }

    fn has_slotted(&self, slot: &str) -> bool {
        self.light_dom.iter().any(|n| n.is_element() && slot_of(n) == slot)
    }

    fn form_internals(&mut self) -> Option<&mut dyn FormInternals> {
        self.internals.as_mut().map(|i| i as &mut dyn FormInternals)
    }
}
