use std::time::Duration;

use core_types::{NodeId, TimerId};

use crate::error::FieldError;
use crate::event::{CustomEvent, EventType};
use crate::node::Node;

/// Anything with an attribute surface.
pub trait AttributeTarget {
    fn attribute(&self, name: &str) -> Option<&str>;

    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    fn set_attribute(&mut self, name: &str, value: &str);

    fn remove_attribute(&mut self, name: &str);
}

/// The custom element a control is attached to.
///
/// Scoped queries (`editable_field`, `validation_message`, `assigned_nodes`)
/// reach into the element's encapsulated content; they return `None` when the
/// content has not been rendered or lacks the queried part.
pub trait ElementHost: AttributeTarget {
    fn node_id(&self) -> NodeId;

    /// Inclusive containment over the light DOM.
    fn contains(&self, node: NodeId) -> bool;

    /// Set an inline style property; an empty value clears it.
    fn set_style(&mut self, property: &str, value: &str);

    fn add_event_listener(&mut self, event_type: EventType);

    fn remove_event_listener(&mut self, event_type: EventType);

    fn dispatch_event(&mut self, event: CustomEvent);

    /// Request focus for the element itself.
    fn focus(&mut self);

    fn blur(&mut self);

    /// `true` when some other element of the document currently owns focus.
    fn has_foreign_focus(&self) -> bool;

    /// Notify the environment of a synthetic activation that the control has
    /// already processed (the equivalent of `element.click()`).
    fn synthesize_click(&mut self);

    fn set_timeout(&mut self, delay: Duration) -> TimerId;

    fn clear_timeout(&mut self, id: TimerId);

    /// The `input`/`textarea` inside the encapsulated content.
    fn editable_field(&mut self) -> Option<&mut dyn EditableField>;

    /// The element that displays the validation message.
    fn validation_message(&mut self) -> Option<&mut dyn AttributeTarget>;

    /// Light-DOM nodes assigned to the slot `name`. `None` when the content
    /// has no such slot.
    fn assigned_nodes(&mut self, slot: &str) -> Option<Vec<&mut Node>>;

    /// `true` when some light-DOM child is assigned to the slot `name`.
    fn has_slotted(&self, slot: &str) -> bool;

    fn form_internals(&mut self) -> Option<&mut dyn FormInternals>;
}

/// The native editable field behind a text control.
///
/// Offsets are in characters, as seen by `selectionStart`/`selectionEnd`.
pub trait EditableField: AttributeTarget {
    fn input_type(&self) -> &str;

    fn value(&self) -> &str;

    /// Replace the value; the caret moves to the end.
    fn set_value(&mut self, value: &str);

    fn selection_start(&self) -> Result<usize, FieldError>;

    fn set_selection_range(&mut self, start: usize, end: usize) -> Result<(), FieldError>;

    fn focus(&mut self);

    /// Native constraint validation of the current value.
    fn check_validity(&self) -> bool;
}

/// Form-association capability (`ElementInternals`).
pub trait FormInternals {
    fn set_form_value(&mut self, value: &str);

    fn check_validity(&self) -> bool;

    /// The owning form, when the control is inside one.
    fn form(&self) -> Option<NodeId>;
}
