//! DOM-like capability the controls drive.
//!
//! The controls never touch a real document. They talk to an [`ElementHost`]
//! (the custom element itself), reach the editable field inside its
//! encapsulated content through [`EditableField`], and optionally the form
//! association through [`FormInternals`]. Incoming events are [`DomEvent`]s;
//! outgoing notifications are [`CustomEvent`]s.
//!
//! The [`memory`] module provides a complete in-memory implementation used by
//! tests and by embedders that run the controls headless.

mod error;
mod event;
mod host;
pub mod memory;
mod node;
mod timer;

pub use core_types::{NodeId, TimerId};
pub use error::FieldError;
pub use event::{CustomEvent, DetailValue, DomEvent, EventDetail, EventType, KeyboardInit};
pub use host::{AttributeTarget, EditableField, ElementHost, FormInternals};
pub use memory::{FormRecorder, HostElement, InputField, MessageElement};
pub use node::Node;
pub use timer::TimerQueue;
