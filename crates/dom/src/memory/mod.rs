//! In-memory implementation of the host capability.
//!
//! Everything a control does to its host is recorded so tests can assert on
//! it: attributes, styles, listeners, dispatched events, focus requests and
//! timers.

mod attributes;
mod element;
mod field;
mod internals;

pub use attributes::MessageElement;
pub use element::HostElement;
pub use field::InputField;
pub use internals::FormRecorder;

pub(crate) use attributes::AttributeMap;
