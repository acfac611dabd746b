//! # awc
//!
//! Facade over the control-state engine.
//!
//! - [`controls`] holds the behavior units and the composed [`Button`] and
//!   [`TextInput`] widgets.
//! - [`dom`] holds the DOM-like capability the widgets drive, plus an
//!   in-memory host usable without a browser.
//!
//! ```
//! use awc::{Button, ControlConfig, Widget};
//! use awc::dom::{AttributeTarget, DomEvent, HostElement, NodeId};
//!
//! let mut host = HostElement::new(NodeId(1));
//! let mut button = Button::new(ControlConfig::default());
//! button.connect(&mut host);
//! button.set_toggles(&mut host, true);
//!
//! button.handle_event(&mut host, &mut DomEvent::click());
//! assert!(button.active());
//! assert_eq!(host.attribute("aria-pressed"), Some("true"));
//! ```

pub use controls::{
    BoolAttr, Button, ButtonState, ControlConfig, ControlState, LabelIdGenerator, TextInput,
    Widget, boolean_property,
};
pub use controls;
pub use dom;
