//! Behavior units for accessible controls and the widgets built from them.
//!
//! Each unit owns one slice of state, reflects it onto the host element and
//! announces changes with custom events:
//!
//! - [`FocusDisabledUnit`]: `focused`, `disabled`, tab order.
//! - [`HoverUnit`]: `hovered`.
//! - [`PressActiveUnit`]: `pressed`, `active`, toggling, keyboard activation.
//! - [`ValidatableInputUnit`]: value, character filtering, validation.
//!
//! [`Button`] and [`TextInput`] compose them and route native events.

mod bool_attr;
mod button;
mod config;
mod focus;
mod hover;
mod input;
mod keys;
mod label_id;
mod press;
mod reflect;
mod text_input;
mod widget;

pub use bool_attr::{BoolAttr, boolean_property};
pub use button::Button;
pub use config::ControlConfig;
pub use focus::{ControlState, ControlStateObserver, FocusDisabledUnit};
pub use hover::HoverUnit;
pub use input::{CharPattern, PatternError, ValidatableInputUnit};
pub use label_id::LabelIdGenerator;
pub use press::{ButtonState, ButtonStateCallback, PressActiveUnit};
pub use text_input::TextInput;
pub use widget::{Widget, advance_clock};
