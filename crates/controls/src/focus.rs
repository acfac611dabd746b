//! Focus and disabled state.

use dom::{ElementHost, EventType};
use log::trace;

use crate::reflect::{notify, reflect_flag, true_false};

const TARGET: &str = "controls.focus";

/// Snapshot of the focus/disabled slice, handed to observers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlState {
    pub focused: bool,
    pub disabled: bool,
}

/// Notified after every focus or disabled change.
///
/// Units layered over [`FocusDisabledUnit`] implement this to react to the
/// control state without reaching into it. `()` ignores notifications.
pub trait ControlStateObserver {
    fn control_state_changed<H: ElementHost + ?Sized>(&mut self, host: &mut H, state: ControlState);

    /// Runs before disabling saves `tabindex` and takes the control out of
    /// the tab order. Observers holding a temporary `tabindex` put it back
    /// here.
    fn will_disable<H: ElementHost + ?Sized>(&mut self, _host: &mut H) {}
}

impl ControlStateObserver for () {
    fn control_state_changed<H: ElementHost + ?Sized>(&mut self, _: &mut H, _: ControlState) {}
}

/// Owns `focused` and `disabled`.
///
/// Disabling removes the control from the tab order and remembers the
/// previous `tabindex` attribute (present or absent) so re-enabling restores
/// it exactly.
#[derive(Clone, Debug, Default)]
pub struct FocusDisabledUnit {
    focused: bool,
    disabled: bool,
    /// `Some` once the control was disabled; inner `None` = no attribute.
    saved_tabindex: Option<Option<String>>,
}

impl FocusDisabledUnit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn disabled(&self) -> bool {
        self.disabled
    }

    pub fn state(&self) -> ControlState {
        ControlState {
            focused: self.focused,
            disabled: self.disabled,
        }
    }

    pub fn connect<H: ElementHost + ?Sized>(&mut self, host: &mut H) {
        host.add_event_listener(EventType::Focus);
        host.add_event_listener(EventType::Blur);
    }

    pub fn disconnect<H: ElementHost + ?Sized>(&mut self, host: &mut H) {
        host.remove_event_listener(EventType::Focus);
        host.remove_event_listener(EventType::Blur);
    }

    /// A disabled control cannot gain focus; such requests are dropped.
    pub fn set_focused<H, O>(&mut self, host: &mut H, observer: &mut O, value: bool)
    where
        H: ElementHost + ?Sized,
        O: ControlStateObserver,
    {
        if value && self.disabled {
            trace!(target: TARGET, "focus ignored while disabled");
            return;
        }
        if self.focused == value {
            return;
        }
        self.focused = value;
        trace!(target: TARGET, "focused -> {value}");
        reflect_flag(host, "focused", value);
        notify(host, "focusedchanged", value);
        observer.control_state_changed(host, self.state());
    }

    pub fn set_disabled<H, O>(&mut self, host: &mut H, observer: &mut O, value: bool)
    where
        H: ElementHost + ?Sized,
        O: ControlStateObserver,
    {
        if self.disabled == value {
            return;
        }
        self.disabled = value;
        trace!(target: TARGET, "disabled -> {value}");
        reflect_flag(host, "disabled", value);
        notify(host, "disabledchanged", value);
        self.disabled_changed(host, observer, value);
        observer.control_state_changed(host, self.state());
    }

    fn disabled_changed<H, O>(&mut self, host: &mut H, observer: &mut O, disabled: bool)
    where
        H: ElementHost + ?Sized,
        O: ControlStateObserver,
    {
        host.set_attribute("aria-disabled", true_false(disabled));
        host.set_style("pointer-events", if disabled { "none" } else { "" });
        if disabled {
            observer.will_disable(host);
            // The attribute, not the property: an absent tabindex must come
            // back absent.
            self.saved_tabindex = Some(host.attribute("tabindex").map(str::to_string));
            self.set_focused(host, observer, false);
            host.set_attribute("tabindex", "-1");
            host.blur();
        } else if let Some(saved) = self.saved_tabindex.take() {
            match saved {
                Some(tabindex) => host.set_attribute("tabindex", &tabindex),
                None => host.remove_attribute("tabindex"),
            }
        }
    }

    /// Native `focus`/`blur` on the control.
    pub fn handle_focus_blur<H, O>(&mut self, host: &mut H, observer: &mut O, is_focus: bool)
    where
        H: ElementHost + ?Sized,
        O: ControlStateObserver,
    {
        if self.disabled {
            if self.focused {
                self.set_focused(host, observer, false);
                host.blur();
            }
            return;
        }
        self.set_focused(host, observer, is_focus);
    }
}
