use dom::{CustomEvent, DetailValue, ElementHost};

/// Mirror a boolean onto a presence attribute.
pub(crate) fn reflect_flag<H: ElementHost + ?Sized>(host: &mut H, name: &str, value: bool) {
    if value {
        host.set_attribute(name, "");
    } else {
        host.remove_attribute(name);
    }
}

pub(crate) fn true_false(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Dispatch `name` with a `{ value }` detail.
pub(crate) fn notify<H: ElementHost + ?Sized>(
    host: &mut H,
    name: &str,
    value: impl Into<DetailValue>,
) {
    host.dispatch_event(CustomEvent::value(name, value));
}

/// Dispatch `name` with a `{ value }` detail that bubbles out of the shadow
/// tree.
pub(crate) fn notify_composed<H: ElementHost + ?Sized>(
    host: &mut H,
    name: &str,
    value: impl Into<DetailValue>,
) {
    host.dispatch_event(CustomEvent::value(name, value).bubbling_composed());
}
