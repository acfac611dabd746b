//! Common surface of composed controls.

use std::time::Duration;

use dom::{DomEvent, ElementHost, HostElement, TimerId};
use log::trace;

/// A control assembled from behavior units.
///
/// The embedder forwards lifecycle callbacks, native events aimed at the
/// control and due timers. Everything else is driven through the concrete
/// type's setters.
pub trait Widget {
    fn connect<H: ElementHost + ?Sized>(&mut self, host: &mut H);

    fn disconnect<H: ElementHost + ?Sized>(&mut self, host: &mut H);

    fn handle_event<H: ElementHost + ?Sized>(&mut self, host: &mut H, event: &mut DomEvent);

    /// A timer obtained from `host.set_timeout` came due.
    fn on_timer<H: ElementHost + ?Sized>(&mut self, host: &mut H, id: TimerId);
}

/// Move the in-memory host's clock forward, firing due timers in order.
///
/// Timers scheduled by a callback fire in the same call if they fall due
/// before the new time.
pub fn advance_clock<W: Widget + ?Sized>(widget: &mut W, host: &mut HostElement, by: Duration) {
    let until = host.timers().now() + by;
    while let Some(id) = host.timers_mut().pop_due(until) {
        trace!(target: "dom.host", "timer {id:?} due");
        widget.on_timer(host, id);
    }
    host.timers_mut().advance_to(until);
}
