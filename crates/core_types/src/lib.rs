/// Identity of a node in the control's light DOM, including the control itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

/// Handle for a deferred callback registered with the host's event loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

impl TimerId {
    /// Reserved sentinel, never handed out by a timer queue.
    pub const INVALID: TimerId = TimerId(0);
}
