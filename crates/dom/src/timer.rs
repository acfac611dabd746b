//! Virtual clock for deferred callbacks.
//!
//! The host hands out [`TimerId`]s and the embedder's loop reports them back
//! to the control once due. Tests advance the clock explicitly.

use std::time::Duration;

use core_types::TimerId;

#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    last_id: u64,
    pending: Vec<(Duration, TimerId)>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn schedule(&mut self, delay: Duration) -> TimerId {
        self.last_id += 1;
        let id = TimerId(self.last_id);
        self.pending.push((self.now + delay, id));
        id
    }

    /// Returns `true` if the timer was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|(_, pending)| *pending != id);
        before != self.pending.len()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|(_, pending)| *pending == id)
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Pop the earliest timer due at or before `until`, moving the clock to
    /// its due time. Ties fire in scheduling order.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerId> {
        let (index, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, (due, _))| *due <= until)
            .min_by_key(|(_, (due, id))| (*due, *id))?;
        let (due, id) = self.pending.remove(index);
        self.now = self.now.max(due);
        Some(id)
    }

    /// Move the clock forward without firing anything.
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}
