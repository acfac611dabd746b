use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of unique ids for slotted labels that lack one.
///
/// Clones share the counter, so every control created from the same
/// generator draws from one sequence. Tests create their own generator (or
/// [`reset`](Self::reset) it) to get deterministic ids.
#[derive(Clone, Debug)]
pub struct LabelIdGenerator {
    prefix: Arc<str>,
    next: Arc<AtomicU64>,
}

impl Default for LabelIdGenerator {
    fn default() -> Self {
        Self::new("anypoint-input-label-")
    }
}

impl LabelIdGenerator {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: Arc::from(prefix),
            next: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}{n}", self.prefix)
    }

    pub fn reset(&self) {
        self.next.store(0, Ordering::Relaxed);
    }
}
