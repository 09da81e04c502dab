use crate::ports::clock::Clock as ClockTrait;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Clock pinned to a fixed instant
///
/// Counts how many times it was read.
pub struct Clock {
    now: DateTime<Utc>,
    reads: AtomicUsize,
}

impl Clock {
    pub fn fixed(now: DateTime<Utc>) -> Self {
        Self {
            now,
            reads: AtomicUsize::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl ClockTrait for Clock {
    fn now(&self) -> DateTime<Utc> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.now
    }
}
