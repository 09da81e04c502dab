use crate::ports::clock::Clock;
use chrono::{DateTime, Utc};

/// 実時刻（UTC）を返すClock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
