//! Clock - source of visit timestamps
//!
//! The frequent-locations model asks a clock for "now" instead of reading the
//! system time directly, so tests can supply predictable times.

use std::cell::Cell;

use chrono::{DateTime, Duration, Utc};

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Returns `start`, `start + step`, `start + 2 * step`, ... on successive calls
#[derive(Debug)]
pub struct SteppingClock {
    start: DateTime<Utc>,
    step: Duration,
    calls: Cell<i32>,
}

impl SteppingClock {
    pub fn new(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            start,
            step,
            calls: Cell::new(0),
        }
    }

    /// Starts at the Unix epoch and advances one second per call
    pub fn from_epoch() -> Self {
        Self::new(DateTime::<Utc>::UNIX_EPOCH, Duration::seconds(1))
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let n = self.calls.get();
        self.calls.set(n + 1);
        self.start + self.step * n
    }
}
