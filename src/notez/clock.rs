//! Time source for note dates.
//!
//! The store never calls `Utc::now()` directly; it asks its [`Clock`]. Tests
//! use [`ManualClock`] to get exact, strictly increasing timestamps.

use chrono::{DateTime, Duration, Utc};
use std::cell::Cell;

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that returns `start`, then advances by `step` on every read.
#[derive(Debug, Clone)]
pub struct ManualClock {
    next: Cell<DateTime<Utc>>,
    step: Duration,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            next: Cell::new(start),
            step,
        }
    }

    /// Starts at the Unix epoch and ticks one second per read.
    pub fn ticking() -> Self {
        Self::new(DateTime::<Utc>::UNIX_EPOCH, Duration::seconds(1))
    }

    /// The value the next `now()` call will return.
    pub fn peek(&self) -> DateTime<Utc> {
        self.next.get()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let current = self.next.get();
        self.next.set(current + self.step);
        current
    }
}
