//! Time source abstraction. Provides [Clock] trait.

use std::time::SystemTime;

/// Source of "current time" for expiry computation.
///
/// Resolution reads the clock more than once (eg. once for each `max-age`
/// directive and once when checking for past timestamps). Implementations are
/// not required to return the same value for subsequent calls.
pub trait Clock {
    /// Returns current instant.
    fn now(&self) -> SystemTime;
}

/// [Clock] backed by system wall clock, [SystemTime::now].
#[derive(Clone, Copy, Default, Debug)]
pub struct SystemClock;
impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// [Clock] always returning the same instant. Useful for tests and for
/// evaluating headers "as of" some point in time.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FixedClock {
    now: SystemTime,
}
impl FixedClock {
    /// Creates [self] frozen at `now`.
    pub const fn new(now: SystemTime) -> Self {
        Self { now }
    }
}
impl Clock for FixedClock {
    fn now(&self) -> SystemTime {
        self.now
    }
}
