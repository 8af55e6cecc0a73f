//! Injected time source.
//!
//! "Today" drives plan-day boundaries and streak continuity, so the current
//! instant is an explicit dependency rather than a hidden `Utc::now()` call.
//! Handlers hold a [`Clock`] and pass `now`/`today` down to the pure rules
//! and repositories; tests swap in [`FixedClock`] to simulate day
//! transitions deterministically.

use chrono::NaiveDate;

use crate::types::Timestamp;

/// Source of the current instant. Day boundaries are UTC calendar dates.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> Timestamp;

    /// The current UTC calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        chrono::Utc::now()
    }
}

/// Clock pinned to a fixed instant, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}
