//! Clock port. The session never reads the system time directly, so tests
//! can inject a fixed clock and get deterministic "now" values.

use chrono::{Local, NaiveDateTime};

pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    /// Current wall-clock time as "HH:MM".
    fn now_time(&self) -> String {
        self.now().format("%H:%M").to_string()
    }

    /// Current date as "YYYY-MM-DD".
    fn today(&self) -> String {
        self.now().format("%Y-%m-%d").to_string()
    }
}

/// Real local-time clock used by the CLI.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Frozen clock for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
