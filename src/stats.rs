//! Aggregate statistics of a test run.

use std::{fmt, time::Duration};

/// Snapshot of a test run's aggregate counters.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RunStats {
    /// Number of tests currently executing.
    pub in_progress: usize,

    /// Number of passed tests.
    pub pass: usize,

    /// Number of failed tests.
    pub fail: usize,

    /// Number of skipped tests.
    pub skip: usize,

    /// Number of tests marked as not implemented yet.
    pub todo: usize,

    /// Time elapsed since the run started.
    pub elapsed: Duration,
}

impl RunStats {
    /// Creates new zeroed [`RunStats`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            in_progress: 0,
            pass: 0,
            fail: 0,
            skip: 0,
            todo: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Returns the total number of finished tests.
    #[must_use]
    pub const fn finished(&self) -> usize {
        self.pass + self.fail + self.skip + self.todo
    }

    /// Indicates whether the run had any failed tests.
    #[must_use]
    pub const fn has_failures(&self) -> bool {
        self.fail > 0
    }

    /// Returns the time elapsed since the run started.
    #[must_use]
    pub const fn time_elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// Live read-access to the counters of an in-flight test run.
///
/// Implemented by the event source, which is the only writer of the counters.
/// The reporter takes one fresh snapshot per rendered line and never caches
/// it, so counters mutated between events are always rendered up-to-date.
pub trait StatsSource: fmt::Debug {
    /// Returns the current [`RunStats`] of the run.
    #[must_use]
    fn stats(&self) -> RunStats;
}
