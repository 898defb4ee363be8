// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Key occurrences in the lifecycle of a single test.

use derive_more::{Display, Error, From};

/// Outcome of a single test's execution, as emitted by the event source.
///
/// An optional result note and the measured duration of a [`Passed`] test are
/// carried by the [`Test`] handle itself, not by the event.
///
/// [`Passed`]: Outcome::Passed
/// [`Test`]: crate::Test
#[derive(Clone, Debug, From)]
pub enum Outcome {
    /// Test has started executing.
    Started,

    /// Test finished successfully.
    Passed,

    /// Test finished with the given [`TestError`].
    #[from]
    Failed(TestError),

    /// Test was skipped.
    Skipped,

    /// Test is marked as not implemented yet.
    Todo,
}

/// Failure a test finished with.
///
/// This is data about the run, not an error of the reporting itself, so it's
/// only ever rendered, never propagated.
#[derive(Clone, Debug, Display, Error)]
#[display("{message}")]
pub struct TestError {
    /// Human-readable failure message.
    message: String,

    /// Full stack trace of the failure, if one was captured.
    trace: Option<String>,
}

impl TestError {
    /// Creates a new [`TestError`] with the given `message` and no trace.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            trace: None,
        }
    }

    /// Attaches the full stack `trace` to this [`TestError`].
    #[must_use]
    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }

    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the most detailed description of this failure: the full stack
    /// trace when one was captured, otherwise the message.
    #[must_use]
    pub fn detail(&self) -> &str {
        self.trace.as_deref().unwrap_or(&self.message)
    }
}
