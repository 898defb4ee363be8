// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Port of a test run reporter.

use std::future::Future;

use crate::{event::TestError, stats::RunStats, test::Test};

/// Reporter of test lifecycle events to some output.
///
/// All methods return [`Future`]s, so implementations are free to perform
/// asynchronous I/O. The provided [`Oneline`] implementation writes
/// synchronously and resolves immediately.
///
/// Reporting must never fail the run it reports on: implementations degrade
/// (e.g. fall back to plain output, or emit a warning to [`io::Stderr`])
/// instead of panicking or returning errors.
///
/// [`Oneline`]: crate::Oneline
/// [`io::Stderr`]: std::io::Stderr
pub trait Reporter {
    /// Prepares this [`Reporter`] before any event is emitted.
    ///
    /// Produces no output.
    fn init(&mut self) -> impl Future<Output = ()>;

    /// Signals the start of a run of `planned` tests.
    ///
    /// Produces no output.
    fn start(&mut self, planned: usize) -> impl Future<Output = ()>;

    /// Reports the given `test` has started executing.
    fn test_start(&mut self, test: &Test) -> impl Future<Output = ()>;

    /// Reports the given `test` has passed.
    fn test_pass(&mut self, test: &Test) -> impl Future<Output = ()>;

    /// Reports the given `test` has failed with the given `error`.
    fn test_fail(
        &mut self,
        test: &Test,
        error: &TestError,
    ) -> impl Future<Output = ()>;

    /// Reports the given `test` was skipped.
    fn test_skip(&mut self, test: &Test) -> impl Future<Output = ()>;

    /// Reports the given `test` is marked as not implemented yet.
    fn test_todo(&mut self, test: &Test) -> impl Future<Output = ()>;

    /// Reports the end of the run with its final `stats`, flushing everything
    /// deferred during it.
    ///
    /// No events are valid after this one: a second `end` call duplicates the
    /// deferred output.
    fn end(&mut self, stats: &RunStats) -> impl Future<Output = ()>;
}
