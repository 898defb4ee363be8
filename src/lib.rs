// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Live one-line terminal reporter for test runs.
//!
//! While a run executes, an [`Oneline`] view keeps a single status line in
//! place: aggregate counters (`In-progress: 1, pass: 3, fail: 0. `) followed
//! by the latest event, each new event overwriting the previous line.
//! Failures and context data captured by tests are deferred and reported only
//! once the run ends, below the final `Completed in ..ms.` line, so they
//! never tear the live output.
//!
//! The view implements the [`Reporter`] port; any event source driving tests
//! can report through it:
//!
//! ```rust
//! use oneline_view::{Group, Oneline, Reporter as _, RunStats};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut view = Oneline::stdout();
//! view.init().await;
//! view.start(2).await;
//!
//! let suite = Group::root("root").group("suite");
//! let test = suite.test("adds numbers").with_result(4);
//! view.test_start(&test).await;
//! view.test_pass(&test).await;
//!
//! view.end(&RunStats { pass: 1, ..RunStats::new() }).await;
//! # }
//! ```
//!
//! On a detected terminal the output is colored and overwritten in place;
//! into a pipe (or under `--color never`) it degrades to plain, append-only
//! lines.

#![forbid(unsafe_code)]

pub mod cli;
pub mod event;
pub mod out;
pub mod reporter;
pub mod stats;
pub mod test;
pub mod view;

pub use self::{
    cli::{Cli, Colored, Coloring},
    event::{Outcome, TestError},
    reporter::Reporter,
    stats::{RunStats, StatsSource},
    test::{Group, Test},
    view::{Oneline, Options},
};
