// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Live one-line view of a test run.

mod deferred;
mod line;
pub(crate) mod segment;
mod summary;

use std::{io, sync::Arc};

use console::Term;
use derive_more::{Deref, DerefMut};
use smart_default::SmartDefault;

use crate::{
    Reporter,
    cli::{Cli, Coloring},
    event::{Outcome, TestError},
    out::{TermOutput, Theme},
    stats::{RunStats, StatsSource},
    test::Test,
};

pub use self::{
    deferred::DeferredLogs, line::LineRenderer, segment::Segment,
    summary::SummaryFormatter,
};

/// Options of an [`Oneline`] view.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Options {
    /// Indicates whether a line is rendered when each test starts.
    #[default(true)]
    pub show_starts: bool,

    /// Indicates whether skipped and todo tests render no line.
    pub hide_skips: bool,

    /// Indicates whether a failure is reported with its message only,
    /// instead of its full stack trace.
    pub hide_err_stack: bool,

    /// Indicates whether context data captured by tests is reported once the
    /// run ends.
    ///
    /// Disable it on hosts without a synchronous output stream of their own,
    /// where a trailing multi-line dump has nowhere meaningful to go.
    #[default(true)]
    pub show_context_data: bool,
}

/// Default [`Reporter`] implementation outputting a test run as a single,
/// continuously overwritten terminal line ([`Term::stdout()`] by default).
///
/// While tests execute, every event replaces the previous status line with a
/// fresh one: aggregate counters first, then the event's own message.
/// Failures and captured context data are deferred and reported only after
/// [`end()`], below the final `Completed in ..ms.` line.
///
/// With no terminal detected (or [`Coloring::Never`]) the erase protocol is
/// disabled and lines are simply appended, so CI logs stay intact.
///
/// [`end()`]: Reporter::end
#[derive(Clone, Debug, Deref, DerefMut)]
pub struct Oneline<Out: TermOutput = Term> {
    /// [`LineRenderer`] writing the live status line.
    #[deref]
    #[deref_mut]
    line: LineRenderer<Out>,

    /// [`Theme`] of this view.
    theme: Theme,

    /// [`Options`] of this view.
    options: Options,

    /// Reports deferred until the run ends.
    deferred: DeferredLogs,

    /// Live [`RunStats`] source, attached by the event source.
    stats: Option<Arc<dyn StatsSource>>,
}

impl Oneline {
    /// Creates a new [`Oneline`] view outputting to [`Term::stdout()`].
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(Term::stdout(), Coloring::Auto, Options::default())
    }
}

impl<Out: TermOutput> Oneline<Out> {
    /// Creates a new [`Oneline`] view outputting to the given `out`.
    #[must_use]
    pub fn new(out: Out, color: Coloring, options: Options) -> Self {
        let mut theme = Theme::new();
        theme.apply_coloring(color);
        let overwrite = theme.is_present;
        Self {
            line: LineRenderer::new(out, overwrite),
            theme,
            options,
            deferred: DeferredLogs::default(),
            stats: None,
        }
    }

    /// Applies the given [`Cli`] options to this view.
    pub fn apply_cli(&mut self, cli: Cli) {
        self.options.show_starts = !cli.hide_starts;
        self.options.hide_skips = cli.hide_skips;
        self.options.hide_err_stack = cli.hide_err_stack;
        self.options.show_context_data = !cli.hide_context_data;
        self.theme.apply_coloring(cli.color);
        self.line.overwrite = self.theme.is_present;
    }

    /// Attaches the live `stats` source of the run.
    ///
    /// One snapshot is taken per rendered line; without a source attached
    /// every counter renders as zero.
    pub fn attach_stats(&mut self, stats: Arc<dyn StatsSource>) {
        self.stats = Some(stats);
    }

    /// Dispatches the given `outcome` of a `test` to the corresponding
    /// [`Reporter`] method.
    pub async fn handle_event(&mut self, test: &Test, outcome: &Outcome) {
        match outcome {
            Outcome::Started => self.test_start(test).await,
            Outcome::Passed => self.test_pass(test).await,
            Outcome::Failed(err) => self.test_fail(test, err).await,
            Outcome::Skipped => self.test_skip(test).await,
            Outcome::Todo => self.test_todo(test).await,
        }
    }

    /// Takes a fresh snapshot of the attached live stats source.
    fn live_stats(&self) -> RunStats {
        self.stats.as_ref().map_or_else(RunStats::new, |s| s.stats())
    }

    /// Writes one status line: the counter prefix rendered from `stats`,
    /// followed by the given `message`.
    fn report_line(
        &mut self,
        stats: &RunStats,
        message: &[Segment],
    ) -> io::Result<()> {
        let prefix = self.theme.stats_summary(stats);
        self.line.write_line(&prefix, message)
    }

    fn test_started(&mut self, test: &Test) -> io::Result<()> {
        if !self.options.show_starts {
            return Ok(());
        }
        let message = [
            Segment::styled("∙ ", self.theme.group_dark.clone()),
            Segment::styled(parent_chain(test), self.theme.group_dark.clone()),
            Segment::styled(test.name().to_owned(), self.theme.test_dark.clone()),
        ];
        let stats = self.live_stats();
        self.report_line(&stats, &message)
    }

    fn test_passed(&mut self, test: &Test) -> io::Result<()> {
        let mut message = vec![
            Segment::styled("✓ ", self.theme.pass.clone()),
            Segment::styled(parent_chain(test), self.theme.group.clone()),
            Segment::plain(test.name().to_owned()),
        ];
        if let Some(result) = test.result() {
            message.push(Segment::plain(format!(" [{result}]")));
        }
        let stats = self.live_stats();
        self.report_line(&stats, &message)?;
        self.capture_context(test);
        Ok(())
    }

    fn test_failed(&mut self, test: &Test, error: &TestError) -> io::Result<()> {
        let message = [
            Segment::styled("⨯ ", self.theme.fail.clone()),
            Segment::styled(parent_chain(test), self.theme.group.clone()),
            Segment::plain(test.name().to_owned()),
        ];
        let stats = self.live_stats();
        self.report_line(&stats, &message)?;

        let detail = if self.options.hide_err_stack {
            error.message()
        } else {
            error.detail()
        };
        self.deferred
            .record_failure(segment::render_all(&message, true), detail);
        self.capture_context(test);
        Ok(())
    }

    fn test_skipped(&mut self, test: &Test) -> io::Result<()> {
        if self.options.hide_skips {
            return Ok(());
        }
        let skip = &self.theme.skip;
        let message = [
            Segment::styled("- ", skip.clone()),
            Segment::styled(parent_chain(test), skip.clone()),
            Segment::styled(test.name().to_owned(), skip.clone()),
        ];
        let stats = self.live_stats();
        self.report_line(&stats, &message)
    }

    fn test_todoed(&mut self, test: &Test) -> io::Result<()> {
        if self.options.hide_skips {
            return Ok(());
        }
        let todo = &self.theme.todo;
        let message = [
            Segment::styled("- ", todo.clone()),
            Segment::styled(parent_chain(test), todo.clone()),
            Segment::styled(test.name().to_owned(), todo.clone()),
        ];
        let stats = self.live_stats();
        self.report_line(&stats, &message)
    }

    fn run_finished(&mut self, stats: &RunStats) -> io::Result<()> {
        let completed =
            format!("Completed in {}ms.", stats.time_elapsed().as_millis());
        self.report_line(stats, &[Segment::plain(completed)])?;

        let show_context = self.options.show_context_data;
        self.deferred.flush(&mut *self.line, show_context)
    }

    /// Queues a context report for `test`, if it captured any data.
    fn capture_context(&mut self, test: &Test) {
        if let Some(data) = test.data() {
            self.deferred
                .record_context(test.name().to_owned(), data.clone());
        }
    }
}

impl<Out: TermOutput> Reporter for Oneline<Out> {
    async fn init(&mut self) {}

    async fn start(&mut self, _: usize) {}

    async fn test_start(&mut self, test: &Test) {
        self.test_started(test).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to write to terminal: {e}");
        });
    }

    async fn test_pass(&mut self, test: &Test) {
        self.test_passed(test).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to write to terminal: {e}");
        });
    }

    async fn test_fail(&mut self, test: &Test, error: &TestError) {
        self.test_failed(test, error).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to write to terminal: {e}");
        });
    }

    async fn test_skip(&mut self, test: &Test) {
        self.test_skipped(test).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to write to terminal: {e}");
        });
    }

    async fn test_todo(&mut self, test: &Test) {
        self.test_todoed(test).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to write to terminal: {e}");
        });
    }

    async fn end(&mut self, stats: &RunStats) {
        self.run_finished(stats).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to write to terminal: {e}");
        });
    }
}

/// Renders the chain of `test`'s ancestor group names, outermost first, each
/// one followed by a single space.
fn parent_chain(test: &Test) -> String {
    test.parent_path()
        .iter()
        .map(|name| format!("{name} "))
        .collect()
}
