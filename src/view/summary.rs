//! Rendering of the aggregate counters prefixing every report line.

use console::Style;
use itertools::Itertools;

use crate::{out::Theme, stats::RunStats};

use super::segment::Segment;

/// Extension of a [`Theme`] to render [`RunStats`] prefixes with.
pub trait SummaryFormatter {
    /// Renders the given `stats` as the counter prefix of a report line.
    ///
    /// A counter is rendered in its [`Theme`] role only while it's non-zero,
    /// and plain otherwise; the `skip` and `todo` counters are omitted
    /// entirely at zero. Counters are separated with `", "` and the whole
    /// prefix is terminated with `". "`, both never styled.
    #[must_use]
    fn stats_summary(&self, stats: &RunStats) -> Vec<Segment>;
}

impl SummaryFormatter for Theme {
    fn stats_summary(&self, stats: &RunStats) -> Vec<Segment> {
        let counter = |label: &str, value: usize, style: &Style| {
            let text = format!("{label}: {value}");
            if value > 0 {
                Segment::styled(text, style.clone())
            } else {
                Segment::plain(text)
            }
        };

        let mut counters = vec![
            counter("In-progress", stats.in_progress, &self.in_progress),
            counter("pass", stats.pass, &self.pass),
            counter("fail", stats.fail, &self.fail),
        ];
        if stats.skip > 0 {
            counters.push(counter("skip", stats.skip, &self.skip));
        }
        if stats.todo > 0 {
            counters.push(counter("todo", stats.todo, &self.todo));
        }

        let mut summary = Itertools::intersperse(
            counters.into_iter(),
            Segment::plain(", "),
        )
        .collect::<Vec<_>>();
        summary.push(Segment::plain(". "));
        summary
    }
}
