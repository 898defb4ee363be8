//! Buffers of reports deferred until the end of the run.

use std::io;

use serde_json::Value;

use crate::out::WriteStrExt as _;

/// Reports accumulated while the run executes and flushed once it ends.
///
/// Both buffers are append-only: nothing is rendered until [`flush()`], so a
/// deferred report can never interleave with the live status line.
///
/// [`flush()`]: DeferredLogs::flush
#[derive(Clone, Debug, Default)]
pub struct DeferredLogs {
    /// Rendered lines of every recorded failure block.
    failures: Vec<String>,

    /// Context data captured by tests, in recording order.
    context: Vec<(String, Value)>,
}

impl DeferredLogs {
    /// Records a failure block: the `header` line, an empty line, every
    /// `detail` line indented by two spaces, and a trailing empty line.
    ///
    /// The `header` is expected to be already rendered, styling included.
    pub fn record_failure(&mut self, header: String, detail: &str) {
        self.failures.push(header);
        self.failures.push(String::new());
        self.failures
            .extend(detail.lines().map(|line| format!("  {line}")));
        self.failures.push(String::new());
    }

    /// Records the context `data` captured by the test with the given `name`.
    pub fn record_context(&mut self, name: impl Into<String>, data: Value) {
        self.context.push((name.into(), data));
    }

    /// Indicates whether any failure was recorded.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Writes every deferred report into the given `out`: the recorded
    /// failure blocks first, then, while `show_context` is set, one report
    /// per captured context data.
    ///
    /// Reading the buffers immutably, so flushing twice duplicates the
    /// output; an empty [`DeferredLogs`] flushes to nothing.
    ///
    /// # Errors
    ///
    /// If the given `out` fails to be written into.
    pub fn flush(
        &self,
        out: &mut impl io::Write,
        show_context: bool,
    ) -> io::Result<()> {
        if !self.failures.is_empty() {
            out.write_line("")?;
            out.write_line(self.failures.join("\n"))?;
        }
        if show_context {
            for (name, data) in &self.context {
                out.write_line(format!("Context data: {name}"))?;
                out.write_line(format!("{}\n", pretty(data).trim_end()))?;
            }
        }
        Ok(())
    }
}

/// Renders the given JSON `data` with pretty indentation, degrading to the
/// compact rendering if pretty serialization fails.
fn pretty(data: &Value) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::out::WritableString;

    use super::*;

    #[test]
    fn failure_block_shape() {
        let mut logs = DeferredLogs::default();
        logs.record_failure(
            "⨯ parent main test 3".into(),
            "Error: broken\n    at suite.js:1:1",
        );

        let mut out = WritableString::default();
        logs.flush(&mut out, true).unwrap();
        assert_eq!(
            out.0,
            "\n\
             ⨯ parent main test 3\n\
             \n\
             \x20 Error: broken\n\
             \x20     at suite.js:1:1\n\
             \n",
        );
    }

    #[test]
    fn empty_flush_writes_nothing() {
        let logs = DeferredLogs::default();
        let mut out = WritableString::default();
        logs.flush(&mut out, true).unwrap();
        assert_eq!(out.0, "");
        assert!(!logs.has_failures());
    }

    #[test]
    fn context_reports_keep_recording_order() {
        let mut logs = DeferredLogs::default();
        logs.record_context("test 1", json!("first"));
        logs.record_context("test 2", json!("second"));

        let mut out = WritableString::default();
        logs.flush(&mut out, true).unwrap();
        assert_eq!(
            out.0,
            "Context data: test 1\n\
             \"first\"\n\
             \n\
             Context data: test 2\n\
             \"second\"\n\
             \n",
        );
    }

    #[test]
    fn context_data_is_pretty_printed() {
        let mut logs = DeferredLogs::default();
        logs.record_context(
            "test 1",
            json!({ "something": "one", "yeah": true }),
        );

        let mut out = WritableString::default();
        logs.flush(&mut out, true).unwrap();
        assert_eq!(
            out.0,
            "Context data: test 1\n\
             {\n\
             \x20 \"something\": \"one\",\n\
             \x20 \"yeah\": true\n\
             }\n\
             \n",
        );
    }

    #[test]
    fn context_reports_can_be_disabled() {
        let mut logs = DeferredLogs::default();
        logs.record_context("test 1", json!(1));

        let mut out = WritableString::default();
        logs.flush(&mut out, false).unwrap();
        assert_eq!(out.0, "");
    }

    #[test]
    fn failures_flush_before_context_reports() {
        let mut logs = DeferredLogs::default();
        logs.record_context("test 1", json!(1));
        logs.record_failure("⨯ test 2".into(), "broken");

        let mut out = WritableString::default();
        logs.flush(&mut out, true).unwrap();
        assert_eq!(
            out.0,
            "\n\
             ⨯ test 2\n\
             \n\
             \x20 broken\n\
             \n\
             Context data: test 1\n\
             1\n\
             \n",
        );
    }
}
