//! Single-line terminal output with in-place overwriting.

use std::io;

use console::{measure_text_width, truncate_str};
use derive_more::{Deref, DerefMut};

use crate::out::{TermOutput, WriteStrExt as _};

use super::segment::{self, Segment};

/// Writer of report lines, each one replacing the previously written line.
///
/// The erase sequence (cursor up one row, erase the whole row) is emitted
/// before every line except the very first one, and only while `overwrite` is
/// set, so a non-interactive output never receives escape sequences and keeps
/// every line.
#[derive(Clone, Debug, Deref, DerefMut)]
pub struct LineRenderer<Out: TermOutput> {
    /// [`TermOutput`] to write lines into.
    #[deref]
    #[deref_mut]
    pub(super) out: Out,

    /// Indicates whether nothing has been written yet.
    pub(super) first_line: bool,

    /// Indicates whether the previously written line should be erased.
    pub(super) overwrite: bool,
}

impl<Out: TermOutput> LineRenderer<Out> {
    /// Creates a new [`LineRenderer`] writing into the given `out`.
    #[must_use]
    pub const fn new(out: Out, overwrite: bool) -> Self {
        Self {
            out,
            first_line: true,
            overwrite,
        }
    }

    /// Writes a single report line composed of the styled `prefix` followed
    /// by the styled `message`, replacing the previously written line.
    ///
    /// The output's width is probed anew on every call. Whenever the line's
    /// visible width (escape sequences excluded) exceeds it, the `message` is
    /// cut down to the columns left after the `prefix` and rendered without
    /// any styling, as a cut could split an escape sequence in two; the
    /// `prefix` is never cut. An output of unknown width is never truncated.
    ///
    /// # Errors
    ///
    /// If this renderer fails to write into its output.
    pub fn write_line(
        &mut self,
        prefix: &[Segment],
        message: &[Segment],
    ) -> io::Result<()> {
        if !self.first_line && self.overwrite {
            self.out.move_cursor_up(1)?;
            self.out.clear_line()?;
        }

        let styled_prefix = segment::render_all(prefix, true);
        let styled_message = segment::render_all(message, true);
        let prefix_width = measure_text_width(&styled_prefix);
        let visible = prefix_width + measure_text_width(&styled_message);

        let line = match self.out.width().map(usize::from) {
            Some(columns) if visible > columns => {
                let plain_message = segment::render_all(message, false);
                let space_available = columns.saturating_sub(prefix_width);
                format!(
                    "{styled_prefix}{}",
                    truncate_str(&plain_message, space_available, ""),
                )
            }
            _ => format!("{styled_prefix}{styled_message}"),
        };

        self.out.write_line(line)?;
        self.first_line = false;
        Ok(())
    }
}
