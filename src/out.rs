// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tools for writing terminal output.

use std::{io, str};

use console::{Style, Term};
use derive_more::{Deref, DerefMut, Display, From, Into};

use crate::cli::Coloring;

/// [`Style`]s for the semantic roles of a test run.
#[derive(Clone, Debug)]
pub struct Theme {
    /// [`Style`] for rendering passed tests.
    pub pass: Style,

    /// [`Style`] for rendering failed tests.
    pub fail: Style,

    /// [`Style`] for rendering skipped tests.
    pub skip: Style,

    /// [`Style`] for rendering tests not implemented yet.
    pub todo: Style,

    /// [`Style`] for rendering the in-progress counter.
    pub in_progress: Style,

    /// [`Style`] for rendering group names.
    pub group: Style,

    /// Dimmed [`Style`] for rendering group names on start lines.
    pub group_dark: Style,

    /// Dimmed [`Style`] for rendering test names on start lines.
    pub test_dark: Style,

    /// Indicates whether the terminal was detected.
    pub is_present: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            pass: Style::new().green(),
            fail: Style::new().red(),
            skip: Style::new().cyan(),
            todo: Style::new().magenta(),
            in_progress: Style::new().yellow(),
            group: Style::new().blue(),
            group_dark: Style::new().blue().dim(),
            test_dark: Style::new().dim(),
            is_present: atty::is(atty::Stream::Stdout)
                && console::colors_enabled(),
        }
    }
}

impl Theme {
    /// Creates new [`Theme`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the given [`Coloring`] to this [`Theme`].
    ///
    /// [`Coloring::Always`] forces every role's [`Style`] to emit its escape
    /// sequences even into a non-terminal output, while [`Coloring::Never`]
    /// strips every role down to the plain [`Style`], so nothing is emitted
    /// even on a detected terminal.
    pub fn apply_coloring(&mut self, color: Coloring) {
        match color {
            Coloring::Auto => {}
            Coloring::Always => {
                self.is_present = true;
                self.restyle(|s| s.force_styling(true));
            }
            Coloring::Never => {
                self.is_present = false;
                self.restyle(|_| Style::new());
            }
        }
    }

    /// Replaces every role's [`Style`] with the one produced by `f`.
    fn restyle(&mut self, f: impl Fn(Style) -> Style) {
        for style in [
            &mut self.pass,
            &mut self.fail,
            &mut self.skip,
            &mut self.todo,
            &mut self.in_progress,
            &mut self.group,
            &mut self.group_dark,
            &mut self.test_dark,
        ] {
            *style = f(style.clone());
        }
    }
}

/// Output to write report lines into: a byte sink whose current width may be
/// probed before every write.
pub trait TermOutput: io::Write {
    /// Returns the current width of this output in columns, or [`None`] if
    /// it isn't a terminal of known size.
    fn width(&self) -> Option<u16>;
}

impl TermOutput for Term {
    fn width(&self) -> Option<u16> {
        self.size_checked().map(|(_, columns)| columns)
    }
}

/// [`io::Write`] extension for easier manipulation with strings and special
/// sequences.
pub trait WriteStrExt: io::Write {
    /// Writes the given `string` into this writer.
    ///
    /// # Errors
    ///
    /// If this writer fails to write the given `string`.
    fn write_str(&mut self, string: impl AsRef<str>) -> io::Result<()> {
        self.write(string.as_ref().as_bytes()).map(drop)
    }

    /// Writes the given `string` into this writer followed by a newline.
    ///
    /// # Errors
    ///
    /// If this writer fails to write the given `string`.
    fn write_line(&mut self, string: impl AsRef<str>) -> io::Result<()> {
        self.write_str(string.as_ref())
            .and_then(|_| self.write_str("\n"))
            .map(drop)
    }

    /// Writes a special sequence into this writer moving a cursor up on `n`
    /// positions.
    ///
    /// # Errors
    ///
    /// If this writer fails to write a special sequence.
    fn move_cursor_up(&mut self, n: usize) -> io::Result<()> {
        (n > 0)
            .then(|| self.write_str(format!("\x1b[{n}A")))
            .unwrap_or(Ok(()))
    }

    /// Writes a special sequence into this writer erasing the whole current
    /// line, with a cursor left at its start.
    ///
    /// # Errors
    ///
    /// If this writer fails to write a special sequence.
    fn clear_line(&mut self) -> io::Result<()> {
        self.write_str("\r\x1b[2K")
    }
}

impl<T: io::Write + ?Sized> WriteStrExt for T {}

/// [`String`] wrapper implementing [`io::Write`].
#[derive(
    Clone,
    Debug,
    Default,
    Deref,
    DerefMut,
    Display,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
pub struct WritableString(pub String);

impl io::Write for WritableString {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.push_str(
            str::from_utf8(buf)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?,
        );
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl TermOutput for WritableString {
    fn width(&self) -> Option<u16> {
        None
    }
}

/// Wrapper of an [`io::Write`] implementor reporting a fixed terminal width.
///
/// Pins the width-aware truncation to a known column count where the real
/// terminal size is absent or unstable (CI, tests, output redirection).
#[derive(Clone, Debug)]
pub struct FixedWidth<Out: io::Write> {
    /// [`io::Write`] implementor to write the output into.
    out: Out,

    /// Width reported to callers, in columns.
    columns: u16,
}

impl<Out: io::Write> FixedWidth<Out> {
    /// Creates a new [`FixedWidth`] output reporting the given `columns`.
    #[must_use]
    pub const fn new(out: Out, columns: u16) -> Self {
        Self { out, columns }
    }

    /// Returns a reference to the wrapped [`io::Write`] implementor.
    #[must_use]
    pub fn get_ref(&self) -> &Out {
        &self.out
    }

    /// Returns the wrapped [`io::Write`] implementor, dropping the width.
    #[must_use]
    pub fn into_inner(self) -> Out {
        self.out
    }
}

impl<Out: io::Write> io::Write for FixedWidth<Out> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl<Out: io::Write> TermOutput for FixedWidth<Out> {
    fn width(&self) -> Option<u16> {
        Some(self.columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writable_string_collects_writes() {
        let mut out = WritableString(String::new());
        out.write_str("first").unwrap();
        out.write_line(" line").unwrap();
        assert_eq!(out.0, "first line\n");
    }

    #[test]
    fn move_cursor_up_skips_zero() {
        let mut out = WritableString(String::new());
        out.move_cursor_up(0).unwrap();
        assert_eq!(out.0, "");
        out.move_cursor_up(1).unwrap();
        assert_eq!(out.0, "\x1b[1A");
    }

    #[test]
    fn clear_line_sequence() {
        let mut out = WritableString(String::new());
        out.clear_line().unwrap();
        assert_eq!(out.0, "\r\x1b[2K");
    }

    #[test]
    fn always_coloring_forces_escapes() {
        let mut theme = Theme::new();
        theme.apply_coloring(Coloring::Always);
        assert!(theme.is_present);
        assert!(theme.pass.apply_to("ok").to_string().contains("\x1b[32m"));
        assert!(theme.fail.apply_to("no").to_string().contains("\x1b[31m"));
    }

    #[test]
    fn never_coloring_strips_styles() {
        let mut theme = Theme::new();
        theme.apply_coloring(Coloring::Never);
        assert!(!theme.is_present);
        assert_eq!(theme.pass.apply_to("ok").to_string(), "ok");
        assert_eq!(theme.group_dark.apply_to("g").to_string(), "g");
    }

    #[test]
    fn fixed_width_reports_columns_and_forwards() {
        let mut out = FixedWidth::new(WritableString(String::new()), 40);
        assert_eq!(out.width(), Some(40));
        out.write_line("hi").unwrap();
        assert_eq!(out.into_inner().0, "hi\n");
    }

    #[test]
    fn writable_string_has_no_width() {
        assert_eq!(WritableString(String::new()).width(), None);
    }
}
