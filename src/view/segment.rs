//! Building block of rendered report lines.

use std::borrow::Cow;

use console::Style;

/// Piece of a report line: a text with an optional [`Style`] tag.
///
/// Styling is resolved at render time, so the same [`Segment`]s can produce
/// both the styled and the plain rendition of a line.
#[derive(Clone, Debug)]
pub struct Segment {
    /// Text of this segment.
    text: Cow<'static, str>,

    /// [`Style`] to wrap the text into, if any.
    style: Option<Style>,
}

impl Segment {
    /// Creates a new [`Segment`] rendered without any styling.
    #[must_use]
    pub fn plain(text: impl Into<Cow<'static, str>>) -> Self {
        Self {
            text: text.into(),
            style: None,
        }
    }

    /// Creates a new [`Segment`] rendered with the given [`Style`].
    #[must_use]
    pub fn styled(text: impl Into<Cow<'static, str>>, style: Style) -> Self {
        Self {
            text: text.into(),
            style: Some(style),
        }
    }

    /// Returns the text of this [`Segment`], never styled.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Renders this [`Segment`], wrapping its text into the [`Style`]'s
    /// escape sequences only if `apply_style` is set and a [`Style`] is
    /// present.
    #[must_use]
    pub fn render(&self, apply_style: bool) -> Cow<'_, str> {
        match &self.style {
            Some(style) if apply_style => {
                style.apply_to(self.text.as_ref()).to_string().into()
            }
            _ => Cow::Borrowed(self.text.as_ref()),
        }
    }
}

/// Renders the given `segments` into a single [`String`].
pub(crate) fn render_all(segments: &[Segment], apply_style: bool) -> String {
    segments.iter().map(|s| s.render(apply_style)).collect()
}
