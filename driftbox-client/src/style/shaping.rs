//! Text widget helpers with advanced shaping
//!
//! Filenames and usernames can contain non-Latin scripts, so all text in the
//! UI goes through these helpers to get advanced shaping by default.

use iced::widget::{Text, text};

/// Create a text widget with advanced shaping enabled
pub fn shaped_text<'a>(content: impl text::IntoFragment<'a>) -> Text<'a> {
    text(content).shaping(text::Shaping::Advanced)
}

/// Create a text widget with advanced shaping that wraps long content
///
/// Used for error messages and other strings of unbounded length.
pub fn shaped_text_wrapped<'a>(content: impl text::IntoFragment<'a>) -> Text<'a> {
    shaped_text(content).wrapping(text::Wrapping::WordOrGlyph)
}
