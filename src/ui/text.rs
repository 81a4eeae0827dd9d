//! Display-text helpers.

use std::borrow::Cow;

/// Decode HTML entities in upstream text before display.
///
/// Some Teachable fields arrive HTML-escaped (`&amp;`, `&#39;`, ...).
pub fn decode_html(text: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(text)
}
