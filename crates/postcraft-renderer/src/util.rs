//! Shared helpers for presenters.

use std::borrow::Cow;

/// Escape text injected by a presenter (titles, captions, image sources,
/// hashtags) into an attribute value or text node.
///
/// Image sources are often large data URLs with nothing to escape, so the
/// input is borrowed unless a replacement is needed.
///
/// # Examples
///
/// ```
/// use postcraft_renderer::escape_html;
///
/// assert_eq!(escape_html(r#"a "b" <c>"#), "a &quot;b&quot; &lt;c&gt;");
/// ```
pub fn escape_html(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(|c| entity(c).is_some()) else {
        return Cow::Borrowed(text);
    };

    let (clean, rest) = text.split_at(first);
    let mut escaped = String::with_capacity(text.len() + 8);
    escaped.push_str(clean);
    for c in rest.chars() {
        match entity(c) {
            Some(entity) => escaped.push_str(entity),
            None => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

fn entity(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}
