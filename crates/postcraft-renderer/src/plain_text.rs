//! Plain-text fallback for clipboard export.
//!
//! Approximates what a browser's `innerText` yields for rendered article
//! HTML, for targets that only accept `text/plain`.

use std::sync::LazyLock;

use regex::Regex;

static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());

static BLOCK_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</(p|h[1-6]|li|blockquote|tr|figure|figcaption|div|table|ul|ol)>").unwrap()
});

static CELL_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</t[dh]>").unwrap());

static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

static EXCESS_NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Convert rendered HTML to plain text.
///
/// Line breaks and closing block tags become newlines, table cells are
/// separated by tabs, remaining tags are dropped and common entities decoded.
///
/// # Examples
///
/// ```
/// use postcraft_renderer::plain_text;
///
/// let text = plain_text("<h1>Title</h1>\n<p>one<br>two &amp; three</p>");
/// assert_eq!(text, "Title\n\none\ntwo & three");
/// ```
pub fn plain_text(html: &str) -> String {
    let text = LINE_BREAK.replace_all(html, "\n");
    let text = CELL_END.replace_all(&text, "\t");
    let text = BLOCK_END.replace_all(&text, "\n");
    let text = ANY_TAG.replace_all(&text, "");
    let text = decode_entities(&text);

    let text: Vec<&str> = text.split('\n').map(str::trim_end).collect();
    let text = text.join("\n");
    EXCESS_NEWLINES
        .replace_all(&text, "\n\n")
        .trim()
        .to_owned()
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InlineStylePresenter, MarkdownRenderer};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strips_attributes_and_tags() {
        assert_eq!(
            plain_text(r#"<p style="line-height: 1.8;">Some <strong>bold</strong> text.</p>"#),
            "Some bold text."
        );
    }

    #[test]
    fn test_table_cells_are_tab_separated() {
        assert_eq!(
            plain_text("<table><thead><tr><th>A</th><th>B</th></tr></thead><tbody><tr><td>1</td><td>2</td></tr></tbody></table>"),
            "A\tB\n1\t2"
        );
    }

    #[test]
    fn test_collapses_blank_runs() {
        assert_eq!(plain_text("<p>a</p>\n\n\n\n<p>b</p>"), "a\n\nb");
    }

    #[test]
    fn test_decodes_amp_last() {
        assert_eq!(plain_text("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_rendered_article() {
        let html = MarkdownRenderer::<InlineStylePresenter>::new()
            .render("# 제목\n\n첫 줄\n둘째 줄\n\n- 항목 **하나**\n- 항목 둘");
        assert_eq!(
            plain_text(&html),
            "제목\n\n첫 줄\n둘째 줄\n\n항목 하나\n\n항목 둘"
        );
    }

    #[test]
    fn test_figure_caption_survives() {
        let text = plain_text(
            r#"<figure><img src="a.png" alt="cap"><figcaption>핵심 요약 인포그래픽</figcaption></figure>"#,
        );
        assert_eq!(text, "핵심 요약 인포그래픽");
    }
}
