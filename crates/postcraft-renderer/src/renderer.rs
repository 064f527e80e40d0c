//! Generic markdown renderer with pluggable presenter.

use std::fmt::Write;
use std::marker::PhantomData;

use crate::ast::{Block, Inline, Line, Table};
use crate::parser::{parse, parse_inlines};
use crate::presenter::Presenter;
use crate::table::parse_table;

/// Markdown renderer parameterized by a [`Presenter`].
///
/// Parsing is shared; only the emitted attributes differ between presenters.
/// Rendering is pure and recomputes everything on each call.
pub struct MarkdownRenderer<P: Presenter> {
    _presenter: PhantomData<fn() -> P>,
}

impl<P: Presenter> MarkdownRenderer<P> {
    /// Create a new renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            _presenter: PhantomData,
        }
    }

    /// Render article text to an HTML fragment.
    ///
    /// Paragraph outputs are joined with `\n` in source order.
    pub fn render(&self, text: &str) -> String {
        self.render_blocks(&parse(text))
    }

    /// Render already-parsed blocks.
    pub fn render_blocks(&self, blocks: &[Block]) -> String {
        let mut out = String::with_capacity(blocks.len() * 128);
        for (i, block) in blocks.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            self.push_block(block, &mut out);
        }
        out
    }

    /// Render a pipe-table block.
    ///
    /// Returns an empty string when the block has fewer than two
    /// pipe-prefixed lines.
    pub fn render_table(&self, block: &str) -> String {
        let mut out = String::new();
        if let Some(table) = parse_table(block) {
            self.push_table(&table, &mut out);
        }
        out
    }

    fn push_block(&self, block: &Block, out: &mut String) {
        match block {
            Block::Table(table) => self.push_table(table, out),
            Block::Markup(lines) => {
                for (i, line) in lines.iter().enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    self.push_line(line, out);
                }
            }
            Block::Prose(lines) => {
                write!(out, "<p{}>", P::paragraph_attrs()).unwrap();
                for (i, line) in lines.iter().enumerate() {
                    if i > 0 {
                        out.push_str("<br>");
                    }
                    self.push_line(line, out);
                }
                out.push_str("</p>");
            }
        }
    }

    fn push_line(&self, line: &Line, out: &mut String) {
        match line {
            Line::Heading { level, content } => {
                write!(out, "<h{level}{}>", P::heading_attrs(*level)).unwrap();
                push_inlines(content, out);
                write!(out, "</h{level}>").unwrap();
            }
            Line::ListItem { kind, content } => {
                write!(out, "<li{}>", P::list_item_attrs(*kind)).unwrap();
                push_inlines(content, out);
                out.push_str("</li>");
            }
            Line::Quote(content) => {
                write!(out, "<blockquote{}>", P::blockquote_attrs()).unwrap();
                push_inlines(content, out);
                out.push_str("</blockquote>");
            }
            Line::Text(content) => push_inlines(content, out),
        }
    }

    fn push_table(&self, table: &Table, out: &mut String) {
        write!(
            out,
            "<table{}><thead><tr{}>",
            P::table_attrs(),
            P::table_head_row_attrs()
        )
        .unwrap();
        for header in &table.headers {
            write!(out, "<th{}>", P::table_header_cell_attrs()).unwrap();
            push_inlines(&parse_inlines(header), out);
            out.push_str("</th>");
        }
        out.push_str("</tr></thead><tbody>");

        for (index, row) in table.rows.iter().enumerate() {
            write!(out, "<tr{}>", P::table_row_attrs(index)).unwrap();
            for cell in row {
                write!(out, "<td{}>", P::table_cell_attrs()).unwrap();
                push_inlines(&parse_inlines(cell), out);
                out.push_str("</td>");
            }
            out.push_str("</tr>");
        }
        out.push_str("</tbody></table>");
    }
}

impl<P: Presenter> Default for MarkdownRenderer<P> {
    fn default() -> Self {
        Self::new()
    }
}

fn push_inlines(inlines: &[Inline], out: &mut String) {
    for inline in inlines {
        match inline {
            Inline::Text(text) => out.push_str(text),
            Inline::Strong(text) => {
                out.push_str("<strong>");
                out.push_str(text);
                out.push_str("</strong>");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClassPresenter, InlineStylePresenter};
    use pretty_assertions::assert_eq;

    fn render_class(markdown: &str) -> String {
        MarkdownRenderer::<ClassPresenter>::new().render(markdown)
    }

    fn render_inline(markdown: &str) -> String {
        MarkdownRenderer::<InlineStylePresenter>::new().render(markdown)
    }

    /// Strip attributes so structure can be compared across presenters.
    fn bare(html: &str) -> String {
        regex::Regex::new(r#" (class|style)="[^"]*""#)
            .unwrap()
            .replace_all(html, "")
            .into_owned()
    }

    #[test]
    fn test_title_and_bold_prose() {
        let html = render_class("# Title\n\nSome **bold** text.");
        assert_eq!(html.matches("<h1").count(), 1);
        assert_eq!(html.matches("<strong>bold</strong>").count(), 1);
        assert_eq!(html.matches("<p").count(), 1);
        assert_eq!(
            bare(&html),
            "<h1>Title</h1>\n<p>Some <strong>bold</strong> text.</p>"
        );
    }

    #[test]
    fn test_prose_newlines_become_br() {
        assert_eq!(
            bare(&render_class("line one\nline two\nline three")),
            "<p>line one<br>line two<br>line three</p>"
        );
    }

    #[test]
    fn test_block_paragraph_keeps_newlines() {
        assert_eq!(
            bare(&render_class("## Section\nbody\n- item")),
            "<h2>Section</h2>\nbody\n<li>item</li>"
        );
    }

    #[test]
    fn test_heading_levels() {
        let html = bare(&render_class("# A\n\n## B\n\n### C\n\n#### D"));
        assert_eq!(html, "<h1>A</h1>\n<h2>B</h2>\n<h3>C</h3>\n<p>#### D</p>");
    }

    #[test]
    fn test_bullet_and_numbered_lists() {
        let html = render_class("- first\n- **second**\n\n1. one\n2. two");
        assert_eq!(html.matches("list-disc").count(), 2);
        assert_eq!(html.matches("list-decimal").count(), 2);
        assert!(html.contains("<strong>second</strong>"));
        assert!(!html.contains("<p"));
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(
            bare(&render_inline("> 인용문 **강조**")),
            "<blockquote>인용문 <strong>강조</strong></blockquote>"
        );
    }

    #[test]
    fn test_raw_figure_paragraph_is_not_wrapped() {
        let html = render_inline("<figure><img src=\"a.png\"></figure>\n## Next");
        assert!(html.starts_with("<figure>"));
        assert!(!html.contains("<p"));
        assert!(!html.contains("<br>"));
    }

    #[test]
    fn test_indented_heading_is_prose() {
        assert_eq!(bare(&render_class("  # x")), "<p>  # x</p>");
    }

    #[test]
    fn test_table_structure() {
        let html = render_inline("| A | B | C |\n|---|---|---|\n| 1 | 2 | 3 |\n| 4 | 5 | 6 |");
        assert!(html.starts_with("<table"));
        assert_eq!(html.matches("<thead>").count(), 1);
        assert_eq!(html.matches("<th ").count(), 3);
        assert_eq!(html.matches("<td ").count(), 6);
        assert_eq!(html.matches("<tr").count(), 3);
        assert!(html.contains(InlineStylePresenter::table_row_attrs(0)));
        assert!(html.contains(InlineStylePresenter::table_row_attrs(1)));
        assert_ne!(
            InlineStylePresenter::table_row_attrs(0),
            InlineStylePresenter::table_row_attrs(1)
        );
    }

    #[test]
    fn test_table_body_row_count() {
        let renderer = MarkdownRenderer::<ClassPresenter>::new();
        for (markdown, lines, divider) in [
            ("| A |\n|---|\n| 1 |\n| 2 |", 4, 1),
            ("| A |\n| 1 |\n| 2 |", 3, 0),
            ("| A | B |\n| :-: | --: |", 2, 1),
        ] {
            let html = renderer.render(markdown);
            let body = html.split("<tbody>").nth(1).unwrap();
            assert_eq!(html.matches("<thead>").count(), 1);
            assert_eq!(body.matches("<tr").count(), lines - 1 - divider);
        }
    }

    #[test]
    fn test_table_bold_cells() {
        let html = bare(&render_class("| **Key** | Value |\n| a | **b** |"));
        assert_eq!(
            html,
            "<table><thead><tr><th><strong>Key</strong></th><th>Value</th></tr></thead>\
             <tbody><tr><td>a</td><td><strong>b</strong></td></tr></tbody></table>"
        );
    }

    #[test]
    fn test_table_ragged_rows_preserved() {
        let html = bare(&render_class("| A | B | C |\n|---|---|---|\n| 1 |\n| 1 | 2 | 3 | 4 |"));
        assert!(html.contains("<tr><td>1</td></tr>"));
        assert!(html.contains("<tr><td>1</td><td>2</td><td>3</td><td>4</td></tr>"));
    }

    #[test]
    fn test_table_markers_not_substituted() {
        let html = bare(&render_class("| # not heading | - not list |\n| > no | 1. no |"));
        assert!(html.contains("<th># not heading</th>"));
        assert!(html.contains("<td>> no</td>"));
        assert!(!html.contains("<li"));
        assert!(!html.contains("<h1"));
        assert!(!html.contains("<blockquote"));
    }

    #[test]
    fn test_render_table_rejects_non_table() {
        let renderer = MarkdownRenderer::<ClassPresenter>::new();
        assert_eq!(renderer.render_table("| only one |"), "");
        assert_eq!(renderer.render_table("plain"), "");
        assert!(renderer.render_table("| A |\n| 1 |").starts_with("<table"));
    }

    #[test]
    fn test_single_pipe_line_is_prose() {
        assert_eq!(bare(&render_class("| a | b |")), "<p>| a | b |</p>");
    }

    #[test]
    fn test_rerender_does_not_nest_strong() {
        for markdown in [
            "# **Title**\n\nSome **bold** text.",
            "- **a**\n\n> **b**\n\n| **c** |\n|---|\n| **d** |",
        ] {
            let once = render_inline(markdown);
            let twice = render_inline(&once);
            assert!(!twice.contains("<strong><strong>"));
            assert_eq!(
                once.matches("<strong>").count(),
                twice.matches("<strong>").count()
            );
        }
    }

    #[test]
    fn test_presenters_share_structure() {
        let markdown = "# T\n\n## S\nline\n\n- a\n1. b\n\n> q\n\ntext **b**\nmore\n\n| H |\n| c |";
        assert_eq!(bare(&render_class(markdown)), bare(&render_inline(markdown)));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render_class(""), "");
        assert_eq!(render_inline("\n\n\n"), "");
    }

    #[test]
    fn test_default_renderer() {
        let renderer = MarkdownRenderer::<ClassPresenter>::default();
        assert_eq!(bare(&renderer.render("Hello")), "<p>Hello</p>");
    }
}
