//! Markdown dialect parser.
//!
//! Splits an article into paragraphs and classifies each one as a table,
//! a block-level markup paragraph, or prose. Line-level rules are anchored to
//! column 0 and applied with fixed priority: `###`, `##`, `#`, then `- `,
//! `N. ` and `> `. Bold is recognised inside every line.

use std::sync::LazyLock;

use regex::Regex;

use crate::ast::{Block, Inline, Line, ListKind};
use crate::table::{is_table_paragraph, parse_table};

/// One or more blank lines separate paragraphs.
static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\n+").unwrap());

static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\. (.*)$").unwrap());

/// Raw tag prefixes that mark a paragraph as block-level markup.
const BLOCK_TAG_PREFIXES: &[&str] = &[
    "<h1",
    "<h2",
    "<h3",
    "<h4",
    "<h5",
    "<h6",
    "<li",
    "<blockquote",
    "<ul",
    "<ol",
    "<figure",
    "<div",
    "<table",
];

/// Parse an article into blocks.
///
/// Never fails: unrecognised input degrades to prose. Paragraphs that are
/// blank after trimming produce no block.
///
/// # Examples
///
/// ```
/// use postcraft_renderer::{Block, parse};
///
/// let blocks = parse("# Title\n\nSome **bold** text.");
/// assert_eq!(blocks.len(), 2);
/// assert!(matches!(blocks[0], Block::Markup(_)));
/// assert!(matches!(blocks[1], Block::Prose(_)));
/// ```
pub fn parse(text: &str) -> Vec<Block> {
    let text = text.replace("\r\n", "\n");
    let blocks: Vec<Block> = split_paragraphs(&text)
        .filter(|paragraph| !paragraph.trim().is_empty())
        .map(parse_paragraph)
        .collect();

    tracing::debug!(blocks = blocks.len(), "Parsed article");
    blocks
}

/// Split text into paragraphs on runs of blank lines.
pub fn split_paragraphs(text: &str) -> impl Iterator<Item = &str> {
    PARAGRAPH_BREAK.split(text)
}

/// Parse a single paragraph.
pub fn parse_paragraph(paragraph: &str) -> Block {
    if is_table_paragraph(paragraph)
        && let Some(table) = parse_table(paragraph)
    {
        return Block::Table(table);
    }

    let lines: Vec<Line> = paragraph.split('\n').map(parse_line).collect();

    if starts_with_block(paragraph, &lines) {
        Block::Markup(lines)
    } else {
        Block::Prose(lines)
    }
}

/// Classify a single line.
pub fn parse_line(line: &str) -> Line {
    if let Some(rest) = line.strip_prefix("### ") {
        return Line::Heading {
            level: 3,
            content: parse_inlines(rest),
        };
    }
    if let Some(rest) = line.strip_prefix("## ") {
        return Line::Heading {
            level: 2,
            content: parse_inlines(rest),
        };
    }
    if let Some(rest) = line.strip_prefix("# ") {
        return Line::Heading {
            level: 1,
            content: parse_inlines(rest),
        };
    }
    if let Some(rest) = line.strip_prefix("- ") {
        return Line::ListItem {
            kind: ListKind::Bullet,
            content: parse_inlines(rest),
        };
    }
    if let Some(caps) = NUMBERED_ITEM.captures(line) {
        return Line::ListItem {
            kind: ListKind::Numbered,
            content: parse_inlines(&caps[1]),
        };
    }
    if let Some(rest) = line.strip_prefix("> ") {
        return Line::Quote(parse_inlines(rest));
    }
    Line::Text(parse_inlines(line))
}

/// Split text into plain and `**bold**` runs.
///
/// Markers pair up left to right with the shortest possible content; an
/// unmatched `**` stays literal.
pub fn parse_inlines(text: &str) -> Vec<Inline> {
    let mut inlines = Vec::new();
    let mut last = 0;

    for caps in BOLD.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > last {
            inlines.push(Inline::Text(text[last..whole.start()].to_owned()));
        }
        inlines.push(Inline::Strong(caps[1].to_owned()));
        last = whole.end();
    }

    if last < text.len() {
        inlines.push(Inline::Text(text[last..].to_owned()));
    }
    inlines
}

/// Whether the rendered paragraph would begin with a block-level tag.
///
/// Leading whitespace (and leading blank lines) is ignored, mirroring a
/// trimmed prefix check on the substituted output. Markers only count at
/// column 0, so an indented `# x` is prose.
fn starts_with_block(paragraph: &str, lines: &[Line]) -> bool {
    let Some((index, raw)) = paragraph
        .split('\n')
        .enumerate()
        .find(|(_, raw)| !raw.trim().is_empty())
    else {
        return false;
    };

    if lines[index].is_block() {
        return true;
    }

    let trimmed = raw.trim_start();
    BLOCK_TAG_PREFIXES
        .iter()
        .any(|prefix| trimmed.starts_with(prefix))
}
