//! Structural representation of a parsed article.
//!
//! The parser produces these types; presenters never see raw markdown.

/// A paragraph-level unit of the article.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    /// Pipe table, rendered by the table sub-renderer.
    Table(Table),
    /// Paragraph whose first line renders as a block element.
    ///
    /// Lines are emitted verbatim, joined by `\n`.
    Markup(Vec<Line>),
    /// Plain prose paragraph, wrapped in `<p>` with lines joined by `<br>`.
    Prose(Vec<Line>),
}

/// A single source line after block-level classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Line {
    /// `#`, `##` or `###` heading.
    Heading { level: u8, content: Vec<Inline> },
    /// `- item` or `1. item`.
    ListItem { kind: ListKind, content: Vec<Inline> },
    /// `> quote`.
    Quote(Vec<Inline>),
    /// Anything else, including raw HTML lines.
    Text(Vec<Inline>),
}

impl Line {
    /// Whether this line renders as a block-level element.
    pub fn is_block(&self) -> bool {
        !matches!(self, Line::Text(_))
    }
}

/// List marker style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKind {
    /// `- item`
    Bullet,
    /// `1. item`
    Numbered,
}

/// Inline run inside a line or table cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    /// `**bold**`
    Strong(String),
}

/// Parsed pipe table.
///
/// Row length is not reconciled against the header count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}
