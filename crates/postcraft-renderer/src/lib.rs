//! Markdown dialect renderer with pluggable presenters.
//!
//! This crate renders the constrained markdown dialect produced by the
//! content-generation backend (headings, bold, bullet and numbered lists,
//! blockquotes, pipe tables) into HTML fragments.
//!
//! # Architecture
//!
//! Parsing and presentation are separate:
//! - [`parse`] turns article text into a list of [`Block`]s.
//! - [`MarkdownRenderer`] walks the blocks and asks a [`Presenter`] for the
//!   attributes of each element.
//!
//! Two presenters ship with the crate:
//! - [`ClassPresenter`]: Tailwind classes for the dashboard viewer
//! - [`InlineStylePresenter`]: inline styles that survive clipboard paste
//!
//! The renderer performs no sanitization. Raw HTML lines in the input (for
//! example image figures spliced in by the image placer) pass through.
//!
//! # Example
//!
//! ```
//! use postcraft_renderer::{InlineStylePresenter, MarkdownRenderer};
//!
//! let html = MarkdownRenderer::<InlineStylePresenter>::new()
//!     .render("# Hello\n\n**Bold** text");
//! assert!(html.contains("<strong>Bold</strong>"));
//! ```

mod ast;
mod class;
mod inline_style;
mod parser;
mod plain_text;
mod presenter;
mod renderer;
mod table;
mod util;

pub use ast::{Block, Inline, Line, ListKind, Table};
pub use class::ClassPresenter;
pub use inline_style::InlineStylePresenter;
pub use parser::{parse, parse_inlines, parse_line, parse_paragraph, split_paragraphs};
pub use plain_text::plain_text;
pub use presenter::{Presenter, RenderStyle};
pub use renderer::MarkdownRenderer;
pub use table::{is_divider_row, is_table_paragraph, parse_cells, parse_table};
pub use util::escape_html;

/// Render article text with the presenter selected at runtime.
///
/// # Example
///
/// ```
/// use postcraft_renderer::{RenderStyle, render_with_style};
///
/// let html = render_with_style(RenderStyle::Class, "- item");
/// assert!(html.contains("list-disc"));
/// ```
pub fn render_with_style(style: RenderStyle, text: &str) -> String {
    match style {
        RenderStyle::Class => MarkdownRenderer::<ClassPresenter>::new().render(text),
        RenderStyle::Inline => MarkdownRenderer::<InlineStylePresenter>::new().render(text),
    }
}
