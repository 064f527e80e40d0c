//! Presenter trait for variant-specific styling.
//!
//! The renderer owns tag names and structure; a presenter only decides which
//! attributes each element carries, plus the markup for the elements that are
//! stitched around an article (title, figures, hashtags). Keeping tag names in
//! the renderer guarantees that block-level output always starts with the same
//! tag regardless of the styling variant.

use std::fmt::Write;

use crate::ast::ListKind;
use crate::util::escape_html;

/// Styling variant for rendered HTML.
///
/// Every attribute method returns either an empty string or a string with a
/// leading space, ready to be placed right after the tag name.
pub trait Presenter {
    /// Attributes for `<h1>`..`<h3>`.
    fn heading_attrs(level: u8) -> &'static str;

    /// Attributes for `<li>`.
    fn list_item_attrs(kind: ListKind) -> &'static str;

    /// Attributes for `<blockquote>`.
    fn blockquote_attrs() -> &'static str;

    /// Attributes for the `<p>` wrapping a prose paragraph.
    fn paragraph_attrs() -> &'static str;

    /// Attributes for `<table>`.
    fn table_attrs() -> &'static str;

    /// Attributes for the single `<tr>` inside `<thead>`.
    fn table_head_row_attrs() -> &'static str;

    /// Attributes for `<th>`.
    fn table_header_cell_attrs() -> &'static str;

    /// Attributes for a body `<tr>`, zebra-striped by row index.
    fn table_row_attrs(index: usize) -> &'static str;

    /// Attributes for `<td>`.
    fn table_cell_attrs() -> &'static str;

    /// Attributes for `<figure>`.
    fn figure_attrs() -> &'static str;

    /// Attributes for the `<img>` inside a figure.
    fn image_attrs() -> &'static str;

    /// Attributes for `<figcaption>`.
    fn figcaption_attrs() -> &'static str;

    /// Attributes for the hashtag container `<div>`.
    fn hashtags_attrs() -> &'static str;

    /// Attributes for a single hashtag `<span>`.
    fn hashtag_attrs() -> &'static str;

    /// Render an article title as a single `<h1>` line.
    fn title(text: &str, out: &mut String) {
        write!(
            out,
            "<h1{}>{}</h1>",
            Self::heading_attrs(1),
            escape_html(text)
        )
        .unwrap();
    }

    /// Render an image with its caption as a single `<figure>` line.
    ///
    /// The line must not contain newlines: it is spliced into the article's
    /// line stream before paragraph splitting.
    fn figure(src: &str, caption: &str, out: &mut String) {
        let caption = escape_html(caption);
        write!(
            out,
            r#"<figure{}><img src="{}" alt="{caption}"{}><figcaption{}>{caption}</figcaption></figure>"#,
            Self::figure_attrs(),
            escape_html(src),
            Self::image_attrs(),
            Self::figcaption_attrs(),
        )
        .unwrap();
    }

    /// Render hashtags as a single `<div>` line.
    ///
    /// Tags are expected to be normalized already (one leading `#`).
    fn hashtags(tags: &[String], out: &mut String) {
        write!(out, "<div{}>", Self::hashtags_attrs()).unwrap();
        for (i, tag) in tags.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            write!(
                out,
                "<span{}>{}</span>",
                Self::hashtag_attrs(),
                escape_html(tag)
            )
            .unwrap();
        }
        out.push_str("</div>");
    }
}

/// Runtime selection of a presenter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum RenderStyle {
    /// Tailwind class attributes, for the in-app dashboard viewer.
    Class,
    /// Inline `style` attributes, portable through clipboard paste.
    #[default]
    Inline,
}

impl RenderStyle {
    /// Name used in configuration files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            RenderStyle::Class => "class",
            RenderStyle::Inline => "inline",
        }
    }
}

impl std::fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
