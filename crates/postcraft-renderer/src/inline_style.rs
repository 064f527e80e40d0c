//! Inline-style presenter for clipboard export.
//!
//! Rich-text paste targets (blog editors, mail clients) drop external
//! stylesheets, so every element carries its own `style` attribute.

use crate::ast::ListKind;
use crate::presenter::Presenter;

const ROW_EVEN_BG: &str = r#" style="background-color: #ffffff;""#;
const ROW_ODD_BG: &str = r#" style="background-color: #f8fafc;""#;

/// Inline `style` attribute presenter.
pub struct InlineStylePresenter;

impl Presenter for InlineStylePresenter {
    fn heading_attrs(level: u8) -> &'static str {
        match level {
            1 => {
                r#" style="font-size: 28px; font-weight: 700; color: #111827; margin: 32px 0 16px 0; line-height: 1.4;""#
            }
            2 => {
                r#" style="font-size: 22px; font-weight: 700; color: #1f2937; margin: 28px 0 12px 0; padding-bottom: 8px; border-bottom: 2px solid #e5e7eb; line-height: 1.4;""#
            }
            _ => {
                r#" style="font-size: 18px; font-weight: 600; color: #1f2937; margin: 20px 0 8px 0; line-height: 1.4;""#
            }
        }
    }

    fn list_item_attrs(kind: ListKind) -> &'static str {
        match kind {
            ListKind::Bullet => {
                r#" style="margin: 4px 0 4px 24px; list-style-type: disc; line-height: 1.8; color: #374151;""#
            }
            ListKind::Numbered => {
                r#" style="margin: 4px 0 4px 24px; list-style-type: decimal; line-height: 1.8; color: #374151;""#
            }
        }
    }

    fn blockquote_attrs() -> &'static str {
        r#" style="border-left: 4px solid #3b82f6; background-color: #eff6ff; padding: 12px 16px; margin: 16px 0; color: #374151; font-style: italic; border-radius: 0 8px 8px 0;""#
    }

    fn paragraph_attrs() -> &'static str {
        r#" style="line-height: 1.8; margin: 0 0 16px 0; color: #374151;""#
    }

    fn table_attrs() -> &'static str {
        r#" style="width: 100%; border-collapse: separate; border-spacing: 0; margin: 24px 0; border: 1px solid #e5e7eb; border-radius: 12px; overflow: hidden; font-size: 14px;""#
    }

    fn table_head_row_attrs() -> &'static str {
        r#" style="background: linear-gradient(135deg, #2563eb 0%, #4f46e5 100%); color: #ffffff;""#
    }

    fn table_header_cell_attrs() -> &'static str {
        r#" style="padding: 12px 16px; text-align: left; font-weight: 600;""#
    }

    fn table_row_attrs(index: usize) -> &'static str {
        if index % 2 == 0 { ROW_EVEN_BG } else { ROW_ODD_BG }
    }

    fn table_cell_attrs() -> &'static str {
        r#" style="padding: 12px 16px; border-top: 1px solid #e5e7eb; color: #374151;""#
    }

    fn figure_attrs() -> &'static str {
        r#" style="margin: 32px 0; text-align: center;""#
    }

    fn image_attrs() -> &'static str {
        r#" style="max-width: 100%; height: auto; border-radius: 12px; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);""#
    }

    fn figcaption_attrs() -> &'static str {
        r#" style="margin-top: 8px; font-size: 13px; color: #6b7280;""#
    }

    fn hashtags_attrs() -> &'static str {
        r#" style="margin-top: 32px; padding-top: 16px; border-top: 1px solid #e5e7eb;""#
    }

    fn hashtag_attrs() -> &'static str {
        r#" style="display: inline-block; margin: 0 8px 8px 0; padding: 4px 12px; border-radius: 9999px; background-color: #eff6ff; color: #2563eb; font-size: 14px;""#
    }
}
