//! Class-based presenter for the dashboard viewer.
//!
//! Emits Tailwind utility classes; the host page supplies the stylesheet.

use crate::ast::ListKind;
use crate::presenter::Presenter;

/// Tailwind class presenter.
pub struct ClassPresenter;

impl Presenter for ClassPresenter {
    fn heading_attrs(level: u8) -> &'static str {
        match level {
            1 => r#" class="text-3xl font-bold text-gray-900 mt-8 mb-4""#,
            2 => r#" class="text-2xl font-bold text-gray-800 mt-6 mb-3""#,
            _ => r#" class="text-xl font-semibold text-gray-800 mt-4 mb-2""#,
        }
    }

    fn list_item_attrs(kind: ListKind) -> &'static str {
        match kind {
            ListKind::Bullet => r#" class="ml-6 mb-1 list-disc""#,
            ListKind::Numbered => r#" class="ml-6 mb-1 list-decimal""#,
        }
    }

    fn blockquote_attrs() -> &'static str {
        r#" class="border-l-4 border-blue-500 bg-blue-50 pl-4 py-2 my-4 italic text-gray-700""#
    }

    fn paragraph_attrs() -> &'static str {
        r#" class="mb-4 leading-relaxed text-gray-700""#
    }

    fn table_attrs() -> &'static str {
        r#" class="w-full my-6 overflow-hidden rounded-lg border border-gray-200 text-sm""#
    }

    fn table_head_row_attrs() -> &'static str {
        r#" class="bg-gradient-to-r from-blue-600 to-indigo-600 text-white""#
    }

    fn table_header_cell_attrs() -> &'static str {
        r#" class="px-4 py-3 text-left font-semibold""#
    }

    fn table_row_attrs(index: usize) -> &'static str {
        if index % 2 == 0 {
            r#" class="bg-white""#
        } else {
            r#" class="bg-gray-50""#
        }
    }

    fn table_cell_attrs() -> &'static str {
        r#" class="px-4 py-3 border-t border-gray-200""#
    }

    fn figure_attrs() -> &'static str {
        r#" class="my-8 text-center""#
    }

    fn image_attrs() -> &'static str {
        r#" class="mx-auto max-w-full rounded-lg shadow-md""#
    }

    fn figcaption_attrs() -> &'static str {
        r#" class="mt-2 text-sm text-gray-500""#
    }

    fn hashtags_attrs() -> &'static str {
        r#" class="mt-8 flex flex-wrap gap-2""#
    }

    fn hashtag_attrs() -> &'static str {
        r#" class="rounded-full bg-blue-50 px-3 py-1 text-sm text-blue-600""#
    }
}
