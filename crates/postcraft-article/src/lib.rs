//! Article composition for generated marketing content.
//!
//! Stitches the pieces returned by the generation backends into one rendered
//! document: the title as an `<h1>`, the markdown body with generated images
//! placed by [`postcraft_images::ImagePlacer`], and the hashtags. The result
//! carries both HTML and a plain-text fallback for clipboard export.
//!
//! # Example
//!
//! ```
//! use postcraft_article::{ArticleComposer, GeneratedContent};
//! use postcraft_renderer::InlineStylePresenter;
//!
//! let content = GeneratedContent::from_json(
//!     r#"{"title": "Title", "content": "Some **bold** text.", "hashtags": ["seo"]}"#,
//! )
//! .unwrap();
//! let article = ArticleComposer::<InlineStylePresenter>::new().compose(&content, &[]);
//! assert!(article.html.contains("<strong>bold</strong>"));
//! assert!(article.plain_text.ends_with("#seo"));
//! ```

mod compose;
mod content;
mod error;

pub use compose::{ArticleComposer, ComposedArticle, compose_with_style};
pub use content::{GeneratedContent, normalize_hashtag, parse_image_urls};
pub use error::ArticleError;
