//! Reading article and image inputs from disk.

use std::path::Path;

use postcraft_article::{GeneratedContent, parse_image_urls};
use postcraft_images::GeneratedImage;

use crate::error::CliError;

/// Load an article from `path`.
///
/// `.json` files are decoded as a backend response. Anything else is read as
/// the markdown body with an empty title and no hashtags.
pub(crate) fn load_content(path: &Path) -> Result<GeneratedContent, CliError> {
    let text = std::fs::read_to_string(path).map_err(|e| CliError::read(path, e))?;

    if is_json(path) {
        GeneratedContent::from_json(&text).map_err(|e| CliError::article(path, e))
    } else {
        Ok(GeneratedContent {
            content: text,
            ..GeneratedContent::default()
        })
    }
}

/// Collect images from an optional JSON file followed by explicit URLs.
pub(crate) fn load_images(
    file: Option<&Path>,
    urls: &[String],
) -> Result<Vec<GeneratedImage>, CliError> {
    let mut images = match file {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|e| CliError::read(path, e))?;
            parse_image_urls(&text).map_err(|e| CliError::article(path, e))?
        }
        None => Vec::new(),
    };
    images.extend(urls.iter().map(GeneratedImage::new));
    Ok(images)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
