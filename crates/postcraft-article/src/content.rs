//! Input contracts of the generation backends.

use postcraft_images::GeneratedImage;
use serde::{Deserialize, Serialize};

use crate::error::ArticleError;

/// Article returned by the content-generation backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub title: String,
    /// Markdown body.
    pub content: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
}

impl GeneratedContent {
    /// Parse the backend's JSON response.
    pub fn from_json(json: &str) -> Result<Self, ArticleError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Hashtags with exactly one leading `#`, blank tags dropped.
    pub fn normalized_hashtags(&self) -> Vec<String> {
        self.hashtags
            .iter()
            .filter_map(|tag| normalize_hashtag(tag))
            .collect()
    }
}

/// Parse the image backend's JSON array of URLs.
pub fn parse_image_urls(json: &str) -> Result<Vec<GeneratedImage>, ArticleError> {
    Ok(serde_json::from_str(json)?)
}

/// Normalize a hashtag to a single leading `#`.
///
/// Returns `None` when nothing is left once the markers are removed.
pub fn normalize_hashtag(tag: &str) -> Option<String> {
    let bare = tag.trim().trim_start_matches('#').trim();
    if bare.is_empty() {
        None
    } else {
        Some(format!("#{bare}"))
    }
}
