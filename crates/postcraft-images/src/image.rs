//! Generated images and their captions.

use serde::{Deserialize, Serialize};

/// Captions for the first images, in generation order.
pub const DEFAULT_CAPTIONS: [&str; 3] = [
    "핵심 요약 인포그래픽",
    "프로세스 인포그래픽",
    "데이터 인포그래픽",
];

/// An image returned by the image-generation backend.
///
/// Serialized as the bare URL string, so a JSON array of URLs deserializes
/// directly into `Vec<GeneratedImage>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneratedImage {
    /// Data URL or remote URL.
    pub url: String,
}

impl GeneratedImage {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Caption for the image at `index`.
///
/// Falls back to `인포그래픽 {index + 1}` past the end of `captions`.
pub fn caption_for(index: usize, captions: &[String]) -> String {
    captions
        .get(index)
        .cloned()
        .unwrap_or_else(|| format!("인포그래픽 {}", index + 1))
}

/// Default captions as owned strings.
pub fn default_captions() -> Vec<String> {
    DEFAULT_CAPTIONS.iter().map(|c| (*c).to_owned()).collect()
}
