//! Article input errors.

/// Error decoding backend responses.
#[derive(Debug, thiserror::Error)]
pub enum ArticleError {
    /// Malformed JSON or missing required fields.
    #[error("Invalid backend response: {0}")]
    Json(#[from] serde_json::Error),
}
