//! CLI error types.

use std::path::PathBuf;

use postcraft_article::ArticleError;
use postcraft_config::ConfigError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Article {
        path: PathBuf,
        #[source]
        source: ArticleError,
    },
}

impl CliError {
    /// Wrap a read error with the path being read.
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Wrap a decode error with the path it came from.
    pub(crate) fn article(path: impl Into<PathBuf>, source: ArticleError) -> Self {
        Self::Article {
            path: path.into(),
            source,
        }
    }
}
