use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("not supported file type: {}", path.display())]
    Unsupported { path: PathBuf },

    #[error("unknown dialect '{0}' (expected 'c' or 'java')")]
    UnknownDialect(String),

    #[error("not a regular file: {}", path.display())]
    NotAFile { path: PathBuf },

    #[error("binary file skipped: {}", path.display())]
    Binary { path: PathBuf },

    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] globset::Error),

    #[error("invalid config '{}': {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Errors a batch run reports and moves past instead of aborting.
    pub fn is_skippable(&self) -> bool {
        matches!(
            self,
            Self::Unsupported { .. } | Self::Binary { .. } | Self::NotAFile { .. } | Self::Io { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
