use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// Date string did not split into exactly three numeric `/` fields.
    #[error("malformed date {0:?} (expected M/D/YYYY)")]
    MalformedDate(String),

    #[error("failed to read source {}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExtractError {
    pub fn source_read(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        ExtractError::SourceRead {
            path: path.into(),
            source: source.into(),
        }
    }
}
