//! Error types for required lookups

use thiserror::Error;

use crate::value::ParseError;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// A required environment variable is missing or unusable.
///
/// Every variant carries the normalized (prefixed) key that was looked up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("environment variable {key:?} not found")]
    NotFound { key: String },

    #[error("environment variable {key:?} is not valid unicode")]
    NotUnicode { key: String },

    #[error("failed to parse {kind} from environment variable {key:?}: {source}")]
    Parse {
        key: String,
        kind: &'static str,
        #[source]
        source: ParseError,
    },
}

impl Error {
    pub fn key(&self) -> &str {
        match self {
            Self::NotFound { key } | Self::NotUnicode { key } | Self::Parse { key, .. } => key,
        }
    }
}
