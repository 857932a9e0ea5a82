//! Errors raised by the clustering engine and the point loader.

/// Errors that can occur while loading points or running k-means.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KMeansError {
    /// An input line could not be split into two decimal numbers.
    #[error("{source_name}:{line}: cannot parse point from {content:?}: {reason}")]
    Parse {
        /// File name (or other label) of the input
        source_name: String,
        /// 1-based line number
        line: usize,
        /// Raw line content
        content: String,
        reason: String,
    },

    /// Caller supplied an unusable argument (bad `k`, bad seed indices).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Internal invariant violated, or an operation called from the wrong state.
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

pub type Result<T> = std::result::Result<T, KMeansError>;
