//! Error types for rs-signpost.
//!
//! Extraction itself never fails. [`Error`] covers configuration loading and
//! the similarity seam; selector compilation and the fetcher carry their own
//! error types.

/// An exclusion selector the CSS engine rejected.
///
/// The pruner skips such selectors instead of aborting the pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid selector {selector:?}: {reason}")]
pub struct SelectorError {
    /// The selector as written by the user.
    pub selector: String,
    /// What the parser tripped over.
    pub reason: String,
}

/// Error type for rs-signpost operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid TOML for [`crate::Config`].
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// The similarity scorer reported a failure.
    #[error("similarity scoring failed: {0}")]
    Scoring(String),
}

/// Result type alias for rs-signpost operations.
pub type Result<T> = std::result::Result<T, Error>;
