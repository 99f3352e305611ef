//! Error types for the anthology client.

use thiserror::Error;

/// Errors raised while decoding metadata or resolving rules.
///
/// All of these are unrecoverable for the call that triggered them: there
/// is no retry and no partial result, the error simply propagates to the
/// caller of construction or `extract`.
#[derive(Debug, Error)]
pub enum AnthologyError {
    /// The source does not expose any enumerable rule list.
    #[error("style source does not expose any CSS rules")]
    SourceUnavailable,

    /// No rule with the `-anthology-metadata::before` sentinel selector.
    #[error("style source does not contain anthology metadata")]
    MetadataMissing,

    /// One of the two JSON decode passes over the metadata blob failed.
    #[error("could not decode anthology metadata: {0}")]
    Metadata(#[from] serde_json::Error),

    /// No generated rule matches the selector built for a query.
    #[error("could not find generated rule for selector: {selector}")]
    RuleNotFound { selector: String },

    /// The boundary parser rejected the stylesheet text.
    #[error("could not parse stylesheet: {0}")]
    Parse(String),
}

/// Result type for anthology operations.
pub type Result<T> = std::result::Result<T, AnthologyError>;
