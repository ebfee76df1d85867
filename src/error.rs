//! Error types for the contribution source layer.

/// Failures while producing a contribution series.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The account identifier was empty. Fatal; raised before any fetch or
    /// synthesis work starts.
    #[error("account identifier must not be empty")]
    InvalidIdentifier,

    /// The calendar API could not produce usable data: network failure,
    /// non-2xx status, or a response that does not match the expected shape.
    /// Recoverable; the resolver answers with synthetic data instead.
    #[error("contribution API unavailable: {0}")]
    UpstreamUnavailable(String),
}
