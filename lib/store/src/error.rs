use sparesults::QueryResultsParseError;

/// An error talking to the triple store.
///
/// The client never swallows these; whether to degrade to an empty result is
/// decided by the caller, so "no data" and "store down" stay distinguishable.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The HTTP request itself failed (connection refused, timeout...).
    #[error("request to the store failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The store answered with a non-success status.
    #[error("store returned status {status}: {message}")]
    Endpoint { status: u16, message: String },
    /// The results body was not valid `application/sparql-results+json`.
    #[error("could not parse query results: {0}")]
    Results(#[from] QueryResultsParseError),
    /// A SELECT came back as a boolean (ASK) result.
    #[error("expected SELECT solutions, got a boolean result")]
    UnexpectedResultKind,
}
