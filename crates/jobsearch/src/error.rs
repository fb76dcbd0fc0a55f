use thiserror::Error;

#[derive(Debug, Error)]
pub enum JobSearchError {
    /// Store unreachable, connection dropped, query rejected or a column
    /// failed to decode. Surfaced as-is, never retried here.
    #[error("data access error: {0}")]
    DataAccess(#[from] sqlx::Error),

    /// The prefix is spliced into SQL text, so it must be a plain identifier.
    #[error("invalid table prefix {0:?}: only [A-Za-z0-9_.] allowed")]
    InvalidTablePrefix(String),

    #[error("invalid page window: start={start} count={count} (both must be >= 0)")]
    InvalidPagination { start: i64, count: i64 },

    /// The repository is read-only; instance creation belongs to the
    /// upstream batch framework.
    #[error("unsupported operation on read-only job instance repository: {0}")]
    UnsupportedOperation(&'static str),
}
