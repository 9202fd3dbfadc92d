//! Error types for sqlinsert

use thiserror::Error;

/// Result type alias for sqlinsert operations
pub type InsertResult<T> = Result<T, InsertError>;

/// Errors raised by the bundled executors and by configuration parsing.
///
/// Statement rendering never fails. The builder itself never wraps executor
/// errors either: [`Insert::insert`](crate::Insert::insert) hands back whatever
/// `Executor::Error` the collaborator produced. This type is that error for the
/// `tokio-postgres` executors shipped with the crate.
#[derive(Debug, Error)]
pub enum InsertError {
    /// Prepare or execute failed in the driver
    #[error("Database error: {0}")]
    Database(#[from] tokio_postgres::Error),

    /// The execution context's timeout elapsed
    #[error("Insert timeout after {0:?}")]
    Timeout(std::time::Duration),

    /// The execution context was cancelled
    #[error("Insert cancelled")]
    Cancelled,

    /// A token kind name could not be parsed
    #[error("Invalid token kind: {0}")]
    InvalidTokenKind(String),

    /// Pool error
    #[cfg(feature = "pool")]
    #[error("Pool error: {0}")]
    Pool(String),
}

impl InsertError {
    /// Check if this is a timeout error
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }

    /// Check if this is a cancellation error
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// The server-side error, if the driver reported one.
    pub fn as_db_error(&self) -> Option<&tokio_postgres::error::DbError> {
        match self {
            Self::Database(err) => err.as_db_error(),
            _ => None,
        }
    }
}

#[cfg(feature = "pool")]
impl From<deadpool_postgres::PoolError> for InsertError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        Self::Pool(err.to_string())
    }
}
