use rentwise_core::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    NotFound(&'static str),

    /// A unique constraint was violated, e.g. an email already in use.
    #[error("{0}")]
    Conflict(&'static str),

    /// A stored row could not be turned back into a domain record.
    #[error("corrupt record: {0}")]
    Corrupt(String),

    #[error("database error: {0}")]
    Backend(#[from] sqlx::Error),
}

impl StoreError {
    /// Classifies a SQLx error, turning unique violations into `Conflict`.
    pub(crate) fn from_write(err: sqlx::Error, conflict: &'static str) -> Self {
        if let sqlx::Error::Database(db_err) = &err
            && db_err.is_unique_violation()
        {
            return StoreError::Conflict(conflict);
        }
        StoreError::Backend(err)
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(message) => AppError::not_found(anyhow::anyhow!(message)),
            StoreError::Conflict(message) => AppError::bad_request(anyhow::anyhow!(message)),
            other => AppError::internal(other),
        }
    }
}
