use sqlx::Error as SqlxError;
use thiserror::Error;

/// Failures raised by the storage layer. A missing row is never an error here;
/// lookups report it as `None` and deletes as `false`.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),
}
