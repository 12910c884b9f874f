use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

pub mod database;

pub use database::DatabaseError;

/// Internal error type for store and service operations
///
/// Not exposed via API - endpoints convert it through `ApiFailure`, which
/// logs the detail and returns a generic body.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl InternalError {
    /// Wrap a database error with the name of the failed operation
    ///
    /// Unique constraint violations are kept apart so they can be reported
    /// as a client error instead of a server error.
    pub fn database(operation: &str, source: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(detail)) = source.sql_err() {
            return InternalError::Database(DatabaseError::ConstraintViolation {
                operation: operation.to_string(),
                detail,
            });
        }

        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }
}
