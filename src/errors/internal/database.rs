use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database error: {operation} failed: {source}")]
    Operation {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    /// A uniqueness constraint rejected the write
    #[error("Constraint violation: {operation} failed: {detail}")]
    ConstraintViolation {
        operation: String,
        detail: String,
    },
}
