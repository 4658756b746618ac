use mangashelf_core::types::DbId;

/// Failure of a store operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The backing store could not be reached.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// A write referenced an author that does not exist.
    #[error("Author {0} does not exist")]
    MissingAuthor(DbId),
}
