//! Database-specific error types and conversions.

use catdesk_core::error::CatdeskError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Password hashing failed: {0}")]
    Hash(String),

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Record already exists: {entity}")]
    AlreadyExists { entity: String },
}

impl From<DbError> for CatdeskError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => CatdeskError::NotFound { entity, id },
            DbError::AlreadyExists { entity } => CatdeskError::AlreadyExists { entity },
            DbError::Hash(msg) => CatdeskError::Crypto(msg),
            other => CatdeskError::Database(other.to_string()),
        }
    }
}
