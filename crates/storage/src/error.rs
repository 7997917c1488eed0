use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Schema migration error: {0}")]
    SchemaMigration(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;
