use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Athlete not found for id: {0}")]
    AthleteNotFound(Uuid),

    #[error("Category not found for id: {0}")]
    CategoryIdNotFound(i64),

    #[error("Training center not found for id: {0}")]
    TrainingCenterIdNotFound(i64),

    #[error("Category {0} was not found")]
    CategoryNotFound(String),

    #[error("Training center {0} was not found")]
    TrainingCenterNotFound(String),

    #[error("An athlete is already registered with cpf: {0}")]
    DuplicateCpf(String),

    #[error("A record is already registered with name: {0}")]
    DuplicateName(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// Collapse a commit-time unique violation into `conflict`; every other
    /// failure stays a plain database error.
    pub(crate) fn conflict_on_unique(err: sqlx::Error, conflict: StorageError) -> StorageError {
        match &err {
            sqlx::Error::Database(db)
                if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation) =>
            {
                conflict
            }
            _ => StorageError::Database(err),
        }
    }
}
