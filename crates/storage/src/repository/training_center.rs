use sqlx::SqlitePool;

use crate::error::{Result, StorageError};
use crate::models::TrainingCenter;

pub struct TrainingCenterRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TrainingCenterRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new training center. A unique violation on the name surfaces
    /// as `DuplicateName`.
    pub async fn create(&self, name: &str) -> Result<TrainingCenter> {
        let center = sqlx::query_as::<_, TrainingCenter>(
            "INSERT INTO training_centers (name) VALUES (?) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::conflict_on_unique(e, StorageError::DuplicateName(name.to_string()))
        })?;

        Ok(center)
    }

    pub async fn list(&self) -> Result<Vec<TrainingCenter>> {
        let centers = sqlx::query_as::<_, TrainingCenter>(
            "SELECT id, name FROM training_centers ORDER BY name",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(centers)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<TrainingCenter> {
        let center = sqlx::query_as::<_, TrainingCenter>(
            "SELECT id, name FROM training_centers WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::TrainingCenterIdNotFound(id))?;

        Ok(center)
    }

    /// Exact-name lookup used to resolve the athlete relationship at
    /// creation time.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<TrainingCenter>> {
        let center = sqlx::query_as::<_, TrainingCenter>(
            "SELECT id, name FROM training_centers WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(self.pool)
        .await?;

        Ok(center)
    }
}
