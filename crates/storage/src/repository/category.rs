use sqlx::SqlitePool;

use crate::error::{Result, StorageError};
use crate::models::Category;

pub struct CategoryRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new category. A unique violation on the name surfaces as
    /// `DuplicateName`.
    pub async fn create(&self, name: &str) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name) VALUES (?) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::conflict_on_unique(e, StorageError::DuplicateName(name.to_string()))
        })?;

        Ok(category)
    }

    pub async fn list(&self) -> Result<Vec<Category>> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY name")
                .fetch_all(self.pool)
                .await?;

        Ok(categories)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Category> {
        let category =
            sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = ?")
                .bind(id)
                .fetch_optional(self.pool)
                .await?
                .ok_or(StorageError::CategoryIdNotFound(id))?;

        Ok(category)
    }

    /// Exact-name lookup used to resolve the athlete relationship at
    /// creation time. Absence is an ordinary `None`, left for the caller to
    /// turn into an error.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Category>> {
        let category =
            sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE name = ?")
                .bind(name)
                .fetch_optional(self.pool)
                .await?;

        Ok(category)
    }
}
