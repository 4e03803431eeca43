use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::dto::athlete::{
    AthleteResponse, AthleteSummaryResponse, CategoryRef, TrainingCenterRef, UpdateAthleteRequest,
};
use crate::error::{Result, StorageError};
use crate::models::Athlete;

/// Athlete row joined with the names of its category and training center.
#[derive(FromRow)]
struct AthleteDetailRow {
    id: Uuid,
    created_at: DateTime<Utc>,
    name: String,
    cpf: String,
    weight: f64,
    height: f64,
    birth_date: NaiveDate,
    sex: String,
    category_name: String,
    training_center_name: String,
}

impl From<AthleteDetailRow> for AthleteResponse {
    fn from(row: AthleteDetailRow) -> Self {
        Self {
            id: row.id,
            created_at: row.created_at,
            name: row.name,
            cpf: row.cpf,
            weight: row.weight,
            height: row.height,
            birth_date: row.birth_date,
            sex: row.sex,
            category: CategoryRef {
                name: row.category_name,
            },
            training_center: TrainingCenterRef {
                name: row.training_center_name,
            },
        }
    }
}

pub struct AthleteRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all athletes in full representation
    pub async fn list(&self) -> Result<Vec<AthleteResponse>> {
        let rows: Vec<AthleteDetailRow> = sqlx::query_as(
            r#"
            SELECT a.id, a.created_at, a.name, a.cpf, a.weight, a.height, a.birth_date, a.sex,
                   c.name AS category_name, t.name AS training_center_name
            FROM athletes a
            JOIN categories c ON a.category_id = c.id
            JOIN training_centers t ON a.training_center_id = t.id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(AthleteResponse::from).collect())
    }

    /// Find the raw athlete row by id
    pub async fn find_by_id(&self, id: Uuid) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            SELECT id, created_at, name, cpf, weight, height, birth_date, sex,
                   category_id, training_center_id
            FROM athletes
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::AthleteNotFound(id))?;

        Ok(athlete)
    }

    /// Full representation by id, with the related names resolved
    pub async fn find_by_id_detailed(&self, id: Uuid) -> Result<AthleteResponse> {
        let row: AthleteDetailRow = sqlx::query_as(
            r#"
            SELECT a.id, a.created_at, a.name, a.cpf, a.weight, a.height, a.birth_date, a.sex,
                   c.name AS category_name, t.name AS training_center_name
            FROM athletes a
            JOIN categories c ON a.category_id = c.id
            JOIN training_centers t ON a.training_center_id = t.id
            WHERE a.id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::AthleteNotFound(id))?;

        Ok(row.into())
    }

    /// Insert a new athlete and return it in full representation. A unique
    /// violation on `cpf` surfaces as `DuplicateCpf`.
    pub async fn create(&self, athlete: &Athlete) -> Result<AthleteResponse> {
        sqlx::query(
            r#"
            INSERT INTO athletes (id, created_at, name, cpf, weight, height, birth_date, sex,
                                  category_id, training_center_id)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(athlete.id)
        .bind(athlete.created_at)
        .bind(&athlete.name)
        .bind(&athlete.cpf)
        .bind(athlete.weight)
        .bind(athlete.height)
        .bind(athlete.birth_date)
        .bind(&athlete.sex)
        .bind(athlete.category_id)
        .bind(athlete.training_center_id)
        .execute(self.pool)
        .await
        .map_err(|e| {
            StorageError::conflict_on_unique(e, StorageError::DuplicateCpf(athlete.cpf.clone()))
        })?;

        self.find_by_id_detailed(athlete.id).await
    }

    /// Apply a partial update over `existing` and return the final state.
    /// Each updatable field is coalesced explicitly; the id, creation
    /// timestamp and relationship columns are never written.
    pub async fn update(
        &self,
        id: Uuid,
        existing: &Athlete,
        req: &UpdateAthleteRequest,
    ) -> Result<AthleteResponse> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let cpf = req.cpf.as_ref().unwrap_or(&existing.cpf);
        let weight = req.weight.unwrap_or(existing.weight);
        let height = req.height.unwrap_or(existing.height);
        let birth_date = req.birth_date.unwrap_or(existing.birth_date);
        let sex = req.sex.as_ref().unwrap_or(&existing.sex);

        sqlx::query(
            r#"
            UPDATE athletes
            SET name = ?, cpf = ?, weight = ?, height = ?, birth_date = ?, sex = ?
            WHERE id = ?
            "#,
        )
        .bind(name)
        .bind(cpf)
        .bind(weight)
        .bind(height)
        .bind(birth_date)
        .bind(sex)
        .bind(id)
        .execute(self.pool)
        .await
        .map_err(|e| StorageError::conflict_on_unique(e, StorageError::DuplicateCpf(cpf.clone())))?;

        self.find_by_id_detailed(id).await
    }

    /// Delete an athlete by id
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM athletes WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::AthleteNotFound(id));
        }

        Ok(())
    }

    /// One page of the summary projection, ordered by athlete name
    pub async fn list_summaries(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AthleteSummaryResponse>> {
        let summaries = sqlx::query_as::<_, AthleteSummaryResponse>(
            r#"
            SELECT a.name, c.name AS category, t.name AS training_center
            FROM athletes a
            JOIN categories c ON a.category_id = c.id
            JOIN training_centers t ON a.training_center_id = t.id
            ORDER BY a.name
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool)
        .await?;

        Ok(summaries)
    }

    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM athletes")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
