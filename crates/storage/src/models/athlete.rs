use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One row of the `athletes` table. The id and creation timestamp are
/// assigned server-side; `cpf` is unique across all rows.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Athlete {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub cpf: String,
    pub weight: f64,
    pub height: f64,
    pub birth_date: NaiveDate,
    pub sex: String,
    pub category_id: i64,
    pub training_center_id: i64,
}
