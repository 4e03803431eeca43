use chrono::Utc;
use sqlx::SqlitePool;
use storage::{
    dto::athlete::{
        AthleteResponse, AthleteSummaryResponse, CreateAthleteRequest, UpdateAthleteRequest,
    },
    dto::common::{PaginatedResponse, PaginationParams},
    error::{Result, StorageError},
    models::Athlete,
    repository::athlete::AthleteRepository,
    repository::category::CategoryRepository,
    repository::training_center::TrainingCenterRepository,
};
use uuid::Uuid;

/// List all athletes in full representation
pub async fn list_athletes(pool: &SqlitePool) -> Result<Vec<AthleteResponse>> {
    let repo = AthleteRepository::new(pool);
    repo.list().await
}

/// Get an athlete by id
pub async fn get_athlete(pool: &SqlitePool, id: Uuid) -> Result<AthleteResponse> {
    let repo = AthleteRepository::new(pool);
    repo.find_by_id_detailed(id).await
}

/// Create a new athlete. Both relationships are resolved by exact name
/// before anything is written; a missing reference aborts the create.
/// The id and creation timestamp are assigned here, never by the caller.
pub async fn create_athlete(
    pool: &SqlitePool,
    req: &CreateAthleteRequest,
) -> Result<AthleteResponse> {
    let category = CategoryRepository::new(pool)
        .find_by_name(&req.category.name)
        .await?
        .ok_or_else(|| StorageError::CategoryNotFound(req.category.name.clone()))?;

    let training_center = TrainingCenterRepository::new(pool)
        .find_by_name(&req.training_center.name)
        .await?
        .ok_or_else(|| StorageError::TrainingCenterNotFound(req.training_center.name.clone()))?;

    let athlete = Athlete {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        name: req.name.clone(),
        cpf: req.cpf.clone(),
        weight: req.weight,
        height: req.height,
        birth_date: req.birth_date,
        sex: req.sex.clone(),
        category_id: category.id,
        training_center_id: training_center.id,
    };

    AthleteRepository::new(pool).create(&athlete).await
}

/// Apply a partial update; only the supplied fields change
pub async fn update_athlete(
    pool: &SqlitePool,
    id: Uuid,
    req: &UpdateAthleteRequest,
) -> Result<AthleteResponse> {
    let repo = AthleteRepository::new(pool);

    let existing = repo.find_by_id(id).await?;
    repo.update(id, &existing, req).await
}

/// Delete an athlete
pub async fn delete_athlete(pool: &SqlitePool, id: Uuid) -> Result<()> {
    let repo = AthleteRepository::new(pool);
    repo.delete(id).await
}

/// One page of the summary projection
pub async fn list_athletes_summary(
    pool: &SqlitePool,
    params: &PaginationParams,
) -> Result<PaginatedResponse<AthleteSummaryResponse>> {
    let repo = AthleteRepository::new(pool);

    let total = repo.count().await?;
    let summaries = repo.list_summaries(params.limit(), params.offset()).await?;

    Ok(PaginatedResponse::new(
        summaries,
        params.page,
        params.page_size,
        total,
    ))
}
