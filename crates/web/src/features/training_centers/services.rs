use sqlx::SqlitePool;
use storage::{
    dto::training_center::CreateTrainingCenterRequest, error::Result, models::TrainingCenter,
    repository::training_center::TrainingCenterRepository,
};

/// Create a new training center
pub async fn create_training_center(
    pool: &SqlitePool,
    req: &CreateTrainingCenterRequest,
) -> Result<TrainingCenter> {
    let repo = TrainingCenterRepository::new(pool);
    repo.create(&req.name).await
}

/// List all training centers
pub async fn list_training_centers(pool: &SqlitePool) -> Result<Vec<TrainingCenter>> {
    let repo = TrainingCenterRepository::new(pool);
    repo.list().await
}

/// Get a training center by id
pub async fn get_training_center(pool: &SqlitePool, id: i64) -> Result<TrainingCenter> {
    let repo = TrainingCenterRepository::new(pool);
    repo.find_by_id(id).await
}
