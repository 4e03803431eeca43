use sqlx::SqlitePool;
use storage::{
    dto::category::CreateCategoryRequest, error::Result, models::Category,
    repository::category::CategoryRepository,
};

/// Create a new category
pub async fn create_category(pool: &SqlitePool, req: &CreateCategoryRequest) -> Result<Category> {
    let repo = CategoryRepository::new(pool);
    repo.create(&req.name).await
}

/// List all categories
pub async fn list_categories(pool: &SqlitePool) -> Result<Vec<Category>> {
    let repo = CategoryRepository::new(pool);
    repo.list().await
}

/// Get a category by id
pub async fn get_category(pool: &SqlitePool, id: i64) -> Result<Category> {
    let repo = CategoryRepository::new(pool);
    repo.find_by_id(id).await
}
