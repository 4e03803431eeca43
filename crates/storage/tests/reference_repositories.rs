use storage::{
    Database,
    error::StorageError,
    repository::{CategoryRepository, TrainingCenterRepository},
};

async fn setup() -> Database {
    let db = Database::new_in_memory()
        .await
        .expect("open in-memory database");
    db.run_migrations().await.expect("run migrations");
    db
}

#[tokio::test]
async fn category_lookup_by_name_returns_none_when_absent() {
    let db = setup().await;
    let repo = CategoryRepository::new(db.pool());

    assert!(repo.find_by_name("Elite").await.unwrap().is_none());

    repo.create("Elite").await.expect("create category");

    let found = repo.find_by_name("Elite").await.unwrap();
    assert_eq!(found.map(|c| c.name), Some("Elite".to_string()));
}

#[tokio::test]
async fn duplicate_category_name_is_reported_as_conflict() {
    let db = setup().await;
    let repo = CategoryRepository::new(db.pool());

    repo.create("Elite").await.expect("create category");
    let err = repo.create("Elite").await.unwrap_err();

    assert!(matches!(err, StorageError::DuplicateName(name) if name == "Elite"));
}

#[tokio::test]
async fn category_find_by_id_reports_missing_id() {
    let db = setup().await;
    let repo = CategoryRepository::new(db.pool());

    let created = repo.create("Elite").await.expect("create category");
    let fetched = repo.find_by_id(created.id).await.expect("fetch category");
    assert_eq!(fetched.name, "Elite");

    let err = repo.find_by_id(created.id + 1).await.unwrap_err();
    assert!(matches!(err, StorageError::CategoryIdNotFound(id) if id == created.id + 1));
}

#[tokio::test]
async fn categories_are_listed_in_name_order() {
    let db = setup().await;
    let repo = CategoryRepository::new(db.pool());

    repo.create("Junior").await.expect("create Junior");
    repo.create("Elite").await.expect("create Elite");

    let names: Vec<String> = repo
        .list()
        .await
        .expect("list categories")
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Elite".to_string(), "Junior".to_string()]);
}

#[tokio::test]
async fn training_center_lookup_by_name_returns_none_when_absent() {
    let db = setup().await;
    let repo = TrainingCenterRepository::new(db.pool());

    assert!(repo.find_by_name("Gym1").await.unwrap().is_none());

    repo.create("Gym1").await.expect("create training center");

    let found = repo.find_by_name("Gym1").await.unwrap();
    assert_eq!(found.map(|c| c.name), Some("Gym1".to_string()));
}

#[tokio::test]
async fn duplicate_training_center_name_is_reported_as_conflict() {
    let db = setup().await;
    let repo = TrainingCenterRepository::new(db.pool());

    repo.create("Gym1").await.expect("create training center");
    let err = repo.create("Gym1").await.unwrap_err();

    assert!(matches!(err, StorageError::DuplicateName(name) if name == "Gym1"));
}

#[tokio::test]
async fn training_center_find_by_id_reports_missing_id() {
    let db = setup().await;
    let repo = TrainingCenterRepository::new(db.pool());

    let created = repo.create("Gym1").await.expect("create training center");
    let err = repo.find_by_id(created.id + 1).await.unwrap_err();
    assert!(matches!(err, StorageError::TrainingCenterIdNotFound(id) if id == created.id + 1));
}
