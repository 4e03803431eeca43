use chrono::{NaiveDate, Utc};
use storage::{
    Database,
    dto::athlete::UpdateAthleteRequest,
    error::StorageError,
    models::Athlete,
    repository::{AthleteRepository, CategoryRepository, TrainingCenterRepository},
};
use uuid::Uuid;

async fn setup() -> Database {
    let db = Database::new_in_memory()
        .await
        .expect("open in-memory database");
    db.run_migrations().await.expect("run migrations");
    db
}

async fn seed_references(db: &Database) -> (i64, i64) {
    let category = CategoryRepository::new(db.pool())
        .create("Elite")
        .await
        .expect("seed category");
    let center = TrainingCenterRepository::new(db.pool())
        .create("Gym1")
        .await
        .expect("seed training center");
    (category.id, center.id)
}

fn sample_athlete(cpf: &str, category_id: i64, training_center_id: i64) -> Athlete {
    Athlete {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        name: "Ana".to_string(),
        cpf: cpf.to_string(),
        weight: 60.0,
        height: 1.70,
        birth_date: NaiveDate::from_ymd_opt(1999, 4, 12).unwrap(),
        sex: "F".to_string(),
        category_id,
        training_center_id,
    }
}

#[tokio::test]
async fn create_returns_full_representation() {
    let db = setup().await;
    let (category_id, center_id) = seed_references(&db).await;
    let repo = AthleteRepository::new(db.pool());

    let athlete = sample_athlete("12345678900", category_id, center_id);
    let created = repo.create(&athlete).await.expect("create athlete");

    assert_eq!(created.id, athlete.id);
    assert_eq!(created.name, "Ana");
    assert_eq!(created.cpf, "12345678900");
    assert_eq!(created.category.name, "Elite");
    assert_eq!(created.training_center.name, "Gym1");
}

#[tokio::test]
async fn find_by_id_detailed_matches_created_row() {
    let db = setup().await;
    let (category_id, center_id) = seed_references(&db).await;
    let repo = AthleteRepository::new(db.pool());

    let athlete = sample_athlete("12345678900", category_id, center_id);
    let created = repo.create(&athlete).await.expect("create athlete");

    let fetched = repo
        .find_by_id_detailed(athlete.id)
        .await
        .expect("fetch athlete");

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.created_at, created.created_at);
    assert_eq!(fetched.name, created.name);
    assert_eq!(fetched.cpf, created.cpf);
    assert_eq!(fetched.birth_date, created.birth_date);
    assert_eq!(fetched.category.name, created.category.name);
    assert_eq!(fetched.training_center.name, created.training_center.name);
}

#[tokio::test]
async fn duplicate_cpf_is_reported_as_conflict() {
    let db = setup().await;
    let (category_id, center_id) = seed_references(&db).await;
    let repo = AthleteRepository::new(db.pool());

    let first = sample_athlete("12345678900", category_id, center_id);
    repo.create(&first).await.expect("create first athlete");

    let second = sample_athlete("12345678900", category_id, center_id);
    let err = repo.create(&second).await.unwrap_err();

    assert!(matches!(err, StorageError::DuplicateCpf(cpf) if cpf == "12345678900"));
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn update_applies_only_supplied_fields() {
    let db = setup().await;
    let (category_id, center_id) = seed_references(&db).await;
    let repo = AthleteRepository::new(db.pool());

    let athlete = sample_athlete("12345678900", category_id, center_id);
    repo.create(&athlete).await.expect("create athlete");

    let req = UpdateAthleteRequest {
        weight: Some(62.5),
        ..Default::default()
    };
    let updated = repo
        .update(athlete.id, &athlete, &req)
        .await
        .expect("update athlete");

    assert_eq!(updated.weight, 62.5);
    assert_eq!(updated.name, athlete.name);
    assert_eq!(updated.cpf, athlete.cpf);
    assert_eq!(updated.height, athlete.height);
    assert_eq!(updated.birth_date, athlete.birth_date);
    assert_eq!(updated.sex, athlete.sex);
    assert_eq!(updated.category.name, "Elite");
}

#[tokio::test]
async fn empty_update_is_a_noop() {
    let db = setup().await;
    let (category_id, center_id) = seed_references(&db).await;
    let repo = AthleteRepository::new(db.pool());

    let athlete = sample_athlete("12345678900", category_id, center_id);
    let created = repo.create(&athlete).await.expect("create athlete");

    let updated = repo
        .update(athlete.id, &athlete, &UpdateAthleteRequest::default())
        .await
        .expect("update athlete");

    assert_eq!(updated.name, created.name);
    assert_eq!(updated.cpf, created.cpf);
    assert_eq!(updated.weight, created.weight);
    assert_eq!(updated.height, created.height);
    assert_eq!(updated.birth_date, created.birth_date);
    assert_eq!(updated.sex, created.sex);
}

#[tokio::test]
async fn delete_removes_the_row() {
    let db = setup().await;
    let (category_id, center_id) = seed_references(&db).await;
    let repo = AthleteRepository::new(db.pool());

    let athlete = sample_athlete("12345678900", category_id, center_id);
    repo.create(&athlete).await.expect("create athlete");

    repo.delete(athlete.id).await.expect("delete athlete");

    let err = repo.find_by_id(athlete.id).await.unwrap_err();
    assert!(matches!(err, StorageError::AthleteNotFound(id) if id == athlete.id));
}

#[tokio::test]
async fn delete_of_unknown_id_is_not_found() {
    let db = setup().await;
    let repo = AthleteRepository::new(db.pool());

    let id = Uuid::new_v4();
    let err = repo.delete(id).await.unwrap_err();
    assert!(matches!(err, StorageError::AthleteNotFound(missing) if missing == id));
}

#[tokio::test]
async fn summaries_are_paginated_and_ordered_by_name() {
    let db = setup().await;
    let (category_id, center_id) = seed_references(&db).await;
    let repo = AthleteRepository::new(db.pool());

    let mut bia = sample_athlete("22222222222", category_id, center_id);
    bia.name = "Bia".to_string();
    repo.create(&bia).await.expect("create Bia");

    let ana = sample_athlete("11111111111", category_id, center_id);
    repo.create(&ana).await.expect("create Ana");

    let first_page = repo.list_summaries(1, 0).await.expect("first page");
    assert_eq!(first_page.len(), 1);
    assert_eq!(first_page[0].name, "Ana");
    assert_eq!(first_page[0].category, "Elite");
    assert_eq!(first_page[0].training_center, "Gym1");

    let second_page = repo.list_summaries(1, 1).await.expect("second page");
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].name, "Bia");

    assert_eq!(repo.count().await.unwrap(), 2);
}
