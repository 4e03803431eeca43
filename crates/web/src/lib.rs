use axum::{Json, Router, routing::get};
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;

pub mod config;
pub mod error;
pub mod features;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::athletes::handlers::create_athlete,
        features::athletes::handlers::list_athletes,
        features::athletes::handlers::list_athletes_summary,
        features::athletes::handlers::get_athlete,
        features::athletes::handlers::update_athlete,
        features::athletes::handlers::delete_athlete,
        features::categories::handlers::create_category,
        features::categories::handlers::list_categories,
        features::categories::handlers::get_category,
        features::training_centers::handlers::create_training_center,
        features::training_centers::handlers::list_training_centers,
        features::training_centers::handlers::get_training_center,
    ),
    components(
        schemas(
            storage::dto::athlete::CreateAthleteRequest,
            storage::dto::athlete::UpdateAthleteRequest,
            storage::dto::athlete::AthleteResponse,
            storage::dto::athlete::AthleteSummaryResponse,
            storage::dto::athlete::CategoryRef,
            storage::dto::athlete::TrainingCenterRef,
            storage::dto::category::CreateCategoryRequest,
            storage::dto::category::CategoryResponse,
            storage::dto::training_center::CreateTrainingCenterRequest,
            storage::dto::training_center::TrainingCenterResponse,
            storage::dto::common::PaginationMeta,
            storage::dto::common::PaginatedResponse<storage::dto::athlete::AthleteSummaryResponse>,
        )
    ),
    tags(
        (name = "athletes", description = "Athlete registration endpoints"),
        (name = "categories", description = "Category endpoints"),
        (name = "training-centers", description = "Training center endpoints"),
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Assemble the application router around a database handle.
pub fn app(db: Database) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest("/api/athletes", features::athletes::routes::routes())
        .nest("/api/categories", features::categories::routes::routes())
        .nest(
            "/api/training-centers",
            features::training_centers::routes::routes(),
        )
        .layer(cors)
        .with_state(db)
}
