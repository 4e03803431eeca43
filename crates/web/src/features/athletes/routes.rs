use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use storage::Database;

use super::handlers::{
    create_athlete, delete_athlete, get_athlete, list_athletes, list_athletes_summary,
    update_athlete,
};

/// Both list variants are reachable: the full listing on the bare path,
/// the paginated summary projection on `/summary`.
pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_athletes))
        .route("/", post(create_athlete))
        .route("/summary", get(list_athletes_summary))
        .route("/:id", get(get_athlete))
        .route("/:id", patch(update_athlete))
        .route("/:id", delete(delete_athlete))
}
