use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::TrainingCenter;

/// Request payload for creating a new training center
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateTrainingCenterRequest {
    #[validate(length(min = 1, max = 50, message = "Name must be between 1 and 50 characters"))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrainingCenterResponse {
    pub id: i64,
    pub name: String,
}

impl From<TrainingCenter> for TrainingCenterResponse {
    fn from(center: TrainingCenter) -> Self {
        Self {
            id: center.id,
            name: center.name,
        }
    }
}
