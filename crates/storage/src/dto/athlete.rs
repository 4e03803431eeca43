use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Reference to a category by its unique name.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CategoryRef {
    #[validate(length(min = 1, max = 50, message = "Name must be between 1 and 50 characters"))]
    pub name: String,
}

/// Reference to a training center by its unique name.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct TrainingCenterRef {
    #[validate(length(min = 1, max = 50, message = "Name must be between 1 and 50 characters"))]
    pub name: String,
}

/// Request payload for registering a new athlete. The category and training
/// center must already exist; both are resolved by exact name.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateAthleteRequest {
    #[validate(length(min = 1, max = 50, message = "Name must be between 1 and 50 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 11, message = "Cpf must be between 1 and 11 characters"))]
    pub cpf: String,

    #[validate(range(exclusive_min = 0.0, message = "Weight must be positive"))]
    pub weight: f64,

    #[validate(range(exclusive_min = 0.0, message = "Height must be positive"))]
    pub height: f64,

    pub birth_date: NaiveDate,

    #[validate(custom(function = "validate_sex"))]
    pub sex: String,

    #[validate(nested)]
    pub category: CategoryRef,

    #[validate(nested)]
    pub training_center: TrainingCenterRef,
}

/// Request payload for partially updating an athlete. Only the fields that
/// are present are applied; the id, creation timestamp and relationships are
/// never touched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateAthleteRequest {
    #[validate(length(min = 1, max = 50, message = "Name must be between 1 and 50 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 11, message = "Cpf must be between 1 and 11 characters"))]
    pub cpf: Option<String>,

    #[validate(range(exclusive_min = 0.0, message = "Weight must be positive"))]
    pub weight: Option<f64>,

    #[validate(range(exclusive_min = 0.0, message = "Height must be positive"))]
    pub height: Option<f64>,

    pub birth_date: Option<NaiveDate>,

    #[validate(custom(function = "validate_sex"))]
    pub sex: Option<String>,
}

/// Full athlete representation returned by every athlete endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub cpf: String,
    pub weight: f64,
    pub height: f64,
    pub birth_date: NaiveDate,
    pub sex: String,
    pub category: CategoryRef,
    pub training_center: TrainingCenterRef,
}

/// Reduced projection used by the paginated listing: the athlete name plus
/// the related names as plain strings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AthleteSummaryResponse {
    pub name: String,
    pub category: String,
    pub training_center: String,
}

fn validate_sex(sex: &str) -> Result<(), validator::ValidationError> {
    const VALID_SEXES: &[&str] = &["M", "F"];

    if VALID_SEXES.contains(&sex) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_sex"))
    }
}
