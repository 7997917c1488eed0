use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Summed score of every entry sharing a (`student_id`, `student_name`) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct StudentTotal {
    pub student_id: String,
    pub student_name: String,
    pub total: f64,
}
