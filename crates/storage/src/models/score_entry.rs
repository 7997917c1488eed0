use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One judge-independent score for a student in a programme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ScoreEntry {
    pub id: i64,
    pub programme_code: String,
    pub student_id: String,
    pub student_name: String,
    pub score: f64,
    pub remarks: String,
    pub created_at: NaiveDateTime,
}
