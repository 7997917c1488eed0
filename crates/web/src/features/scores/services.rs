use sqlx::SqlitePool;
use storage::{
    dto::score::SubmitScoreRequest,
    error::Result,
    models::ScoreEntry,
    services::scoring::{self, ScoringError},
};

/// Validate and store a submitted score
pub async fn submit_score(
    pool: &SqlitePool,
    request: &SubmitScoreRequest,
) -> std::result::Result<ScoreEntry, ScoringError> {
    scoring::submit_score(pool, request).await
}

/// Delete a score entry; unknown ids are ignored
pub async fn delete_score(pool: &SqlitePool, id: i64) -> Result<()> {
    scoring::delete_score(pool, id).await
}
